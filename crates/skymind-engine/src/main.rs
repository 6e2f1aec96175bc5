//! Demo binary for the SkyMind mind-transplant engine.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `skymind-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the mind network for a fresh player faction
//! 4. Run the demo scenario
//! 5. Log the result

mod error;
mod scenario;
mod tracing_collaborators;

use std::path::Path;

use skymind_core::{MindNetwork, SkyMindConfig};
use skymind_types::FactionId;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::tracing_collaborators::TracingCollaborators;

/// Configuration file looked up in the working directory.
const CONFIG_PATH: &str = "skymind-config.yaml";

/// Application entry point.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the scenario
/// misses a checkpoint.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, from_file) = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!("skymind-engine starting");
    if from_file {
        info!(path = CONFIG_PATH, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }
    info!(
        seed = config.generation.seed,
        ideology = config.features.ideology,
        royalty = config.features.royalty,
        biotech = config.features.biotech,
        proxies_allowed = config.network.proxies_allowed,
        "Feature set"
    );

    let mut net = MindNetwork::new(config, FactionId::new(), TracingCollaborators);
    let summary = scenario::run(&mut net)?;

    info!(
        network = %summary.network,
        proxy_transplant_failures = summary.proxy_transplant_failures,
        relations_rewritten = summary.relations_rewritten,
        duplicate_blanked = summary.duplicate_blanked,
        passion_cost = ?summary.passion_cost,
        agents = net.world.len(),
        "Scenario complete"
    );
    Ok(())
}

/// Load configuration from `skymind-config.yaml`, falling back to the
/// defaults when the file is absent. The flag reports which one was used.
fn load_config() -> Result<(SkyMindConfig, bool), EngineError> {
    let config_path = Path::new(CONFIG_PATH);
    if config_path.exists() {
        Ok((SkyMindConfig::from_file(config_path)?, true))
    } else {
        Ok((SkyMindConfig::default(), false))
    }
}
