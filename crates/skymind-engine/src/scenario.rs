//! A scripted walk through the engine's operations.
//!
//! The scenario powers a network node, spawns two colonists, converts a
//! third body into a proxy, drives the proxy with a tethered mind copy,
//! exchanges the two colonists' minds, duplicates one of them into a fresh
//! body and finally blanks the duplicate again.

use skymind_core::{
    Collaborators, DepersonalizeOutcome, GenerationRequest, MindNetwork, SharingMode,
};
use skymind_network::{NetworkNode, NodeSignal};
use skymind_types::{AgentId, Augmentation, AugmentationDef, BodyPart, KindDef, RelationKind};
use tracing::info;

use crate::error::EngineError;

/// Capacity of the node the scenario powers up.
const NODE_CAPACITY: u32 = 2;

/// Learning factor used for the passion price quote.
const LEARNING_FACTOR_PCT: u32 = 100;

/// Passions the colonist already owns when asking for a quote.
const OWNED_PASSIONS: u32 = 6;

/// What the scenario observed at each checkpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioSummary {
    /// Pool occupancy after every body connected, as `occupied/capacity`.
    pub network: String,
    /// Steps the tethered proxy transplant left unfinished.
    pub proxy_transplant_failures: usize,
    /// Relation sets rewritten by the permutation.
    pub relations_rewritten: usize,
    /// Whether the duplicate body ended up blank.
    pub duplicate_blanked: bool,
    /// Price of the next passion, if it can be bought at all.
    pub passion_cost: Option<u32>,
}

/// Run the scenario against `net`.
///
/// # Errors
///
/// Returns [`EngineError::Scenario`] when a checkpoint cannot be reached,
/// for example when the proxy is not a valid transplant target.
pub fn run<C: Collaborators>(net: &mut MindNetwork<C>) -> Result<ScenarioSummary, EngineError> {
    let mut node = NetworkNode::powered(NODE_CAPACITY);
    net.pool.handle_signal(
        &mut node,
        NodeSignal::Spawned {
            respawning_after_load: false,
        },
    );
    net.pool.handle_signal(&mut node, NodeSignal::PowerTurnedOn);
    info!(capacity = net.pool.total_capacity(), "Network node online");

    let player = net.world.player_faction();
    let alice = net.spawn(&GenerationRequest::new(KindDef::colonist()).with_faction(player));
    let bob = net.spawn(&GenerationRequest::new(KindDef::colonist()).with_faction(player));
    link(net, alice, bob)?;

    let body = net.spawn(&GenerationRequest::new(KindDef::colonist()).with_faction(player));
    if !net.make_proxy(body, None, None, true) {
        return Err(EngineError::scenario("proxy conversion found no body"));
    }

    let transceiver = Augmentation::new(AugmentationDef::NetworkTransceiver, Some(BodyPart::Brain));
    net.world
        .agent_mut(alice)
        .map_err(|err| EngineError::scenario(err.to_string()))?
        .augmentations
        .push(transceiver);
    net.pool.connect(alice);
    net.pool.connect(body);
    let network = net.pool.summary().to_string();
    info!(%network, "Bodies connected");

    if !net.is_valid_transplant_target(body) {
        return Err(EngineError::scenario("proxy is not a valid transplant target"));
    }
    let proxy_report = net
        .transplant(alice, body, false, SharingMode::Tethered)
        .ok_or_else(|| EngineError::scenario("tethered transplant was refused"))?;
    let proxy_transplant_failures = proxy_report.failures().count();

    let permutation = net
        .permute(alice, bob)
        .ok_or_else(|| EngineError::scenario("permutation was refused"))?;

    let duplicate = net
        .spawn_duplicate(bob, false)
        .ok_or_else(|| EngineError::scenario("duplicate body was not created"))?;
    let duplicate_blanked =
        net.depersonalize(duplicate, false) == Some(DepersonalizeOutcome::Blanked);

    let passion_cost = net.passion_cost(LEARNING_FACTOR_PCT, OWNED_PASSIONS);

    Ok(ScenarioSummary {
        network,
        proxy_transplant_failures,
        relations_rewritten: permutation.relations_rewritten,
        duplicate_blanked,
        passion_cost,
    })
}

/// Make `first` and `second` friends in both directions.
fn link<C: Collaborators>(
    net: &MindNetwork<C>,
    first: AgentId,
    second: AgentId,
) -> Result<(), EngineError> {
    for (from, to) in [(first, second), (second, first)] {
        let agent = net
            .world
            .agent(from)
            .map_err(|err| EngineError::scenario(err.to_string()))?;
        if let Some(handle) = &agent.relations {
            let mut set = handle
                .try_borrow_mut()
                .map_err(|err| EngineError::scenario(err.to_string()))?;
            set.add_direct(RelationKind::Friend, to);
        }
    }
    Ok(())
}
