//! Configuration loading and typed config structures for SkyMind.
//!
//! The canonical configuration lives in `skymind-config.yaml` at the
//! project root. Every section and field has a default, so an empty file
//! (or no file at all) yields a working configuration.

use std::path::Path;

use serde::Deserialize;

/// Mood memory capacity used when no configuration overrides it.
pub const DEFAULT_MEMORY_CAPACITY: usize = 64;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SkyMindConfig {
    /// Optional content toggles.
    #[serde(default)]
    pub features: FeatureConfig,

    /// Network and proxy settings.
    #[serde(default)]
    pub network: NetworkConfig,

    /// Blank template settings.
    #[serde(default)]
    pub blank: BlankConfig,

    /// Mood tracker settings.
    #[serde(default)]
    pub mood: MoodConfig,

    /// Agent generator settings.
    #[serde(default)]
    pub generation: GenerationConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SkyMindConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Optional content toggles gating transplant steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FeatureConfig {
    /// Duplicate ideology membership.
    #[serde(default = "default_true")]
    pub ideology: bool,

    /// Reconcile elevated-status titles and abilities.
    #[serde(default = "default_true")]
    pub royalty: bool,

    /// Generate and copy genes.
    #[serde(default = "default_true")]
    pub biotech: bool,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            ideology: true,
            royalty: true,
            biotech: true,
        }
    }
}

/// Network and proxy settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NetworkConfig {
    /// Whether proxies may exist at all.
    #[serde(default = "default_true")]
    pub proxies_allowed: bool,

    /// Skill points needed to buy a passion at 100% learning speed.
    #[serde(default = "default_base_points_for_passion")]
    pub base_points_for_passion: u32,

    /// Passions beyond this count cost 25% more each.
    #[serde(default = "default_passion_soft_cap")]
    pub passion_soft_cap: u32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            proxies_allowed: true,
            base_points_for_passion: default_base_points_for_passion(),
            passion_soft_cap: default_passion_soft_cap(),
        }
    }
}

/// Fixed placeholder name of the Blank template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlankConfig {
    /// Given name.
    #[serde(default = "default_blank_first")]
    pub first_name: String,

    /// Nickname.
    #[serde(default = "default_blank_nick")]
    pub nickname: String,

    /// Family name.
    #[serde(default = "default_blank_last")]
    pub last_name: String,
}

impl Default for BlankConfig {
    fn default() -> Self {
        Self {
            first_name: default_blank_first(),
            nickname: default_blank_nick(),
            last_name: default_blank_last(),
        }
    }
}

/// Mood tracker settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MoodConfig {
    /// Maximum memories held by one mood tracker.
    #[serde(default = "default_memory_capacity")]
    pub memory_capacity: usize,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            memory_capacity: DEFAULT_MEMORY_CAPACITY,
        }
    }
}

/// Agent generator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct GenerationConfig {
    /// Seed for the deterministic generator.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_base_points_for_passion() -> u32 {
    5000
}

const fn default_passion_soft_cap() -> u32 {
    5
}

fn default_blank_first() -> String {
    String::from("Blank")
}

fn default_blank_nick() -> String {
    String::from("Blank")
}

fn default_blank_last() -> String {
    String::from("Template")
}

const fn default_memory_capacity() -> usize {
    DEFAULT_MEMORY_CAPACITY
}

const fn default_seed() -> u64 {
    42
}

fn default_log_level() -> String {
    String::from("info")
}
