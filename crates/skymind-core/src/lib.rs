//! Mind-state transplant engine for the SkyMind network.
//!
//! A [`MindNetwork`] owns the agent registry, the network capacity pool and
//! the Blank template. Its operations copy or alias an agent's mind state
//! onto another body, exchange two minds, and convert bodies into proxies.
//!
//! # Modules
//!
//! - [`agent`] -- The [`Agent`] model and shared sub-state handles
//! - [`world`] -- Agent registry, in-transit set, interaction log
//! - [`context`] -- The [`MindNetwork`] context and world queries
//! - [`predicates`] -- Proxy and transplant-target eligibility
//! - [`transplant`] -- The step-wise transplant orchestrator
//! - [`permute`] -- Two-way mind exchange
//! - [`lifecycle`] -- Proxy conversion, Blank template, duplicate bodies
//! - [`generator`] -- Seeded agent generation
//! - [`passion`] -- Passion purchase cost
//! - [`collaborators`] -- Host-side effect and network membership seams
//! - [`config`] -- YAML configuration
//! - [`error`] -- Transplant step errors

pub mod agent;
pub mod collaborators;
pub mod config;
pub mod context;
pub mod error;
pub mod generator;
pub mod lifecycle;
pub mod passion;
pub mod permute;
pub mod predicates;
pub mod transplant;
pub mod world;

pub use agent::{Agent, Shared, shared};
pub use collaborators::{
    Collaborators, NetworkMembership, NullCollaborators, RecordingCollaborators,
};
pub use config::{ConfigError, SkyMindConfig};
pub use context::MindNetwork;
pub use error::TransplantError;
pub use generator::{AgentGenerator, GenerationRequest};
pub use lifecycle::{DepersonalizeOutcome, FIRST_PROXY_NOTICE};
pub use permute::PermutationReport;
pub use transplant::{SharingMode, StepOutcome, TransplantReport, TransplantStep};
pub use world::World;
