//! Seams to the host simulation.
//!
//! [`Collaborators`] receives the side effects the transplant engine cannot
//! perform itself (rendering, notices, error reporting, death bookkeeping).
//! [`NetworkMembership`] answers "is this agent on the network right now".

use skymind_network::CapacityPool;
use skymind_types::{AgentId, BreachState, LinkState};

use crate::agent::Agent;

/// Host-side effects triggered by transplants and lifecycle operations.
pub trait Collaborators {
    /// The agent's visible appearance may have changed.
    fn refresh_appearance(&mut self, agent: &Agent);

    /// Show a notice the player should see only once.
    fn emit_one_time_notice(&mut self, message: &str);

    /// Report a recoverable failure without aborting the operation.
    fn emit_error(&mut self, context: &str, message: &str);

    /// The identity held by `agent` was killed as part of a transplant.
    fn notify_killed(&mut self, agent: AgentId);
}

/// A collaborator that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCollaborators;

impl Collaborators for NullCollaborators {
    fn refresh_appearance(&mut self, _agent: &Agent) {}

    fn emit_one_time_notice(&mut self, _message: &str) {}

    fn emit_error(&mut self, _context: &str, _message: &str) {}

    fn notify_killed(&mut self, _agent: AgentId) {}
}

/// A collaborator that records every event for later inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingCollaborators {
    /// Agents whose appearance was refreshed, in order.
    pub refreshed: Vec<AgentId>,
    /// One-time notices shown.
    pub notices: Vec<String>,
    /// `(context, message)` pairs reported as errors.
    pub errors: Vec<(String, String)>,
    /// Agents reported killed.
    pub killed: Vec<AgentId>,
}

impl Collaborators for RecordingCollaborators {
    fn refresh_appearance(&mut self, agent: &Agent) {
        self.refreshed.push(agent.id);
    }

    fn emit_one_time_notice(&mut self, message: &str) {
        self.notices.push(message.to_owned());
    }

    fn emit_error(&mut self, context: &str, message: &str) {
        self.errors.push((context.to_owned(), message.to_owned()));
    }

    fn notify_killed(&mut self, agent: AgentId) {
        self.killed.push(agent);
    }
}

/// Live network status queries.
pub trait NetworkMembership {
    /// Whether the agent currently occupies a network slot.
    fn is_connected(&self, agent: &Agent) -> bool;

    /// The agent's security-breach status.
    fn breach_state(&self, agent: &Agent) -> BreachState;

    /// The agent's mind-link status.
    fn link_state(&self, agent: &Agent) -> LinkState;
}

impl NetworkMembership for CapacityPool {
    fn is_connected(&self, agent: &Agent) -> bool {
        Self::is_connected(self, agent.id)
    }

    fn breach_state(&self, agent: &Agent) -> BreachState {
        agent.network.breach
    }

    fn link_state(&self, agent: &Agent) -> LinkState {
        agent.network.link
    }
}
