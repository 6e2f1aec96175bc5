//! Collaborator that forwards engine side effects to `tracing`.

use skymind_core::{Agent, Collaborators};
use skymind_types::AgentId;
use tracing::{debug, info, warn};

/// Logs every host-side effect instead of rendering it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingCollaborators;

impl Collaborators for TracingCollaborators {
    fn refresh_appearance(&mut self, agent: &Agent) {
        debug!(agent = %agent.id, "Appearance refreshed");
    }

    fn emit_one_time_notice(&mut self, message: &str) {
        info!(notice = message, "One-time notice");
    }

    fn emit_error(&mut self, context: &str, message: &str) {
        warn!(context, message, "Engine operation reported an error");
    }

    fn notify_killed(&mut self, agent: AgentId) {
        info!(%agent, "Identity killed");
    }
}
