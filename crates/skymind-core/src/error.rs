//! Error types for the skymind-core crate.
//!
//! Transplant sub-steps return [`TransplantError`]; the orchestrator turns
//! each one into a recorded step failure instead of propagating it.

use skymind_types::AgentId;

/// Errors raised by a single transplant sub-step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransplantError {
    /// An agent disappeared from the registry mid-operation.
    #[error("agent not found: {0}")]
    AgentMissing(AgentId),

    /// A sub-state the step needs is absent.
    #[error("agent {agent} has no {part}")]
    MissingSubState {
        /// Agent lacking the sub-state.
        agent: AgentId,
        /// Name of the sub-state.
        part: &'static str,
    },

    /// A shared sub-state is already borrowed elsewhere.
    #[error("{part} of agent {agent} is busy: {reason}")]
    SubStateBusy {
        /// Agent owning the handle.
        agent: AgentId,
        /// Name of the sub-state.
        part: &'static str,
        /// Borrow failure description.
        reason: String,
    },

    /// An arithmetic overflow occurred.
    #[error("arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}

impl TransplantError {
    /// Shorthand for [`TransplantError::MissingSubState`].
    pub const fn missing(agent: AgentId, part: &'static str) -> Self {
        Self::MissingSubState { agent, part }
    }
}
