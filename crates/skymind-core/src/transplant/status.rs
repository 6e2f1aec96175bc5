//! Elevated-status refresh.
//!
//! Nothing is copied between the two agents here; each side recomputes its
//! own abilities and need list.

use skymind_types::AgentId;

use crate::agent::Agent;
use crate::error::TransplantError;
use crate::world::World;

/// Refresh titles-derived state on both `source` and `dest`.
///
/// Returns `true` if either agent holds a status record.
pub(super) fn refresh_special_status(
    world: &mut World,
    source: AgentId,
    dest: AgentId,
) -> Result<bool, TransplantError> {
    let source_refreshed = refresh(world.agent_mut(source)?);
    let dest_refreshed = refresh(world.agent_mut(dest)?);
    Ok(source_refreshed || dest_refreshed)
}

fn refresh(agent: &mut Agent) -> bool {
    let Some(status) = agent.status.as_mut() else {
        return false;
    };
    status.update_available_abilities();
    status.notify_temporary_abilities_changed();
    let profile = agent.need_profile();
    if let Some(needs) = agent.needs.as_mut() {
        needs.add_or_remove_as_appropriate(profile);
    }
    true
}
