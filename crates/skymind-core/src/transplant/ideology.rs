//! Ideology membership duplication.

use skymind_types::{AgentId, IdeologyTracker};

use crate::agent::{read, shared};
use crate::error::TransplantError;
use crate::transplant::SharingMode;
use crate::world::World;

/// Copy or alias `source`'s ideology tracker onto `dest`.
///
/// An untethered copy starts from a fresh tracker and reaches the source's
/// certainty by applying the difference as an offset.
pub(super) fn duplicate_ideology(
    world: &mut World,
    source: AgentId,
    dest: AgentId,
    mode: SharingMode,
) -> Result<bool, TransplantError> {
    let Some(handle) = world.agent(source)?.ideology.clone() else {
        world.agent_mut(dest)?.ideology = None;
        return Ok(true);
    };

    let tracker = match mode {
        SharingMode::Tethered => handle,
        SharingMode::Untethered => {
            let (ideology, certainty, join_tick) = {
                let from = read(&handle, source, "ideology")?;
                (from.ideology, from.certainty(), from.join_tick)
            };
            let mut fresh = IdeologyTracker::new();
            fresh.set_ideology(ideology, join_tick);
            let delta = certainty.checked_sub(fresh.certainty()).ok_or_else(|| {
                TransplantError::ArithmeticOverflow {
                    context: String::from("ideology certainty delta"),
                }
            })?;
            fresh
                .offset_certainty(delta)
                .ok_or_else(|| TransplantError::ArithmeticOverflow {
                    context: String::from("ideology certainty offset"),
                })?;
            fresh.join_tick = join_tick;
            shared(fresh)
        }
    };
    world.agent_mut(dest)?.ideology = Some(tracker);
    Ok(true)
}
