//! Player-facing settings duplication.
//!
//! Applies only when both agents belong to the player. Always copied,
//! never shared.

use skymind_types::{AgentId, PlayerSettings, Timetable, WorkSettings, WorkType};

use crate::error::TransplantError;
use crate::world::World;

/// Copy work priorities, schedule, area, hostility response and outfit.
///
/// Returns `false` without changes unless both agents are player-owned.
pub(super) fn duplicate_player_settings(
    world: &mut World,
    source: AgentId,
    dest: AgentId,
) -> Result<bool, TransplantError> {
    let player = Some(world.player_faction());
    if world.agent(source)?.faction != player || world.agent(dest)?.faction != player {
        return Ok(false);
    }

    let from = world.agent_mut(source)?;
    let source_disabled = from.disabled_work();
    let work = from.work.get_or_insert_with(WorkSettings::new);
    work.enable_and_initialize(&source_disabled);
    let work = work.clone();
    let timetable = *from.timetable.get_or_insert_with(Timetable::default);
    let settings = from
        .settings
        .ok_or(TransplantError::missing(source, "player settings"))?;
    let outfit = from.outfit;

    let target = world.agent_mut(dest)?;
    let dest_disabled = target.disabled_work();
    let dest_work = target.work.get_or_insert_with(WorkSettings::new);
    dest_work.enable_and_initialize(&dest_disabled);
    if work.ever_work() {
        for kind in WorkType::ALL {
            if !dest_disabled.contains(&kind) {
                dest_work.set_priority(kind, work.priority(kind));
            }
        }
    }
    let dest_timetable = target.timetable.get_or_insert_with(Timetable::default);
    for (hour, assignment) in timetable.slots.iter().enumerate() {
        dest_timetable.set_assignment(hour, *assignment);
    }
    target.settings = Some(PlayerSettings {
        area_restriction: settings.area_restriction,
        hostility_response: settings.hostility_response,
    });
    target.outfit = outfit;
    Ok(true)
}
