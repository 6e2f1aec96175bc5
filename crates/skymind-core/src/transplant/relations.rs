//! Relation duplication.
//!
//! Untethered copies rebuild the destination's edge set and mirror every
//! third party's edges to the source onto the destination, so former
//! friends and family recognise the new body.

use std::collections::BTreeSet;

use skymind_types::{AgentId, RelationSet};

use crate::agent::{read, shared, write};
use crate::error::TransplantError;
use crate::transplant::SharingMode;
use crate::world::World;

/// Copy or alias `source`'s relations onto `dest`.
///
/// Returns the third parties whose edges were checked, each visited once.
/// A tethered copy checks nobody.
///
/// # Errors
///
/// Fails if either agent is unknown, the source has no relation set, or a
/// relation set involved is borrowed elsewhere.
pub fn duplicate_relations(
    world: &mut World,
    source: AgentId,
    dest: AgentId,
    mode: SharingMode,
) -> Result<BTreeSet<AgentId>, TransplantError> {
    let handle = world
        .agent(source)?
        .relations
        .clone()
        .ok_or(TransplantError::missing(source, "relations"))?;

    if mode == SharingMode::Tethered {
        world.agent_mut(dest)?.relations = Some(handle);
        return Ok(BTreeSet::new());
    }

    let edges = read(&handle, source, "relations")?.direct.clone();
    let mut fresh = RelationSet::new();
    let mut checked = BTreeSet::new();
    for edge in edges {
        // An edge between the two bodies is re-pointed at the source so the
        // copy never relates to itself.
        if edge.other == dest {
            fresh.add_direct(edge.kind, source);
            continue;
        }
        if edge.other == source {
            continue;
        }
        if checked.insert(edge.other) {
            mirror_third_party(world, edge.other, source, dest)?;
        }
        fresh.add_direct(edge.kind, edge.other);
    }
    fresh.ever_seen_by_player = true;
    world.agent_mut(dest)?.relations = Some(shared(fresh));

    for agent in world.agents_mut() {
        if agent.master == Some(source) {
            agent.master = Some(dest);
        }
    }
    Ok(checked)
}

/// Give `third` an edge to `dest` for every edge it holds to `source`.
fn mirror_third_party(
    world: &World,
    third: AgentId,
    source: AgentId,
    dest: AgentId,
) -> Result<(), TransplantError> {
    let Some(handle) = world.get(third).and_then(|agent| agent.relations.clone()) else {
        return Ok(());
    };
    let kinds = read(&handle, third, "relations")?.kinds_to(source);
    if kinds.is_empty() {
        return Ok(());
    }
    let mut set = write(&handle, third, "relations")?;
    for kind in kinds {
        set.add_direct(kind, dest);
    }
    Ok(())
}
