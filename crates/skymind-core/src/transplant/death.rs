//! Killing the identity previously held by a transplant destination.
//!
//! Relatives and colonists remember the death, the spouse loses wedding
//! memories, bonded animals mourn and find a new master, and the dead
//! identity's relation edges are severed on both ends.

use std::collections::BTreeSet;
use std::rc::Rc;

use skymind_types::{AgentId, DirectRelation, MemoryEntry, RelationKind, RelationSet, ThoughtKind};
use tracing::debug;

use crate::agent::{read, shared, write};
use crate::collaborators::Collaborators;
use crate::error::TransplantError;
use crate::world::World;

/// Apply the death of `dest`'s current identity.
pub(super) fn kill_identity<C: Collaborators>(
    world: &mut World,
    collaborators: &mut C,
    dest: AgentId,
) -> Result<bool, TransplantError> {
    let tick = world.tick();
    let player = world.player_faction();
    let (edges, player_owned) = {
        let target = world.agent(dest)?;
        let edges = match &target.relations {
            Some(handle) => read(handle, dest, "relations")?.direct.clone(),
            None => Vec::new(),
        };
        (edges, target.faction == Some(player))
    };

    let kin: BTreeSet<AgentId> = edges
        .iter()
        .filter(|edge| edge.kind.is_close())
        .map(|edge| edge.other)
        .collect();
    for &other in &kin {
        remember(world, other, ThoughtKind::KinDied, dest, tick);
    }
    if player_owned {
        let colonists: Vec<AgentId> = world
            .agents()
            .filter(|agent| {
                agent.id != dest
                    && agent.spawned
                    && !agent.dead
                    && agent.faction == Some(player)
                    && agent.kind.race.humanlike
                    && !kin.contains(&agent.id)
            })
            .map(|agent| agent.id)
            .collect();
        for other in colonists {
            remember(world, other, ThoughtKind::ColonistDied, dest, tick);
        }
    }

    let spouse = edges
        .iter()
        .find(|edge| edge.kind == RelationKind::Spouse)
        .map(|edge| edge.other);
    if let Some(mood) = spouse
        .and_then(|spouse| world.get_mut(spouse))
        .filter(|spouse| !spouse.dead)
        .and_then(|spouse| spouse.needs.as_mut())
        .and_then(|needs| needs.mood.as_mut())
    {
        mood.remove_memories_of(&ThoughtKind::GotMarried);
        mood.remove_memories_of(&ThoughtKind::HoneymoonPhase);
    }

    for animal in edges
        .iter()
        .filter(|edge| edge.kind == RelationKind::Bond)
        .map(|edge| edge.other)
    {
        mourn_bonded(world, animal, dest, tick)?;
    }

    collaborators.notify_killed(dest);
    sever_relations(world, dest, &edges)?;
    debug!(agent = %dest, relations = edges.len(), "Identity killed");
    Ok(true)
}

fn remember(world: &mut World, agent: AgentId, thought: ThoughtKind, about: AgentId, tick: u64) {
    if let Some(mood) = world
        .get_mut(agent)
        .filter(|agent| !agent.dead)
        .and_then(|agent| agent.needs.as_mut())
        .and_then(|needs| needs.mood.as_mut())
    {
        mood.try_gain_memory(MemoryEntry::new(thought, Some(about), tick));
    }
}

/// A bonded animal mourns `dead` and, if `dead` was its master, moves to
/// another living bonded person or to no master at all.
fn mourn_bonded(
    world: &mut World,
    animal: AgentId,
    dead: AgentId,
    tick: u64,
) -> Result<(), TransplantError> {
    let Some(pet) = world.get(animal).filter(|pet| !pet.dead) else {
        return Ok(());
    };
    let bonds: Vec<AgentId> = match &pet.relations {
        Some(handle) => read(handle, animal, "relations")?
            .direct
            .iter()
            .filter(|edge| edge.kind == RelationKind::Bond && edge.other != dead)
            .map(|edge| edge.other)
            .collect(),
        None => Vec::new(),
    };
    let was_master = pet.master == Some(dead);
    let heir = bonds.into_iter().find(|&candidate| {
        world
            .get(candidate)
            .is_some_and(|person| !person.dead && person.kind.race.humanlike)
    });

    if let Some(pet) = world.get_mut(animal) {
        if let Some(mood) = pet.needs.as_mut().and_then(|needs| needs.mood.as_mut()) {
            mood.try_gain_memory(MemoryEntry::new(ThoughtKind::BondedHumanDied, Some(dead), tick));
        }
        if was_master {
            pet.master = heir;
        }
    }
    Ok(())
}

/// Remove the reverse edges former relations hold to `dest`, then give
/// `dest` a fresh empty relation set. A set `dest` shares with a tethered
/// partner is left intact.
fn sever_relations(
    world: &mut World,
    dest: AgentId,
    edges: &[DirectRelation],
) -> Result<(), TransplantError> {
    let own = world.agent(dest)?.relations.clone();
    let others: BTreeSet<AgentId> = edges.iter().map(|edge| edge.other).collect();
    for other in others {
        let Some(handle) = world.get(other).and_then(|agent| agent.relations.clone()) else {
            continue;
        };
        if own.as_ref().is_some_and(|own| Rc::ptr_eq(own, &handle)) {
            continue;
        }
        write(&handle, other, "relations")?.remove_all_to(dest);
    }
    world.agent_mut(dest)?.relations = Some(shared(RelationSet::new()));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skymind_types::{FactionId, KindDef, NameTriple};

    use super::*;
    use crate::agent::Agent;
    use crate::collaborators::RecordingCollaborators;

    fn relate(world: &World, from: AgentId, kind: RelationKind, to: AgentId) {
        world
            .get(from)
            .unwrap()
            .relations
            .as_ref()
            .unwrap()
            .borrow_mut()
            .add_direct(kind, to);
    }

    fn memories(world: &World, agent: AgentId) -> Vec<ThoughtKind> {
        world
            .get(agent)
            .unwrap()
            .needs
            .as_ref()
            .unwrap()
            .mood
            .as_ref()
            .unwrap()
            .memories()
            .iter()
            .map(|m| m.thought.clone())
            .collect()
    }

    fn member(world: &mut World, kind: KindDef) -> AgentId {
        let mut agent = Agent::new(kind, NameTriple::new("A", "A", "A"));
        agent.faction = Some(world.player_faction());
        world.insert(agent)
    }

    #[test]
    fn death_notifies_kin_colonists_and_spouse() {
        let mut world = World::new(FactionId::new());
        let dying = member(&mut world, KindDef::colonist());
        let spouse = member(&mut world, KindDef::colonist());
        let bystander = member(&mut world, KindDef::colonist());
        relate(&world, dying, RelationKind::Spouse, spouse);
        relate(&world, spouse, RelationKind::Spouse, dying);
        {
            let agent = world.get_mut(spouse).unwrap();
            let mood = agent.needs.as_mut().unwrap().mood.as_mut().unwrap();
            mood.try_gain_memory(MemoryEntry::new(ThoughtKind::GotMarried, Some(dying), 0));
            mood.try_gain_memory(MemoryEntry::new(ThoughtKind::HoneymoonPhase, Some(dying), 0));
        }

        let mut collab = RecordingCollaborators::default();
        assert!(kill_identity(&mut world, &mut collab, dying).unwrap());

        assert_eq!(memories(&world, spouse), vec![ThoughtKind::KinDied]);
        assert_eq!(memories(&world, bystander), vec![ThoughtKind::ColonistDied]);
        assert_eq!(collab.killed, vec![dying]);
        let spouse_relations = world.get(spouse).unwrap().relations.clone().unwrap();
        assert!(!spouse_relations.borrow().has_edge_to(dying));
        let own = world.get(dying).unwrap().relations.clone().unwrap();
        assert!(own.borrow().direct.is_empty());
    }

    #[test]
    fn bonded_animal_moves_to_another_master() {
        let mut world = World::new(FactionId::new());
        let dying = member(&mut world, KindDef::colonist());
        let friend = member(&mut world, KindDef::colonist());
        let dog = member(&mut world, KindDef::husky());
        world.get_mut(dog).unwrap().master = Some(dying);
        relate(&world, dying, RelationKind::Bond, dog);
        relate(&world, dog, RelationKind::Bond, dying);
        relate(&world, dog, RelationKind::Bond, friend);

        let mut collab = RecordingCollaborators::default();
        kill_identity(&mut world, &mut collab, dying).unwrap();
        assert_eq!(world.get(dog).unwrap().master, Some(friend));
    }

    #[test]
    fn lone_bonded_animal_loses_its_master() {
        let mut world = World::new(FactionId::new());
        let dying = member(&mut world, KindDef::colonist());
        let dog = member(&mut world, KindDef::husky());
        world.get_mut(dog).unwrap().master = Some(dying);
        relate(&world, dying, RelationKind::Bond, dog);

        let mut collab = RecordingCollaborators::default();
        kill_identity(&mut world, &mut collab, dying).unwrap();
        assert_eq!(world.get(dog).unwrap().master, None);
    }

    #[test]
    fn tethered_partner_keeps_shared_relations() {
        let mut world = World::new(FactionId::new());
        let dying = member(&mut world, KindDef::colonist());
        let twin = member(&mut world, KindDef::colonist());
        let friend = member(&mut world, KindDef::colonist());
        let shared_set = world.get(twin).unwrap().relations.clone();
        world.get_mut(dying).unwrap().relations = shared_set;
        relate(&world, twin, RelationKind::Lover, friend);

        let mut collab = RecordingCollaborators::default();
        kill_identity(&mut world, &mut collab, dying).unwrap();
        let twin_set = world.get(twin).unwrap().relations.clone().unwrap();
        assert!(twin_set.borrow().has_edge_to(friend));
        let own = world.get(dying).unwrap().relations.clone().unwrap();
        assert!(!Rc::ptr_eq(&own, &twin_set));
    }
}
