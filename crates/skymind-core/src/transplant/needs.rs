//! Need tracker rebuild and mood memory replay.

use skymind_types::{AgentId, MemoryEntry, Needs};

use crate::error::TransplantError;
use crate::world::World;

/// Give `dest` fresh need trackers and replay `source`'s mood memories
/// into them. Needs are never shared.
pub(super) fn duplicate_needs(
    world: &mut World,
    source: AgentId,
    dest: AgentId,
    memory_capacity: usize,
) -> Result<bool, TransplantError> {
    let memories: Vec<MemoryEntry> = world
        .agent(source)?
        .needs
        .as_ref()
        .and_then(|needs| needs.mood.as_ref())
        .map(|mood| mood.memories().to_vec())
        .unwrap_or_default();

    let target = world.agent_mut(dest)?;
    let profile = target.need_profile();
    let mut fresh = Needs::new(profile, memory_capacity);
    if let Some(mood) = fresh.mood.as_mut() {
        for memory in memories {
            mood.try_gain_memory(memory);
        }
    }
    fresh.add_or_remove_as_appropriate(profile);
    if let Some(mood) = fresh.mood.as_mut() {
        mood.situational_dirty = true;
    }
    target.needs = Some(fresh);
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skymind_types::{FactionId, KindDef, NameTriple, ThoughtKind};

    use super::*;
    use crate::agent::Agent;

    #[test]
    fn memories_are_replayed_into_fresh_trackers() {
        let mut world = World::new(FactionId::new());
        let mut source = Agent::new(KindDef::colonist(), NameTriple::new("A", "A", "A"));
        let mood = source.needs.as_mut().unwrap().mood.as_mut().unwrap();
        mood.try_gain_memory(MemoryEntry::new(ThoughtKind::AteFineMeal, None, 10));
        mood.try_gain_memory(MemoryEntry::new(ThoughtKind::Chitchat, None, 20));
        let a = world.insert(source);
        let mut dest = Agent::new(KindDef::colonist(), NameTriple::new("B", "B", "B"));
        dest.needs
            .as_mut()
            .unwrap()
            .mood
            .as_mut()
            .unwrap()
            .try_gain_memory(MemoryEntry::new(ThoughtKind::SleptInCold, None, 5));
        let b = world.insert(dest);

        duplicate_needs(&mut world, a, b, 16).unwrap();
        let mood = world.get(b).unwrap().needs.as_ref().unwrap().mood.clone().unwrap();
        let thoughts: Vec<ThoughtKind> = mood.memories().iter().map(|m| m.thought.clone()).collect();
        assert_eq!(thoughts, vec![ThoughtKind::AteFineMeal, ThoughtKind::Chitchat]);
        assert!(mood.situational_dirty);
        assert_eq!(mood.capacity(), 16);
    }

    #[test]
    fn animal_dest_gets_no_mood() {
        let mut world = World::new(FactionId::new());
        let a = world.insert(Agent::new(KindDef::colonist(), NameTriple::new("A", "A", "A")));
        let dog = world.insert(Agent::new(KindDef::husky(), NameTriple::new("Rex", "Rex", "")));
        duplicate_needs(&mut world, a, dog, 16).unwrap();
        assert!(world.get(dog).unwrap().needs.as_ref().unwrap().mood.is_none());
    }
}
