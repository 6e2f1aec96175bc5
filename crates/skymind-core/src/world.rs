//! The agent registry and interaction log.
//!
//! Hidden agents (the Blank template, permutation holding bodies) are
//! reachable by id but skipped by [`World::agents`] and [`World::agents_mut`].

use std::collections::{BTreeMap, BTreeSet};

use skymind_types::{AgentId, FactionId, LogEntry};
use tracing::warn;

use crate::agent::{Agent, write};
use crate::error::TransplantError;

/// Every agent known to the simulation, plus the interaction play log.
#[derive(Debug)]
pub struct World {
    agents: BTreeMap<AgentId, Agent>,
    in_transit: BTreeSet<AgentId>,
    hidden: BTreeSet<AgentId>,
    play_log: Vec<LogEntry>,
    player_faction: FactionId,
    tick: u64,
}

impl World {
    /// Create an empty world owned by `player_faction`.
    pub const fn new(player_faction: FactionId) -> Self {
        Self {
            agents: BTreeMap::new(),
            in_transit: BTreeSet::new(),
            hidden: BTreeSet::new(),
            play_log: Vec::new(),
            player_faction,
            tick: 0,
        }
    }

    /// The player's faction.
    pub const fn player_faction(&self) -> FactionId {
        self.player_faction
    }

    /// Current simulation tick.
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance the clock by `ticks`.
    pub const fn advance(&mut self, ticks: u64) {
        self.tick = self.tick.saturating_add(ticks);
    }

    /// Register an agent, returning its id.
    pub fn insert(&mut self, agent: Agent) -> AgentId {
        let id = agent.id;
        self.agents.insert(id, agent);
        id
    }

    /// Register an agent that world enumerations must not list.
    pub fn insert_hidden(&mut self, agent: Agent) -> AgentId {
        let id = self.insert(agent);
        self.hidden.insert(id);
        id
    }

    /// Whether `id` was registered with [`World::insert_hidden`].
    pub fn is_hidden(&self, id: AgentId) -> bool {
        self.hidden.contains(&id)
    }

    /// Whether `id` is registered.
    pub fn contains(&self, id: AgentId) -> bool {
        self.agents.contains_key(&id)
    }

    /// Look up an agent.
    pub fn get(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(&id)
    }

    /// Look up an agent mutably.
    pub fn get_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(&id)
    }

    /// Look up an agent that must exist.
    ///
    /// # Errors
    ///
    /// Returns [`TransplantError::AgentMissing`] if `id` is not registered.
    pub fn agent(&self, id: AgentId) -> Result<&Agent, TransplantError> {
        self.agents.get(&id).ok_or(TransplantError::AgentMissing(id))
    }

    /// Mutable variant of [`World::agent`].
    ///
    /// # Errors
    ///
    /// Returns [`TransplantError::AgentMissing`] if `id` is not registered.
    pub fn agent_mut(&mut self, id: AgentId) -> Result<&mut Agent, TransplantError> {
        self.agents
            .get_mut(&id)
            .ok_or(TransplantError::AgentMissing(id))
    }

    /// Iterate over every visible agent.
    pub fn agents(&self) -> impl Iterator<Item = &Agent> {
        self.agents
            .values()
            .filter(|agent| !self.hidden.contains(&agent.id))
    }

    /// Iterate mutably over every visible agent.
    pub fn agents_mut(&mut self) -> impl Iterator<Item = &mut Agent> {
        let hidden = &self.hidden;
        self.agents
            .values_mut()
            .filter(move |agent| !hidden.contains(&agent.id))
    }

    /// Number of visible agents.
    pub fn len(&self) -> usize {
        self.agents().count()
    }

    /// Whether no visible agents are registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove an agent and scrub every reference to it: relation edges,
    /// animal masters and the in-transit set.
    ///
    /// Relation sets that are currently borrowed are left untouched and
    /// reported with a warning.
    pub fn destroy(&mut self, id: AgentId) -> Option<Agent> {
        let removed = self.agents.remove(&id)?;
        self.in_transit.remove(&id);
        self.hidden.remove(&id);
        for agent in self.agents.values_mut() {
            if agent.master == Some(id) {
                agent.master = None;
            }
            if let Some(handle) = &agent.relations {
                let scrubbed =
                    write(handle, agent.id, "relations").map(|mut set| set.remove_all_to(id));
                if let Err(err) = scrubbed {
                    warn!(
                        destroyed = %id,
                        holder = %agent.id,
                        error = %err,
                        "Edges to destroyed agent left in place"
                    );
                }
            }
        }
        Some(removed)
    }

    /// Mark an agent as travelling off-map, or clear the mark.
    pub fn set_in_transit(&mut self, id: AgentId, in_transit: bool) {
        if in_transit {
            self.in_transit.insert(id);
        } else {
            self.in_transit.remove(&id);
        }
    }

    /// Agents currently travelling off-map.
    pub fn in_transit(&self) -> impl Iterator<Item = &Agent> {
        self.in_transit.iter().filter_map(|id| self.agents.get(id))
    }

    /// The interaction play log, oldest first.
    pub fn play_log(&self) -> &[LogEntry] {
        &self.play_log
    }

    /// Mutable access to the play log.
    pub const fn play_log_mut(&mut self) -> &mut Vec<LogEntry> {
        &mut self.play_log
    }

    /// Append an interaction to the play log.
    pub fn push_log(&mut self, entry: LogEntry) {
        self.play_log.push(entry);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use skymind_types::{KindDef, NameTriple, RelationKind};

    use super::*;

    fn colonist(world: &mut World) -> AgentId {
        world.insert(Agent::new(
            KindDef::colonist(),
            NameTriple::new("A", "A", "A"),
        ))
    }

    #[test]
    fn destroy_survives_a_borrowed_relation_set() {
        let mut world = World::new(FactionId::new());
        let a = colonist(&mut world);
        let b = colonist(&mut world);
        let handle = world.get(b).unwrap().relations.clone().unwrap();
        handle.borrow_mut().add_direct(RelationKind::Friend, a);

        let guard = handle.borrow();
        assert!(world.destroy(a).is_some());
        assert!(!world.contains(a));
        assert!(guard.has_edge_to(a));
        drop(guard);
    }

    #[test]
    fn destroy_scrubs_edges_and_masters() {
        let mut world = World::new(FactionId::new());
        let a = colonist(&mut world);
        let b = colonist(&mut world);
        let dog = world.insert(Agent::new(KindDef::husky(), NameTriple::new("Rex", "Rex", "")));
        world.get_mut(dog).unwrap().master = Some(b);
        world
            .get(a)
            .unwrap()
            .relations
            .as_ref()
            .unwrap()
            .borrow_mut()
            .add_direct(RelationKind::Lover, b);
        world.set_in_transit(b, true);

        assert!(world.destroy(b).is_some());
        assert!(!world.contains(b));
        assert_eq!(world.get(dog).unwrap().master, None);
        assert!(!world.get(a).unwrap().relations.as_ref().unwrap().borrow().has_edge_to(b));
        assert_eq!(world.in_transit().count(), 0);
    }

    #[test]
    fn hidden_agents_are_not_enumerated() {
        let mut world = World::new(FactionId::new());
        let shown = colonist(&mut world);
        let hidden = world.insert_hidden(Agent::new(
            KindDef::colonist(),
            NameTriple::new("B", "B", "B"),
        ));
        assert!(world.contains(hidden));
        assert!(world.is_hidden(hidden));
        assert_eq!(world.len(), 1);
        assert_eq!(world.agents().next().map(|a| a.id), Some(shown));
    }

    #[test]
    fn missing_agent_is_an_error() {
        let world = World::new(FactionId::new());
        let ghost = AgentId::new();
        assert_eq!(
            world.agent(ghost).err(),
            Some(TransplantError::AgentMissing(ghost))
        );
    }
}
