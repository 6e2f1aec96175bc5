//! Two-way mind exchange through a holding body.
//!
//! The rotation A to T, B to A, T to B moves the minds; afterwards every
//! reference that named the old bodies (relation edges and the interaction
//! log) is rewritten so it follows the mind it meant.

use skymind_types::{AgentId, KindDef, RelationSet};
use tracing::{info, warn};

use crate::agent::{Shared, read, write};
use crate::collaborators::Collaborators;
use crate::context::MindNetwork;
use crate::error::TransplantError;
use crate::generator::GenerationRequest;
use crate::transplant::{SharingMode, TransplantReport};

/// What a permutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationReport {
    /// The three rotation transplants, in order.
    pub rotation: Vec<TransplantReport>,
    /// Relation sets rewritten after the rotation.
    pub relations_rewritten: usize,
    /// Interaction log entries rewritten.
    pub log_entries_rewritten: usize,
}

/// Relation states captured before the rotation, already rewritten with
/// the two agents swapped.
struct RelationSnapshot {
    third_parties: Vec<(AgentId, Shared<RelationSet>, RelationSet)>,
    first: Option<RelationSet>,
    second: Option<RelationSet>,
}

impl<C: Collaborators> MindNetwork<C> {
    /// Exchange the mind states of `first` and `second`.
    ///
    /// Returns `None` without changes if either agent is unknown, both are
    /// the same agent, or either is the Blank template. Applying the same
    /// permutation twice restores both agents.
    pub fn permute(&mut self, first: AgentId, second: AgentId) -> Option<PermutationReport> {
        if first == second
            || self.blank.is_some_and(|blank| blank == first || blank == second)
            || !self.world.contains(first)
            || !self.world.contains(second)
        {
            return None;
        }

        let snapshot = self.snapshot_relations(first, second);

        let holding = self.spawn_holding_agent(first);
        let rotation: Vec<TransplantReport> = [(first, holding), (second, first), (holding, second)]
            .into_iter()
            .filter_map(|(source, dest)| {
                self.transplant(source, dest, false, SharingMode::Untethered)
            })
            .collect();

        let relations_rewritten = snapshot
            .and_then(|snapshot| self.restore_relations(first, second, snapshot))
            .unwrap_or_else(|err| {
                self.report_rewrite_failure(first, second, &err);
                0
            });
        self.world.destroy(holding);
        let log_entries_rewritten = self.rewrite_play_log(first, second);

        info!(
            %first,
            %second,
            relations_rewritten,
            log_entries_rewritten,
            "Minds permuted"
        );
        Some(PermutationReport {
            rotation,
            relations_rewritten,
            log_entries_rewritten,
        })
    }

    fn spawn_holding_agent(&mut self, like: AgentId) -> AgentId {
        let kind = self
            .world
            .get(like)
            .map_or_else(KindDef::colonist, |agent| agent.kind.clone());
        let mut request = GenerationRequest::new(kind);
        request.faction = Some(self.world.player_faction());
        let mut holding = self.generate(&request);
        holding.spawned = false;
        self.world.insert_hidden(holding)
    }

    fn snapshot_relations(
        &self,
        first: AgentId,
        second: AgentId,
    ) -> Result<RelationSnapshot, TransplantError> {
        let swapped = |set: &RelationSet| {
            let mut copy = set.clone();
            copy.swap_references(first, second);
            copy
        };

        let mut third_parties = Vec::new();
        for agent in self.world.agents() {
            if agent.id == first || agent.id == second {
                continue;
            }
            let Some(handle) = &agent.relations else {
                continue;
            };
            let set = read(handle, agent.id, "relations")?;
            if set.has_edge_to(first) || set.has_edge_to(second) {
                third_parties.push((agent.id, handle.clone(), swapped(&*set)));
            }
        }

        let own = |id: AgentId| -> Result<Option<RelationSet>, TransplantError> {
            match &self.world.agent(id)?.relations {
                Some(handle) => Ok(Some(swapped(&*read(handle, id, "relations")?))),
                None => Ok(None),
            }
        };
        Ok(RelationSnapshot {
            third_parties,
            first: own(first)?,
            second: own(second)?,
        })
    }

    /// Write the swapped snapshots back. The mind now in `first` came from
    /// `second`, so `first` receives `second`'s edges and vice versa.
    fn restore_relations(
        &self,
        first: AgentId,
        second: AgentId,
        snapshot: RelationSnapshot,
    ) -> Result<usize, TransplantError> {
        let mut rewritten = 0_usize;
        for (owner, handle, set) in snapshot.third_parties {
            *write(&handle, owner, "relations")? = set;
            rewritten = rewritten.saturating_add(1);
        }
        for (id, set) in [(first, snapshot.second), (second, snapshot.first)] {
            let (Some(set), Some(handle)) = (set, &self.world.agent(id)?.relations) else {
                continue;
            };
            *write(handle, id, "relations")? = set;
            rewritten = rewritten.saturating_add(1);
        }
        Ok(rewritten)
    }

    fn rewrite_play_log(&mut self, first: AgentId, second: AgentId) -> usize {
        let swap = |slot: &mut Option<AgentId>| {
            if *slot == Some(first) {
                *slot = Some(second);
            } else if *slot == Some(second) {
                *slot = Some(first);
            }
        };
        let mut rewritten = 0_usize;
        for entry in self.world.play_log_mut() {
            if entry.concerns(first) || entry.concerns(second) {
                swap(&mut entry.initiator);
                swap(&mut entry.recipient);
                rewritten = rewritten.saturating_add(1);
            }
        }
        rewritten
    }

    fn report_rewrite_failure(&mut self, first: AgentId, second: AgentId, err: &TransplantError) {
        warn!(%first, %second, error = %err, "Relation rewrite failed");
        self.collaborators.emit_error(
            "permute",
            &format!("relation rewrite failed swapping {first} and {second}: {err}"),
        );
    }
}
