//! The transplant orchestrator.
//!
//! [`MindNetwork::transplant`] runs an ordered list of [`TransplantStep`]s
//! from a source agent onto a destination agent. Each step returns a
//! `Result`; a failed step is logged, reported to the collaborators and
//! recorded in the [`TransplantReport`], and the remaining steps still run.

mod death;
mod ideology;
mod needs;
mod relations;
mod settings;
mod skills;
mod status;
mod story;

use std::fmt;

use skymind_types::AgentId;
use tracing::{debug, warn};

use crate::collaborators::Collaborators;
use crate::context::MindNetwork;
use crate::error::TransplantError;

pub use relations::duplicate_relations;

/// How shareable sub-states reach the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SharingMode {
    /// The destination aliases the source's sub-state objects.
    Tethered,
    /// The destination receives independent copies.
    Untethered,
}

/// One slice of a transplant, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransplantStep {
    /// Traits, backgrounds, title, favourite colour.
    Story,
    /// Skill table.
    Skills,
    /// Death thoughts and relation severing.
    Death,
    /// Relation edges and animal masters.
    Relations,
    /// Ideology membership.
    Ideology,
    /// Elevated-status refresh on both sides.
    SpecialStatus,
    /// Faction membership.
    Faction,
    /// Need trackers and mood memories.
    Needs,
    /// Work, schedule, area, hostility, outfit.
    PlayerSettings,
    /// Structured name.
    Name,
    /// Appearance refresh hook.
    Appearance,
}

impl TransplantStep {
    /// Every step, in the order a transplant runs them.
    pub const ORDER: [Self; 11] = [
        Self::Story,
        Self::Skills,
        Self::Death,
        Self::Relations,
        Self::Ideology,
        Self::SpecialStatus,
        Self::Faction,
        Self::Needs,
        Self::PlayerSettings,
        Self::Name,
        Self::Appearance,
    ];

    /// Short lowercase name used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Story => "story",
            Self::Skills => "skills",
            Self::Death => "death",
            Self::Relations => "relations",
            Self::Ideology => "ideology",
            Self::SpecialStatus => "special_status",
            Self::Faction => "faction",
            Self::Needs => "needs",
            Self::PlayerSettings => "player_settings",
            Self::Name => "name",
            Self::Appearance => "appearance",
        }
    }
}

impl fmt::Display for TransplantStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step changed the destination.
    Applied,
    /// The step did not apply (feature off, not a death, not player-owned).
    Skipped,
    /// The step failed with the given message.
    Failed(String),
}

/// Per-step outcomes of one transplant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransplantReport {
    /// Agent the mind state was read from.
    pub source: AgentId,
    /// Agent the mind state was written to.
    pub dest: AgentId,
    /// Outcome of every step, in execution order.
    pub steps: Vec<(TransplantStep, StepOutcome)>,
}

impl TransplantReport {
    const fn new(source: AgentId, dest: AgentId) -> Self {
        Self {
            source,
            dest,
            steps: Vec::new(),
        }
    }

    /// Outcome of `step`, if it ran.
    pub fn outcome(&self, step: TransplantStep) -> Option<&StepOutcome> {
        self.steps
            .iter()
            .find(|(s, _)| *s == step)
            .map(|(_, outcome)| outcome)
    }

    /// Steps that failed.
    pub fn failures(&self) -> impl Iterator<Item = TransplantStep> + '_ {
        self.steps
            .iter()
            .filter(|(_, outcome)| matches!(outcome, StepOutcome::Failed(_)))
            .map(|(step, _)| *step)
    }

    /// Whether no step failed.
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}

impl<C: Collaborators> MindNetwork<C> {
    /// Transplant the mind state of `source` onto `dest`.
    ///
    /// With `is_death` the identity previously held by `dest` is killed
    /// first. Returns `None` without touching anything when either agent
    /// is unknown, when `source == dest`, or when `dest` is the Blank
    /// template.
    pub fn transplant(
        &mut self,
        source: AgentId,
        dest: AgentId,
        is_death: bool,
        mode: SharingMode,
    ) -> Option<TransplantReport> {
        if source == dest
            || self.blank == Some(dest)
            || !self.world.contains(source)
            || !self.world.contains(dest)
        {
            return None;
        }

        let mut report = TransplantReport::new(source, dest);
        for step in TransplantStep::ORDER {
            let outcome = match self.run_step(step, source, dest, is_death, mode) {
                Ok(true) => {
                    debug!(%source, %dest, %step, "Transplant step applied");
                    StepOutcome::Applied
                }
                Ok(false) => StepOutcome::Skipped,
                Err(err) => {
                    warn!(%source, %dest, %step, error = %err, "Transplant step failed");
                    self.collaborators.emit_error(
                        "transplant",
                        &format!("{step} step failed copying {source} onto {dest}: {err}"),
                    );
                    StepOutcome::Failed(err.to_string())
                }
            };
            report.steps.push((step, outcome));
        }
        Some(report)
    }

    fn run_step(
        &mut self,
        step: TransplantStep,
        source: AgentId,
        dest: AgentId,
        is_death: bool,
        mode: SharingMode,
    ) -> Result<bool, TransplantError> {
        let features = self.config.features;
        match step {
            TransplantStep::Story => story::duplicate_story(&mut self.world, source, dest),
            TransplantStep::Skills => skills::duplicate_skills(&mut self.world, source, dest, mode),
            TransplantStep::Death if is_death => {
                death::kill_identity(&mut self.world, &mut self.collaborators, dest)
            }
            TransplantStep::Relations => {
                relations::duplicate_relations(&mut self.world, source, dest, mode).map(|_| true)
            }
            TransplantStep::Ideology if features.ideology => {
                ideology::duplicate_ideology(&mut self.world, source, dest, mode)
            }
            TransplantStep::SpecialStatus if features.royalty => {
                status::refresh_special_status(&mut self.world, source, dest)
            }
            TransplantStep::Faction => {
                let faction = self.world.agent(source)?.faction;
                let target = self.world.agent_mut(dest)?;
                if target.faction == faction {
                    return Ok(false);
                }
                target.faction = faction;
                Ok(true)
            }
            TransplantStep::Needs => needs::duplicate_needs(
                &mut self.world,
                source,
                dest,
                self.config.mood.memory_capacity,
            ),
            TransplantStep::PlayerSettings => {
                settings::duplicate_player_settings(&mut self.world, source, dest)
            }
            TransplantStep::Name => {
                let name = self.world.agent(source)?.name.clone();
                self.world.agent_mut(dest)?.name = name;
                Ok(true)
            }
            TransplantStep::Appearance => {
                self.collaborators
                    .refresh_appearance(self.world.agent(dest)?);
                Ok(true)
            }
            TransplantStep::Death | TransplantStep::Ideology | TransplantStep::SpecialStatus => {
                Ok(false)
            }
        }
    }
}
