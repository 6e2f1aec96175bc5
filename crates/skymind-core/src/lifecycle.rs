//! Proxy conversion, depersonalization and duplicate bodies.
//!
//! All of these reuse [`MindNetwork::transplant`]; the Blank template is
//! the neutral mind written over a body whose identity is erased.

use skymind_types::{
    AgentId, Augmentation, AugmentationDef, Backstory, BodyPart, Capabilities, Gender,
    HostilityResponse, KindDef, NameTriple, PlayerSettings, SkillTable, Story, Timetable,
    WorkSettings,
};
use tracing::info;

use crate::agent::shared;
use crate::collaborators::Collaborators;
use crate::context::MindNetwork;
use crate::generator::GenerationRequest;
use crate::transplant::SharingMode;

/// Notice key shown the first time the player creates a proxy.
pub const FIRST_PROXY_NOTICE: &str = "first_proxy_created";

/// Result of [`MindNetwork::depersonalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepersonalizeOutcome {
    /// The body now holds the Blank mind.
    Blanked,
    /// The agent was a cloud-only identity and no longer exists.
    Destroyed,
}

impl<C: Collaborators> MindNetwork<C> {
    /// The Blank template, built on first use and reused afterwards.
    ///
    /// The template is hidden from world enumerations, never spawned and
    /// never a transplant destination.
    pub fn get_blank(&mut self) -> AgentId {
        if let Some(blank) = self.blank {
            return blank;
        }

        let player = self.world.player_faction();
        let mut request = GenerationRequest::new(KindDef::colonist()).with_faction(player);
        request.gender = Some(Gender::None);
        request.baseliner = true;
        let mut blank = self.generate(&request);

        let names = &self.config.blank;
        blank.name = NameTriple::new(
            names.first_name.clone(),
            names.nickname.clone(),
            names.last_name.clone(),
        );
        blank.story = Some(Story {
            childhood: Some(Backstory::new("BlankChildhood")),
            adulthood: Some(Backstory::new("BlankAdulthood")),
            ..Story::default()
        });
        blank.skills = Some(shared(SkillTable::new()));
        let mut work = WorkSettings::new();
        work.enable_and_initialize(&blank.disabled_work());
        work.disable_all();
        blank.work = Some(work);
        blank.settings = Some(PlayerSettings {
            area_restriction: None,
            hostility_response: HostilityResponse::Flee,
        });
        if blank.timetable.is_none() {
            blank.timetable = Some(Timetable::default());
        }
        blank.genes = None;
        blank.ideology = None;
        blank.apparel.clear();
        blank.spawned = false;

        let id = self.world.insert_hidden(blank);
        self.blank = Some(id);
        info!(blank = %id, "Blank template constructed");
        id
    }

    /// Turn `agent` into a proxy body.
    ///
    /// Transceivers are removed and a receiver is attached: `explicit` if
    /// given, else the kind's receiver, else the race default, else the
    /// generic network receiver, at `part` or the brain. With
    /// `kills_identity` the agent's mind is replaced by the Blank as a
    /// death. Returns `false` if the agent is unknown.
    pub fn make_proxy(
        &mut self,
        agent: AgentId,
        explicit: Option<AugmentationDef>,
        part: Option<BodyPart>,
        kills_identity: bool,
    ) -> bool {
        let player = self.world.player_faction();
        let Some(body) = self.world.get_mut(agent) else {
            return false;
        };

        let player_owned = body.faction == Some(player) || body.host_faction == Some(player);
        if player_owned && !self.has_made_proxy {
            self.collaborators.emit_one_time_notice(FIRST_PROXY_NOTICE);
            self.has_made_proxy = true;
        }

        let removed = body.remove_augmentations_where(Capabilities::is_transceiver);
        let receiver = explicit
            .or(body.kind.receiver)
            .or(body.kind.race.default_receiver)
            .unwrap_or(AugmentationDef::NetworkReceiver);
        body.augmentations.push(Augmentation::new(
            receiver,
            Some(part.unwrap_or(BodyPart::Brain)),
        ));
        info!(%agent, ?receiver, transceivers_removed = removed, "Proxy created");

        if kills_identity {
            let blank = self.get_blank();
            self.transplant(blank, agent, true, SharingMode::Untethered);
        }
        true
    }

    /// Overwrite `agent`'s mind with the Blank template.
    ///
    /// With `strip_capable` every connection-capable augmentation is
    /// removed. A cloud-resident identity leaves the pool and is destroyed.
    /// Returns `None` for unknown agents and for the template itself.
    pub fn depersonalize(
        &mut self,
        agent: AgentId,
        strip_capable: bool,
    ) -> Option<DepersonalizeOutcome> {
        if !self.world.contains(agent) || self.blank == Some(agent) {
            return None;
        }
        let blank = self.get_blank();
        self.transplant(blank, agent, false, SharingMode::Untethered);

        if strip_capable {
            if let Some(body) = self.world.get_mut(agent) {
                body.remove_augmentations_where(Capabilities::allows_connection);
            }
        }

        if self.pool.pop_cloud(agent) {
            self.world.destroy(agent);
            info!(%agent, "Cloud identity erased");
            return Some(DepersonalizeOutcome::Destroyed);
        }
        Some(DepersonalizeOutcome::Blanked)
    }

    /// Create a new body shaped like `agent` and move its belongings and
    /// augmentations onto it.
    ///
    /// With `as_death` the new body is blanked and carries a feedback loop;
    /// otherwise it receives an untethered copy of `agent`'s mind. Returns
    /// the new body's id, or `None` if `agent` is unknown.
    pub fn spawn_duplicate(&mut self, agent: AgentId, as_death: bool) -> Option<AgentId> {
        let request = {
            let original = self.world.get(agent)?;
            let mut request = GenerationRequest::new(original.kind.clone());
            request.gender = Some(original.gender);
            request.biological_age_ticks = Some(original.age_biological_ticks);
            request.chronological_age_ticks = Some(original.age_chronological_ticks);
            request
        };
        let mut copy = self.generate(&request);

        let original = self.world.get_mut(agent)?;
        copy.genes.clone_from(&original.genes);
        copy.appearance.clone_from(&original.appearance);
        copy.inventory = std::mem::take(&mut original.inventory);
        copy.equipment = std::mem::take(&mut original.equipment);
        copy.apparel = std::mem::take(&mut original.apparel);
        let (moved, kept): (Vec<Augmentation>, Vec<Augmentation>) =
            std::mem::take(&mut original.augmentations)
                .into_iter()
                .partition(|aug| !aug.def.is_body_bound());
        original.augmentations = kept;
        copy.augmentations = moved;
        copy.spawned = false;
        let copy_id = self.world.insert(copy);

        if as_death {
            self.depersonalize(copy_id, true);
            if let Some(body) = self.world.get_mut(copy_id) {
                body.augmentations
                    .push(Augmentation::new(AugmentationDef::FeedbackLoop, None));
            }
        } else {
            self.transplant(agent, copy_id, false, SharingMode::Untethered);
        }

        let body = self.world.get_mut(copy_id)?;
        body.spawned = true;
        self.collaborators.refresh_appearance(body);
        info!(original = %agent, copy = %copy_id, as_death, "Duplicate body spawned");
        Some(copy_id)
    }
}
