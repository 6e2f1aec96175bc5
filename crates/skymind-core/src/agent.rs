//! The agent model: a body plus its sub-state handles.
//!
//! Skills, relations and ideology are held behind [`Shared`] handles so a
//! tethered transplant can point two bodies at the same object. Every other
//! sub-state is owned by exactly one agent.

use std::cell::{Ref, RefCell, RefMut};
use std::collections::BTreeSet;
use std::rc::Rc;

use skymind_types::{
    AgentId, Appearance, Augmentation, Capabilities, FactionId, GeneSet, Gender, IdeologyTracker,
    Item, KindDef, NameTriple, NeedProfile, Needs, NetworkComponent, OutfitId, PlayerSettings,
    RelationSet, SkillTable, SpecialStatus, Story, Timetable, WorkSettings, WorkType,
};

use crate::config::DEFAULT_MEMORY_CAPACITY;
use crate::error::TransplantError;

/// A sub-state handle that may be aliased by several agents.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a fresh, unaliased [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Borrow a shared sub-state for reading.
///
/// # Errors
///
/// Returns [`TransplantError::SubStateBusy`] if the handle is mutably
/// borrowed elsewhere.
pub fn read<'a, T>(
    handle: &'a Shared<T>,
    agent: AgentId,
    part: &'static str,
) -> Result<Ref<'a, T>, TransplantError> {
    handle
        .try_borrow()
        .map_err(|err| TransplantError::SubStateBusy {
            agent,
            part,
            reason: err.to_string(),
        })
}

/// Borrow a shared sub-state for writing.
///
/// # Errors
///
/// Returns [`TransplantError::SubStateBusy`] if the handle is borrowed
/// elsewhere.
pub fn write<'a, T>(
    handle: &'a Shared<T>,
    agent: AgentId,
    part: &'static str,
) -> Result<RefMut<'a, T>, TransplantError> {
    handle
        .try_borrow_mut()
        .map_err(|err| TransplantError::SubStateBusy {
            agent,
            part,
            reason: err.to_string(),
        })
}

/// A simulated body together with its mind state.
#[derive(Debug)]
pub struct Agent {
    /// Stable identity.
    pub id: AgentId,
    /// Kind definition, including race.
    pub kind: KindDef,
    /// Display name.
    pub name: NameTriple,
    /// Gender.
    pub gender: Gender,
    /// Biological age in ticks.
    pub age_biological_ticks: u64,
    /// Chronological age in ticks.
    pub age_chronological_ticks: u64,
    /// Owning faction.
    pub faction: Option<FactionId>,
    /// Faction currently hosting the agent as a guest.
    pub host_faction: Option<FactionId>,
    /// Whether the body is dead.
    pub dead: bool,
    /// Whether the body is present on a map.
    pub spawned: bool,
    /// Traits, backgrounds, title and favourite colour.
    pub story: Option<Story>,
    /// Skill table.
    pub skills: Option<Shared<SkillTable>>,
    /// Relation edges to other agents.
    pub relations: Option<Shared<RelationSet>>,
    /// Need trackers and mood memories.
    pub needs: Option<Needs>,
    /// Ideology membership.
    pub ideology: Option<Shared<IdeologyTracker>>,
    /// Elevated-status titles and abilities.
    pub status: Option<SpecialStatus>,
    /// Work priorities.
    pub work: Option<WorkSettings>,
    /// Daily schedule.
    pub timetable: Option<Timetable>,
    /// Area restriction and hostility response.
    pub settings: Option<PlayerSettings>,
    /// Assigned outfit policy.
    pub outfit: Option<OutfitId>,
    /// Master of a trained animal.
    pub master: Option<AgentId>,
    /// Installed augmentations.
    pub augmentations: Vec<Augmentation>,
    /// Genes, when the body has any.
    pub genes: Option<GeneSet>,
    /// Cosmetic appearance.
    pub appearance: Appearance,
    /// Carried items.
    pub inventory: Vec<Item>,
    /// Equipped items.
    pub equipment: Vec<Item>,
    /// Worn apparel.
    pub apparel: Vec<Item>,
    /// Breach, link and controller status.
    pub network: NetworkComponent,
}

impl Agent {
    /// Create a spawned agent of `kind` with empty sub-states.
    ///
    /// Person-like kinds get a story, work settings, timetable and player
    /// settings; every kind gets skills, relations and needs.
    pub fn new(kind: KindDef, name: NameTriple) -> Self {
        let humanlike = kind.race.humanlike;
        let mut agent = Self {
            id: AgentId::new(),
            kind,
            name,
            gender: Gender::None,
            age_biological_ticks: 0,
            age_chronological_ticks: 0,
            faction: None,
            host_faction: None,
            dead: false,
            spawned: true,
            story: humanlike.then(Story::default),
            skills: Some(shared(SkillTable::new())),
            relations: Some(shared(RelationSet::new())),
            needs: None,
            ideology: None,
            status: None,
            work: humanlike.then(WorkSettings::new),
            timetable: humanlike.then(Timetable::default),
            settings: humanlike.then(PlayerSettings::default),
            outfit: None,
            master: None,
            augmentations: Vec::new(),
            genes: None,
            appearance: Appearance::default(),
            inventory: Vec::new(),
            equipment: Vec::new(),
            apparel: Vec::new(),
            network: NetworkComponent::default(),
        };
        agent.needs = Some(Needs::new(agent.need_profile(), DEFAULT_MEMORY_CAPACITY));
        agent
    }

    /// Which need trackers this agent should currently hold.
    pub fn need_profile(&self) -> NeedProfile {
        NeedProfile {
            humanlike: self.kind.race.humanlike,
            eats: self.kind.race.eats,
            titled: self.status.as_ref().is_some_and(SpecialStatus::is_titled),
        }
    }

    /// Work types disabled by this agent's story.
    pub fn disabled_work(&self) -> BTreeSet<WorkType> {
        self.story
            .as_ref()
            .map(|story| story.disabled_work.clone())
            .unwrap_or_default()
    }

    /// Combined capabilities of every installed augmentation.
    pub fn capabilities(&self) -> Capabilities {
        self.augmentations
            .iter()
            .fold(Capabilities::NONE, |acc, aug| acc.union(aug.capabilities()))
    }

    /// Whether any augmentation satisfies `predicate`.
    pub fn has_augmentation_where(&self, predicate: impl Fn(Capabilities) -> bool) -> bool {
        self.augmentations
            .iter()
            .any(|aug| predicate(aug.capabilities()))
    }

    /// Remove every augmentation whose capabilities satisfy `predicate`.
    /// Returns the number removed.
    pub fn remove_augmentations_where(
        &mut self,
        predicate: impl Fn(Capabilities) -> bool,
    ) -> usize {
        let before = self.augmentations.len();
        self.augmentations.retain(|aug| !predicate(aug.capabilities()));
        before.saturating_sub(self.augmentations.len())
    }

    /// Whether this agent's relations handle is the same object as `other`'s.
    pub fn shares_relations_with(&self, other: &Self) -> bool {
        match (&self.relations, &other.relations) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}
