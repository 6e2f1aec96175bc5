//! Plain value types for every slice of agent state.
//!
//! These structs hold data only. Which of them are shared between bodies,
//! and how they are copied, is decided in `skymind-core`.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::{
    BodyType, BreachState, HostilityResponse, LinkState, NeedKind, Passion, RelationKind,
    SkillKind, ThoughtKind, TimeAssignment, WorkType,
};
use crate::ids::{AgentId, AreaId, IdeologyId, ItemId, LogEntryId, OutfitId};

/// Maximum level a skill can reach.
pub const MAX_SKILL_LEVEL: u32 = 20;

/// Number of hourly slots in a daily schedule.
pub const HOURS_PER_DAY: usize = 24;

/// Default work priority assigned when work settings are first initialised.
pub const DEFAULT_WORK_PRIORITY: u8 = 3;

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Structured three-part name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NameTriple {
    /// Given name.
    pub first: String,
    /// Nickname (display name).
    pub nick: String,
    /// Family name.
    pub last: String,
}

impl NameTriple {
    /// Build a name from its three parts.
    pub fn new(first: impl Into<String>, nick: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            nick: nick.into(),
            last: last.into(),
        }
    }
}

impl core::fmt::Display for NameTriple {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} '{}' {}", self.first, self.nick, self.last)
    }
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

// ---------------------------------------------------------------------------
// Story
// ---------------------------------------------------------------------------

/// A personality trait.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trait {
    /// Trait definition name.
    pub def: String,
    /// Degree for graded traits (0 for binary traits).
    pub degree: i8,
    /// Gene that granted this trait. Gene-sourced traits belong to the body.
    pub source_gene: Option<String>,
    /// Work types this trait makes the agent refuse.
    pub disabled_work: Vec<WorkType>,
}

impl Trait {
    /// Create a non-gene trait.
    pub fn new(def: impl Into<String>, degree: i8) -> Self {
        Self {
            def: def.into(),
            degree,
            source_gene: None,
            disabled_work: Vec::new(),
        }
    }
}

/// A childhood or adulthood background.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Backstory {
    /// Backstory definition name.
    pub def: String,
    /// Work types this background disables.
    pub disabled_work: Vec<WorkType>,
}

impl Backstory {
    /// Create a backstory that disables nothing.
    pub fn new(def: impl Into<String>) -> Self {
        Self {
            def: def.into(),
            disabled_work: Vec::new(),
        }
    }
}

/// Traits, backgrounds and other biographical details.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Story {
    /// All traits, gene-sourced or not.
    pub traits: Vec<Trait>,
    /// Childhood background.
    pub childhood: Option<Backstory>,
    /// Adulthood background.
    pub adulthood: Option<Backstory>,
    /// Short title shown under the name.
    pub title: Option<String>,
    /// Favourite colour.
    pub favorite_color: Option<Rgb>,
    /// Work types disabled by backgrounds and traits (derived).
    pub disabled_work: BTreeSet<WorkType>,
}

impl Story {
    /// Recompute [`Story::disabled_work`] from backgrounds and traits.
    pub fn recompute_disabled_work(&mut self) {
        let from_backstories = self
            .childhood
            .iter()
            .chain(self.adulthood.iter())
            .flat_map(|b| b.disabled_work.iter().copied());
        let from_traits = self.traits.iter().flat_map(|t| t.disabled_work.iter().copied());
        self.disabled_work = from_backstories.chain(from_traits).collect();
    }

    /// Whether `work` is disabled for this story.
    pub fn is_work_disabled(&self, work: WorkType) -> bool {
        self.disabled_work.contains(&work)
    }
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// Per-skill progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Current level (0 to [`MAX_SKILL_LEVEL`]).
    pub level: u32,
    /// Passion for the skill.
    pub passion: Passion,
    /// Experience accumulated toward the next level.
    pub xp_since_last_level: u32,
    /// Experience gained since the daily reset.
    pub xp_since_midnight: u32,
    /// Whether the skill is unusable because all its work is disabled (derived).
    pub disabled: bool,
}

/// Skill records for every [`SkillKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTable {
    records: BTreeMap<SkillKind, SkillRecord>,
}

impl SkillTable {
    /// Create a table with every skill at level 0.
    pub fn new() -> Self {
        Self {
            records: SkillKind::ALL
                .into_iter()
                .map(|kind| (kind, SkillRecord::default()))
                .collect(),
        }
    }

    /// Return the record for a skill.
    pub fn get(&self, kind: SkillKind) -> SkillRecord {
        self.records.get(&kind).copied().unwrap_or_default()
    }

    /// Mutable access to a skill record, creating it if absent.
    pub fn get_mut(&mut self, kind: SkillKind) -> &mut SkillRecord {
        self.records.entry(kind).or_default()
    }

    /// Set a skill level, clamped to [`MAX_SKILL_LEVEL`].
    pub fn set_level(&mut self, kind: SkillKind, level: u32) {
        self.get_mut(kind).level = level.min(MAX_SKILL_LEVEL);
    }

    /// Return the level of a skill.
    pub fn level(&self, kind: SkillKind) -> u32 {
        self.get(kind).level
    }

    /// Iterate over all records in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillKind, &SkillRecord)> {
        self.records.iter().map(|(kind, record)| (*kind, record))
    }

    /// Recompute each skill's `disabled` flag from the disabled work types.
    ///
    /// A skill is disabled when it is exercised by at least one work type
    /// and every such work type is disabled.
    pub fn apply_work_disables(&mut self, disabled_work: &BTreeSet<WorkType>) {
        for (kind, record) in &mut self.records {
            let mut relevant = WorkType::ALL
                .into_iter()
                .filter(|work| work.relevant_skills().contains(kind))
                .peekable();
            record.disabled =
                relevant.peek().is_some() && relevant.all(|work| disabled_work.contains(&work));
        }
    }
}

impl Default for SkillTable {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Relations
// ---------------------------------------------------------------------------

/// A directed typed edge to another agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DirectRelation {
    /// Relation type.
    pub kind: RelationKind,
    /// Target of the edge.
    pub other: AgentId,
}

/// All outgoing relation edges of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RelationSet {
    /// Outgoing edges, in insertion order, without duplicates.
    pub direct: Vec<DirectRelation>,
    /// Whether the player has seen this agent's relations.
    pub ever_seen_by_player: bool,
}

impl RelationSet {
    /// Create an empty relation set.
    pub const fn new() -> Self {
        Self {
            direct: Vec::new(),
            ever_seen_by_player: false,
        }
    }

    /// Add an edge. Returns `false` if the identical edge already exists.
    pub fn add_direct(&mut self, kind: RelationKind, other: AgentId) -> bool {
        let edge = DirectRelation { kind, other };
        if self.direct.contains(&edge) {
            return false;
        }
        self.direct.push(edge);
        true
    }

    /// Remove every edge pointing at `other`. Returns the number removed.
    pub fn remove_all_to(&mut self, other: AgentId) -> usize {
        let before = self.direct.len();
        self.direct.retain(|edge| edge.other != other);
        before.saturating_sub(self.direct.len())
    }

    /// First target of an edge of the given kind.
    pub fn first_of_kind(&self, kind: RelationKind) -> Option<AgentId> {
        self.direct.iter().find(|edge| edge.kind == kind).map(|edge| edge.other)
    }

    /// Kinds of every edge pointing at `other`.
    pub fn kinds_to(&self, other: AgentId) -> Vec<RelationKind> {
        self.direct
            .iter()
            .filter(|edge| edge.other == other)
            .map(|edge| edge.kind)
            .collect()
    }

    /// Whether any edge points at `other`.
    pub fn has_edge_to(&self, other: AgentId) -> bool {
        self.direct.iter().any(|edge| edge.other == other)
    }

    /// Swap every reference to `a` with `b` and vice versa.
    pub fn swap_references(&mut self, a: AgentId, b: AgentId) {
        for edge in &mut self.direct {
            if edge.other == a {
                edge.other = b;
            } else if edge.other == b {
                edge.other = a;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Needs and mood
// ---------------------------------------------------------------------------

/// A timestamped mood memory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemoryEntry {
    /// Thought definition.
    pub thought: ThoughtKind,
    /// Agent the memory is about, if any.
    pub other: Option<AgentId>,
    /// Tick at which the memory was gained.
    pub gained_at_tick: u64,
}

impl MemoryEntry {
    /// Create a memory.
    pub const fn new(thought: ThoughtKind, other: Option<AgentId>, gained_at_tick: u64) -> Self {
        Self {
            thought,
            other,
            gained_at_tick,
        }
    }
}

/// The mood sub-tracker holding a bounded list of memories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodTracker {
    memories: Vec<MemoryEntry>,
    capacity: usize,
    /// Set when situational thoughts must be re-evaluated.
    pub situational_dirty: bool,
}

impl MoodTracker {
    /// Create an empty tracker holding at most `capacity` memories.
    pub const fn new(capacity: usize) -> Self {
        Self {
            memories: Vec::new(),
            capacity,
            situational_dirty: false,
        }
    }

    /// All current memories, oldest first.
    pub fn memories(&self) -> &[MemoryEntry] {
        &self.memories
    }

    /// Memory capacity.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Gain a memory, honouring the definition's stack limit and the
    /// tracker capacity. When the stack limit is reached the oldest
    /// matching memory is refreshed instead; when the tracker is full the
    /// oldest memory overall is dropped.
    ///
    /// Returns `true` if a new entry was stored.
    pub fn try_gain_memory(&mut self, entry: MemoryEntry) -> bool {
        let matching = self
            .memories
            .iter()
            .filter(|m| m.thought == entry.thought && m.other == entry.other)
            .count();
        if matching >= entry.thought.stack_limit() {
            if let Some(oldest) = self
                .memories
                .iter_mut()
                .filter(|m| m.thought == entry.thought && m.other == entry.other)
                .min_by_key(|m| m.gained_at_tick)
            {
                oldest.gained_at_tick = entry.gained_at_tick;
            }
            return false;
        }
        if self.capacity == 0 {
            return false;
        }
        while self.memories.len() >= self.capacity {
            self.memories.remove(0);
        }
        self.memories.push(entry);
        true
    }

    /// Remove every memory of the given definition. Returns the number removed.
    pub fn remove_memories_of(&mut self, thought: &ThoughtKind) -> usize {
        let before = self.memories.len();
        self.memories.retain(|m| &m.thought != thought);
        before.saturating_sub(self.memories.len())
    }

    /// Whether a memory of the given definition is present.
    pub fn has_memory_of(&self, thought: &ThoughtKind) -> bool {
        self.memories.iter().any(|m| &m.thought == thought)
    }
}

/// Which need trackers an agent should hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeedProfile {
    /// Person-like agents track mood and recreation.
    pub humanlike: bool,
    /// Agents whose body requires food.
    pub eats: bool,
    /// Agents holding an elevated status title.
    pub titled: bool,
}

impl NeedProfile {
    /// Need kinds matching this profile.
    pub fn kinds(self) -> Vec<NeedKind> {
        let mut kinds = vec![NeedKind::Rest];
        if self.eats {
            kinds.push(NeedKind::Food);
        }
        if self.humanlike {
            kinds.extend([NeedKind::Mood, NeedKind::Joy, NeedKind::Beauty, NeedKind::Comfort]);
        }
        if self.titled {
            kinds.push(NeedKind::Authority);
        }
        kinds
    }
}

/// Need trackers, including the optional mood tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Needs {
    /// Satisfaction level (0-100) per need.
    pub levels: BTreeMap<NeedKind, u8>,
    /// Mood tracker, present when the agent has a mood need.
    pub mood: Option<MoodTracker>,
    memory_capacity: usize,
}

impl Needs {
    /// Create need trackers for `profile`.
    pub fn new(profile: NeedProfile, memory_capacity: usize) -> Self {
        let mut needs = Self {
            levels: BTreeMap::new(),
            mood: None,
            memory_capacity,
        };
        needs.add_or_remove_as_appropriate(profile);
        needs
    }

    /// Add missing trackers and drop trackers the profile no longer needs.
    ///
    /// New trackers start at 50. The mood tracker is created or dropped
    /// together with the mood need.
    pub fn add_or_remove_as_appropriate(&mut self, profile: NeedProfile) {
        let wanted = profile.kinds();
        self.levels.retain(|kind, _| wanted.contains(kind));
        for kind in wanted {
            self.levels.entry(kind).or_insert(50);
        }
        if self.levels.contains_key(&NeedKind::Mood) {
            if self.mood.is_none() {
                self.mood = Some(MoodTracker::new(self.memory_capacity));
            }
        } else {
            self.mood = None;
        }
    }

    /// Whether the agent holds a tracker for `kind`.
    pub fn has(&self, kind: NeedKind) -> bool {
        self.levels.contains_key(&kind)
    }
}

// ---------------------------------------------------------------------------
// Ideology
// ---------------------------------------------------------------------------

/// Certainty assigned to a freshly created ideology tracker (0.5).
pub fn default_certainty() -> Decimal {
    Decimal::new(5, 1)
}

/// Membership of an agent in a shared ideology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeologyTracker {
    /// The shared ideology record, `None` when unaffiliated.
    pub ideology: Option<IdeologyId>,
    /// Conviction in the ideology, 0 to 1.
    certainty: Decimal,
    /// Tick at which the agent joined.
    pub join_tick: u64,
}

impl IdeologyTracker {
    /// Create an unaffiliated tracker with the default certainty.
    pub fn new() -> Self {
        Self {
            ideology: None,
            certainty: default_certainty(),
            join_tick: 0,
        }
    }

    /// Current certainty.
    pub const fn certainty(&self) -> Decimal {
        self.certainty
    }

    /// Switch to an ideology.
    pub const fn set_ideology(&mut self, ideology: Option<IdeologyId>, tick: u64) {
        self.ideology = ideology;
        self.join_tick = tick;
    }

    /// Apply a certainty delta, clamped to 0..=1.
    ///
    /// Returns the new certainty, or `None` on decimal overflow.
    pub fn offset_certainty(&mut self, delta: Decimal) -> Option<Decimal> {
        let raw = self.certainty.checked_add(delta)?;
        self.certainty = raw.clamp(Decimal::ZERO, Decimal::ONE);
        Some(self.certainty)
    }
}

impl Default for IdeologyTracker {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Elevated status
// ---------------------------------------------------------------------------

/// Elevated status titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusTitle {
    /// Lowest title.
    Freeholder,
    /// Minor title.
    Yeoman,
    /// Mid title.
    Knight,
    /// High title.
    Praetor,
}

impl StatusTitle {
    /// Abilities granted while holding the title.
    pub const fn granted_abilities(self) -> &'static [&'static str] {
        match self {
            Self::Freeholder => &[],
            Self::Yeoman => &["speech"],
            Self::Knight => &["speech", "call_aid"],
            Self::Praetor => &["speech", "call_aid", "command"],
        }
    }
}

/// Elevated status state of an agent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecialStatus {
    /// Titles held.
    pub titles: Vec<StatusTitle>,
    /// Abilities currently available (derived from titles).
    pub abilities: BTreeSet<String>,
    /// Bumped whenever temporary abilities are re-evaluated.
    pub ability_revision: u32,
}

impl SpecialStatus {
    /// Recompute [`SpecialStatus::abilities`] from the held titles.
    pub fn update_available_abilities(&mut self) {
        self.abilities = self
            .titles
            .iter()
            .flat_map(|title| title.granted_abilities().iter())
            .map(|ability| (*ability).to_owned())
            .collect();
    }

    /// Record that temporary abilities changed.
    pub const fn notify_temporary_abilities_changed(&mut self) {
        self.ability_revision = self.ability_revision.wrapping_add(1);
    }

    /// Whether any title is held.
    pub fn is_titled(&self) -> bool {
        !self.titles.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Player-facing settings
// ---------------------------------------------------------------------------

/// Per-work-type priorities (0 = disabled, 1 highest to 4 lowest).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkSettings {
    priorities: BTreeMap<WorkType, u8>,
    initialized: bool,
}

impl WorkSettings {
    /// Create uninitialised work settings.
    pub const fn new() -> Self {
        Self {
            priorities: BTreeMap::new(),
            initialized: false,
        }
    }

    /// Whether the table has been initialised.
    pub const fn ever_work(&self) -> bool {
        self.initialized
    }

    /// Initialise every work type to [`DEFAULT_WORK_PRIORITY`] unless
    /// already initialised. Disabled work starts at 0.
    pub fn enable_and_initialize(&mut self, disabled_work: &BTreeSet<WorkType>) {
        if self.initialized {
            return;
        }
        self.priorities = WorkType::ALL
            .into_iter()
            .map(|work| {
                let priority = if disabled_work.contains(&work) {
                    0
                } else {
                    DEFAULT_WORK_PRIORITY
                };
                (work, priority)
            })
            .collect();
        self.initialized = true;
    }

    /// Set every priority to 0.
    pub fn disable_all(&mut self) {
        for priority in self.priorities.values_mut() {
            *priority = 0;
        }
    }

    /// Priority of a work type (0 when unset).
    pub fn priority(&self, work: WorkType) -> u8 {
        self.priorities.get(&work).copied().unwrap_or(0)
    }

    /// Set the priority of a work type, clamped to 0..=4.
    pub fn set_priority(&mut self, work: WorkType, priority: u8) {
        self.priorities.insert(work, priority.min(4));
    }
}

/// Daily schedule of [`HOURS_PER_DAY`] slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// One assignment per hour, starting at midnight.
    pub slots: [TimeAssignment; HOURS_PER_DAY],
}

impl Timetable {
    /// Assignment for an hour; `None` if `hour` is out of range.
    pub fn assignment(&self, hour: usize) -> Option<TimeAssignment> {
        self.slots.get(hour).copied()
    }

    /// Set the assignment for an hour. Returns `false` if out of range.
    pub fn set_assignment(&mut self, hour: usize, assignment: TimeAssignment) -> bool {
        match self.slots.get_mut(hour) {
            Some(slot) => {
                *slot = assignment;
                true
            }
            None => false,
        }
    }
}

/// Area restriction and hostility response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlayerSettings {
    /// Area the agent is confined to.
    pub area_restriction: Option<AreaId>,
    /// Reaction to hostiles.
    pub hostility_response: HostilityResponse,
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

/// Genetic make-up of a body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeneSet {
    /// Xenotype name.
    pub xenotype: Option<String>,
    /// Implanted genes.
    pub xenogenes: Vec<String>,
    /// Inherited genes.
    pub endogenes: Vec<String>,
    /// Skin colour granted by the melanin gene.
    pub melanin: Option<Rgb>,
}

/// Cosmetic attributes of a body.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Appearance {
    /// Base skin colour.
    pub skin_color_base: Rgb,
    /// Skin colour override.
    pub skin_color_override: Option<Rgb>,
    /// Body build.
    pub body_type: BodyType,
    /// Hair colour.
    pub hair_color: Rgb,
    /// Hair style definition.
    pub hair_def: String,
}

/// A carried, equipped or worn item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item identity.
    pub id: ItemId,
    /// Item definition name.
    pub def: String,
}

impl Item {
    /// Create a new item.
    pub fn new(def: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            def: def.into(),
        }
    }
}

/// Network status fields of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NetworkComponent {
    /// Security-breach status.
    pub breach: BreachState,
    /// Mind-link status.
    pub link: LinkState,
    /// Identity currently driving this body as a proxy.
    pub controller: Option<AgentId>,
}

// ---------------------------------------------------------------------------
// Interaction log
// ---------------------------------------------------------------------------

/// An interaction log record naming up to two agents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Entry identity.
    pub id: LogEntryId,
    /// Interaction definition name.
    pub interaction: String,
    /// Agent that started the interaction.
    pub initiator: Option<AgentId>,
    /// Agent on the receiving end.
    pub recipient: Option<AgentId>,
    /// Simulation tick of the interaction.
    pub tick: u64,
    /// Wall-clock time the entry was recorded.
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    /// Create a log entry stamped with the current time.
    pub fn new(
        interaction: impl Into<String>,
        initiator: Option<AgentId>,
        recipient: Option<AgentId>,
        tick: u64,
    ) -> Self {
        Self {
            id: LogEntryId::new(),
            interaction: interaction.into(),
            initiator,
            recipient,
            tick,
            created_at: Utc::now(),
        }
    }

    /// Whether the entry names `agent` as initiator or recipient.
    pub fn concerns(&self, agent: AgentId) -> bool {
        self.initiator == Some(agent) || self.recipient == Some(agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_level_is_clamped() {
        let mut table = SkillTable::new();
        table.set_level(SkillKind::Mining, 99);
        assert_eq!(table.level(SkillKind::Mining), MAX_SKILL_LEVEL);
    }

    #[test]
    fn skill_disabled_only_when_all_work_disabled() {
        let mut table = SkillTable::new();
        let disabled: BTreeSet<WorkType> = [WorkType::Research, WorkType::Hauling].into();
        table.apply_work_disables(&disabled);
        assert!(table.get(SkillKind::Intellectual).disabled);
        assert!(!table.get(SkillKind::Mining).disabled);
        // No work type exercises melee, so it can never be disabled.
        assert!(!table.get(SkillKind::Melee).disabled);
    }

    #[test]
    fn story_disables_from_backstory_and_traits() {
        let mut story = Story {
            childhood: Some(Backstory {
                def: String::from("CaveChild"),
                disabled_work: vec![WorkType::Art],
            }),
            traits: vec![Trait {
                disabled_work: vec![WorkType::Cleaning],
                ..Trait::new("Lazy", 0)
            }],
            ..Story::default()
        };
        story.recompute_disabled_work();
        assert!(story.is_work_disabled(WorkType::Art));
        assert!(story.is_work_disabled(WorkType::Cleaning));
        assert!(!story.is_work_disabled(WorkType::Mining));
    }

    #[test]
    fn relation_edges_are_idempotent() {
        let mut set = RelationSet::new();
        let other = AgentId::new();
        assert!(set.add_direct(RelationKind::Spouse, other));
        assert!(!set.add_direct(RelationKind::Spouse, other));
        assert!(set.add_direct(RelationKind::Lover, other));
        assert_eq!(set.direct.len(), 2);
        assert_eq!(set.remove_all_to(other), 2);
    }

    #[test]
    fn swap_references_exchanges_targets() {
        let (a, b, c) = (AgentId::new(), AgentId::new(), AgentId::new());
        let mut set = RelationSet::new();
        set.add_direct(RelationKind::Spouse, a);
        set.add_direct(RelationKind::Parent, b);
        set.add_direct(RelationKind::ExLover, c);
        set.swap_references(a, b);
        assert_eq!(set.first_of_kind(RelationKind::Spouse), Some(b));
        assert_eq!(set.first_of_kind(RelationKind::Parent), Some(a));
        assert_eq!(set.first_of_kind(RelationKind::ExLover), Some(c));
    }

    #[test]
    fn mood_memories_are_bounded() {
        let mut mood = MoodTracker::new(2);
        for tick in 0..3 {
            mood.try_gain_memory(MemoryEntry::new(
                ThoughtKind::Custom(format!("m{tick}")),
                None,
                tick,
            ));
        }
        assert_eq!(mood.memories().len(), 2);
        assert_eq!(mood.memories().first().map(|m| m.gained_at_tick), Some(1));
    }

    #[test]
    fn non_stacking_memory_is_refreshed() {
        let mut mood = MoodTracker::new(10);
        let spouse = Some(AgentId::new());
        assert!(mood.try_gain_memory(MemoryEntry::new(ThoughtKind::GotMarried, spouse, 1)));
        assert!(!mood.try_gain_memory(MemoryEntry::new(ThoughtKind::GotMarried, spouse, 7)));
        assert_eq!(mood.memories().len(), 1);
        assert_eq!(mood.memories().first().map(|m| m.gained_at_tick), Some(7));
    }

    #[test]
    fn needs_follow_profile() {
        let profile = NeedProfile {
            humanlike: true,
            eats: true,
            titled: false,
        };
        let mut needs = Needs::new(profile, 8);
        assert!(needs.has(NeedKind::Mood));
        assert!(needs.mood.is_some());
        assert!(!needs.has(NeedKind::Authority));

        needs.add_or_remove_as_appropriate(NeedProfile {
            titled: true,
            humanlike: false,
            ..profile
        });
        assert!(needs.has(NeedKind::Authority));
        assert!(!needs.has(NeedKind::Mood));
        assert!(needs.mood.is_none());
    }

    #[test]
    fn certainty_is_clamped() {
        let mut tracker = IdeologyTracker::new();
        assert_eq!(tracker.offset_certainty(Decimal::TWO), Some(Decimal::ONE));
        assert_eq!(tracker.offset_certainty(Decimal::NEGATIVE_ONE * Decimal::TEN), Some(Decimal::ZERO));
    }

    #[test]
    fn work_settings_initialize_once() {
        let mut work = WorkSettings::new();
        assert!(!work.ever_work());
        let disabled: BTreeSet<WorkType> = [WorkType::Art].into();
        work.enable_and_initialize(&disabled);
        assert_eq!(work.priority(WorkType::Art), 0);
        assert_eq!(work.priority(WorkType::Mining), DEFAULT_WORK_PRIORITY);
        work.set_priority(WorkType::Mining, 1);
        work.enable_and_initialize(&BTreeSet::new());
        assert_eq!(work.priority(WorkType::Mining), 1);
    }

    #[test]
    fn timetable_rejects_out_of_range_hours() {
        let mut table = Timetable::default();
        assert!(table.set_assignment(23, TimeAssignment::Sleep));
        assert!(!table.set_assignment(HOURS_PER_DAY, TimeAssignment::Sleep));
        assert_eq!(table.assignment(23), Some(TimeAssignment::Sleep));
        assert_eq!(table.assignment(24), None);
    }

    #[test]
    fn titles_grant_abilities() {
        let mut status = SpecialStatus {
            titles: vec![StatusTitle::Knight],
            ..SpecialStatus::default()
        };
        status.update_available_abilities();
        assert!(status.abilities.contains("call_aid"));
        assert!(!status.abilities.contains("command"));
    }

    #[test]
    fn log_entry_serializes() {
        let a = AgentId::new();
        let entry = LogEntry::new("Chitchat", Some(a), None, 12);
        let json = serde_json::to_string(&entry).unwrap_or_default();
        assert!(json.contains("Chitchat"));
        assert!(entry.concerns(a));
    }
}
