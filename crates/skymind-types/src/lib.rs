//! Shared type definitions for the SkyMind mind-transplant engine.
//!
//! This crate is the single source of truth for identifiers, enums and
//! plain sub-state values used by the network and core crates.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`enums`] -- Skills, work types, relations, thoughts, needs, body parts
//! - [`augmentation`] -- Augmentation definitions and the capability table
//! - [`structs`] -- Story, skills, relations, needs, ideology, settings, body
//! - [`defs`] -- Agent kind and race definitions

pub mod augmentation;
pub mod defs;
pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use augmentation::{Augmentation, AugmentationDef, Capabilities};
pub use defs::{KindDef, RaceDef};
pub use enums::{
    BodyPart, BodyType, BreachState, Gender, HostilityResponse, LinkState, NeedKind, Passion,
    RelationKind, SkillKind, ThoughtKind, TimeAssignment, WorkType,
};
pub use ids::{AgentId, AreaId, FactionId, IdeologyId, ItemId, LogEntryId, NodeId, OutfitId};
pub use structs::{
    Appearance, Backstory, DEFAULT_WORK_PRIORITY, DirectRelation, GeneSet, HOURS_PER_DAY,
    IdeologyTracker, Item, LogEntry, MAX_SKILL_LEVEL, MemoryEntry, MoodTracker, NameTriple,
    NeedProfile, Needs, NetworkComponent, PlayerSettings, RelationSet, Rgb, SkillRecord,
    SkillTable, SpecialStatus, StatusTitle, Story, Timetable, Trait, WorkSettings,
    default_certainty,
};
