//! Enumeration types shared by every SkyMind crate.
//!
//! Skill and work-type enums double as the "definition databases" the
//! duplicators iterate: [`SkillKind::ALL`] and [`WorkType::ALL`] list every
//! definition in a stable order.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Skills and work
// ---------------------------------------------------------------------------

/// A skill definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillKind {
    /// Ranged combat.
    Shooting,
    /// Close combat.
    Melee,
    /// Building and repairing structures.
    Construction,
    /// Digging and drilling.
    Mining,
    /// Preparing meals.
    Cooking,
    /// Sowing and harvesting.
    Plants,
    /// Taming and training animals.
    Animals,
    /// Producing items at workbenches.
    Crafting,
    /// Creating art.
    Artistic,
    /// Tending wounds and illnesses.
    Medicine,
    /// Negotiation and recruitment.
    Social,
    /// Research.
    Intellectual,
}

impl SkillKind {
    /// Every skill definition, in display order.
    pub const ALL: [Self; 12] = [
        Self::Shooting,
        Self::Melee,
        Self::Construction,
        Self::Mining,
        Self::Cooking,
        Self::Plants,
        Self::Animals,
        Self::Crafting,
        Self::Artistic,
        Self::Medicine,
        Self::Social,
        Self::Intellectual,
    ];
}

/// A work type definition that can be prioritised in the work table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkType {
    /// Putting out fires.
    Firefighter,
    /// Tending patients.
    Doctor,
    /// Handling prisoners.
    Warden,
    /// Taming and training animals.
    Handling,
    /// Cooking meals.
    Cooking,
    /// Hunting wild animals.
    Hunting,
    /// Building structures.
    Construction,
    /// Sowing crops.
    Growing,
    /// Mining rock.
    Mining,
    /// Making items.
    Crafting,
    /// Making art.
    Art,
    /// Hauling items to storage.
    Hauling,
    /// Cleaning filth.
    Cleaning,
    /// Researching projects.
    Research,
}

impl WorkType {
    /// Every work type definition, in work-table order.
    pub const ALL: [Self; 14] = [
        Self::Firefighter,
        Self::Doctor,
        Self::Warden,
        Self::Handling,
        Self::Cooking,
        Self::Hunting,
        Self::Construction,
        Self::Growing,
        Self::Mining,
        Self::Crafting,
        Self::Art,
        Self::Hauling,
        Self::Cleaning,
        Self::Research,
    ];

    /// Skills exercised by this work type. Empty for unskilled work.
    pub const fn relevant_skills(self) -> &'static [SkillKind] {
        match self {
            Self::Firefighter | Self::Hauling | Self::Cleaning => &[],
            Self::Doctor => &[SkillKind::Medicine],
            Self::Warden => &[SkillKind::Social],
            Self::Handling => &[SkillKind::Animals],
            Self::Cooking => &[SkillKind::Cooking],
            Self::Hunting => &[SkillKind::Shooting],
            Self::Construction => &[SkillKind::Construction],
            Self::Growing => &[SkillKind::Plants],
            Self::Mining => &[SkillKind::Mining],
            Self::Crafting => &[SkillKind::Crafting],
            Self::Art => &[SkillKind::Artistic],
            Self::Research => &[SkillKind::Intellectual],
        }
    }
}

/// How much an agent enjoys and learns a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Passion {
    /// No passion.
    #[default]
    None,
    /// Interested.
    Minor,
    /// Burning passion.
    Major,
}

// ---------------------------------------------------------------------------
// Social
// ---------------------------------------------------------------------------

/// Type of a directed relation edge between two agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Married partner.
    Spouse,
    /// Engaged partner.
    Fiance,
    /// Romantic partner.
    Lover,
    /// Former spouse.
    ExSpouse,
    /// Former lover.
    ExLover,
    /// The edge's target is this agent's parent.
    Parent,
    /// Bond between an animal and a person.
    Bond,
}

impl RelationKind {
    /// Whether the relation implies kinship or partnership for death thoughts.
    pub const fn is_close(self) -> bool {
        matches!(self, Self::Spouse | Self::Fiance | Self::Lover | Self::Parent)
    }
}

/// Memory thought definitions held by the mood tracker.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ThoughtKind {
    /// Got married recently.
    GotMarried,
    /// Newlywed honeymoon period.
    HoneymoonPhase,
    /// A close relation died.
    KinDied,
    /// A fellow colonist died.
    ColonistDied,
    /// The person an animal was bonded to died.
    BondedHumanDied,
    /// Had a pleasant conversation.
    Chitchat,
    /// Ate a fine meal.
    AteFineMeal,
    /// Slept in the cold.
    SleptInCold,
    /// Any other memory, identified by definition name.
    Custom(String),
}

impl ThoughtKind {
    /// Maximum number of simultaneous memories of this definition about the
    /// same other agent.
    pub const fn stack_limit(&self) -> usize {
        match self {
            Self::GotMarried | Self::HoneymoonPhase | Self::BondedHumanDied => 1,
            Self::KinDied | Self::ColonistDied => 5,
            Self::Chitchat | Self::AteFineMeal | Self::SleptInCold | Self::Custom(_) => 3,
        }
    }
}

/// Need tracker definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NeedKind {
    /// Overall mood (hosts the memory tracker).
    Mood,
    /// Hunger.
    Food,
    /// Sleep.
    Rest,
    /// Recreation.
    Joy,
    /// Pleasant surroundings.
    Beauty,
    /// Physical comfort.
    Comfort,
    /// Need only held by agents with an elevated status title.
    Authority,
}

// ---------------------------------------------------------------------------
// Player-facing settings
// ---------------------------------------------------------------------------

/// What an agent does when hostiles come near.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HostilityResponse {
    /// Keep working.
    Ignore,
    /// Engage.
    #[default]
    Attack,
    /// Run away.
    Flee,
}

/// One hourly slot of the daily schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeAssignment {
    /// Free to do anything.
    #[default]
    Anything,
    /// Work only.
    Work,
    /// Recreation.
    Joy,
    /// Sleep.
    Sleep,
    /// Meditation.
    Meditate,
}

// ---------------------------------------------------------------------------
// Body
// ---------------------------------------------------------------------------

/// Biological sex of a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    /// No gender.
    #[default]
    None,
    /// Male.
    Male,
    /// Female.
    Female,
}

/// Body parts augmentations can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BodyPart {
    /// The brain; default anchor for network augmentations.
    Brain,
    /// The head.
    Head,
    /// The torso.
    Torso,
    /// Left arm.
    LeftArm,
    /// Right arm.
    RightArm,
    /// Left leg.
    LeftLeg,
    /// Right leg.
    RightLeg,
}

/// Broad body build, copied onto duplicate bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BodyType {
    /// Thin build.
    Thin,
    /// Average build.
    #[default]
    Average,
    /// Heavy build.
    Fat,
    /// Muscular build.
    Hulk,
}

// ---------------------------------------------------------------------------
// Network status
// ---------------------------------------------------------------------------

/// Security-breach status of an agent. [`BreachState::None`] is the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BreachState {
    /// Not breached.
    #[default]
    None,
    /// Breached by a hostile intrusion of the given kind.
    Breached(u32),
}

/// Mind-link operation status of an agent. [`LinkState::None`] is the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LinkState {
    /// Not the destination of any link.
    #[default]
    None,
    /// Destination of an in-progress link operation of the given kind.
    Linked(u32),
}
