//! Seeded agent generator.
//!
//! Produces fresh bodies for colonists, permutation holding agents,
//! duplicate bodies and the Blank template. All randomness flows through
//! one seeded [`StdRng`], so a fixed `generation.seed` reproduces the same
//! sequence of agents.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use skymind_types::{
    Appearance, Backstory, BodyType, FactionId, GeneSet, Gender, IdeologyId, IdeologyTracker,
    Item, KindDef, NameTriple, Needs, Passion, Rgb, SkillKind, SkillTable, Story,
    Trait, WorkType,
};

use crate::agent::{Agent, shared};

/// Simulation ticks in one year.
pub const TICKS_PER_YEAR: u64 = 3_600_000;

/// Highest starting level a generated skill can roll.
const MAX_ROLLED_LEVEL: u32 = 10;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bram", "Cleo", "Dorian", "Esme", "Felix", "Greta", "Hugo", "Ines", "Jonas", "Kira",
    "Lucan", "Mira", "Niko", "Orla", "Pavel", "Quinn", "Rosa", "Silas", "Tova",
];

const LAST_NAMES: &[&str] = &[
    "Abernathy", "Brandt", "Castell", "Dunmore", "Everly", "Fairweather", "Grimsby", "Holloway",
    "Ivers", "Kestrel", "Lindqvist", "Marlowe", "Norcross", "Okafor", "Pryce", "Ravensworth",
];

const CHILDHOODS: &[(&str, &[WorkType])] = &[
    ("Urchin", &[]),
    ("Bookworm", &[WorkType::Hauling]),
    ("FarmKid", &[]),
    ("VatGrown", &[WorkType::Art]),
    ("CaveChild", &[WorkType::Research]),
];

const ADULTHOODS: &[(&str, &[WorkType])] = &[
    ("Medic", &[]),
    ("Miner", &[]),
    ("Noble", &[WorkType::Cleaning, WorkType::Hauling]),
    ("Scholar", &[WorkType::Mining]),
    ("Mercenary", &[WorkType::Art]),
];

const TRAITS: &[(&str, i8, &[WorkType])] = &[
    ("Kind", 0, &[]),
    ("Industrious", 2, &[]),
    ("Lazy", -1, &[]),
    ("Abrasive", 0, &[]),
    ("Pyromaniac", 0, &[WorkType::Firefighter]),
    ("Brawler", 0, &[]),
    ("NightOwl", 0, &[]),
];

const XENOGENES: &[&str] = &["FastRunner", "ToughSkin", "DarkVision", "RobustDigestion"];

const HAIR_STYLES: &[&str] = &["Shaved", "Bob", "Braid", "Mohawk", "Long"];

const BODY_TYPES: [BodyType; 4] = [
    BodyType::Thin,
    BodyType::Average,
    BodyType::Fat,
    BodyType::Hulk,
];

/// Parameters for one generated agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Kind of body to create.
    pub kind: KindDef,
    /// Owning faction, `None` for unaffiliated bodies.
    pub faction: Option<FactionId>,
    /// Fixed gender, random when `None`.
    pub gender: Option<Gender>,
    /// Fixed biological age, random adult age when `None`.
    pub biological_age_ticks: Option<u64>,
    /// Fixed chronological age, equal to the biological age when `None`.
    pub chronological_age_ticks: Option<u64>,
    /// Ideology to join, `None` for no ideology tracker.
    pub ideology: Option<IdeologyId>,
    /// Generate without xenogenes.
    pub baseliner: bool,
}

impl GenerationRequest {
    /// A request for a random, unaffiliated body of `kind`.
    pub const fn new(kind: KindDef) -> Self {
        Self {
            kind,
            faction: None,
            gender: None,
            biological_age_ticks: None,
            chronological_age_ticks: None,
            ideology: None,
            baseliner: false,
        }
    }

    /// Set the owning faction.
    #[must_use]
    pub const fn with_faction(mut self, faction: FactionId) -> Self {
        self.faction = Some(faction);
        self
    }

    /// Join the given ideology.
    #[must_use]
    pub const fn with_ideology(mut self, ideology: IdeologyId) -> Self {
        self.ideology = Some(ideology);
        self
    }
}

/// Deterministic agent factory.
#[derive(Debug, Clone)]
pub struct AgentGenerator {
    rng: StdRng,
}

impl AgentGenerator {
    /// Create a generator seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a spawned agent for `request`.
    ///
    /// `genes` controls whether the body gets a gene set at all;
    /// `memory_capacity` bounds the mood tracker.
    pub fn generate(
        &mut self,
        request: &GenerationRequest,
        genes: bool,
        memory_capacity: usize,
    ) -> Agent {
        let name = self.pick_name();
        let mut agent = Agent::new(request.kind.clone(), name);
        let humanlike = agent.kind.race.humanlike;

        agent.faction = request.faction;
        agent.gender = request.gender.unwrap_or_else(|| {
            if self.rng.random_bool(0.5) {
                Gender::Male
            } else {
                Gender::Female
            }
        });
        let years = self.rng.random_range(18..=60_u64);
        agent.age_biological_ticks = request
            .biological_age_ticks
            .unwrap_or_else(|| years.saturating_mul(TICKS_PER_YEAR));
        agent.age_chronological_ticks = request
            .chronological_age_ticks
            .unwrap_or(agent.age_biological_ticks);

        if humanlike {
            agent.story = Some(self.roll_story());
            agent.apparel.push(Item::new("Tshirt"));
            agent.apparel.push(Item::new("Pants"));
        }
        let disabled = agent.disabled_work();
        let mut skills = self.roll_skills();
        skills.apply_work_disables(&disabled);
        agent.skills = Some(shared(skills));
        if let Some(work) = agent.work.as_mut() {
            work.enable_and_initialize(&disabled);
        }

        agent.needs = Some(Needs::new(agent.need_profile(), memory_capacity));
        agent.ideology = request.ideology.map(|ideology| {
            let mut tracker = IdeologyTracker::new();
            tracker.set_ideology(Some(ideology), 0);
            shared(tracker)
        });
        if genes && humanlike {
            agent.genes = Some(self.roll_genes(request.baseliner));
        }
        agent.appearance = self.roll_appearance();
        agent
    }

    fn pick<'a>(&mut self, pool: &[&'a str]) -> &'a str {
        let idx = self.rng.random_range(0..pool.len().max(1));
        pool.get(idx).copied().unwrap_or_default()
    }

    fn pick_name(&mut self) -> NameTriple {
        let first = self.pick(FIRST_NAMES);
        let last = self.pick(LAST_NAMES);
        NameTriple::new(first, first, last)
    }

    fn roll_story(&mut self) -> Story {
        let mut story = Story {
            childhood: self.roll_backstory(CHILDHOODS),
            adulthood: self.roll_backstory(ADULTHOODS),
            favorite_color: Some(self.roll_color()),
            ..Story::default()
        };
        let count = self.rng.random_range(0..=2_usize);
        for _ in 0..count {
            let idx = self.rng.random_range(0..TRAITS.len());
            let Some(&(def, degree, disabled)) = TRAITS.get(idx) else {
                continue;
            };
            if story.traits.iter().any(|t| t.def == def) {
                continue;
            }
            let mut rolled = Trait::new(def, degree);
            rolled.disabled_work = disabled.to_vec();
            story.traits.push(rolled);
        }
        story.recompute_disabled_work();
        story
    }

    fn roll_backstory(&mut self, pool: &[(&str, &[WorkType])]) -> Option<Backstory> {
        let idx = self.rng.random_range(0..pool.len().max(1));
        pool.get(idx).map(|&(def, disabled)| {
            let mut backstory = Backstory::new(def);
            backstory.disabled_work = disabled.to_vec();
            backstory
        })
    }

    fn roll_skills(&mut self) -> SkillTable {
        let mut table = SkillTable::new();
        for kind in SkillKind::ALL {
            let level = self.rng.random_range(0..=MAX_ROLLED_LEVEL);
            let roll: u32 = self.rng.random_range(0..100);
            let record = table.get_mut(kind);
            record.level = level;
            record.passion = match roll {
                0..=9 => Passion::Major,
                10..=29 => Passion::Minor,
                _ => Passion::None,
            };
            record.xp_since_last_level = self.rng.random_range(0..1000);
        }
        table
    }

    fn roll_genes(&mut self, baseliner: bool) -> GeneSet {
        let melanin = self.roll_color();
        if baseliner {
            return GeneSet {
                xenotype: Some(String::from("Baseliner")),
                melanin: Some(melanin),
                ..GeneSet::default()
            };
        }
        GeneSet {
            xenotype: Some(String::from("Custom")),
            xenogenes: vec![self.pick(XENOGENES).to_owned()],
            endogenes: vec![String::from("SkinMelanin")],
            melanin: Some(melanin),
        }
    }

    fn roll_color(&mut self) -> Rgb {
        Rgb(self.rng.random(), self.rng.random(), self.rng.random())
    }

    fn roll_appearance(&mut self) -> Appearance {
        let body = self.rng.random_range(0..BODY_TYPES.len());
        Appearance {
            skin_color_base: self.roll_color(),
            skin_color_override: None,
            body_type: BODY_TYPES.get(body).copied().unwrap_or_default(),
            hair_color: self.roll_color(),
            hair_def: self.pick(HAIR_STYLES).to_owned(),
        }
    }
}
