//! The [`MindNetwork`] context owning all process-scoped state.
//!
//! Every operation (transplant, permutation, proxy and blank lifecycle)
//! is a method on this context. It owns the world registry, the capacity
//! pool, the generator and the memoized Blank template.

use skymind_network::CapacityPool;
use skymind_types::{AgentId, FactionId};

use crate::agent::Agent;
use crate::collaborators::Collaborators;
use crate::config::SkyMindConfig;
use crate::generator::{AgentGenerator, GenerationRequest};
use crate::passion;
use crate::predicates;
use crate::world::World;

/// Process-scoped state for one simulation.
#[derive(Debug)]
pub struct MindNetwork<C> {
    /// Agent registry and interaction log.
    pub world: World,
    /// Network node capacity and slot occupants.
    pub pool: CapacityPool,
    /// Loaded configuration.
    pub config: SkyMindConfig,
    /// Host-side effect sink.
    pub collaborators: C,
    pub(crate) generator: AgentGenerator,
    pub(crate) blank: Option<AgentId>,
    pub(crate) has_made_proxy: bool,
}

impl<C: Collaborators> MindNetwork<C> {
    /// Create an empty network for `player_faction`.
    pub fn new(config: SkyMindConfig, player_faction: FactionId, collaborators: C) -> Self {
        let generator = AgentGenerator::new(config.generation.seed);
        Self {
            world: World::new(player_faction),
            pool: CapacityPool::new(),
            config,
            collaborators,
            generator,
            blank: None,
            has_made_proxy: false,
        }
    }

    /// Generate an agent with the configured gene and mood settings.
    pub fn generate(&mut self, request: &GenerationRequest) -> Agent {
        self.generator.generate(
            request,
            self.config.features.biotech,
            self.config.mood.memory_capacity,
        )
    }

    /// Generate an agent and register it in the world.
    pub fn spawn(&mut self, request: &GenerationRequest) -> AgentId {
        let agent = self.generate(request);
        self.world.insert(agent)
    }

    /// Whether the first-proxy notice has been shown.
    pub const fn has_made_proxy(&self) -> bool {
        self.has_made_proxy
    }

    /// Whether `agent` may currently receive a transplanted identity.
    pub fn is_valid_transplant_target(&self, agent: AgentId) -> bool {
        self.world.get(agent).is_some_and(|agent| {
            predicates::is_valid_transplant_target(agent, &self.pool, self.world.player_faction())
        })
    }

    /// Whether `agent` can reach the network.
    pub fn has_network_capable_augmentation(&self, agent: AgentId) -> bool {
        self.world
            .get(agent)
            .is_some_and(|agent| predicates::has_network_capable_augmentation(agent, &self.pool))
    }

    /// Proxies travelling off-map with nobody driving them.
    ///
    /// Empty when proxies are disabled.
    pub fn hostless_proxies_in_transit(&self) -> Vec<AgentId> {
        if !self.config.network.proxies_allowed {
            return Vec::new();
        }
        self.world
            .in_transit()
            .filter(|agent| predicates::is_proxy(agent) && agent.network.controller.is_none())
            .map(|agent| agent.id)
            .collect()
    }

    /// Skill points needed to buy a passion; see [`passion::passion_cost`].
    pub fn passion_cost(&self, learning_factor_pct: u32, passion_count: u32) -> Option<u32> {
        passion::passion_cost(&self.config.network, learning_factor_pct, passion_count)
    }
}
