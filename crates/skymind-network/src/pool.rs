//! The process-wide capacity pool.
//!
//! The pool is a registry, not an admission controller: it records which
//! nodes are active and which agents occupy a network slot, and callers
//! decide whether the counts allow another connection.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use skymind_types::{AgentId, NodeId};

use crate::node::{NetworkNode, NodeSignal, Power};

/// Connected devices versus available slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkSummary {
    /// Agents currently occupying a slot.
    pub occupied: usize,
    /// Total capacity of active nodes.
    pub capacity: u32,
}

impl core::fmt::Display for NetworkSummary {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.occupied, self.capacity)
    }
}

/// Registry of active nodes, slot occupants and cloud-resident identities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapacityPool {
    /// Active nodes keyed by identity.
    nodes: BTreeMap<NodeId, NetworkNode>,
    /// Agents occupying a network slot.
    occupants: BTreeSet<AgentId>,
    /// Identities living only in the network, without a body of their own.
    cloud: BTreeSet<AgentId>,
}

impl CapacityPool {
    /// Create an empty pool.
    pub const fn new() -> Self {
        Self {
            nodes: BTreeMap::new(),
            occupants: BTreeSet::new(),
            cloud: BTreeSet::new(),
        }
    }

    // -- nodes --------------------------------------------------------------

    /// Register an active node. Returns `false` if it was already registered.
    pub fn add_node(&mut self, node: &NetworkNode) -> bool {
        if self.nodes.contains_key(&node.id) {
            return false;
        }
        self.nodes.insert(node.id, *node);
        debug!(node = %node.id, capacity = node.capacity, total = self.total_capacity(), "Network node added");
        true
    }

    /// Unregister a node. Returns `false` if it was not registered.
    pub fn remove_node(&mut self, node: NodeId) -> bool {
        let removed = self.nodes.remove(&node).is_some();
        if removed {
            debug!(%node, total = self.total_capacity(), "Network node removed");
        }
        removed
    }

    /// Whether a node is registered.
    pub fn has_node(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    /// Iterate over registered nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &NetworkNode> {
        self.nodes.values()
    }

    /// Sum of the registered nodes' capacities.
    pub fn total_capacity(&self) -> u32 {
        self.nodes
            .values()
            .fold(0_u32, |total, node| total.saturating_add(node.capacity))
    }

    /// Number of agents occupying a slot.
    pub fn occupied_slots(&self) -> usize {
        self.occupants.len()
    }

    /// Slots not currently occupied (0 when over-subscribed).
    pub fn free_slots(&self) -> u32 {
        let occupied = u32::try_from(self.occupants.len()).unwrap_or(u32::MAX);
        self.total_capacity().saturating_sub(occupied)
    }

    /// Connected devices versus available slots.
    pub fn summary(&self) -> NetworkSummary {
        NetworkSummary {
            occupied: self.occupied_slots(),
            capacity: self.total_capacity(),
        }
    }

    /// Apply a lifecycle signal to `node`, updating its power state and the
    /// registry. Returns `true` if the registry changed.
    pub fn handle_signal(&mut self, node: &mut NetworkNode, signal: NodeSignal) -> bool {
        match signal {
            // Capacity restored from a save is already registered.
            NodeSignal::Spawned {
                respawning_after_load: true,
            } => false,
            NodeSignal::Spawned {
                respawning_after_load: false,
            } => {
                if node.has_power_dependency() {
                    false
                } else {
                    self.add_node(node)
                }
            }
            NodeSignal::PowerTurnedOn => {
                node.power = Power::Powered { on: true };
                self.add_node(node)
            }
            NodeSignal::PowerTurnedOff => {
                node.power = Power::Powered { on: false };
                self.remove_node(node.id)
            }
            NodeSignal::Despawned | NodeSignal::MapRemoved => {
                if node.is_active() {
                    self.remove_node(node.id)
                } else {
                    false
                }
            }
        }
    }

    // -- occupants ----------------------------------------------------------

    /// Mark an agent as occupying a slot. Returns `false` if it already did.
    pub fn connect(&mut self, agent: AgentId) -> bool {
        self.occupants.insert(agent)
    }

    /// Release an agent's slot. Returns `false` if it held none.
    pub fn disconnect(&mut self, agent: AgentId) -> bool {
        self.occupants.remove(&agent)
    }

    /// Whether an agent occupies a slot.
    pub fn is_connected(&self, agent: AgentId) -> bool {
        self.occupants.contains(&agent)
    }

    /// Iterate over slot occupants.
    pub fn occupants(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.occupants.iter().copied()
    }

    // -- cloud --------------------------------------------------------------

    /// Register a cloud-resident identity. Returns `false` if already present.
    pub fn add_cloud(&mut self, agent: AgentId) -> bool {
        self.cloud.insert(agent)
    }

    /// Unregister a cloud-resident identity and release its slot.
    ///
    /// Returns `false` if the agent was not cloud-resident.
    pub fn pop_cloud(&mut self, agent: AgentId) -> bool {
        let removed = self.cloud.remove(&agent);
        if removed {
            self.occupants.remove(&agent);
        }
        removed
    }

    /// Whether an agent is cloud-resident.
    pub fn is_cloud(&self, agent: AgentId) -> bool {
        self.cloud.contains(&agent)
    }

    /// Iterate over cloud-resident identities.
    pub fn cloud_agents(&self) -> impl Iterator<Item = AgentId> + '_ {
        self.cloud.iter().copied()
    }

    /// Whether anything uses the network: a cloud identity or a connected device.
    pub fn has_networked_agent(&self) -> bool {
        !self.cloud.is_empty() || !self.occupants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_follows_power_events() {
        let mut pool = CapacityPool::new();
        let mut n1 = NetworkNode::unpowered(1);
        let mut n2 = NetworkNode::powered(2);

        assert!(pool.handle_signal(
            &mut n1,
            NodeSignal::Spawned {
                respawning_after_load: false
            }
        ));
        assert_eq!(pool.total_capacity(), 1);

        // Powered nodes wait for power before registering.
        assert!(!pool.handle_signal(
            &mut n2,
            NodeSignal::Spawned {
                respawning_after_load: false
            }
        ));
        assert_eq!(pool.total_capacity(), 1);

        assert!(pool.handle_signal(&mut n2, NodeSignal::PowerTurnedOn));
        assert_eq!(pool.total_capacity(), 3);

        assert!(pool.handle_signal(&mut n2, NodeSignal::PowerTurnedOff));
        assert_eq!(pool.total_capacity(), 1);
    }

    #[test]
    fn add_and_remove_are_idempotent() {
        let mut pool = CapacityPool::new();
        let node = NetworkNode::unpowered(4);
        assert!(pool.add_node(&node));
        assert!(!pool.add_node(&node));
        assert_eq!(pool.total_capacity(), 4);
        assert!(pool.remove_node(node.id));
        assert!(!pool.remove_node(node.id));
        assert_eq!(pool.total_capacity(), 0);
    }

    #[test]
    fn respawn_after_load_never_adds_capacity() {
        let mut pool = CapacityPool::new();
        let mut node = NetworkNode::unpowered(3);
        assert!(!pool.handle_signal(
            &mut node,
            NodeSignal::Spawned {
                respawning_after_load: true
            }
        ));
        assert_eq!(pool.total_capacity(), 0);
    }

    #[test]
    fn despawn_of_switched_off_node_is_a_no_op() {
        let mut pool = CapacityPool::new();
        let mut on = NetworkNode::powered(2);
        let mut off = NetworkNode::powered(5);
        pool.handle_signal(&mut on, NodeSignal::PowerTurnedOn);
        assert!(!pool.handle_signal(&mut off, NodeSignal::Despawned));
        assert!(pool.handle_signal(&mut on, NodeSignal::MapRemoved));
        assert_eq!(pool.total_capacity(), 0);
    }

    #[test]
    fn occupants_are_counted_once() {
        let mut pool = CapacityPool::new();
        pool.add_node(&NetworkNode::unpowered(2));
        let agent = AgentId::new();
        assert!(pool.connect(agent));
        assert!(!pool.connect(agent));
        assert_eq!(pool.occupied_slots(), 1);
        assert_eq!(pool.free_slots(), 1);
        assert_eq!(pool.summary().to_string(), "1/2");
    }

    #[test]
    fn pop_cloud_releases_slot() {
        let mut pool = CapacityPool::new();
        let agent = AgentId::new();
        pool.add_cloud(agent);
        pool.connect(agent);
        assert!(pool.has_networked_agent());
        assert!(pool.pop_cloud(agent));
        assert!(!pool.is_cloud(agent));
        assert!(!pool.is_connected(agent));
        assert!(!pool.pop_cloud(agent));
    }
}
