//! Capacity-providing network nodes and their lifecycle signals.
//!
//! A node contributes its capacity to the pool only while it is active:
//! it either has no power dependency, or it has one and is powered on.

use serde::{Deserialize, Serialize};

use skymind_types::NodeId;

/// Power dependency of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Power {
    /// The node needs no power and is always on.
    Unpowered,
    /// The node draws power; `on` tracks whether it is currently powered.
    Powered {
        /// Whether power is currently flowing.
        on: bool,
    },
}

/// A network node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Node identity.
    pub id: NodeId,
    /// Slots this node contributes while active.
    pub capacity: u32,
    /// Power dependency.
    pub power: Power,
}

impl NetworkNode {
    /// Create a node that needs no power.
    pub fn unpowered(capacity: u32) -> Self {
        Self {
            id: NodeId::new(),
            capacity,
            power: Power::Unpowered,
        }
    }

    /// Create a powered node, initially switched off.
    pub fn powered(capacity: u32) -> Self {
        Self {
            id: NodeId::new(),
            capacity,
            power: Power::Powered { on: false },
        }
    }

    /// Whether the node currently contributes capacity.
    pub const fn is_active(&self) -> bool {
        match self.power {
            Power::Unpowered => true,
            Power::Powered { on } => on,
        }
    }

    /// Whether the node depends on a power supply.
    pub const fn has_power_dependency(&self) -> bool {
        matches!(self.power, Power::Powered { .. })
    }
}

/// Lifecycle events delivered to a node by its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeSignal {
    /// The node was placed in the world.
    Spawned {
        /// `true` when restored from a save; capacity is already registered.
        respawning_after_load: bool,
    },
    /// Power came on.
    PowerTurnedOn,
    /// Power went off.
    PowerTurnedOff,
    /// The node was removed from the world.
    Despawned,
    /// The map holding the node was unloaded.
    MapRemoved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpowered_nodes_are_always_active() {
        assert!(NetworkNode::unpowered(1).is_active());
    }

    #[test]
    fn powered_nodes_follow_power_state() {
        let mut node = NetworkNode::powered(2);
        assert!(!node.is_active());
        node.power = Power::Powered { on: true };
        assert!(node.is_active());
        assert!(node.has_power_dependency());
    }
}
