//! Augmentation definitions and their network capability table.
//!
//! Each [`AugmentationDef`] maps to a fixed [`Capabilities`] set through
//! [`AugmentationDef::capabilities`]. Predicates never inspect anything but
//! this table.

use serde::{Deserialize, Serialize};

use crate::enums::BodyPart;

/// Small flag set describing what an augmentation does to network access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Capabilities(u8);

impl Capabilities {
    /// No network effect.
    pub const NONE: Self = Self(0);
    /// Lets the body connect to the network.
    pub const ALLOWS_CONNECTION: Self = Self(1);
    /// Makes the body a remotely driven proxy.
    pub const RECEIVER: Self = Self(1 << 1);
    /// Lets the body drive proxies or transfer its mind.
    pub const TRANSCEIVER: Self = Self(1 << 2);
    /// Prevents any network connection.
    pub const BLOCKS_CONNECTION: Self = Self(1 << 3);

    /// Union of two flag sets.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Whether every flag of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether the set allows a network connection.
    pub const fn allows_connection(self) -> bool {
        self.contains(Self::ALLOWS_CONNECTION)
    }

    /// Whether the set marks a receiver.
    pub const fn is_receiver(self) -> bool {
        self.contains(Self::RECEIVER)
    }

    /// Whether the set marks a transceiver.
    pub const fn is_transceiver(self) -> bool {
        self.contains(Self::TRANSCEIVER)
    }

    /// Whether the set blocks connections.
    pub const fn blocks_connection(self) -> bool {
        self.contains(Self::BLOCKS_CONNECTION)
    }
}

/// Augmentation (implant, condition or marker) definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AugmentationDef {
    /// Basic chip that only allows connecting to the network.
    NetworkTransmitter,
    /// Implant that can drive proxies and move minds over the network.
    NetworkTransceiver,
    /// Built-in fallback receiver turning a body into a proxy.
    NetworkReceiver,
    /// Receiver variant used by synthetic bodies.
    MechanicalReceiver,
    /// Interference implant that blocks all connections.
    SignalJammer,
    /// Lingering damage left on a duplicate body whose mind was killed.
    FeedbackLoop,
    /// Marker for an in-progress mind operation.
    MindOperation,
    /// Structural marker for a missing body part.
    MissingBodyPart,
    /// Ordinary prosthetic with no network effect.
    Bionic,
}

impl AugmentationDef {
    /// Capability flags of this definition.
    pub const fn capabilities(self) -> Capabilities {
        match self {
            Self::NetworkTransmitter => Capabilities::ALLOWS_CONNECTION,
            Self::NetworkTransceiver => {
                Capabilities::ALLOWS_CONNECTION.union(Capabilities::TRANSCEIVER)
            }
            Self::NetworkReceiver | Self::MechanicalReceiver => {
                Capabilities::ALLOWS_CONNECTION.union(Capabilities::RECEIVER)
            }
            Self::SignalJammer => Capabilities::BLOCKS_CONNECTION,
            Self::FeedbackLoop | Self::MindOperation | Self::MissingBodyPart | Self::Bionic => {
                Capabilities::NONE
            }
        }
    }

    /// Whether the definition is a per-body marker that must never move to
    /// another body.
    pub const fn is_body_bound(self) -> bool {
        matches!(self, Self::MissingBodyPart | Self::MindOperation)
    }
}

/// An augmentation attached to an agent's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Augmentation {
    /// The augmentation definition.
    pub def: AugmentationDef,
    /// Body part the augmentation is attached to, `None` for whole-body.
    pub part: Option<BodyPart>,
}

impl Augmentation {
    /// Create an augmentation attached at `part`.
    pub const fn new(def: AugmentationDef, part: Option<BodyPart>) -> Self {
        Self { def, part }
    }

    /// Capability flags of the underlying definition.
    pub const fn capabilities(&self) -> Capabilities {
        self.def.capabilities()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receivers_allow_connection() {
        let caps = AugmentationDef::NetworkReceiver.capabilities();
        assert!(caps.is_receiver());
        assert!(caps.allows_connection());
        assert!(!caps.is_transceiver());
    }

    #[test]
    fn jammer_only_blocks() {
        let caps = AugmentationDef::SignalJammer.capabilities();
        assert!(caps.blocks_connection());
        assert!(!caps.allows_connection());
    }

    #[test]
    fn markers_are_body_bound() {
        assert!(AugmentationDef::MissingBodyPart.is_body_bound());
        assert!(AugmentationDef::MindOperation.is_body_bound());
        assert!(!AugmentationDef::Bionic.is_body_bound());
    }
}
