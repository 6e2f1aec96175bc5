//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity touched by the transplant engine has a strongly-typed ID
//! so that an agent can never be confused with a network node or a log
//! entry at compile time. All IDs use UUID v7 (time-ordered).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for an agent body.
    AgentId
}

define_id! {
    /// Unique identifier for a faction.
    FactionId
}

define_id! {
    /// Unique identifier for a capacity-providing network node.
    NodeId
}

define_id! {
    /// Unique identifier for a shared ideology record.
    IdeologyId
}

define_id! {
    /// Unique identifier for an interaction log entry.
    LogEntryId
}

define_id! {
    /// Unique identifier for a carried, equipped or worn item.
    ItemId
}

define_id! {
    /// Unique identifier for a player-defined allowed area.
    AreaId
}

define_id! {
    /// Unique identifier for a player-defined outfit policy.
    OutfitId
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let agent = AgentId::new();
        let node = NodeId::new();
        assert_ne!(agent.into_inner(), Uuid::nil());
        assert_ne!(node.into_inner(), Uuid::nil());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(AgentId::new(), AgentId::new());
    }

    #[test]
    fn display_matches_inner_uuid() {
        let id = FactionId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }

    #[test]
    fn ids_serialize_as_bare_uuid_strings() {
        let id = AgentId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
        let restored: AgentId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, id);
    }
}
