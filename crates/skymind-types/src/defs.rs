//! Static definitions for agent kinds and races.
//!
//! A race describes what a body is; a kind describes how a particular
//! population of that race is generated (and may override proxy rules).

use serde::{Deserialize, Serialize};

use crate::augmentation::AugmentationDef;

/// A race (body) definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RaceDef {
    /// Definition name.
    pub name: String,
    /// Whether bodies of this race are person-like.
    pub humanlike: bool,
    /// Whether bodies of this race need food.
    pub eats: bool,
    /// Receiver fitted to proxies of this race when the kind has none.
    pub default_receiver: Option<AugmentationDef>,
}

impl RaceDef {
    /// Baseline human.
    pub fn human() -> Self {
        Self {
            name: String::from("Human"),
            humanlike: true,
            eats: true,
            default_receiver: None,
        }
    }

    /// Synthetic person-like body.
    pub fn android() -> Self {
        Self {
            name: String::from("Android"),
            humanlike: true,
            eats: false,
            default_receiver: Some(AugmentationDef::MechanicalReceiver),
        }
    }

    /// Domestic animal.
    pub fn husky() -> Self {
        Self {
            name: String::from("Husky"),
            humanlike: false,
            eats: true,
            default_receiver: None,
        }
    }
}

/// An agent kind (generation template) definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KindDef {
    /// Definition name.
    pub name: String,
    /// Race of generated bodies.
    pub race: RaceDef,
    /// Proxy eligibility veto. `Some(false)` forbids proxies even for a
    /// person-like race; otherwise the race decides.
    pub may_be_proxy: Option<bool>,
    /// Receiver fitted to proxies of this kind.
    pub receiver: Option<AugmentationDef>,
}

impl KindDef {
    /// Create a kind with no overrides.
    pub fn new(name: impl Into<String>, race: RaceDef) -> Self {
        Self {
            name: name.into(),
            race,
            may_be_proxy: None,
            receiver: None,
        }
    }

    /// The player's basic colonist kind.
    pub fn colonist() -> Self {
        Self::new("Colonist", RaceDef::human())
    }

    /// Synthetic colonist kind.
    pub fn android() -> Self {
        Self::new("AndroidColonist", RaceDef::android())
    }

    /// Colony animal kind.
    pub fn husky() -> Self {
        Self::new("Husky", RaceDef::husky())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn animals_are_not_humanlike() {
        assert!(!KindDef::husky().race.humanlike);
        assert!(KindDef::colonist().race.humanlike);
    }

    #[test]
    fn android_race_has_default_receiver() {
        assert_eq!(
            KindDef::android().race.default_receiver,
            Some(AugmentationDef::MechanicalReceiver)
        );
    }
}
