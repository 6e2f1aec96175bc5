//! Proxy and transplant-target eligibility checks.

use skymind_network::CapacityPool;
use skymind_types::{BreachState, Capabilities, FactionId, LinkState, RaceDef};

use crate::agent::Agent;
use crate::collaborators::NetworkMembership;

/// Whether the agent can reach the network: it carries a connection-capable
/// augmentation or is stored in the cloud.
pub fn has_network_capable_augmentation(agent: &Agent, pool: &CapacityPool) -> bool {
    agent.capabilities().allows_connection() || pool.is_cloud(agent.id)
}

/// Whether bodies of this race can ever become proxies.
pub const fn race_may_ever_be_proxy(race: &RaceDef) -> bool {
    race.humanlike
}

/// Whether this agent's kind permits proxy conversion.
///
/// The per-kind flag can only veto: a race that is not person-like never
/// qualifies.
pub fn may_ever_be_proxy(agent: &Agent) -> bool {
    agent.kind.may_be_proxy != Some(false) && race_may_ever_be_proxy(&agent.kind.race)
}

/// Whether the agent currently is a proxy body.
pub fn is_proxy(agent: &Agent) -> bool {
    agent.has_augmentation_where(Capabilities::is_receiver)
}

/// Whether an identity may be transplanted into `agent` right now.
pub fn is_valid_transplant_target(
    agent: &Agent,
    membership: &impl NetworkMembership,
    player_faction: FactionId,
) -> bool {
    let foreign = agent.faction.is_some_and(|faction| faction != player_faction)
        && agent.host_faction != Some(player_faction);
    if foreign
        || !membership.is_connected(agent)
        || membership.breach_state(agent) != BreachState::None
        || membership.link_state(agent) != LinkState::None
        || agent.has_augmentation_where(Capabilities::blocks_connection)
    {
        return false;
    }
    agent.has_augmentation_where(|caps| caps.is_receiver() || caps.is_transceiver())
}

#[cfg(test)]
mod tests {
    use skymind_types::{Augmentation, AugmentationDef, BodyPart, KindDef, NameTriple};

    use super::*;

    fn with_aug(def: AugmentationDef) -> Agent {
        let mut agent = Agent::new(KindDef::colonist(), NameTriple::new("A", "A", "A"));
        agent
            .augmentations
            .push(Augmentation::new(def, Some(BodyPart::Brain)));
        agent
    }

    #[test]
    fn cloud_resident_counts_as_network_capable() {
        let mut pool = CapacityPool::new();
        let agent = Agent::new(KindDef::colonist(), NameTriple::new("A", "A", "A"));
        assert!(!has_network_capable_augmentation(&agent, &pool));
        pool.add_cloud(agent.id);
        assert!(has_network_capable_augmentation(&agent, &pool));
    }

    #[test]
    fn kind_flag_vetoes_person_like_races() {
        let mut agent = Agent::new(KindDef::colonist(), NameTriple::new("A", "A", "A"));
        assert!(may_ever_be_proxy(&agent));
        agent.kind.may_be_proxy = Some(false);
        assert!(!may_ever_be_proxy(&agent));

        let dog = Agent::new(KindDef::husky(), NameTriple::new("Rex", "Rex", ""));
        assert!(!may_ever_be_proxy(&dog));
    }

    #[test]
    fn kind_flag_cannot_admit_animals() {
        let mut dog = Agent::new(KindDef::husky(), NameTriple::new("Rex", "Rex", ""));
        dog.kind.may_be_proxy = Some(true);
        assert!(!may_ever_be_proxy(&dog));
    }

    #[test]
    fn valid_target_requires_connection_and_receiver() {
        let player = FactionId::new();
        let mut pool = CapacityPool::new();
        let mut agent = with_aug(AugmentationDef::NetworkReceiver);
        agent.faction = Some(player);
        assert!(!is_valid_transplant_target(&agent, &pool, player));

        pool.connect(agent.id);
        assert!(is_valid_transplant_target(&agent, &pool, player));
        assert!(is_proxy(&agent));
    }

    #[test]
    fn foreign_breached_or_jammed_targets_are_rejected() {
        let player = FactionId::new();
        let mut pool = CapacityPool::new();
        let mut agent = with_aug(AugmentationDef::NetworkTransceiver);
        pool.connect(agent.id);
        // Unaffiliated agents are eligible.
        assert!(is_valid_transplant_target(&agent, &pool, player));

        agent.faction = Some(FactionId::new());
        assert!(!is_valid_transplant_target(&agent, &pool, player));
        agent.host_faction = Some(player);
        assert!(is_valid_transplant_target(&agent, &pool, player));

        agent.network.breach = BreachState::Breached(5);
        assert!(!is_valid_transplant_target(&agent, &pool, player));
        agent.network.breach = BreachState::None;

        agent.network.link = LinkState::Linked(3);
        assert!(!is_valid_transplant_target(&agent, &pool, player));
        agent.network.link = LinkState::None;

        agent
            .augmentations
            .push(Augmentation::new(AugmentationDef::SignalJammer, None));
        assert!(!is_valid_transplant_target(&agent, &pool, player));
    }

    #[test]
    fn transmitter_alone_is_not_a_target() {
        let player = FactionId::new();
        let mut pool = CapacityPool::new();
        let agent = with_aug(AugmentationDef::NetworkTransmitter);
        pool.connect(agent.id);
        assert!(!is_valid_transplant_target(&agent, &pool, player));
    }
}
