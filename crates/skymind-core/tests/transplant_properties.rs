//! Cross-module properties of transplant, permutation and the proxy
//! lifecycle, exercised through the public [`MindNetwork`] API.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::indexing_slicing
)]

use std::rc::Rc;

use skymind_core::{
    GenerationRequest, MindNetwork, RecordingCollaborators, SharingMode, SkyMindConfig,
    transplant::duplicate_relations,
};
use skymind_network::{NetworkNode, NodeSignal};
use skymind_types::{
    AgentId, Augmentation, AugmentationDef, BodyPart, FactionId, KindDef, MemoryEntry,
    RelationKind, RelationSet, SkillKind, SkillTable, Story, ThoughtKind,
};

// =============================================================================
// Helpers
// =============================================================================

fn network() -> MindNetwork<RecordingCollaborators> {
    MindNetwork::new(
        SkyMindConfig::default(),
        FactionId::new(),
        RecordingCollaborators::default(),
    )
}

fn colonist(net: &mut MindNetwork<RecordingCollaborators>) -> AgentId {
    let player = net.world.player_faction();
    net.spawn(&GenerationRequest::new(KindDef::colonist()).with_faction(player))
}

fn relate(net: &MindNetwork<RecordingCollaborators>, from: AgentId, kind: RelationKind, to: AgentId) {
    net.world
        .get(from)
        .unwrap()
        .relations
        .as_ref()
        .unwrap()
        .borrow_mut()
        .add_direct(kind, to);
}

fn skills(net: &MindNetwork<RecordingCollaborators>, id: AgentId) -> SkillTable {
    net.world.get(id).unwrap().skills.as_ref().unwrap().borrow().clone()
}

fn story(net: &MindNetwork<RecordingCollaborators>, id: AgentId) -> Story {
    net.world.get(id).unwrap().story.clone().unwrap()
}

fn relations(net: &MindNetwork<RecordingCollaborators>, id: AgentId) -> RelationSet {
    net.world.get(id).unwrap().relations.as_ref().unwrap().borrow().clone()
}

fn memories(net: &MindNetwork<RecordingCollaborators>, id: AgentId) -> Vec<MemoryEntry> {
    net.world
        .get(id)
        .unwrap()
        .needs
        .as_ref()
        .unwrap()
        .mood
        .as_ref()
        .unwrap()
        .memories()
        .to_vec()
}

// =============================================================================
// Transplant
// =============================================================================

#[test]
fn untethered_round_trip_is_lossless() {
    let mut net = network();
    let a = colonist(&mut net);
    let b = colonist(&mut net);
    let x = colonist(&mut net);
    let y = colonist(&mut net);
    relate(&net, a, RelationKind::Spouse, x);
    relate(&net, a, RelationKind::Parent, y);
    net.world
        .get(a)
        .unwrap()
        .relations
        .as_ref()
        .unwrap()
        .borrow_mut()
        .ever_seen_by_player = true;

    let skills_before = skills(&net, a);
    let story_before = story(&net, a);
    let relations_before = relations(&net, a);

    net.transplant(a, b, false, SharingMode::Untethered).unwrap();
    net.transplant(b, a, false, SharingMode::Untethered).unwrap();

    assert_eq!(skills(&net, a), skills_before);
    assert_eq!(story(&net, a), story_before);
    assert_eq!(relations(&net, a), relations_before);
}

#[test]
fn round_trip_keeps_edges_between_the_two_bodies() {
    let mut net = network();
    let a = colonist(&mut net);
    let b = colonist(&mut net);
    relate(&net, a, RelationKind::Lover, b);
    let relations_before = relations(&net, a);

    net.transplant(a, b, false, SharingMode::Untethered).unwrap();
    assert!(!relations(&net, b).has_edge_to(b));
    net.transplant(b, a, false, SharingMode::Untethered).unwrap();

    let after = relations(&net, a);
    assert_eq!(after.direct, relations_before.direct);
    assert_eq!(after.kinds_to(b), vec![RelationKind::Lover]);
}

#[test]
fn tethered_skills_alias_until_replaced() {
    let mut net = network();
    let source = colonist(&mut net);
    let dest = colonist(&mut net);

    net.transplant(source, dest, false, SharingMode::Tethered).unwrap();
    let handle = net.world.get(source).unwrap().skills.clone().unwrap();
    handle.borrow_mut().set_level(SkillKind::Medicine, 15);
    assert_eq!(skills(&net, dest).level(SkillKind::Medicine), 15);

    net.transplant(source, dest, false, SharingMode::Untethered).unwrap();
    handle.borrow_mut().set_level(SkillKind::Medicine, 2);
    assert_eq!(skills(&net, dest).level(SkillKind::Medicine), 15);
    assert!(!Rc::ptr_eq(
        &handle,
        net.world.get(dest).unwrap().skills.as_ref().unwrap()
    ));
}

#[test]
fn relation_duplication_visits_third_parties_once() {
    let mut net = network();
    let source = colonist(&mut net);
    let dest = colonist(&mut net);
    let x = colonist(&mut net);
    let y = colonist(&mut net);
    relate(&net, source, RelationKind::Spouse, x);
    relate(&net, source, RelationKind::Parent, y);
    relate(&net, x, RelationKind::Spouse, source);

    let checked =
        duplicate_relations(&mut net.world, source, dest, SharingMode::Untethered).unwrap();
    assert_eq!(checked, [x, y].into());

    let copied = relations(&net, dest);
    assert_eq!(copied.kinds_to(x), vec![RelationKind::Spouse]);
    assert_eq!(copied.kinds_to(y), vec![RelationKind::Parent]);
    assert_eq!(relations(&net, x).kinds_to(dest), vec![RelationKind::Spouse]);
}

#[test]
fn death_transplant_severs_old_identity() {
    let mut net = network();
    let source = colonist(&mut net);
    let dest = colonist(&mut net);
    let widow = colonist(&mut net);
    relate(&net, dest, RelationKind::Spouse, widow);
    relate(&net, widow, RelationKind::Spouse, dest);

    net.transplant(source, dest, true, SharingMode::Untethered).unwrap();
    assert!(!relations(&net, widow).has_edge_to(dest));
    assert!(!relations(&net, dest).has_edge_to(widow));
    assert!(memories(&net, widow)
        .iter()
        .any(|m| m.thought == ThoughtKind::KinDied && m.other == Some(dest)));
    assert_eq!(net.collaborators.killed, vec![dest]);
}

// =============================================================================
// Permutation
// =============================================================================

#[test]
fn double_permutation_restores_both_minds() {
    let mut net = network();
    let a = colonist(&mut net);
    let b = colonist(&mut net);
    let x = colonist(&mut net);
    relate(&net, a, RelationKind::Spouse, x);
    relate(&net, x, RelationKind::Spouse, a);
    relate(&net, b, RelationKind::Lover, a);
    net.world
        .get_mut(b)
        .unwrap()
        .needs
        .as_mut()
        .unwrap()
        .mood
        .as_mut()
        .unwrap()
        .try_gain_memory(MemoryEntry::new(ThoughtKind::Chitchat, Some(x), 3));

    let snapshot = |net: &MindNetwork<RecordingCollaborators>, id| {
        (
            net.world.get(id).unwrap().name.clone(),
            skills(net, id),
            story(net, id),
            relations(net, id),
            memories(net, id),
        )
    };
    let a_before = snapshot(&net, a);
    let b_before = snapshot(&net, b);
    let x_relations = relations(&net, x);

    net.permute(a, b).unwrap();
    assert_eq!(net.world.get(a).unwrap().name, b_before.0);
    net.permute(a, b).unwrap();

    assert_eq!(snapshot(&net, a), a_before);
    assert_eq!(snapshot(&net, b), b_before);
    assert_eq!(relations(&net, x), x_relations);
    assert_eq!(net.world.len(), 3);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn blank_is_the_same_instance_every_time() {
    let mut net = network();
    let first = net.get_blank();
    for _ in 0..5 {
        assert_eq!(net.get_blank(), first);
    }
    assert!(net.world.contains(first));
}

#[test]
fn depersonalized_cloud_identity_is_unreachable() {
    let mut net = network();
    let cloud = colonist(&mut net);
    net.pool.add_cloud(cloud);
    net.pool.connect(cloud);

    net.depersonalize(cloud, true).unwrap();
    assert!(!net.pool.is_connected(cloud));
    assert_eq!(net.pool.occupants().count(), 0);
    assert!(net.world.get(cloud).is_none());
    let other = colonist(&mut net);
    assert!(net.transplant(cloud, other, false, SharingMode::Untethered).is_none());
}

#[test]
fn jammer_beats_receiver() {
    let mut net = network();
    let proxy = colonist(&mut net);
    net.pool.connect(proxy);
    net.make_proxy(proxy, None, None, false);
    assert!(net.is_valid_transplant_target(proxy));

    net.world
        .get_mut(proxy)
        .unwrap()
        .augmentations
        .push(Augmentation::new(AugmentationDef::SignalJammer, Some(BodyPart::Head)));
    assert!(!net.is_valid_transplant_target(proxy));
}

// =============================================================================
// Capacity pool
// =============================================================================

#[test]
fn node_power_changes_capacity() {
    let mut net = network();
    let mut n1 = NetworkNode::unpowered(1);
    let mut n2 = NetworkNode::powered(2);

    net.pool.handle_signal(&mut n1, NodeSignal::Spawned { respawning_after_load: false });
    assert_eq!(net.pool.total_capacity(), 1);

    net.pool.handle_signal(&mut n2, NodeSignal::Spawned { respawning_after_load: false });
    net.pool.handle_signal(&mut n2, NodeSignal::PowerTurnedOn);
    assert_eq!(net.pool.total_capacity(), 3);

    net.pool.handle_signal(&mut n2, NodeSignal::PowerTurnedOff);
    assert_eq!(net.pool.total_capacity(), 1);
    assert_eq!(net.pool.summary().to_string(), "0/1");
}
