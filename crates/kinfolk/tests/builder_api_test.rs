//! Integration tests for the FamilyTree API
//!
//! These tests verify that the public API works end to end over the demo
//! family and a store round trip.

use kinfolk::{
    FamilyTree,
    config::AppConfig,
    identifier::Id,
    model::{FamilySnapshot, Gender, Person},
    store::{FamilyStore, MemoryStore, NewLink},
    structure::{FamilyGraph, lineage},
};

const DEMO: &str = include_str!("../../../demos/ha_family.json");

fn demo() -> FamilySnapshot {
    serde_json::from_str(DEMO).expect("Demo snapshot should parse")
}

#[test]
fn test_demo_layout() {
    let snapshot = demo();
    let tree = FamilyTree::new(AppConfig::default());
    let layout = tree.layout(&snapshot, None).expect("Failed to lay out demo");

    assert_eq!(layout.nodes.len(), 26);
    assert_eq!(layout.edges.len(), 25);
    assert!(layout.warnings.is_empty());
    assert!(!layout.has_more);

    let deepest = layout.nodes.iter().map(|node| node.level).max();
    assert_eq!(deepest, Some(4));
}

#[test]
fn test_demo_layout_with_default_cap() {
    let snapshot = demo();
    let tree = FamilyTree::default();

    let layout = tree.layout(&snapshot, Some(3)).unwrap();
    assert_eq!(layout.nodes.len(), 15);
    assert!(layout.has_more);
}

#[test]
fn test_demo_stats() {
    let stats = FamilyTree::default().stats(&demo());
    assert_eq!(stats.total, 26);
    assert_eq!(stats.deceased, 4);
    assert_eq!(stats.generations, 4);
}

#[test]
fn test_demo_lineage() {
    let snapshot = demo();
    let graph = FamilyGraph::new(&snapshot);
    let line = lineage(&graph, Id::new("ba-minh-trung"));

    let ids: Vec<Id> = line.iter().copied().collect();
    assert_eq!(ids[0], "ba-minh-trung");
    assert!(line.contains(&Id::new("co-ong")));
    assert!(line.contains(&Id::new("chau-sau-3")));
    assert!(!line.contains(&Id::new("me-van")));
    assert!(!line.contains(&Id::new("chu-bay")));
    assert_eq!(line.len(), 6);
}

#[test]
fn test_store_then_layout() {
    let mut store = MemoryStore::new(demo());
    store
        .add_person(
            Person::new("chau-sau-1-con", "Hà Gia Bảo", Gender::Male).with_order(1),
            NewLink::ChildOf(Id::new("chau-sau-1")),
        )
        .unwrap();

    let snapshot = store.fetch_all().unwrap();
    let tree = FamilyTree::default();
    let layout = tree.layout(&snapshot, None).unwrap();
    let node = layout.node(Id::new("chau-sau-1-con")).unwrap();
    assert_eq!(node.level, 5);

    let graph = FamilyGraph::new(&snapshot);
    let resolver = tree.resolver(&graph);
    assert_eq!(
        resolver
            .term(Id::new("ong-noi"), Id::new("chau-sau-1-con"))
            .to_string(),
        "Chắt"
    );
}
