//! Integration tests for the tree layout through the public API.

use float_cmp::assert_approx_eq;

use kinfolk::{
    FamilyTree, KinfolkError,
    config::{AppConfig, LayoutConfig, StyleConfig},
    identifier::Id,
    layout::{LayoutDirection, LayoutWarning, TreeLayout},
    model::{FamilySnapshot, Gender, Person, RelationKind, Relationship},
};

fn person(id: &str) -> Person {
    Person::new(id, id, Gender::Male)
}

fn blood(source: &str, target: &str) -> Relationship {
    Relationship::new(format!("{source}>{target}").as_str(), source, target, RelationKind::Blood)
}

fn spouse(a: &str, b: &str) -> Relationship {
    Relationship::new(format!("{a}+{b}").as_str(), a, b, RelationKind::Spouse)
}

fn layout(snapshot: &FamilySnapshot) -> TreeLayout {
    FamilyTree::default()
        .layout(snapshot, None)
        .expect("Failed to lay out family")
}

fn center_x(layout: &TreeLayout, id: &str) -> f32 {
    layout
        .node(Id::new(id))
        .map(|node| node.bounds().center().x())
        .expect("Person should be placed")
}

#[test]
fn test_spouse_pair_is_one_centered_block() {
    let snapshot = FamilySnapshot::new(
        vec![person("h"), Person::new("w", "w", Gender::Female)],
        vec![spouse("h", "w")],
    );
    let layout = layout(&snapshot);

    let h = layout.node(Id::new("h")).unwrap().bounds();
    let w = layout.node(Id::new("w")).unwrap().bounds();

    assert_eq!(layout.node(Id::new("h")).unwrap().level, 1);
    assert_eq!(layout.node(Id::new("w")).unwrap().level, 1);
    assert_approx_eq!(f32, h.min_y(), w.min_y());
    assert_approx_eq!(f32, w.min_x() - h.max_x(), 40.0);
    assert_approx_eq!(f32, (h.min_x() + w.max_x()) / 2.0, 160.0);
    assert!(layout.warnings.is_empty());

    let edge = &layout.edges[0];
    assert!(edge.is_spouse);
    assert_eq!(edge.style.dash(), Some("6 4"));
}

#[test]
fn test_sibling_subtrees_do_not_overlap() {
    let snapshot = FamilySnapshot::new(
        vec![
            person("g1"),
            person("a").with_order(1),
            person("b").with_order(2),
            person("a1").with_order(1),
            person("a2").with_order(2),
        ],
        vec![
            blood("g1", "a"),
            blood("g1", "b"),
            blood("a", "a1"),
            blood("a", "a2"),
        ],
    );
    let layout = layout(&snapshot);

    // Subtree of `a` is 140 + 100 + 140 wide, `b` is a single node.
    let (w1, w2) = (380.0, 140.0);
    let distance = center_x(&layout, "b") - center_x(&layout, "a");
    assert!(distance >= (w1 + w2) / 2.0 + 100.0 - 0.001);

    // Parents sit centered over their children.
    let children_mid = (center_x(&layout, "a1") + center_x(&layout, "a2")) / 2.0;
    assert_approx_eq!(f32, center_x(&layout, "a"), children_mid);
    assert_approx_eq!(f32, layout.node(Id::new("a1")).unwrap().position.y(), 600.0);
}

#[test]
fn test_children_recorded_under_either_partner_share_one_row() {
    let snapshot = FamilySnapshot::new(
        vec![
            person("dad"),
            Person::new("mom", "mom", Gender::Female),
            person("first").with_order(1),
            person("second").with_order(2),
        ],
        vec![
            spouse("dad", "mom"),
            blood("dad", "first"),
            blood("mom", "second"),
        ],
    );
    let layout = layout(&snapshot);

    let couple_mid = (center_x(&layout, "dad") + center_x(&layout, "mom")) / 2.0;
    let children_mid = (center_x(&layout, "first") + center_x(&layout, "second")) / 2.0;
    assert_approx_eq!(f32, couple_mid, children_mid);
    assert!(center_x(&layout, "first") < center_x(&layout, "second"));
}

#[test]
fn test_generation_cap() {
    let snapshot = FamilySnapshot::new(
        vec![
            person("l1"),
            person("l2"),
            person("l3"),
            person("l4"),
            Person::new("l2-wife", "l2-wife", Gender::Female),
        ],
        vec![
            blood("l1", "l2"),
            blood("l2", "l3"),
            blood("l3", "l4"),
            spouse("l2", "l2-wife"),
        ],
    );
    let layout = FamilyTree::default().layout(&snapshot, Some(2)).unwrap();

    let visible: Vec<Id> = layout.nodes.iter().map(|node| node.id).collect();
    assert_eq!(visible, ["l1", "l2", "l2-wife"].map(Id::new).to_vec());
    assert!(layout.nodes.iter().all(|node| node.level <= 2));
    assert!(
        layout
            .edges
            .iter()
            .all(|edge| visible.contains(&edge.source) && visible.contains(&edge.target))
    );
    assert_eq!(layout.edges.len(), 2);
    assert!(layout.has_more);
}

#[test]
fn test_unrelated_trees_are_separated_by_forest_gap() {
    let snapshot = FamilySnapshot::new(
        vec![person("a"), person("b")],
        Vec::new(),
    );
    let layout = layout(&snapshot);

    let a = layout.node(Id::new("a")).unwrap().bounds();
    let b = layout.node(Id::new("b")).unwrap().bounds();
    assert_approx_eq!(f32, b.min_x() - a.max_x(), 300.0);
    assert_approx_eq!(f32, layout.bounds.width(), 580.0);
}

#[test]
fn test_second_spouse_is_reported() {
    let snapshot = FamilySnapshot::new(
        vec![
            person("root"),
            person("h"),
            Person::new("w1", "w1", Gender::Female),
            Person::new("w2", "w2", Gender::Female),
        ],
        vec![blood("root", "h"), spouse("h", "w1"), spouse("h", "w2")],
    );
    let layout = layout(&snapshot);

    assert_eq!(layout.nodes.len(), 4);
    assert!(layout.warnings.iter().any(|warning| matches!(
        warning,
        LayoutWarning::DanglingSpouse { id, .. } if *id == "w2"
    )));
}

#[test]
fn test_child_of_second_spouse_is_a_stray_child() {
    let snapshot = FamilySnapshot::new(
        vec![
            person("root"),
            person("h"),
            Person::new("w1", "w1", Gender::Female),
            Person::new("w2", "w2", Gender::Female),
            person("kid"),
        ],
        vec![
            blood("root", "h"),
            spouse("h", "w1"),
            spouse("h", "w2"),
            blood("w2", "kid"),
        ],
    );
    let layout = layout(&snapshot);

    let w1 = layout.node(Id::new("w1")).unwrap().bounds();
    let w2 = layout.node(Id::new("w2")).unwrap().bounds();
    assert!(w2.max_x() <= w1.min_x() || w2.min_x() >= w1.max_x());

    let stray = layout
        .warnings
        .iter()
        .find(|warning| matches!(warning, LayoutWarning::StrayChild { .. }))
        .unwrap();
    assert_eq!(
        *stray,
        LayoutWarning::StrayChild {
            id: Id::new("kid"),
            parent: Id::new("w2"),
        }
    );
    assert!(stray.to_string().contains("parent `w2`"));
    assert_eq!(serde_json::to_value(stray).unwrap()["kind"], "stray-child");
    assert!(
        !layout
            .warnings
            .iter()
            .any(|warning| matches!(warning, LayoutWarning::Disconnected { .. }))
    );
}

#[test]
fn test_cyclic_blood_edges_fail() {
    let snapshot = FamilySnapshot::new(
        vec![person("a"), person("b")],
        vec![blood("a", "b"), blood("b", "a")],
    );
    let err = FamilyTree::default().layout(&snapshot, None).unwrap_err();
    assert!(matches!(err, KinfolkError::Structure(_)));
    assert!(err.to_string().contains("form a cycle"));
}

#[test]
fn test_left_to_right_swaps_axes() {
    let snapshot = FamilySnapshot::new(
        vec![person("p"), person("c")],
        vec![blood("p", "c")],
    );
    let config = AppConfig::new(
        LayoutConfig::default().with_direction(LayoutDirection::LeftToRight),
        StyleConfig::default(),
    );
    let layout = FamilyTree::new(config).layout(&snapshot, None).unwrap();

    let parent = layout.node(Id::new("p")).unwrap();
    let child = layout.node(Id::new("c")).unwrap();
    assert_approx_eq!(f32, child.position.x() - parent.position.x(), 300.0);
    assert_approx_eq!(f32, child.position.y(), parent.position.y());
}

#[test]
fn test_layout_serializes_to_json() {
    let snapshot = FamilySnapshot::new(
        vec![person("p"), person("c")],
        vec![blood("p", "c")],
    );
    let json = serde_json::to_value(layout(&snapshot)).unwrap();

    assert_eq!(json["direction"], "top-to-bottom");
    assert_eq!(json["nodes"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["edges"][0]["is_spouse"], false);
    assert_eq!(json["has_more"], false);
}
