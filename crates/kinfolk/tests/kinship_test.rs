//! Integration tests for kinship resolution through the public API.

use kinfolk::{
    identifier::Id,
    kinship::{KinshipResolver, KinshipTerm, Seniority, Side, Step},
    model::{FamilySnapshot, Gender, Person, RelationKind, Relationship},
    structure::FamilyGraph,
};

const DEMO: &str = include_str!("../../../demos/ha_family.json");

fn demo() -> FamilySnapshot {
    serde_json::from_str(DEMO).expect("Demo snapshot should parse")
}

fn blood(source: &str, target: &str) -> Relationship {
    Relationship::new(format!("{source}>{target}").as_str(), source, target, RelationKind::Blood)
}

fn spouse(a: &str, b: &str) -> Relationship {
    Relationship::new(format!("{a}+{b}").as_str(), a, b, RelationKind::Spouse)
}

fn term(snapshot: &FamilySnapshot, base: &str, target: &str) -> KinshipTerm {
    let graph = FamilyGraph::new(snapshot);
    KinshipResolver::new(&graph).term(Id::new(base), Id::new(target))
}

#[test]
fn test_parent_and_child() {
    let snapshot = FamilySnapshot::new(
        vec![
            Person::new("G1", "G1", Gender::Male),
            Person::new("G2", "G2", Gender::Female),
        ],
        vec![blood("G1", "G2")],
    );

    assert_eq!(
        term(&snapshot, "G1", "G2"),
        KinshipTerm::Child {
            gender: Gender::Female
        }
    );
    assert_eq!(
        term(&snapshot, "G2", "G1"),
        KinshipTerm::Parent {
            gender: Gender::Male
        }
    );
}

#[test]
fn test_siblings_by_order() {
    let snapshot = FamilySnapshot::new(
        vec![
            Person::new("G1", "G1", Gender::Male),
            Person::new("A", "A", Gender::Male).with_order(1),
            Person::new("B", "B", Gender::Male).with_order(2),
        ],
        vec![blood("G1", "A"), blood("G1", "B")],
    );

    let younger = term(&snapshot, "A", "B");
    let elder = term(&snapshot, "B", "A");
    assert!(younger.is_younger_sibling());
    assert!(elder.is_elder_sibling());
    assert_eq!(younger.to_string(), "Em");
    assert_eq!(elder.to_string(), "Anh");
}

#[test]
fn test_cousins_follow_parent_seniority() {
    let snapshot = FamilySnapshot::new(
        vec![
            Person::new("G1", "G1", Gender::Male),
            Person::new("P1", "P1", Gender::Male).with_order(1),
            Person::new("P2", "P2", Gender::Male).with_order(2),
            // The cousins' own ranks point the other way.
            Person::new("C1", "C1", Gender::Female).with_order(2),
            Person::new("C2", "C2", Gender::Male).with_order(1),
        ],
        vec![
            blood("G1", "P1"),
            blood("G1", "P2"),
            blood("P1", "C1"),
            blood("P2", "C2"),
        ],
    );

    assert_eq!(
        term(&snapshot, "C2", "C1"),
        KinshipTerm::Cousin {
            seniority: Seniority::Elder,
            gender: Gender::Female
        }
    );
    assert_eq!(term(&snapshot, "C1", "C2").to_string(), "Em họ");
}

#[test]
fn test_self_and_unreachable() {
    let snapshot = demo();
    assert_eq!(term(&snapshot, "chau-sau-1", "chau-sau-1"), KinshipTerm::Oneself);

    let mut disconnected = snapshot.clone();
    disconnected
        .people
        .push(Person::new("stranger", "Người lạ", Gender::Other));
    assert_eq!(term(&disconnected, "chau-sau-1", "stranger"), KinshipTerm::Relative);
}

#[test]
fn test_demo_family_terms() {
    let snapshot = demo();
    let graph = FamilyGraph::new(&snapshot);
    let resolver = KinshipResolver::new(&graph);
    let address = |target: &str| {
        resolver
            .term(Id::new("chau-sau-1"), Id::new(target))
            .to_string()
    };

    assert_eq!(address("ba-minh-trung"), "Cha");
    assert_eq!(address("me-van"), "Mẹ");
    assert_eq!(address("ong-noi"), "Ông nội");
    assert_eq!(address("ba-noi"), "Bà nội");
    assert_eq!(address("co-ong"), "Cụ ông");
    assert_eq!(address("co-ba"), "Cụ bà");
    assert_eq!(address("bac-nam"), "Bác");
    assert_eq!(address("co-tu"), "Bác");
    assert_eq!(address("chu-bay"), "Chú");
    assert_eq!(address("vo-chu-bay"), "Thím");
    assert_eq!(address("chau-sau-2"), "Em");
    assert_eq!(address("chau-bay-1"), "Em họ");
    assert_eq!(address("chau-tu-2"), "Chị họ");

    let from = |base: &str, target: &str| {
        resolver.term(Id::new(base), Id::new(target)).to_string()
    };
    assert_eq!(from("me-van", "chau-sau-1"), "Con trai");
    assert_eq!(from("chau-ba-1", "chong-co-ba"), "Cha");
    assert_eq!(from("ba-noi", "chau-sau-1"), "Cháu nội");
    assert_eq!(from("ong-noi", "chau-tu-1"), "Cháu ngoại");
    assert_eq!(from("me-van", "ong-noi"), "Bố chồng");
    assert_eq!(from("vo-chu-bay", "ba-minh-trung"), "Anh chồng");
}

#[test]
fn test_demo_route() {
    let snapshot = demo();
    let graph = FamilyGraph::new(&snapshot);
    let resolver = KinshipResolver::new(&graph);

    let route = resolver.waypoint_route(&[Id::new("chau-sau-1"), Id::new("co-ong")]);
    assert!(route.is_complete());
    assert_eq!(
        route.endpoints(),
        Some((Id::new("chau-sau-1"), Id::new("co-ong")))
    );

    let steps = resolver.describe(&route.nodes);
    assert_eq!(steps.len(), 3);
    assert!(steps.iter().all(|step| step.step == Step::Up));
    assert_eq!(steps[0].to_string(), "Hà Minh Trung là cha của Hà Thanh Tú");
    assert_eq!(steps[2].to_string(), "Hà Văn Tải là cha của Hà Minh Tài");
}

/// Seven generations around `me`, children recorded under the father except
/// on the mother's side.
///
/// ```text
/// g1
/// └── g2
///     ├── gp (1) + gm (1) ── gmf ── gmb (2)
///     │   └── dad + mom (1) ── mgp ── mu (2)
///     │       └── me ── kid ── grandkid ── ggkid ── gggkid
///     └── gu (2)
/// ```
fn seven_generations() -> FamilySnapshot {
    FamilySnapshot::new(
        vec![
            Person::new("g1", "g1", Gender::Male),
            Person::new("g2", "g2", Gender::Male),
            Person::new("gp", "gp", Gender::Male).with_order(1),
            Person::new("gu", "gu", Gender::Male).with_order(2),
            Person::new("gm", "gm", Gender::Female).with_order(1),
            Person::new("gmf", "gmf", Gender::Male),
            Person::new("gmb", "gmb", Gender::Male).with_order(2),
            Person::new("dad", "dad", Gender::Male),
            Person::new("mom", "mom", Gender::Female).with_order(1),
            Person::new("mgp", "mgp", Gender::Male),
            Person::new("mu", "mu", Gender::Male).with_order(2),
            Person::new("me", "me", Gender::Male),
            Person::new("kid", "kid", Gender::Male),
            Person::new("grandkid", "grandkid", Gender::Female),
            Person::new("ggkid", "ggkid", Gender::Male),
            Person::new("gggkid", "gggkid", Gender::Female),
        ],
        vec![
            blood("g1", "g2"),
            blood("g2", "gp"),
            blood("g2", "gu"),
            spouse("gp", "gm"),
            blood("gmf", "gm"),
            blood("gmf", "gmb"),
            blood("gp", "dad"),
            spouse("dad", "mom"),
            blood("mgp", "mom"),
            blood("mgp", "mu"),
            blood("dad", "me"),
            blood("me", "kid"),
            blood("kid", "grandkid"),
            blood("grandkid", "ggkid"),
            blood("ggkid", "gggkid"),
        ],
    )
}

#[test]
fn test_grandparent_siblings_follow_the_grandparent() {
    let snapshot = seven_generations();

    // Grandfather's younger brother.
    assert_eq!(
        term(&snapshot, "me", "gu"),
        KinshipTerm::GrandparentSibling {
            side: Side::Paternal,
            seniority: Seniority::Younger,
            gender: Gender::Male,
        }
    );
    assert_eq!(term(&snapshot, "me", "gu").to_string(), "Ông chú");

    // Grandmother's younger brother, reached through her spouse.
    assert_eq!(
        term(&snapshot, "me", "gmb"),
        KinshipTerm::GrandparentSibling {
            side: Side::Maternal,
            seniority: Seniority::Younger,
            gender: Gender::Male,
        }
    );
    assert_eq!(term(&snapshot, "me", "gmb").to_string(), "Ông cậu");
    assert_eq!(term(&snapshot, "me", "gm").to_string(), "Bà nội");
}

#[test]
fn test_grand_nephew() {
    let snapshot = seven_generations();

    assert_eq!(
        term(&snapshot, "gu", "me"),
        KinshipTerm::GrandNieceNephew {
            gender: Gender::Male
        }
    );
    assert_eq!(term(&snapshot, "gu", "me").to_string(), "Cháu");
}

#[test]
fn test_maternal_uncle() {
    let snapshot = seven_generations();

    assert_eq!(
        term(&snapshot, "me", "mu"),
        KinshipTerm::ParentSibling {
            side: Side::Maternal,
            seniority: Seniority::Younger,
            gender: Gender::Male,
        }
    );
    assert_eq!(term(&snapshot, "me", "mu").to_string(), "Cậu");
    assert_eq!(term(&snapshot, "mu", "me").to_string(), "Cháu trai");
}

#[test]
fn test_three_generations_apart() {
    let snapshot = seven_generations();

    assert_eq!(term(&snapshot, "me", "g2").to_string(), "Cụ ông");
    assert_eq!(term(&snapshot, "me", "ggkid").to_string(), "Chắt");
    assert_eq!(
        term(&snapshot, "ggkid", "me"),
        KinshipTerm::GreatGrandparent {
            gender: Gender::Male
        }
    );
}

#[test]
fn test_four_or_more_generations_apart() {
    let snapshot = seven_generations();

    assert_eq!(term(&snapshot, "me", "g1"), KinshipTerm::ElderGeneration);
    assert_eq!(term(&snapshot, "me", "g1").to_string(), "Tiền bối");
    assert_eq!(term(&snapshot, "me", "gggkid"), KinshipTerm::YoungerGeneration);
    assert_eq!(term(&snapshot, "me", "gggkid").to_string(), "Hậu duệ");
    assert_eq!(term(&snapshot, "gggkid", "g1"), KinshipTerm::ElderGeneration);
}
