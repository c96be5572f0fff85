//! Kinship resolution.
//!
//! Given two people, [`KinshipResolver`] finds the shortest chain of
//! relationships between them and turns it into the Vietnamese term the first
//! person uses to address the second.
//!
//! # Overview
//!
//! 1. [`path`] finds the fewest-hop path through the undirected view of all
//!    relationships.
//! 2. [`step`] labels each hop `Up`, `Down` or `Spouse`.
//! 3. The generation delta (ups minus downs) and the step pattern select a
//!    [`KinshipTerm`]; [`Seniority`] and [`Side`] refine it.
//!
//! # Example
//!
//! ```
//! # use kinfolk::kinship::KinshipResolver;
//! # use kinfolk::model::{FamilySnapshot, Gender, Person, RelationKind, Relationship};
//! # use kinfolk::structure::FamilyGraph;
//! # use kinfolk::identifier::Id;
//! let snapshot = FamilySnapshot::new(
//!     vec![
//!         Person::new("father", "Hà Minh Tài", Gender::Male),
//!         Person::new("elder", "Hà Minh Thanh", Gender::Male).with_order(1),
//!         Person::new("younger", "Hà Minh Mẫn", Gender::Male).with_order(2),
//!     ],
//!     vec![
//!         Relationship::new("r1", "father", "elder", RelationKind::Blood),
//!         Relationship::new("r2", "father", "younger", RelationKind::Blood),
//!     ],
//! );
//! let graph = FamilyGraph::new(&snapshot);
//! let resolver = KinshipResolver::new(&graph);
//!
//! assert_eq!(resolver.term(Id::new("younger"), Id::new("elder")).to_string(), "Anh");
//! assert_eq!(resolver.term(Id::new("elder"), Id::new("younger")).to_string(), "Em");
//! assert_eq!(resolver.term(Id::new("elder"), Id::new("father")).to_string(), "Cha");
//! ```

mod classify;
mod path;
mod route;
mod seniority;
mod step;
mod term;

use log::debug;

use kinfolk_core::identifier::Id;

use crate::structure::FamilyGraph;

pub use path::RelationshipNetwork;
pub use route::{RouteStep, WaypointRoute};
pub use seniority::Seniority;
pub use step::{Hop, Step};
pub use term::{KinshipTerm, Side};

/// Answers kinship queries over one family graph.
///
/// The undirected relationship network is built once in [`new`](Self::new)
/// and reused by every query.
#[derive(Debug)]
pub struct KinshipResolver<'g, 'a> {
    graph: &'g FamilyGraph<'a>,
    network: RelationshipNetwork,
}

impl<'g, 'a> KinshipResolver<'g, 'a> {
    pub fn new(graph: &'g FamilyGraph<'a>) -> Self {
        let network = RelationshipNetwork::new(graph.relationships());
        debug!(people = graph.len(); "Built relationship network");
        Self { graph, network }
    }

    /// The fewest-hop path from `start` to `end`, both inclusive.
    ///
    /// Empty if no path exists.
    pub fn path(&self, start: Id, end: Id) -> Vec<Id> {
        self.network.shortest_path(start, end)
    }

    /// Labels each hop of `path`, skipping pairs without a relationship record.
    pub fn hops(&self, path: &[Id]) -> Vec<Hop> {
        step::hops(self.graph, path)
    }

    /// What `base` calls `target`.
    ///
    /// Unknown people and unreachable pairs yield [`KinshipTerm::Relative`].
    pub fn term(&self, base: Id, target: Id) -> KinshipTerm {
        let path = self.path(base, target);
        let term = classify::classify(self.graph, base, target, &path);
        debug!(base:% = base, target:% = target, hops = path.len().saturating_sub(1), term:% = term; "Resolved kinship");
        term
    }

    /// Narrates `path` one hop at a time.
    pub fn describe(&self, path: &[Id]) -> Vec<RouteStep> {
        route::describe(self.graph, path)
    }

    /// Joins the shortest paths between consecutive `waypoints`.
    ///
    /// Unreachable segments are recorded in [`WaypointRoute::gaps`] and the
    /// route continues from the next waypoint.
    pub fn waypoint_route(&self, waypoints: &[Id]) -> WaypointRoute {
        let mut route = WaypointRoute::default();
        if let [only] = waypoints {
            route.push_segment(&[*only]);
        }

        for pair in waypoints.windows(2) {
            let segment = self.path(pair[0], pair[1]);
            if segment.is_empty() {
                route.gaps.push((pair[0], pair[1]));
            } else {
                route.push_segment(&segment);
            }
        }

        debug!(
            waypoints = waypoints.len(),
            nodes = route.nodes.len(),
            gaps = route.gaps.len();
            "Built waypoint route"
        );
        route
    }
}
