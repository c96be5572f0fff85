//! Hop-by-hop route narration.

use std::fmt;

use serde::Serialize;

use kinfolk_core::{identifier::Id, model::Gender};

use crate::structure::FamilyGraph;

use super::step::{self, Step};

/// One narrated hop of a route: "`to` is the `term` of `from`".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStep {
    pub from: Id,
    pub to: Id,
    pub step: Step,
    pub from_name: String,
    pub to_name: String,
    pub to_gender: Gender,
}

impl RouteStep {
    /// The Vietnamese term for `to` as seen from `from`.
    pub fn term(&self) -> &'static str {
        match (self.step, self.to_gender) {
            (Step::Spouse, Gender::Male) => "chồng",
            (Step::Spouse, Gender::Female) => "vợ",
            (Step::Spouse, Gender::Other) => "vợ/chồng",
            (Step::Down, Gender::Male) => "con trai",
            (Step::Down, Gender::Female) => "con gái",
            (Step::Down, Gender::Other) => "con",
            (Step::Up, Gender::Male) => "cha",
            (Step::Up, Gender::Female) => "mẹ",
            (Step::Up, Gender::Other) => "cha/mẹ",
        }
    }
}

impl fmt::Display for RouteStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} là {} của {}", self.to_name, self.term(), self.from_name)
    }
}

/// Narrates each hop of `path`.
///
/// Hops whose endpoints are unknown people, or that have no relationship
/// record, are left out.
pub(super) fn describe(graph: &FamilyGraph<'_>, path: &[Id]) -> Vec<RouteStep> {
    step::hops(graph, path)
        .into_iter()
        .filter_map(|hop| {
            let from = graph.person(hop.from)?;
            let to = graph.person(hop.to)?;
            Some(RouteStep {
                from: hop.from,
                to: hop.to,
                step: hop.step,
                from_name: from.full_name.clone(),
                to_name: to.full_name.clone(),
                to_gender: to.gender,
            })
        })
        .collect()
}

/// A route stitched together from shortest paths between waypoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WaypointRoute {
    /// Every person on the route, junctions listed once.
    pub nodes: Vec<Id>,
    /// Consecutive waypoints with no path between them.
    pub gaps: Vec<(Id, Id)>,
}

impl WaypointRoute {
    /// Appends the path of one segment, merging the shared junction.
    pub(super) fn push_segment(&mut self, segment: &[Id]) {
        let skip = match (self.nodes.last(), segment.first()) {
            (Some(last), Some(first)) if last == first => 1,
            _ => 0,
        };
        self.nodes.extend_from_slice(&segment[skip..]);
    }

    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }

    /// First and last person on the route.
    pub fn endpoints(&self) -> Option<(Id, Id)> {
        Some((*self.nodes.first()?, *self.nodes.last()?))
    }
}
