//! Progressive disclosure by generation.

use std::collections::HashSet;

use log::debug;

use kinfolk_core::{identifier::Id, model::FamilySnapshot};

use super::{FamilyGraph, Generations};

/// The part of a family shown under a generation cap.
///
/// Holds a [`FamilyGraph`] over the people whose level is within the cap and
/// the relationships whose two endpoints both survive, together with the
/// levels computed over the whole snapshot.
#[derive(Debug)]
pub struct VisibleFamily<'a> {
    graph: FamilyGraph<'a>,
    generations: Generations,
    hidden: usize,
}

impl<'a> VisibleFamily<'a> {
    /// Filters `snapshot` down to people at or above `max_visible_level`.
    ///
    /// `None` keeps everyone.
    pub fn filter(snapshot: &'a FamilySnapshot, max_visible_level: Option<u32>) -> Self {
        let full = FamilyGraph::new(snapshot);
        let generations = Generations::assign(&full);

        let within_cap = |level: Option<u32>| match (level, max_visible_level) {
            (Some(level), Some(cap)) => level <= cap,
            (Some(_), None) => true,
            (None, _) => false,
        };

        let people: Vec<_> = full
            .people()
            .filter(|person| within_cap(generations.level(person.id)))
            .collect();
        let hidden = full.len() - people.len();

        let kept: HashSet<Id> = people.iter().map(|person| person.id).collect();
        let relationships: Vec<_> = snapshot
            .relationships
            .iter()
            .filter(|rel| kept.contains(&rel.source) && kept.contains(&rel.target))
            .collect();

        debug!(
            visible = people.len(),
            hidden,
            relationships = relationships.len(),
            cap:? = max_visible_level;
            "Filtered visible family"
        );

        let graph = FamilyGraph::from_parts(people, relationships);
        Self {
            graph,
            generations,
            hidden,
        }
    }

    /// Graph over the visible people and relationships.
    pub fn graph(&self) -> &FamilyGraph<'a> {
        &self.graph
    }

    /// Levels of every person in the snapshot, visible or not.
    pub fn generations(&self) -> &Generations {
        &self.generations
    }

    /// Number of people beyond the cap.
    pub fn hidden(&self) -> usize {
        self.hidden
    }

    /// Returns true if raising the cap would reveal more people.
    pub fn has_more(&self) -> bool {
        self.hidden > 0
    }
}
