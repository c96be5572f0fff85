//! Head counts over a snapshot.

use serde::Serialize;

use super::{FamilyGraph, Generations};

/// Summary numbers shown next to a family tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FamilyStats {
    /// Number of distinct people.
    pub total: usize,
    /// Number of people recorded as no longer alive.
    pub deceased: usize,
    /// Number of generations, i.e. the deepest assigned level.
    pub generations: u32,
}

impl FamilyStats {
    pub fn collect(graph: &FamilyGraph<'_>, generations: &Generations) -> Self {
        Self {
            total: graph.len(),
            deceased: graph.people().filter(|person| !person.is_alive).count(),
            generations: generations.max_level(),
        }
    }
}
