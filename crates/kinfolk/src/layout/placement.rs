//! Forest placement.
//!
//! Trees are placed left to right along the breadth axis on a running cursor,
//! separated by the forest gap. Inside a tree each block is centered over its
//! children row, which starts half a row to the left of the block's center.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use kinfolk_core::identifier::Id;

use crate::structure::{FamilyGraph, Generations, StructureError};

use super::{LayoutWarning, Spacing, metrics::Metrics};

/// A person's slot on the abstract (breadth, generation) axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Slot {
    /// Leading edge on the breadth axis.
    pub breadth: f32,
    /// Leading edge on the generation axis.
    pub generation: f32,
    pub level: u32,
}

/// Output of [`place_forest`].
#[derive(Debug, Default)]
pub(super) struct Placed {
    pub positions: HashMap<Id, Slot>,
    pub warnings: Vec<LayoutWarning>,
}

struct Placer<'m, 'g, 'a> {
    graph: &'g FamilyGraph<'a>,
    generations: &'g Generations,
    spacing: Spacing,
    metrics: &'m mut Metrics<'g, 'a>,
    placed: Placed,
    processed: HashSet<Id>,
}

/// Places every person of `graph`.
///
/// Roots are people without parents in `graph` who did not marry into a
/// family; married-in people are drawn in their spouse's block instead. Roots
/// are visited by ascending level and then in graph order. Anyone left over
/// afterwards is placed by the orphan fallback and reported as a warning.
pub(super) fn place_forest(
    graph: &FamilyGraph<'_>,
    generations: &Generations,
    spacing: Spacing,
) -> Result<Placed, StructureError> {
    let mut metrics = Metrics::new(graph, spacing);
    let mut placer = Placer {
        graph,
        generations,
        spacing,
        metrics: &mut metrics,
        placed: Placed::default(),
        processed: HashSet::new(),
    };

    let mut roots: Vec<Id> = graph
        .roots()
        .filter(|id| !is_married_in(graph, *id))
        .collect();
    // Stable: equal levels keep graph order.
    roots.sort_by_key(|id| generations.level(*id).unwrap_or(1));
    debug!(roots = roots.len(); "Collected tree roots");

    let mut cursor = 0.0;
    for root in roots {
        if placer.processed.contains(&root) {
            continue;
        }
        let footprint = placer.metrics.footprint(root)?;
        placer.place(root, cursor)?;
        cursor += footprint + spacing.forest_gap;
    }

    placer.place_orphans(cursor)?;

    Ok(placer.placed)
}

/// A person without parents whose spouse has parents.
fn is_married_in(graph: &FamilyGraph<'_>, id: Id) -> bool {
    graph
        .spouses(id)
        .iter()
        .any(|spouse| !graph.parents(*spouse).is_empty())
}

impl Placer<'_, '_, '_> {
    fn level(&self, id: Id) -> u32 {
        self.generations.level(id).unwrap_or(1)
    }

    fn put(&mut self, id: Id, breadth: f32) {
        let level = self.level(id);
        let slot = Slot {
            breadth,
            generation: self.spacing.generation(level),
            level,
        };
        trace!(id:% = id, breadth, level; "Placed person");
        self.placed.positions.insert(id, slot);
        self.processed.insert(id);
    }

    /// Places the block of `id` and its descendants within the footprint that
    /// starts at `start`.
    fn place(&mut self, id: Id, start: f32) -> Result<(), StructureError> {
        if self.processed.contains(&id) {
            return Ok(());
        }

        let footprint = self.metrics.footprint(id)?;
        let center = start + footprint / 2.0;
        let breadth = self.spacing.breadth;
        let half_gap = self.spacing.spouse_gap / 2.0;

        match self.metrics.partner(id) {
            Some(partner) if !self.processed.contains(&partner) => {
                self.put(id, center - half_gap - breadth);
                self.put(partner, center + half_gap);
            }
            _ => self.put(id, center - breadth / 2.0),
        }

        let children = self.metrics.children(id);
        let row = self.metrics.row_width(&children)?;
        let mut cursor = center - row / 2.0;
        for child in children {
            let child_footprint = self.metrics.footprint(child)?;
            self.place(child, cursor)?;
            cursor += child_footprint + self.spacing.sibling_gap;
        }

        Ok(())
    }

    /// Leading edge for `id` next to a spouse at `spouse`.
    ///
    /// Tries the left then the right side, stepping one slot further out
    /// each round until neither overlaps anyone already on the generation.
    fn beside(&self, id: Id, spouse: f32) -> f32 {
        let level = self.level(id);
        let offset = self.spacing.breadth + self.spacing.spouse_gap;
        let is_free = |breadth: f32| {
            self.placed.positions.values().all(|slot| {
                slot.level != level || (slot.breadth - breadth).abs() >= self.spacing.breadth
            })
        };

        // Each placed slot blocks at most two candidates.
        for step in 1..=self.placed.positions.len() + 1 {
            let distance = offset * step as f32;
            if let Some(free) = [spouse - distance, spouse + distance]
                .into_iter()
                .find(|candidate| is_free(*candidate))
            {
                return free;
            }
        }
        spouse + offset
    }

    /// Best-effort positions for people the tree walk never reached.
    fn place_orphans(&mut self, mut cursor: f32) -> Result<(), StructureError> {
        let graph = self.graph;
        let orphans: Vec<Id> = graph
            .ids()
            .filter(|id| !self.processed.contains(id))
            .collect();

        for id in orphans {
            if self.processed.contains(&id) {
                continue;
            }

            let placed_spouse = graph
                .spouses(id)
                .iter()
                .copied()
                .find(|spouse| self.placed.positions.contains_key(spouse));

            match placed_spouse {
                Some(spouse) => {
                    let beside = self.beside(id, self.placed.positions[&spouse].breadth);
                    self.put(id, beside);
                    self.placed
                        .warnings
                        .push(LayoutWarning::DanglingSpouse { id, spouse });
                }
                None => {
                    let footprint = self.metrics.footprint(id)?;
                    self.place(id, cursor)?;
                    cursor += footprint + self.spacing.forest_gap;
                    let warning = match graph.parents(id).first() {
                        Some(&parent) => LayoutWarning::StrayChild { id, parent },
                        None => LayoutWarning::Disconnected { id },
                    };
                    self.placed.warnings.push(warning);
                }
            }
        }

        Ok(())
    }
}
