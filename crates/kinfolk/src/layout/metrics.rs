//! Subtree footprints.
//!
//! A *block* is a person drawn together with their first spouse. The children
//! row under a block is the union of both partners' children, so step-children
//! share one sibling row. A block's footprint is the breadth needed to draw it
//! and everything below it without overlap:
//!
//! ```text
//! footprint = max(block, sum(child footprints) + sibling_gap * (n - 1))
//! ```

use std::collections::HashMap;

use log::trace;

use kinfolk_core::identifier::Id;

use crate::structure::{FamilyGraph, StructureError};

use super::{Spacing, ordering};

/// Per-invocation footprint memo over one visible graph.
pub(super) struct Metrics<'g, 'a> {
    graph: &'g FamilyGraph<'a>,
    spacing: Spacing,
    footprints: HashMap<Id, f32>,
    rows: HashMap<Id, Vec<Id>>,
    visiting: Vec<Id>,
}

impl<'g, 'a> Metrics<'g, 'a> {
    pub(super) fn new(graph: &'g FamilyGraph<'a>, spacing: Spacing) -> Self {
        Self {
            graph,
            spacing,
            footprints: HashMap::new(),
            rows: HashMap::new(),
            visiting: Vec::new(),
        }
    }

    /// The spouse drawn in the same block as `id`.
    pub(super) fn partner(&self, id: Id) -> Option<Id> {
        self.graph.spouses(id).first().copied()
    }

    /// Children of `id` and of its partner, deduplicated and in sibling order.
    pub(super) fn children(&mut self, id: Id) -> Vec<Id> {
        if let Some(row) = self.rows.get(&id) {
            return row.clone();
        }

        let mut row: Vec<Id> = self.graph.children(id).to_vec();
        if let Some(partner) = self.partner(id) {
            for &child in self.graph.children(partner) {
                if !row.contains(&child) {
                    row.push(child);
                }
            }
        }
        ordering::sort_siblings(self.graph, &mut row);

        self.rows.insert(id, row.clone());
        row
    }

    /// Breadth of the block of `id` alone.
    pub(super) fn block(&self, id: Id) -> f32 {
        self.spacing.block(self.partner(id).is_some())
    }

    /// Footprint of the block of `id` and all its descendants.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::Cycle`] if the block is reached again while
    /// its own descendants are being measured.
    pub(super) fn footprint(&mut self, id: Id) -> Result<f32, StructureError> {
        if let Some(&width) = self.footprints.get(&id) {
            return Ok(width);
        }
        if let Some(from) = self.visiting.iter().position(|visiting| *visiting == id) {
            return Err(StructureError::Cycle(self.visiting[from..].to_vec()));
        }

        self.visiting.push(id);
        let children = self.children(id);
        let row = self.row_width(&children);
        self.visiting.pop();
        let row = row?;

        let width = self.block(id).max(row);
        trace!(id:% = id, width; "Measured footprint");
        self.footprints.insert(id, width);
        Ok(width)
    }

    /// Total breadth of a children row, gaps included.
    pub(super) fn row_width(&mut self, children: &[Id]) -> Result<f32, StructureError> {
        let mut total = 0.0;
        for (index, &child) in children.iter().enumerate() {
            if index > 0 {
                total += self.spacing.sibling_gap;
            }
            total += self.footprint(child)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use kinfolk_core::model::{FamilySnapshot, Gender, Person, RelationKind, Relationship};

    use super::*;
    use crate::config::LayoutConfig;

    fn spacing() -> Spacing {
        Spacing::new(&LayoutConfig::default())
    }

    fn person(id: &str, order: u32) -> Person {
        Person::new(id, id, Gender::Other).with_order(order)
    }

    fn rel(id: &str, source: &str, target: &str, kind: RelationKind) -> Relationship {
        Relationship::new(id, source, target, kind)
    }

    #[test]
    fn test_single_and_paired_blocks() {
        let snapshot = FamilySnapshot::new(
            vec![person("a", 1), person("b", 1), person("c", 1)],
            vec![rel("m", "a", "b", RelationKind::Spouse)],
        );
        let graph = FamilyGraph::new(&snapshot);
        let mut metrics = Metrics::new(&graph, spacing());

        assert_approx_eq!(f32, metrics.footprint(Id::new("a")).unwrap(), 320.0);
        assert_approx_eq!(f32, metrics.footprint(Id::new("c")).unwrap(), 140.0);
    }

    #[test]
    fn test_children_rows_merge_both_partners() {
        let snapshot = FamilySnapshot::new(
            vec![
                person("h", 1),
                person("w", 1),
                person("c2", 2),
                person("c1", 1),
                person("c3", 3),
            ],
            vec![
                rel("m", "h", "w", RelationKind::Spouse),
                rel("r1", "h", "c2", RelationKind::Blood),
                rel("r2", "w", "c1", RelationKind::Blood),
                rel("r3", "h", "c3", RelationKind::Blood),
                rel("r4", "w", "c3", RelationKind::Blood),
            ],
        );
        let graph = FamilyGraph::new(&snapshot);
        let mut metrics = Metrics::new(&graph, spacing());

        assert_eq!(
            metrics.children(Id::new("h")),
            vec![Id::new("c1"), Id::new("c2"), Id::new("c3")]
        );
        // 3 * 140 + 2 * 100
        assert_approx_eq!(f32, metrics.footprint(Id::new("h")).unwrap(), 620.0);
    }

    #[test]
    fn test_wide_block_over_narrow_row() {
        let snapshot = FamilySnapshot::new(
            vec![person("h", 1), person("w", 1), person("only", 1)],
            vec![
                rel("m", "h", "w", RelationKind::Spouse),
                rel("r", "h", "only", RelationKind::Blood),
            ],
        );
        let graph = FamilyGraph::new(&snapshot);
        let mut metrics = Metrics::new(&graph, spacing());

        assert_approx_eq!(f32, metrics.footprint(Id::new("h")).unwrap(), 320.0);
        assert_approx_eq!(f32, metrics.row_width(&[Id::new("only")]).unwrap(), 140.0);
    }

    #[test]
    fn test_spouse_child_loop_is_reported() {
        // A parent married to their own child pulls the child's row back to the parent.
        let snapshot = FamilySnapshot::new(
            vec![person("p", 1), person("c", 1)],
            vec![
                rel("r", "p", "c", RelationKind::Blood),
                rel("m", "c", "p", RelationKind::Spouse),
            ],
        );
        let graph = FamilyGraph::new(&snapshot);
        let mut metrics = Metrics::new(&graph, spacing());

        let err = metrics.footprint(Id::new("p")).unwrap_err();
        assert!(matches!(err, StructureError::Cycle(_)));
    }
}
