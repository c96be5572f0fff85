//! Graph structures derived from a family snapshot.
//!
//! A [`FamilySnapshot`](kinfolk_core::model::FamilySnapshot) is a flat list of
//! people and relationships. Everything in this module indexes that list once
//! so the layout and kinship engines can walk it cheaply:
//!
//! - [`FamilyGraph`]: parents, children and spouses per person
//! - [`Generations`]: the derived generation level of every person
//! - [`VisibleFamily`]: the subset shown under a generation cap
//! - [`lineage`]: ancestors and descendants of one person
//! - [`FamilyStats`]: head counts for a snapshot

mod family_graph;
mod generations;
mod lineage;
mod stats;
mod visibility;

pub use family_graph::{FamilyGraph, StructureError};
pub use generations::Generations;
pub use lineage::lineage;
pub use stats::FamilyStats;
pub use visibility::VisibleFamily;
