//! Family tree layout.
//!
//! Turns a [`VisibleFamily`] into positioned nodes and renderable edges.
//!
//! # Pipeline Position
//!
//! ```text
//! FamilySnapshot
//!     ↓ structure
//! VisibleFamily (levels + visible subset)
//!     ↓ layout (this module)
//! TreeLayout
//! ```
//!
//! The engine is a purpose-built forest layout rather than a generic layered
//! graph layout. It works in two passes over each tree:
//!
//! 1. [`metrics`] computes, post-order, the footprint every person's block
//!    (the person plus their first spouse) needs together with all descendants.
//! 2. [`placement`] walks the same trees pre-order and centers each block over
//!    the combined children of both partners.
//!
//! Coordinates are computed along two abstract axes: the *breadth* axis on
//! which siblings spread, and the *generation* axis. [`LayoutDirection`] only
//! decides how those map onto x and y.
//!
//! # Submodules
//!
//! - [`ordering`] - Sibling ordering by birth rank and date
//! - [`metrics`] - Subtree footprints
//! - [`placement`] - Forest placement and orphan fallback
//! - [`edges`] - Edge anchors and styles

mod edges;
mod metrics;
pub mod ordering;
mod placement;

use std::{fmt, str::FromStr};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use kinfolk_core::{
    geometry::{Bounds, Point, Size},
    identifier::Id,
};

use crate::{
    config::{LayoutConfig, StyleConfig},
    error::KinfolkError,
    structure::VisibleFamily,
};

pub use edges::{Anchor, EdgeStyle, LayoutEdge};

/// Direction in which generations grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutDirection {
    /// Ancestors on top, descendants below, siblings left to right.
    #[default]
    #[serde(alias = "TB")]
    TopToBottom,
    /// Ancestors on the left, descendants to the right, siblings top to bottom.
    #[serde(alias = "LR")]
    LeftToRight,
}

impl LayoutDirection {
    /// Maps a point on the (breadth, generation) axes to layout coordinates.
    fn to_point(self, breadth: f32, generation: f32) -> Point {
        let point = Point::new(breadth, generation);
        match self {
            Self::TopToBottom => point,
            Self::LeftToRight => point.transpose(),
        }
    }
}

impl fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopToBottom => write!(f, "top-to-bottom"),
            Self::LeftToRight => write!(f, "left-to-right"),
        }
    }
}

impl FromStr for LayoutDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top-to-bottom" | "tb" => Ok(Self::TopToBottom),
            "left-to-right" | "lr" => Ok(Self::LeftToRight),
            other => Err(format!(
                "unknown layout direction `{other}`, expected `top-to-bottom` or `left-to-right`"
            )),
        }
    }
}

/// A person with its final position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedPerson {
    pub id: Id,
    pub name: String,
    pub level: u32,
    /// Top-left corner of the node.
    pub position: Point,
    pub size: Size,
}

impl PositionedPerson {
    pub fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position, self.size)
    }
}

/// Irregularities found while placing people outside the main tree walk.
///
/// The affected person still receives a best-effort position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum LayoutWarning {
    /// Placed beside an already placed spouse that did not take them into its block.
    DanglingSpouse { id: Id, spouse: Id },
    /// Recorded only under a parent that has no block of its own, such as a
    /// second spouse; appended as a standalone tree.
    StrayChild { id: Id, parent: Id },
    /// Not reachable from any tree root; appended as a standalone tree.
    Disconnected { id: Id },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingSpouse { id, spouse } => {
                write!(f, "`{id}` was placed next to spouse `{spouse}` outside its block")
            }
            Self::StrayChild { id, parent } => write!(
                f,
                "`{id}` was placed on its own because parent `{parent}` has no block to hold them"
            ),
            Self::Disconnected { id } => {
                write!(f, "`{id}` is not reachable from any root and was placed on its own")
            }
        }
    }
}

/// Result of laying out a visible family.
#[derive(Debug, Clone, Serialize)]
pub struct TreeLayout {
    pub direction: LayoutDirection,
    pub nodes: Vec<PositionedPerson>,
    pub edges: Vec<LayoutEdge>,
    pub bounds: Bounds,
    pub warnings: Vec<LayoutWarning>,
    /// True when people beyond the generation cap were left out.
    pub has_more: bool,
}

impl TreeLayout {
    /// Finds the node of a person.
    pub fn node(&self, id: Id) -> Option<&PositionedPerson> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

/// Distances used by the placement passes, already resolved for a direction.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spacing {
    /// Extent of one node along the breadth axis.
    breadth: f32,
    spouse_gap: f32,
    sibling_gap: f32,
    rank_separation: f32,
    forest_gap: f32,
}

impl Spacing {
    fn new(config: &LayoutConfig) -> Self {
        let breadth = match config.direction() {
            LayoutDirection::TopToBottom => config.node_width(),
            LayoutDirection::LeftToRight => config.node_height(),
        };
        Self {
            breadth,
            spouse_gap: config.spouse_gap(),
            sibling_gap: config.sibling_gap(),
            rank_separation: config.rank_separation(),
            forest_gap: config.forest_gap(),
        }
    }

    /// Breadth of a block, with or without a spouse.
    fn block(&self, paired: bool) -> f32 {
        if paired {
            2.0 * self.breadth + self.spouse_gap
        } else {
            self.breadth
        }
    }

    /// Generation-axis offset of a level, level 1 at 0.
    fn generation(&self, level: u32) -> f32 {
        level.saturating_sub(1) as f32 * self.rank_separation
    }
}

/// Lays out visible families as a forest of trees.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    direction: LayoutDirection,
    node_size: Size,
    spacing: Spacing,
    blood_style: EdgeStyle,
    spouse_style: EdgeStyle,
}

impl LayoutEngine {
    /// Creates an engine from layout and style settings.
    ///
    /// # Errors
    ///
    /// Returns [`KinfolkError::Config`] if an edge color cannot be parsed.
    pub fn new(layout: &LayoutConfig, style: &StyleConfig) -> Result<Self, KinfolkError> {
        let blood_style = EdgeStyle::new(
            style.blood_color().map_err(KinfolkError::Config)?,
            style.blood_width(),
            None,
        );
        let spouse_dash = Some(style.spouse_dash().to_string()).filter(|dash| !dash.is_empty());
        let spouse_style = EdgeStyle::new(
            style.spouse_color().map_err(KinfolkError::Config)?,
            style.spouse_width(),
            spouse_dash,
        );

        Ok(Self {
            direction: layout.direction(),
            node_size: Size::new(layout.node_width(), layout.node_height()),
            spacing: Spacing::new(layout),
            blood_style,
            spouse_style,
        })
    }

    pub fn direction(&self) -> LayoutDirection {
        self.direction
    }

    /// Positions every visible person and builds the edges between them.
    ///
    /// # Errors
    ///
    /// Returns [`KinfolkError::Structure`] if parent-child edges form a cycle.
    pub fn layout(&self, visible: &VisibleFamily<'_>) -> Result<TreeLayout, KinfolkError> {
        let graph = visible.graph();
        info!(
            people = graph.len(),
            direction:% = self.direction;
            "Laying out family tree"
        );

        graph.check_acyclic()?;

        let placed = placement::place_forest(graph, visible.generations(), self.spacing)?;
        debug!(placed = placed.positions.len(); "Placement finished");

        let nodes: Vec<PositionedPerson> = graph
            .people()
            .filter_map(|person| {
                let slot = placed.positions.get(&person.id)?;
                Some(PositionedPerson {
                    id: person.id,
                    name: person.full_name.clone(),
                    level: slot.level,
                    position: self.direction.to_point(slot.breadth, slot.generation),
                    size: self.node_size,
                })
            })
            .collect();

        let edges = edges::build(
            graph,
            &nodes,
            self.direction,
            &self.blood_style,
            &self.spouse_style,
        );

        let bounds = nodes
            .iter()
            .map(PositionedPerson::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default();

        for warning in &placed.warnings {
            warn!(warning:% = warning; "Best-effort placement");
        }
        info!(
            nodes = nodes.len(),
            edges = edges.len(),
            warnings = placed.warnings.len();
            "Layout calculated"
        );

        Ok(TreeLayout {
            direction: self.direction,
            nodes,
            edges,
            bounds,
            warnings: placed.warnings,
            has_more: visible.has_more(),
        })
    }
}
