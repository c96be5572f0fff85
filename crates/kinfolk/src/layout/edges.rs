//! Renderable edges between positioned people.

use std::collections::HashMap;

use serde::Serialize;

use kinfolk_core::{
    color::Color,
    geometry::{Bounds, Point},
    identifier::Id,
    model::RelationKind,
};

use crate::structure::FamilyGraph;

use super::{LayoutDirection, PositionedPerson};

/// Side of a node an edge attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
}

impl Anchor {
    /// The midpoint of this side of `bounds`.
    pub fn point(self, bounds: Bounds) -> Point {
        let center = bounds.center();
        match self {
            Self::Top => center.with_y(bounds.min_y()),
            Self::Bottom => center.with_y(bounds.max_y()),
            Self::Left => center.with_x(bounds.min_x()),
            Self::Right => center.with_x(bounds.max_x()),
        }
    }
}

/// Stroke settings of an edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeStyle {
    color: Color,
    width: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    dash: Option<String>,
}

impl EdgeStyle {
    pub fn new(color: Color, width: f32, dash: Option<String>) -> Self {
        Self { color, width, dash }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// SVG-style dash array, `None` for a solid line.
    pub fn dash(&self) -> Option<&str> {
        self.dash.as_deref()
    }
}

/// An edge between two positioned people.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutEdge {
    pub id: Id,
    pub source: Id,
    pub target: Id,
    pub kind: RelationKind,
    pub is_spouse: bool,
    pub source_anchor: Anchor,
    pub target_anchor: Anchor,
    pub start: Point,
    pub end: Point,
    pub style: EdgeStyle,
}

/// Builds one edge per relationship whose endpoints were both positioned.
///
/// Parental edges leave the parent on the side facing the next generation.
/// Spouse edges join the facing sides of the two partners.
pub(super) fn build(
    graph: &FamilyGraph<'_>,
    nodes: &[PositionedPerson],
    direction: LayoutDirection,
    blood_style: &EdgeStyle,
    spouse_style: &EdgeStyle,
) -> Vec<LayoutEdge> {
    let bounds: HashMap<Id, Bounds> = nodes.iter().map(|node| (node.id, node.bounds())).collect();

    graph
        .relationships()
        .filter(|rel| rel.source != rel.target)
        .filter_map(|rel| {
            let source = *bounds.get(&rel.source)?;
            let target = *bounds.get(&rel.target)?;
            let is_spouse = rel.kind == RelationKind::Spouse;

            let (source_anchor, target_anchor) = match (direction, is_spouse) {
                (LayoutDirection::TopToBottom, false) => (Anchor::Bottom, Anchor::Top),
                (LayoutDirection::LeftToRight, false) => (Anchor::Right, Anchor::Left),
                (LayoutDirection::TopToBottom, true) if source.min_x() <= target.min_x() => {
                    (Anchor::Right, Anchor::Left)
                }
                (LayoutDirection::TopToBottom, true) => (Anchor::Left, Anchor::Right),
                (LayoutDirection::LeftToRight, true) if source.min_y() <= target.min_y() => {
                    (Anchor::Bottom, Anchor::Top)
                }
                (LayoutDirection::LeftToRight, true) => (Anchor::Top, Anchor::Bottom),
            };
            let style = if is_spouse { spouse_style } else { blood_style };

            Some(LayoutEdge {
                id: rel.id,
                source: rel.source,
                target: rel.target,
                kind: rel.kind,
                is_spouse,
                source_anchor,
                target_anchor,
                start: source_anchor.point(source),
                end: target_anchor.point(target),
                style: style.clone(),
            })
        })
        .collect()
}
