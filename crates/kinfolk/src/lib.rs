//! Kinfolk - family tree layout and Vietnamese kinship resolution.
//!
//! Given a [`FamilySnapshot`](model::FamilySnapshot) of people and
//! relationships, Kinfolk computes a deterministic two-dimensional tree
//! layout (generations on one axis, sibling blocks on the other) and answers
//! "what does A call B" along the shortest chain of relationships.

pub mod config;
pub mod kinship;
pub mod layout;
pub mod store;
pub mod structure;

mod error;

pub use kinfolk_core::{color, date, geometry, identifier, model};

pub use error::KinfolkError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use config::AppConfig;
use kinship::KinshipResolver;
use layout::{LayoutEngine, TreeLayout};
use model::FamilySnapshot;
use structure::{FamilyGraph, FamilyStats, Generations, VisibleFamily};

/// Reads a snapshot JSON file.
///
/// # Errors
///
/// Returns [`KinfolkError::Io`] if the file cannot be read and
/// [`KinfolkError::Json`] if it is not a valid snapshot.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<FamilySnapshot, KinfolkError> {
    let content = fs::read_to_string(path.as_ref())?;
    let snapshot: FamilySnapshot = serde_json::from_str(&content)?;
    debug!(
        people = snapshot.people.len(),
        relationships = snapshot.relationships.len();
        "Snapshot read"
    );
    Ok(snapshot)
}

/// Entry point for laying out and querying a family.
///
/// # Examples
///
/// ```
/// use kinfolk::{FamilyTree, config::AppConfig, structure::FamilyGraph};
/// use kinfolk::identifier::Id;
/// use kinfolk::model::{FamilySnapshot, Gender, Person, RelationKind, Relationship};
///
/// let snapshot = FamilySnapshot::new(
///     vec![
///         Person::new("dad", "Hà Minh Trung", Gender::Male),
///         Person::new("son", "Hà Thanh Tú", Gender::Male),
///     ],
///     vec![Relationship::new("r-1", "dad", "son", RelationKind::Blood)],
/// );
///
/// let tree = FamilyTree::new(AppConfig::default());
/// let layout = tree.layout(&snapshot, None).expect("acyclic family");
/// assert_eq!(layout.nodes.len(), 2);
///
/// let graph = FamilyGraph::new(&snapshot);
/// let resolver = tree.resolver(&graph);
/// assert_eq!(resolver.term(Id::new("son"), Id::new("dad")).to_string(), "Cha");
/// ```
#[derive(Debug, Default)]
pub struct FamilyTree {
    config: AppConfig,
}

impl FamilyTree {
    /// Create a new family tree with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Lays out everyone at or above `max_visible_level`.
    ///
    /// `None` shows every generation.
    ///
    /// # Errors
    ///
    /// Returns [`KinfolkError::Config`] for unparseable style colors and
    /// [`KinfolkError::Structure`] if parental edges form a cycle.
    pub fn layout(
        &self,
        snapshot: &FamilySnapshot,
        max_visible_level: Option<u32>,
    ) -> Result<TreeLayout, KinfolkError> {
        info!(
            people = snapshot.people.len(),
            relationships = snapshot.relationships.len(),
            max_visible_level:? = max_visible_level;
            "Building family tree"
        );

        let visible = VisibleFamily::filter(snapshot, max_visible_level);
        debug!(visible = visible.graph().len(), hidden = visible.hidden(); "Visibility applied");

        let engine = LayoutEngine::new(self.config.layout(), self.config.style())?;
        let layout = engine.layout(&visible)?;
        trace!(bounds:? = layout.bounds; "Layout bounds");

        Ok(layout)
    }

    /// Lays out using the generation cap from the configuration.
    pub fn layout_configured(&self, snapshot: &FamilySnapshot) -> Result<TreeLayout, KinfolkError> {
        self.layout(snapshot, self.config.layout().max_visible_level())
    }

    /// A kinship resolver over `graph`.
    ///
    /// Build `graph` from the full snapshot so paths may pass through people
    /// hidden from the layout.
    pub fn resolver<'g, 'a>(&self, graph: &'g FamilyGraph<'a>) -> KinshipResolver<'g, 'a> {
        info!(people = graph.len(); "Preparing kinship resolver");
        KinshipResolver::new(graph)
    }

    /// Headcount, deceased count and generation depth of `snapshot`.
    pub fn stats(&self, snapshot: &FamilySnapshot) -> FamilyStats {
        let graph = FamilyGraph::new(snapshot);
        let generations = Generations::assign(&graph);
        let stats = FamilyStats::collect(&graph, &generations);
        info!(
            total = stats.total,
            deceased = stats.deceased,
            generations = stats.generations;
            "Family statistics"
        );
        stats
    }
}
