//! Generation level assignment.

use std::collections::{HashMap, VecDeque};

use log::{debug, trace};

use kinfolk_core::identifier::Id;

use super::FamilyGraph;

/// Generation level of every person in a [`FamilyGraph`].
///
/// Levels are derived by breadth-first traversal of each connected component,
/// moving to children at `L + 1`, to parents at `L - 1` and to spouses at `L`.
/// Each component is then shifted so its shallowest member sits at level 1,
/// so the minimum over the whole forest is also 1.
#[derive(Debug, Clone, Default)]
pub struct Generations {
    levels: HashMap<Id, u32>,
    max_level: u32,
}

impl Generations {
    /// Assigns a level to every person in `graph`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kinfolk::model::{FamilySnapshot, Gender, Person, RelationKind, Relationship};
    /// # use kinfolk::structure::{FamilyGraph, Generations};
    /// # use kinfolk::identifier::Id;
    /// let snapshot = FamilySnapshot::new(
    ///     vec![
    ///         Person::new("child", "Child", Gender::Male),
    ///         Person::new("parent", "Parent", Gender::Male),
    ///     ],
    ///     vec![Relationship::new("r1", "parent", "child", RelationKind::Blood)],
    /// );
    /// let graph = FamilyGraph::new(&snapshot);
    /// let generations = Generations::assign(&graph);
    ///
    /// assert_eq!(generations.level(Id::new("parent")), Some(1));
    /// assert_eq!(generations.level(Id::new("child")), Some(2));
    /// ```
    pub fn assign(graph: &FamilyGraph<'_>) -> Self {
        let mut levels: HashMap<Id, i64> = HashMap::with_capacity(graph.len());
        let mut normalized: HashMap<Id, u32> = HashMap::with_capacity(graph.len());
        let mut components = 0usize;

        for start in graph.ids() {
            if levels.contains_key(&start) {
                continue;
            }
            components += 1;

            let mut members = vec![start];
            let mut queue = VecDeque::from([start]);
            levels.insert(start, 0);

            while let Some(current) = queue.pop_front() {
                let level = levels[&current];

                let neighbours = graph
                    .children(current)
                    .iter()
                    .map(|id| (*id, level + 1))
                    .chain(graph.parents(current).iter().map(|id| (*id, level - 1)))
                    .chain(graph.spouses(current).iter().map(|id| (*id, level)));

                for (next, next_level) in neighbours {
                    if levels.contains_key(&next) {
                        continue;
                    }
                    trace!(id:% = next, level = next_level; "Reached person");
                    levels.insert(next, next_level);
                    members.push(next);
                    queue.push_back(next);
                }
            }

            let min = members.iter().map(|id| levels[id]).min().unwrap_or(0);
            for id in members {
                let shifted = levels[&id] - min + 1;
                normalized.insert(id, u32::try_from(shifted).unwrap_or(u32::MAX));
            }
        }

        let max_level = normalized.values().copied().max().unwrap_or(0);
        debug!(
            people = normalized.len(),
            components,
            max_level;
            "Assigned generation levels"
        );

        Self {
            levels: normalized,
            max_level,
        }
    }

    /// Returns the level of a person, or `None` if it was not in the graph.
    pub fn level(&self, id: Id) -> Option<u32> {
        self.levels.get(&id).copied()
    }

    /// Returns the deepest assigned level, or 0 for an empty graph.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Id, u32)> + '_ {
        self.levels.iter().map(|(id, level)| (*id, *level))
    }
}
