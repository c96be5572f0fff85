//! Shortest relationship paths.

use std::collections::{HashMap, VecDeque};

use log::trace;
use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::EdgeRef,
};

use kinfolk_core::{identifier::Id, model::Relationship};

/// Undirected view of every relationship, built once and queried many times.
///
/// Blood, adoption and spouse edges all count as one hop; direction is
/// discarded. Neighbours are explored in relationship order.
#[derive(Debug, Default)]
pub struct RelationshipNetwork {
    graph: UnGraph<Id, ()>,
    indices: HashMap<Id, NodeIndex>,
}

impl RelationshipNetwork {
    pub fn new<'a>(relationships: impl IntoIterator<Item = &'a Relationship>) -> Self {
        let mut network = Self::default();
        for rel in relationships {
            let source = network.index(rel.source);
            let target = network.index(rel.target);
            network.graph.add_edge(source, target, ());
        }
        network
    }

    fn index(&mut self, id: Id) -> NodeIndex {
        *self
            .indices
            .entry(id)
            .or_insert_with(|| self.graph.add_node(id))
    }

    /// Neighbours of `node` in the order their edges were added.
    fn neighbours(&self, node: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self
            .graph
            .edges(node)
            .map(|edge| {
                let other = if edge.source() == node {
                    edge.target()
                } else {
                    edge.source()
                };
                (edge.id(), other)
            })
            .collect();
        edges.sort_by_key(|(edge, _)| *edge);
        edges.into_iter().map(|(_, other)| other).collect()
    }

    /// Returns the fewest-hop path from `start` to `end`, both inclusive.
    ///
    /// `start == end` yields `[start]`. An unknown endpoint or an unreachable
    /// pair yields an empty path.
    pub fn shortest_path(&self, start: Id, end: Id) -> Vec<Id> {
        if start == end {
            return vec![start];
        }
        let (Some(&from), Some(&to)) = (self.indices.get(&start), self.indices.get(&end)) else {
            return Vec::new();
        };

        let mut previous: HashMap<NodeIndex, NodeIndex> = HashMap::new();
        let mut queue = VecDeque::from([from]);
        previous.insert(from, from);

        while let Some(current) = queue.pop_front() {
            if current == to {
                break;
            }
            for next in self.neighbours(current) {
                if previous.contains_key(&next) {
                    continue;
                }
                previous.insert(next, current);
                queue.push_back(next);
            }
        }

        if !previous.contains_key(&to) {
            trace!(start:% = start, end:% = end; "No path");
            return Vec::new();
        }

        let mut path = vec![self.graph[to]];
        let mut current = to;
        while current != from {
            current = previous[&current];
            path.push(self.graph[current]);
        }
        path.reverse();
        path
    }
}
