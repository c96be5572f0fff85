//! Adjacency index over people and relationships.
//!
//! [`FamilyGraph`] borrows people and relationships from a snapshot and keeps,
//! per person:
//!
//! - parents and children (blood and adoption edges)
//! - spouses (symmetric)
//!
//! Relationships whose endpoints are not in the person set are kept for
//! [`FamilyGraph::relation_between`] lookups but contribute no adjacency.

use std::collections::HashMap;

use indexmap::IndexMap;
use log::debug;
use thiserror::Error;

use kinfolk_core::{
    identifier::Id,
    model::{FamilySnapshot, Person, RelationKind, Relationship},
};

/// Structural integrity problems found while walking the family graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// A chain of parent-to-child edges leads back to where it started.
    #[error(
        "parent-child relationships form a cycle: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(" -> ")
    )]
    Cycle(Vec<Id>),
}

/// Read-only adjacency index over a set of people.
#[derive(Debug)]
pub struct FamilyGraph<'a> {
    people: IndexMap<Id, &'a Person>,
    relationships: Vec<&'a Relationship>,
    parents: HashMap<Id, Vec<Id>>,
    children: HashMap<Id, Vec<Id>>,
    spouses: HashMap<Id, Vec<Id>>,
    pairs: HashMap<(Id, Id), usize>,
}

impl<'a> FamilyGraph<'a> {
    /// Indexes every person and relationship of a snapshot.
    pub fn new(snapshot: &'a FamilySnapshot) -> Self {
        Self::from_parts(&snapshot.people, &snapshot.relationships)
    }

    /// Indexes an arbitrary selection of people and relationships.
    ///
    /// The first person with a given id wins; later duplicates are ignored.
    pub fn from_parts(
        people: impl IntoIterator<Item = &'a Person>,
        relationships: impl IntoIterator<Item = &'a Relationship>,
    ) -> Self {
        let mut graph = Self {
            people: IndexMap::new(),
            relationships: Vec::new(),
            parents: HashMap::new(),
            children: HashMap::new(),
            spouses: HashMap::new(),
            pairs: HashMap::new(),
        };

        for person in people {
            if graph.people.contains_key(&person.id) {
                debug!(id:% = person.id; "Ignoring duplicate person");
                continue;
            }
            graph.people.insert(person.id, person);
        }

        for relationship in relationships {
            graph.add_relationship(relationship);
        }

        graph
    }

    fn add_relationship(&mut self, relationship: &'a Relationship) {
        let index = self.relationships.len();
        self.relationships.push(relationship);

        let (source, target) = (relationship.source, relationship.target);
        self.pairs.entry((source, target)).or_insert(index);
        self.pairs.entry((target, source)).or_insert(index);

        if !self.contains(source) || !self.contains(target) {
            debug!(
                relationship:% = relationship.id,
                source:% = source,
                target:% = target;
                "Relationship endpoint missing, skipping adjacency"
            );
            return;
        }
        if source == target {
            debug!(relationship:% = relationship.id; "Ignoring self relationship");
            return;
        }

        match relationship.kind {
            RelationKind::Blood | RelationKind::Adopted => {
                push_unique(self.children.entry(source).or_default(), target);
                push_unique(self.parents.entry(target).or_default(), source);
            }
            RelationKind::Spouse => {
                push_unique(self.spouses.entry(source).or_default(), target);
                push_unique(self.spouses.entry(target).or_default(), source);
            }
        }
    }

    /// Returns the person with the given id, if indexed.
    pub fn person(&self, id: Id) -> Option<&'a Person> {
        self.people.get(&id).copied()
    }

    pub fn contains(&self, id: Id) -> bool {
        self.people.contains_key(&id)
    }

    /// Returns all people in snapshot order.
    pub fn people(&self) -> impl Iterator<Item = &'a Person> + '_ {
        self.people.values().copied()
    }

    /// Returns all person ids in snapshot order.
    pub fn ids(&self) -> impl Iterator<Item = Id> + '_ {
        self.people.keys().copied()
    }

    /// Returns the position of a person in snapshot order.
    pub fn index_of(&self, id: Id) -> Option<usize> {
        self.people.get_index_of(&id)
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Returns every indexed relationship, including ones with dangling endpoints.
    pub fn relationships(&self) -> impl Iterator<Item = &'a Relationship> + '_ {
        self.relationships.iter().copied()
    }

    pub fn parents(&self, id: Id) -> &[Id] {
        self.parents.get(&id).map_or(&[], Vec::as_slice)
    }

    pub fn children(&self, id: Id) -> &[Id] {
        self.children.get(&id).map_or(&[], Vec::as_slice)
    }

    pub fn spouses(&self, id: Id) -> &[Id] {
        self.spouses.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Returns the first relationship joining `a` and `b`, in either direction.
    pub fn relation_between(&self, a: Id, b: Id) -> Option<&'a Relationship> {
        self.pairs
            .get(&(a, b))
            .map(|&index| self.relationships[index])
    }

    /// Returns people without parents, in snapshot order.
    pub fn roots(&self) -> impl Iterator<Item = Id> + '_ {
        self.ids().filter(|id| self.parents(*id).is_empty())
    }

    /// Verifies that parent-to-child edges never loop back on themselves.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError::Cycle`] listing the people on the first cycle
    /// found, in edge order.
    pub fn check_acyclic(&self) -> Result<(), StructureError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        let mut marks: HashMap<Id, Mark> = HashMap::with_capacity(self.len());

        for start in self.ids() {
            if marks.contains_key(&start) {
                continue;
            }

            // Each frame holds a person and the index of its next unvisited child.
            let mut stack: Vec<(Id, usize)> = vec![(start, 0)];
            marks.insert(start, Mark::Visiting);

            while let Some((node, next)) = stack.last_mut() {
                let node = *node;
                let Some(&child) = self.children(node).get(*next) else {
                    marks.insert(node, Mark::Done);
                    stack.pop();
                    continue;
                };
                *next += 1;

                match marks.get(&child) {
                    Some(Mark::Visiting) => {
                        let from = stack.iter().position(|(id, _)| *id == child).unwrap_or(0);
                        let cycle = stack[from..].iter().map(|(id, _)| *id).collect();
                        return Err(StructureError::Cycle(cycle));
                    }
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(child, Mark::Visiting);
                        stack.push((child, 0));
                    }
                }
            }
        }

        Ok(())
    }
}

fn push_unique(ids: &mut Vec<Id>, id: Id) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}
