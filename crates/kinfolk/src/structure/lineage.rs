//! Direct line of a person.

use std::collections::VecDeque;

use indexmap::IndexSet;

use kinfolk_core::identifier::Id;

use super::FamilyGraph;

/// Returns `id` followed by all of its ancestors and then all of its
/// descendants, each in breadth-first discovery order.
///
/// Only parental edges are followed, so spouses and siblings are not part of
/// the line. An id that is not in `graph` yields an empty set.
pub fn lineage(graph: &FamilyGraph<'_>, id: Id) -> IndexSet<Id> {
    let mut line = IndexSet::new();
    if !graph.contains(id) {
        return line;
    }
    line.insert(id);

    walk(&mut line, id, |current| graph.parents(current));
    walk(&mut line, id, |current| graph.children(current));

    line
}

fn walk<'g>(line: &mut IndexSet<Id>, start: Id, next: impl Fn(Id) -> &'g [Id]) {
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for &id in next(current) {
            if line.insert(id) {
                queue.push_back(id);
            }
        }
    }
}
