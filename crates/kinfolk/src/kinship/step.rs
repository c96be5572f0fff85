//! Direction of each hop along a relationship path.

use serde::Serialize;

use kinfolk_core::{identifier::Id, model::RelationKind};

use crate::structure::FamilyGraph;

/// Which way a single hop moves through the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// From a child to a parent.
    Up,
    /// From a parent to a child.
    Down,
    /// Between partners.
    Spouse,
}

/// One classified hop of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: Id,
    pub to: Id,
    pub step: Step,
}

/// Classifies the hop from `from` to `to` by the first relationship record
/// joining them, or `None` if no record exists.
pub fn step_between(graph: &FamilyGraph<'_>, from: Id, to: Id) -> Option<Step> {
    let rel = graph.relation_between(from, to)?;
    Some(match rel.kind {
        RelationKind::Spouse => Step::Spouse,
        RelationKind::Blood | RelationKind::Adopted if rel.source == from => Step::Down,
        RelationKind::Blood | RelationKind::Adopted => Step::Up,
    })
}

/// Classifies every consecutive pair of `path`, skipping pairs without a
/// relationship record.
pub fn hops(graph: &FamilyGraph<'_>, path: &[Id]) -> Vec<Hop> {
    path.windows(2)
        .filter_map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            step_between(graph, from, to).map(|step| Hop { from, to, step })
        })
        .collect()
}

/// Generations gained along `hops`: ups minus downs.
pub fn generation_delta(hops: &[Hop]) -> i32 {
    hops.iter()
        .map(|hop| match hop.step {
            Step::Up => 1,
            Step::Down => -1,
            Step::Spouse => 0,
        })
        .sum()
}

/// Folds co-parents into parental hops.
///
/// Families often record a child under one parent only, so the other parent
/// is reached through a spouse hop. An `Up` followed by a `Spouse` becomes a
/// single `Up` to the partner, and a `Spouse` followed by a `Down` becomes a
/// single `Down` from the partner's side. The generation delta is unchanged.
pub fn fold_partners(hops: &[Hop]) -> Vec<Hop> {
    let mut folded: Vec<Hop> = Vec::with_capacity(hops.len());
    let mut index = 0;

    while index < hops.len() {
        let hop = hops[index];

        match hops.get(index + 1) {
            Some(next) if hop.step == Step::Up && next.step == Step::Spouse => {
                folded.push(Hop {
                    from: hop.from,
                    to: next.to,
                    step: Step::Up,
                });
                index += 2;
            }
            Some(next) if hop.step == Step::Spouse && next.step == Step::Down => {
                folded.push(Hop {
                    from: hop.from,
                    to: next.to,
                    step: Step::Down,
                });
                index += 2;
            }
            _ => {
                folded.push(hop);
                index += 1;
            }
        }
    }

    folded
}

/// The step pattern of `hops`.
pub fn shape(hops: &[Hop]) -> Vec<Step> {
    hops.iter().map(|hop| hop.step).collect()
}

#[cfg(test)]
mod tests {
    use kinfolk_core::model::{FamilySnapshot, Gender, Person, Relationship};

    use super::*;

    use Step::*;

    fn hop(from: &str, to: &str, step: Step) -> Hop {
        Hop {
            from: Id::new(from),
            to: Id::new(to),
            step,
        }
    }

    #[test]
    fn test_step_direction_follows_record() {
        let snapshot = FamilySnapshot::new(
            ["dad", "kid", "mom"]
                .into_iter()
                .map(|id| Person::new(id, id, Gender::Other))
                .collect(),
            vec![
                Relationship::new("r1", "dad", "kid", RelationKind::Blood),
                Relationship::new("r2", "mom", "dad", RelationKind::Spouse),
            ],
        );
        let graph = FamilyGraph::new(&snapshot);

        let path = [Id::new("kid"), Id::new("dad"), Id::new("mom")];
        assert_eq!(
            hops(&graph, &path),
            vec![hop("kid", "dad", Up), hop("dad", "mom", Spouse)]
        );
        assert_eq!(step_between(&graph, Id::new("dad"), Id::new("kid")), Some(Down));
        assert_eq!(step_between(&graph, Id::new("kid"), Id::new("mom")), None);
    }

    #[test]
    fn test_missing_record_is_skipped() {
        let snapshot = FamilySnapshot::default();
        let graph = FamilyGraph::new(&snapshot);
        assert!(hops(&graph, &[Id::new("a"), Id::new("b")]).is_empty());
    }

    #[test]
    fn test_delta() {
        let hops = [hop("a", "b", Up), hop("b", "c", Up), hop("c", "d", Down)];
        assert_eq!(generation_delta(&hops), 1);
    }

    #[test]
    fn test_fold_parent_partner() {
        let hops = [
            hop("me", "dad", Up),
            hop("dad", "mom", Spouse),
            hop("mom", "grandpa", Up),
            hop("grandpa", "uncle", Down),
        ];
        let folded = fold_partners(&hops);

        assert_eq!(shape(&folded), vec![Up, Up, Down]);
        assert_eq!(folded[0], hop("me", "mom", Up));
        assert_eq!(generation_delta(&folded), generation_delta(&hops));
    }

    #[test]
    fn test_fold_keeps_in_law_hops() {
        let sibling_spouse = [
            hop("me", "dad", Up),
            hop("dad", "sister", Down),
            hop("sister", "brother-in-law", Spouse),
        ];
        assert_eq!(shape(&fold_partners(&sibling_spouse)), vec![Up, Down, Spouse]);

        let spouse_sibling = [
            hop("me", "wife", Spouse),
            hop("wife", "father-in-law", Up),
            hop("father-in-law", "sister-in-law", Down),
        ];
        assert_eq!(shape(&fold_partners(&spouse_sibling)), vec![Spouse, Up, Down]);
    }

    #[test]
    fn test_fold_child_of_partner() {
        let hops = [
            hop("me", "dad", Up),
            hop("dad", "brother", Down),
            hop("brother", "sister-in-law", Spouse),
            hop("sister-in-law", "nephew", Down),
        ];
        let folded = fold_partners(&hops);

        assert_eq!(shape(&folded), vec![Up, Down, Down]);
        assert_eq!(folded[2], hop("brother", "nephew", Down));
    }
}
