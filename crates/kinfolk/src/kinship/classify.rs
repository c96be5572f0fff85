//! Path shape classification.
//!
//! Terms are chosen by generation delta first, then by the step pattern of
//! the path after co-parents have been folded in (see
//! [`fold_partners`](super::step::fold_partners)).

use kinfolk_core::{
    identifier::Id,
    model::{Gender, Person},
};

use crate::structure::FamilyGraph;

use super::{
    KinshipTerm, Seniority, Side,
    step::{self, Hop, Step},
};

use Step::{Down, Spouse, Up};

/// Classification context for one base/target pair.
struct Classifier<'g, 'a> {
    graph: &'g FamilyGraph<'a>,
    base: &'a Person,
    target: &'a Person,
}

impl Classifier<'_, '_> {
    fn gender(&self, id: Id) -> Gender {
        self.graph
            .person(id)
            .map_or(Gender::Other, |person| person.gender)
    }

    /// Seniority of `person` against `other`, unknown if either is missing.
    fn seniority(&self, person: Id, other: Id) -> Seniority {
        match (self.graph.person(person), self.graph.person(other)) {
            (Some(person), Some(other)) => Seniority::compare(person, other),
            _ => Seniority::Unknown,
        }
    }

    /// A recorded parent of `child` other than the listed people.
    fn has_other_parent(&self, child: Id, known: &[Id]) -> bool {
        self.graph
            .parents(child)
            .iter()
            .any(|parent| !known.contains(parent))
    }

    fn classify(&self, raw: &[Hop]) -> KinshipTerm {
        let gender = self.target.gender;
        let base = self.base.id;
        let target = self.target.id;

        match step::shape(raw).as_slice() {
            [Up, Spouse] if self.has_other_parent(base, &[raw[0].to, raw[1].to]) => {
                return KinshipTerm::StepParent { gender };
            }
            [Spouse, Down] if self.has_other_parent(target, &[raw[0].to, base]) => {
                return KinshipTerm::StepChild { gender };
            }
            _ => {}
        }

        let hops = step::fold_partners(raw);
        let delta = step::generation_delta(&hops);

        match delta {
            0 => self.same_generation(&hops),
            1 => self.one_up(&hops),
            -1 => self.one_down(&hops),
            2 => self.two_up(&hops),
            -2 => self.two_down(&hops),
            3 => KinshipTerm::GreatGrandparent { gender },
            -3 => KinshipTerm::GreatGrandchild { gender },
            delta if delta > 0 => KinshipTerm::ElderGeneration,
            _ => KinshipTerm::YoungerGeneration,
        }
    }

    fn same_generation(&self, hops: &[Hop]) -> KinshipTerm {
        let gender = self.target.gender;
        let base = self.base.id;
        let target = self.target.id;

        match step::shape(hops).as_slice() {
            [Spouse] => KinshipTerm::Spouse { gender },
            [Up, Down] => KinshipTerm::Sibling {
                seniority: self.seniority(target, base),
                gender,
            },
            [Up, Down, Spouse] => KinshipTerm::SiblingSpouse {
                seniority: self.seniority(hops[1].to, base),
                gender,
            },
            [Spouse, Up, Down] => {
                let spouse = hops[0].to;
                KinshipTerm::SpouseSibling {
                    seniority: self.seniority(target, spouse),
                    gender,
                    spouse_gender: self.gender(spouse),
                }
            }
            [Up, Up, Down, Down] => {
                let (base_parent, target_parent) = (hops[0].to, hops[2].to);
                let seniority = self
                    .seniority(target_parent, base_parent)
                    .or_else(|| self.seniority(target, base));
                KinshipTerm::Cousin { seniority, gender }
            }
            _ => KinshipTerm::SameGenerationKin,
        }
    }

    fn one_up(&self, hops: &[Hop]) -> KinshipTerm {
        let gender = self.target.gender;
        let target = self.target.id;

        match step::shape(hops).as_slice() {
            [Up] => KinshipTerm::Parent { gender },
            [Spouse, Up] => KinshipTerm::ParentInLaw {
                gender,
                spouse_gender: self.gender(hops[0].to),
            },
            [Up, Up, Down] => {
                let parent = hops[0].to;
                KinshipTerm::ParentSibling {
                    side: Side::of(self.gender(parent)),
                    seniority: self.seniority(target, parent),
                    gender,
                }
            }
            [Up, Up, Down, Spouse] => {
                let (parent, sibling) = (hops[0].to, hops[2].to);
                KinshipTerm::ParentSiblingSpouse {
                    side: Side::of(self.gender(parent)),
                    seniority: self.seniority(sibling, parent),
                    sibling_gender: self.gender(sibling),
                    gender,
                }
            }
            _ => KinshipTerm::Relative,
        }
    }

    fn one_down(&self, hops: &[Hop]) -> KinshipTerm {
        let gender = self.target.gender;

        match step::shape(hops).as_slice() {
            [Down] => KinshipTerm::Child { gender },
            [Down, Spouse] => KinshipTerm::ChildInLaw { gender },
            [Up, Down, Down] => KinshipTerm::NieceNephew { gender },
            _ => KinshipTerm::Relative,
        }
    }

    fn two_up(&self, hops: &[Hop]) -> KinshipTerm {
        let gender = self.target.gender;
        let target = self.target.id;
        let shape = step::shape(hops);

        if !shape.contains(&Down) {
            // The connecting parent is where the second climb starts.
            let side = hops
                .iter()
                .filter(|hop| hop.step == Up)
                .nth(1)
                .map_or(Side::Unknown, |hop| Side::of(self.gender(hop.from)));
            return KinshipTerm::Grandparent { side, gender };
        }

        match shape.as_slice() {
            [Up, Up, Up, Down] => {
                let grandparent = hops[1].to;
                KinshipTerm::GrandparentSibling {
                    side: Side::of(self.gender(grandparent)),
                    seniority: self.seniority(target, grandparent),
                    gender,
                }
            }
            _ => KinshipTerm::GrandparentSibling {
                side: Side::Unknown,
                seniority: Seniority::Unknown,
                gender,
            },
        }
    }

    fn two_down(&self, hops: &[Hop]) -> KinshipTerm {
        let gender = self.target.gender;

        if hops.iter().any(|hop| hop.step == Up) {
            return KinshipTerm::GrandNieceNephew { gender };
        }

        let side = hops
            .iter()
            .find(|hop| hop.step == Down)
            .map_or(Side::Unknown, |hop| Side::of(self.gender(hop.to)));
        KinshipTerm::Grandchild { side, gender }
    }
}

/// Classifies the relation of `target` to `base` along `path`.
///
/// `path` runs from `base` to `target` inclusive. Pairs without a
/// relationship record are skipped.
pub(super) fn classify(graph: &FamilyGraph<'_>, base: Id, target: Id, path: &[Id]) -> KinshipTerm {
    if base == target {
        return KinshipTerm::Oneself;
    }
    let (Some(base), Some(target)) = (graph.person(base), graph.person(target)) else {
        return KinshipTerm::Relative;
    };
    if path.len() < 2 {
        return KinshipTerm::Relative;
    }

    let hops = step::hops(graph, path);
    if hops.is_empty() {
        return KinshipTerm::Relative;
    }

    Classifier {
        graph,
        base,
        target,
    }
    .classify(&hops)
}
