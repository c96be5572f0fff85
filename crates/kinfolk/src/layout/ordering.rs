//! Sibling ordering.
//!
//! Siblings read left to right from most to least senior. The explicit birth
//! rank wins when both siblings carry one and the ranks differ; otherwise the
//! parsed date of birth decides, with unknown dates sorting last.

use std::cmp::Ordering;

use kinfolk_core::{identifier::Id, model::Person};

use crate::structure::FamilyGraph;

/// Compares two siblings for left-to-right placement.
///
/// # Examples
///
/// ```
/// # use std::cmp::Ordering;
/// # use kinfolk::layout::ordering::compare_siblings;
/// # use kinfolk::model::{DateInfo, Gender, Person};
/// let first = Person::new("a", "A", Gender::Male).with_order(1);
/// let second = Person::new("b", "B", Gender::Male).with_order(2);
/// assert_eq!(compare_siblings(&first, &second), Ordering::Less);
///
/// let dated = Person::new("c", "C", Gender::Male).with_dob(DateInfo::solar("1970"));
/// let undated = Person::new("d", "D", Gender::Male);
/// assert_eq!(compare_siblings(&dated, &undated), Ordering::Less);
/// ```
pub fn compare_siblings(a: &Person, b: &Person) -> Ordering {
    if let (Some(a), Some(b)) = (a.order, b.order) {
        if a != b {
            return a.cmp(&b);
        }
    }

    match (a.birth_date(), b.birth_date()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sorts sibling ids in place with [`compare_siblings`].
///
/// Mixing ranks and dates does not give a total order (a rank may contradict
/// a date), so this uses a stable insertion sort that stays well-defined on
/// such input. Ids missing from `graph` keep their relative position at the
/// end. Sibling rows are short.
pub fn sort_siblings(graph: &FamilyGraph<'_>, ids: &mut [Id]) {
    let goes_before = |a: Id, b: Id| match (graph.person(a), graph.person(b)) {
        (Some(a), Some(b)) => compare_siblings(a, b) == Ordering::Less,
        (Some(_), None) => true,
        _ => false,
    };

    for i in 1..ids.len() {
        let mut j = i;
        while j > 0 && goes_before(ids[j], ids[j - 1]) {
            ids.swap(j, j - 1);
            j -= 1;
        }
    }
}
