//! Relative seniority between two people.

use serde::Serialize;

use kinfolk_core::model::Person;

/// Outcome of comparing who is more senior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Seniority {
    Elder,
    Younger,
    /// Neither dates nor birth ranks tell the two apart.
    Unknown,
}

impl Seniority {
    /// Compares `person` against `other`, answering "is `person` the elder?".
    ///
    /// Parsed birth dates decide first. When either date is missing or
    /// unparseable, or both dates are equal, the birth rank (`order`, lower is
    /// more senior) decides. Without either, the outcome is [`Unknown`](Self::Unknown).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kinfolk::kinship::Seniority;
    /// # use kinfolk::model::{DateInfo, Gender, Person};
    /// let first = Person::new("a", "A", Gender::Male).with_order(1);
    /// let second = Person::new("b", "B", Gender::Male).with_order(2);
    /// assert_eq!(Seniority::compare(&first, &second), Seniority::Elder);
    ///
    /// let dated = Person::new("c", "C", Gender::Male).with_dob(DateInfo::solar("1970"));
    /// assert_eq!(Seniority::compare(&dated, &first), Seniority::Unknown);
    /// ```
    pub fn compare(person: &Person, other: &Person) -> Self {
        if let (Some(mine), Some(theirs)) = (person.birth_date(), other.birth_date()) {
            if mine != theirs {
                return Self::from_earlier(mine < theirs);
            }
        }

        match (person.order, other.order) {
            (Some(mine), Some(theirs)) if mine != theirs => Self::from_earlier(mine < theirs),
            _ => Self::Unknown,
        }
    }

    fn from_earlier(earlier: bool) -> Self {
        if earlier { Self::Elder } else { Self::Younger }
    }

    /// The same comparison seen from the other person.
    pub fn reversed(self) -> Self {
        match self {
            Self::Elder => Self::Younger,
            Self::Younger => Self::Elder,
            Self::Unknown => Self::Unknown,
        }
    }

    /// Falls back to `other` when this outcome is unknown.
    pub fn or_else(self, other: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Unknown => other(),
            known => known,
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use kinfolk_core::model::{DateInfo, Gender};
    use proptest::prelude::*;

    use super::*;

    fn person() -> impl Strategy<Value = Person> {
        (
            prop::option::of(1u32..6),
            prop::option::of((1900i32..2000, 1u8..13, 1u8..29)),
        )
            .prop_map(|(order, dob)| {
                let mut person = Person::new("p", "P", Gender::Other);
                person.order = order;
                person.dob = dob.map(|(y, m, d)| DateInfo::solar(format!("{d:02}/{m:02}/{y}")));
                person
            })
    }

    fn check_antisymmetric(a: Person, b: Person) {
        assert_eq!(
            Seniority::compare(&a, &b),
            Seniority::compare(&b, &a).reversed()
        );
    }

    proptest! {
        #[test]
        fn antisymmetric(a in person(), b in person()) {
            check_antisymmetric(a, b);
        }
    }
}
