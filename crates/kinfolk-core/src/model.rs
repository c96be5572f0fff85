//! Family records: people, relationships and the snapshot that holds them.
//!
//! These are plain value types. A [`FamilySnapshot`] is fetched as one batch
//! from a data store and handed, unchanged, to the layout and kinship engines.
//! Field names on the wire are camelCase (`fullName`, `isAlive`, ...).

use serde::{Deserialize, Serialize};

use crate::{date::BirthDate, identifier::Id};

/// Gender of a person, used to pick gender-specific kinship terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

/// Calendar a recorded date was written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[default]
    Solar,
    Lunar,
}

/// A recorded date together with its calendar tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    pub date: String,
    #[serde(rename = "type", default)]
    pub calendar: CalendarKind,
}

impl DateInfo {
    pub fn solar(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            calendar: CalendarKind::Solar,
        }
    }

    pub fn lunar(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            calendar: CalendarKind::Lunar,
        }
    }
}

fn alive_by_default() -> bool {
    true
}

/// A member of the family.
///
/// `order` is the birth rank among siblings; lower is more senior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: Id,
    pub full_name: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default = "alive_by_default")]
    pub is_alive: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<DateInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dod: Option<DateInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Person {
    /// Creates a living person with no dates, rank or images.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kinfolk_core::model::{Gender, Person};
    /// let person = Person::new("bac-hai", "Hà Minh Thanh", Gender::Male).with_order(1);
    /// assert_eq!(person.id, "bac-hai");
    /// assert_eq!(person.order, Some(1));
    /// assert!(person.is_alive);
    /// ```
    pub fn new(id: impl Into<Id>, full_name: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            gender,
            is_alive: true,
            dob: None,
            dod: None,
            branch: None,
            order: None,
            avatar_url: None,
            bio: None,
            images: Vec::new(),
        }
    }

    pub fn with_order(mut self, order: u32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_dob(mut self, dob: DateInfo) -> Self {
        self.dob = Some(dob);
        self
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn deceased(mut self) -> Self {
        self.is_alive = false;
        self
    }

    /// Parsed date of birth, or `None` when absent or unparseable.
    pub fn birth_date(&self) -> Option<BirthDate> {
        self.dob.as_ref().and_then(|dob| BirthDate::parse(&dob.date))
    }
}

/// Kind of a relationship edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelationKind {
    /// Parent to child by birth.
    Blood,
    /// Symmetric pairing of two people of the same generation.
    Spouse,
    /// Parent to child by adoption.
    Adopted,
}

impl RelationKind {
    /// Returns true for edges that point from a parent to a child.
    pub fn is_parental(self) -> bool {
        matches!(self, Self::Blood | Self::Adopted)
    }
}

/// A directed edge between two people.
///
/// Parental edges point from parent (`source`) to child (`target`). The
/// direction of a spouse edge carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    pub id: Id,
    pub source: Id,
    pub target: Id,
    #[serde(rename = "type")]
    pub kind: RelationKind,
}

impl Relationship {
    pub fn new(
        id: impl Into<Id>,
        source: impl Into<Id>,
        target: impl Into<Id>,
        kind: RelationKind,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    /// Returns true if this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: Id, b: Id) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    /// Returns true if `id` is one of the two endpoints.
    pub fn touches(&self, id: Id) -> bool {
        self.source == id || self.target == id
    }
}

/// An immutable batch of people and relationships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FamilySnapshot {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl FamilySnapshot {
    pub fn new(people: Vec<Person>, relationships: Vec<Relationship>) -> Self {
        Self {
            people,
            relationships,
        }
    }

    /// Finds a person by id.
    pub fn person(&self, id: Id) -> Option<&Person> {
        self.people.iter().find(|person| person.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
