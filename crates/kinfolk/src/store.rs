//! The data-store contract the engines read snapshots from.
//!
//! A [`FamilyStore`] hands out a whole [`FamilySnapshot`] at once and applies
//! three mutations: adding a person linked to someone already recorded,
//! deleting a person together with every relationship touching them, and
//! patching a person's fields.
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryStore`] - keeps the snapshot in memory.
//! - [`JsonFileStore`] - reads the snapshot JSON file on each fetch and writes
//!   it back after each mutation.

mod json_file;
mod memory;

use std::{io, path::PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;

use kinfolk_core::{
    identifier::Id,
    model::{DateInfo, FamilySnapshot, Gender, Person, RelationKind, Relationship},
};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors raised by a [`FamilyStore`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Person `{0}` already exists")]
    DuplicatePerson(Id),

    #[error("Unknown person `{0}`")]
    UnknownPerson(Id),

    #[error("Cannot access `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed snapshot in `{path}`: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How a newly added person attaches to someone already recorded.
///
/// Exactly one relationship is created per added person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewLink {
    /// The new person is a child of the given parent.
    ChildOf(Id),
    /// The new person is a parent of the given child.
    ParentOf(Id),
    /// The new person is married to the given spouse.
    SpouseOf(Id),
}

impl NewLink {
    /// The already-recorded person the link points at.
    pub fn anchor(self) -> Id {
        match self {
            Self::ChildOf(id) | Self::ParentOf(id) | Self::SpouseOf(id) => id,
        }
    }

    fn relationship(self, id: Id, person: Id) -> Relationship {
        match self {
            Self::ChildOf(parent) => Relationship::new(id, parent, person, RelationKind::Blood),
            Self::ParentOf(child) => Relationship::new(id, person, child, RelationKind::Blood),
            Self::SpouseOf(spouse) => Relationship::new(id, spouse, person, RelationKind::Spouse),
        }
    }
}

/// A partial update of a [`Person`]. Fields left as `None` are untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonPatch {
    pub full_name: Option<String>,
    pub gender: Option<Gender>,
    pub is_alive: Option<bool>,
    pub dob: Option<DateInfo>,
    pub dod: Option<DateInfo>,
    pub branch: Option<String>,
    pub order: Option<u32>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub images: Option<Vec<String>>,
}

impl PersonPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overwrites every field of `person` that this patch sets.
    pub fn apply(self, person: &mut Person) {
        if let Some(full_name) = self.full_name {
            person.full_name = full_name;
        }
        if let Some(gender) = self.gender {
            person.gender = gender;
        }
        if let Some(is_alive) = self.is_alive {
            person.is_alive = is_alive;
        }
        if self.dob.is_some() {
            person.dob = self.dob;
        }
        if self.dod.is_some() {
            person.dod = self.dod;
        }
        if self.branch.is_some() {
            person.branch = self.branch;
        }
        if self.order.is_some() {
            person.order = self.order;
        }
        if self.avatar_url.is_some() {
            person.avatar_url = self.avatar_url;
        }
        if self.bio.is_some() {
            person.bio = self.bio;
        }
        if let Some(images) = self.images {
            person.images = images;
        }
    }
}

/// Where family snapshots are read from and mutations are written to.
pub trait FamilyStore {
    /// Returns every recorded person and relationship.
    fn fetch_all(&self) -> Result<FamilySnapshot, StoreError>;

    /// Records `person` and the one relationship described by `link`.
    ///
    /// Returns the created relationship.
    ///
    /// # Errors
    ///
    /// [`StoreError::DuplicatePerson`] if the id is taken,
    /// [`StoreError::UnknownPerson`] if the link points at nobody.
    fn add_person(&mut self, person: Person, link: NewLink) -> Result<Relationship, StoreError>;

    /// Removes the person and every relationship touching them.
    ///
    /// Returns the removed person.
    fn delete_person(&mut self, id: Id) -> Result<Person, StoreError>;

    /// Applies `patch` and returns the updated person.
    fn update_person(&mut self, id: Id, patch: PersonPatch) -> Result<Person, StoreError>;
}

/// The first `r-{n}` id not used by any relationship in `snapshot`.
fn next_relationship_id(snapshot: &FamilySnapshot) -> Id {
    let mut n = snapshot.relationships.len() + 1;
    loop {
        let candidate = format!("r-{n}");
        if !snapshot
            .relationships
            .iter()
            .any(|rel| rel.id == candidate.as_str())
        {
            return Id::new(&candidate);
        }
        n += 1;
    }
}

// Mutations shared by every store over an owned snapshot.

fn insert_person(
    snapshot: &mut FamilySnapshot,
    person: Person,
    link: NewLink,
) -> Result<Relationship, StoreError> {
    if snapshot.person(person.id).is_some() {
        return Err(StoreError::DuplicatePerson(person.id));
    }
    let anchor = link.anchor();
    if snapshot.person(anchor).is_none() {
        return Err(StoreError::UnknownPerson(anchor));
    }

    let relationship = link.relationship(next_relationship_id(snapshot), person.id);
    debug!(person:% = person.id, anchor:% = anchor, relationship:% = relationship.id; "Adding person");

    snapshot.people.push(person);
    snapshot.relationships.push(relationship.clone());
    Ok(relationship)
}

fn remove_person(snapshot: &mut FamilySnapshot, id: Id) -> Result<Person, StoreError> {
    let index = snapshot
        .people
        .iter()
        .position(|person| person.id == id)
        .ok_or(StoreError::UnknownPerson(id))?;
    let person = snapshot.people.remove(index);

    let before = snapshot.relationships.len();
    snapshot.relationships.retain(|rel| !rel.touches(id));
    debug!(
        person:% = id,
        relationships = before - snapshot.relationships.len();
        "Deleted person"
    );
    Ok(person)
}

fn patch_person(
    snapshot: &mut FamilySnapshot,
    id: Id,
    patch: PersonPatch,
) -> Result<Person, StoreError> {
    let person = snapshot
        .people
        .iter_mut()
        .find(|person| person.id == id)
        .ok_or(StoreError::UnknownPerson(id))?;
    patch.apply(person);
    debug!(person:% = id; "Updated person");
    Ok(person.clone())
}
