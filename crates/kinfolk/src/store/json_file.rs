//! [`FamilyStore`] backed by a snapshot JSON file.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};
use tempfile::NamedTempFile;

use kinfolk_core::{
    identifier::Id,
    model::{FamilySnapshot, Person, Relationship},
};

use super::{FamilyStore, NewLink, PersonPatch, StoreError};

/// Reads the snapshot file on each fetch and rewrites it after each mutation.
///
/// Saves go to a temporary file in the same directory that then replaces the
/// snapshot, so a failed mutation or an interrupted write leaves the file
/// untouched.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<FamilySnapshot, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let snapshot: FamilySnapshot =
            serde_json::from_str(&content).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            path:? = self.path,
            people = snapshot.people.len(),
            relationships = snapshot.relationships.len();
            "Loaded snapshot"
        );
        Ok(snapshot)
    }

    fn save(&self, snapshot: &FamilySnapshot) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(snapshot).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        self.replace_file(content.as_bytes())
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        info!(path:? = self.path; "Snapshot saved");
        Ok(())
    }

    fn replace_file(&self, content: &[u8]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(content)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }

    /// Loads, mutates and saves in one step.
    fn mutate<T>(
        &self,
        op: impl FnOnce(&mut FamilySnapshot) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut snapshot = self.load()?;
        let value = op(&mut snapshot)?;
        self.save(&snapshot)?;
        Ok(value)
    }
}

impl FamilyStore for JsonFileStore {
    fn fetch_all(&self) -> Result<FamilySnapshot, StoreError> {
        self.load()
    }

    fn add_person(&mut self, person: Person, link: NewLink) -> Result<Relationship, StoreError> {
        self.mutate(|snapshot| super::insert_person(snapshot, person, link))
    }

    fn delete_person(&mut self, id: Id) -> Result<Person, StoreError> {
        self.mutate(|snapshot| super::remove_person(snapshot, id))
    }

    fn update_person(&mut self, id: Id, patch: PersonPatch) -> Result<Person, StoreError> {
        self.mutate(|snapshot| super::patch_person(snapshot, id, patch))
    }
}
