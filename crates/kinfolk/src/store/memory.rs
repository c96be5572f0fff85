//! In-memory [`FamilyStore`].

use kinfolk_core::{
    identifier::Id,
    model::{FamilySnapshot, Person, Relationship},
};

use super::{FamilyStore, NewLink, PersonPatch, StoreError};

/// Keeps the whole snapshot in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: FamilySnapshot,
}

impl MemoryStore {
    pub fn new(snapshot: FamilySnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &FamilySnapshot {
        &self.snapshot
    }

    pub fn into_snapshot(self) -> FamilySnapshot {
        self.snapshot
    }
}

impl From<FamilySnapshot> for MemoryStore {
    fn from(snapshot: FamilySnapshot) -> Self {
        Self::new(snapshot)
    }
}

impl FamilyStore for MemoryStore {
    fn fetch_all(&self) -> Result<FamilySnapshot, StoreError> {
        Ok(self.snapshot.clone())
    }

    fn add_person(&mut self, person: Person, link: NewLink) -> Result<Relationship, StoreError> {
        super::insert_person(&mut self.snapshot, person, link)
    }

    fn delete_person(&mut self, id: Id) -> Result<Person, StoreError> {
        super::remove_person(&mut self.snapshot, id)
    }

    fn update_person(&mut self, id: Id, patch: PersonPatch) -> Result<Person, StoreError> {
        super::patch_person(&mut self.snapshot, id, patch)
    }
}

#[cfg(test)]
mod tests {
    use kinfolk_core::model::{Gender, RelationKind};

    use super::*;

    #[test]
    fn test_add_then_fetch() {
        let mut store = MemoryStore::new(FamilySnapshot::new(
            vec![Person::new("dad", "Hà Minh Trung", Gender::Male)],
            Vec::new(),
        ));

        let rel = store
            .add_person(
                Person::new("son", "Hà Thanh Tú", Gender::Male),
                NewLink::ChildOf(Id::new("dad")),
            )
            .unwrap();
        assert_eq!(rel.id, "r-1");
        assert_eq!(rel.kind, RelationKind::Blood);

        let snapshot = store.fetch_all().unwrap();
        assert_eq!(snapshot.people.len(), 2);
        assert_eq!(snapshot.relationships, vec![rel]);
    }

    #[test]
    fn test_delete_and_update_unknown() {
        let mut store = MemoryStore::default();
        assert!(matches!(
            store.delete_person(Id::new("ghost")),
            Err(StoreError::UnknownPerson(_))
        ));
        assert!(matches!(
            store.update_person(Id::new("ghost"), PersonPatch::default()),
            Err(StoreError::UnknownPerson(_))
        ));
    }
}
