//! In-memory table storage. One `TableStore` per surrogate-keyed entity, one
//! `AssociationTable` for the composite-keyed vet–specialty relation. A
//! relational backend would slot in behind the same surface.

use crate::model::{Entity, VetSpecialty, VetSpecialtyId};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{PoisonError, RwLock};

/// Keyed rows plus the id sequence. Ids are assigned on insert, starting at 1,
/// and never reused within a store's lifetime.
pub struct TableStore<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    next_id: AtomicI64,
}

impl<T: Entity> TableStore<T> {
    pub fn new() -> Self {
        TableStore {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Persist a new record, assigning the next id. Any id already on the
    /// candidate is discarded.
    pub fn insert(&self, mut record: T) -> T {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        record.set_id(id);
        self.write().insert(id, record.clone());
        record
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.read().get(&id).cloned()
    }

    /// Overwrite the record at `id`. Returns false when nothing exists there.
    pub fn put(&self, id: i64, record: T) -> bool {
        let mut rows = self.write();
        match rows.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    pub fn remove(&self, id: i64) -> Option<T> {
        self.write().remove(&id)
    }

    /// All records in ascending-id order.
    pub fn all(&self) -> Vec<T> {
        self.read().values().cloned().collect()
    }

    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.read().values().filter(|r| pred(r)).cloned().collect()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<i64, T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<i64, T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Entity> Default for TableStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Vet–specialty rows keyed by the composite pair. Uniqueness on the key is
/// enforced here: the pair is the identity, so a second insert of the same
/// pair is refused rather than creating a second row.
pub struct AssociationTable {
    rows: RwLock<BTreeMap<VetSpecialtyId, VetSpecialty>>,
}

impl AssociationTable {
    pub fn new() -> Self {
        AssociationTable {
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    /// Insert the pair. Returns false when the exact pair already exists.
    pub fn insert(&self, assoc: VetSpecialty) -> bool {
        let mut rows = self.write();
        if rows.contains_key(&assoc.key()) {
            return false;
        }
        rows.insert(assoc.key(), assoc);
        true
    }

    /// Exact-pair lookup; both components must match.
    pub fn get(&self, key: VetSpecialtyId) -> Option<VetSpecialty> {
        self.read().get(&key).copied()
    }

    pub fn remove(&self, key: VetSpecialtyId) -> Option<VetSpecialty> {
        self.write().remove(&key)
    }

    pub fn by_vet(&self, vet_id: i64) -> Vec<VetSpecialty> {
        self.read()
            .values()
            .filter(|a| a.vet_id == vet_id)
            .copied()
            .collect()
    }

    pub fn by_specialty(&self, specialty_id: i64) -> Vec<VetSpecialty> {
        self.read()
            .values()
            .filter(|a| a.specialty_id == specialty_id)
            .copied()
            .collect()
    }

    pub fn all(&self) -> Vec<VetSpecialty> {
        self.read().values().copied().collect()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<VetSpecialtyId, VetSpecialty>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<VetSpecialtyId, VetSpecialty>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AssociationTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PetType;

    #[test]
    fn insert_assigns_increasing_ids_and_discards_caller_id() {
        let store = TableStore::<PetType>::new();
        let a = store.insert(PetType {
            id: Some(999),
            name: "dog".into(),
        });
        let b = store.insert(PetType {
            id: None,
            name: "cat".into(),
        });
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));
    }

    #[test]
    fn put_refuses_missing_id() {
        let store = TableStore::<PetType>::new();
        let absent = PetType {
            id: Some(42),
            name: "bird".into(),
        };
        assert!(!store.put(42, absent));
        assert!(store.get(42).is_none());
    }

    #[test]
    fn association_key_is_unique() {
        let table = AssociationTable::new();
        assert!(table.insert(VetSpecialty::new(5, 9)));
        assert!(!table.insert(VetSpecialty::new(5, 9)));
        assert_eq!(table.all().len(), 1);
    }

    #[test]
    fn association_lookup_requires_both_components() {
        let table = AssociationTable::new();
        table.insert(VetSpecialty::new(5, 9));
        assert!(table.get(VetSpecialtyId { vet_id: 5, specialty_id: 9 }).is_some());
        assert!(table.get(VetSpecialtyId { vet_id: 5, specialty_id: 10 }).is_none());
        assert!(table.get(VetSpecialtyId { vet_id: 4, specialty_id: 9 }).is_none());
    }
}
