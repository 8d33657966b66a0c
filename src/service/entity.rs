//! Generic entity lifecycle service, instantiated per surrogate-keyed entity.
//! Anything that depends on an existing record fails with that entity's
//! not-found kind; list-returning finders never fail.

use crate::error::ClinicError;
use crate::model::{Entity, Owner, PetType, Specialty, Vet};
use crate::store::TableStore;
use std::sync::Arc;

pub type OwnerService = EntityService<Owner>;
pub type PetTypeService = EntityService<PetType>;
pub type SpecialtyService = EntityService<Specialty>;
pub type VetService = EntityService<Vet>;

pub struct EntityService<T: Entity> {
    store: Arc<TableStore<T>>,
}

impl<T: Entity> Clone for EntityService<T> {
    fn clone(&self) -> Self {
        EntityService {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Entity> EntityService<T> {
    pub fn new() -> Self {
        EntityService {
            store: Arc::new(TableStore::new()),
        }
    }

    /// Persist the candidate and return it with its assigned id. Attribute
    /// duplicates are allowed; only the id is unique.
    pub fn create(&self, candidate: T) -> T {
        let created = self.store.insert(candidate);
        tracing::debug!(kind = T::KIND, id = ?created.id(), "created");
        created
    }

    /// Full-record overwrite at the entity's own id. Fails with the entity's
    /// not-found kind when no record exists there; there is no upsert path.
    pub fn update(&self, entity: T) -> Result<T, ClinicError> {
        let id = entity
            .id()
            .ok_or(ClinicError::MissingId { entity: T::KIND })?;
        if !self.store.put(id, entity.clone()) {
            return Err(T::not_found(id));
        }
        tracing::debug!(kind = T::KIND, id, "updated");
        Ok(entity)
    }

    pub fn find_by_id(&self, id: i64) -> Result<T, ClinicError> {
        self.store.get(id).ok_or_else(|| T::not_found(id))
    }

    /// Re-validates existence before removing, so a delete is never silently
    /// a no-op on a missing id.
    pub fn delete(&self, id: i64) -> Result<(), ClinicError> {
        self.find_by_id(id)?;
        self.store.remove(id);
        tracing::debug!(kind = T::KIND, id, "deleted");
        Ok(())
    }

    pub fn find_all(&self) -> Vec<T> {
        self.store.all()
    }

    pub(crate) fn find_where(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.store.filter(pred)
    }
}

impl<T: Entity> Default for EntityService<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityService<Owner> {
    pub fn find_by_first_name(&self, first_name: &str) -> Vec<Owner> {
        self.find_where(|o| o.first_name == first_name)
    }

    pub fn find_by_last_name(&self, last_name: &str) -> Vec<Owner> {
        self.find_where(|o| o.last_name == last_name)
    }

    pub fn find_by_city(&self, city: &str) -> Vec<Owner> {
        self.find_where(|o| o.city == city)
    }
}

impl EntityService<Vet> {
    pub fn find_by_first_name(&self, first_name: &str) -> Vec<Vet> {
        self.find_where(|v| v.first_name == first_name)
    }

    pub fn find_by_last_name(&self, last_name: &str) -> Vec<Vet> {
        self.find_where(|v| v.last_name == last_name)
    }
}

impl EntityService<PetType> {
    pub fn find_by_name(&self, name: &str) -> Vec<PetType> {
        self.find_where(|t| t.name == name)
    }
}

impl EntityService<Specialty> {
    pub fn find_by_name(&self, name: &str) -> Vec<Specialty> {
        self.find_where(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(first: &str, last: &str, city: &str) -> Owner {
        Owner {
            id: None,
            first_name: first.into(),
            last_name: last.into(),
            address: "Calle Lima 789".into(),
            city: city.into(),
            telephone: "923456789".into(),
        }
    }

    #[test]
    fn created_record_round_trips_through_find_by_id() {
        let service = OwnerService::new();
        let created = service.create(owner("Luis", "Torres", "Cusco"));
        let id = created.id.unwrap();
        assert_eq!(service.find_by_id(id).unwrap(), created);
    }

    #[test]
    fn find_by_id_on_unknown_id_fails_with_owner_not_found() {
        let service = OwnerService::new();
        assert_eq!(
            service.find_by_id(99999),
            Err(ClinicError::OwnerNotFound(99999))
        );
    }

    #[test]
    fn update_on_unknown_id_fails_instead_of_upserting() {
        let service = OwnerService::new();
        let mut candidate = owner("Luis", "Torres", "Cusco");
        candidate.id = Some(99999);
        assert_eq!(
            service.update(candidate),
            Err(ClinicError::OwnerNotFound(99999))
        );
        assert!(service.find_all().is_empty());
    }

    #[test]
    fn update_without_id_is_a_caller_bug() {
        let service = OwnerService::new();
        assert_eq!(
            service.update(owner("Luis", "Torres", "Cusco")),
            Err(ClinicError::MissingId { entity: "owner" })
        );
    }

    #[test]
    fn update_overwrites_the_full_record() {
        let service = OwnerService::new();
        let created = service.create(owner("Luis", "Torres", "Cusco"));
        let mut changed = created.clone();
        changed.first_name = "Luis Actualizado".into();
        changed.city = "Lima".into();
        service.update(changed.clone()).unwrap();
        assert_eq!(service.find_by_id(created.id.unwrap()).unwrap(), changed);
    }

    #[test]
    fn delete_removes_exactly_one_record() {
        let service = OwnerService::new();
        let first = service.create(owner("Luis", "Torres", "Cusco"));
        service.create(owner("Maria", "Quispe", "Lima"));
        service.create(owner("Jorge", "Huaman", "Arequipa"));

        service.delete(first.id.unwrap()).unwrap();
        assert_eq!(service.find_all().len(), 2);
        assert_eq!(
            service.find_by_id(first.id.unwrap()),
            Err(ClinicError::OwnerNotFound(first.id.unwrap()))
        );
    }

    #[test]
    fn delete_on_unknown_id_fails_rather_than_no_op() {
        let service = OwnerService::new();
        assert_eq!(service.delete(99999), Err(ClinicError::OwnerNotFound(99999)));
    }

    #[test]
    fn duplicate_attribute_values_are_allowed() {
        let service = PetTypeService::new();
        service.create(PetType { id: None, name: "dog".into() });
        service.create(PetType { id: None, name: "dog".into() });
        assert_eq!(service.find_by_name("dog").len(), 2);
    }

    #[test]
    fn attribute_finders_match_exactly_and_tolerate_no_matches() {
        let service = OwnerService::new();
        service.create(owner("Luis", "Torres", "Cusco"));
        assert_eq!(service.find_by_city("Cusco").len(), 1);
        assert!(service.find_by_city("cusco").is_empty());
        assert!(service.find_by_first_name("Nadie").is_empty());
    }
}
