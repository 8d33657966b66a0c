//! The vet–specialty association service. There is no surrogate key: the
//! (vetId, specialtyId) pair is the identity, so "update" is a two-phase
//! replace rather than a field mutation.

use crate::error::ClinicError;
use crate::model::{VetSpecialty, VetSpecialtyId};
use crate::store::AssociationTable;
use std::sync::Arc;

#[derive(Clone)]
pub struct VetSpecialtyService {
    store: Arc<AssociationTable>,
}

impl VetSpecialtyService {
    pub fn new() -> Self {
        VetSpecialtyService {
            store: Arc::new(AssociationTable::new()),
        }
    }

    /// Persist the pair. An existing identical pair is rejected; whether the
    /// referenced vet or specialty rows exist is not checked (a dangling pair
    /// is a valid record).
    pub fn create(&self, assoc: VetSpecialty) -> Result<VetSpecialty, ClinicError> {
        if !self.store.insert(assoc) {
            return Err(ClinicError::DuplicateAssociation(assoc.key()));
        }
        tracing::debug!(
            vet_id = assoc.vet_id,
            specialty_id = assoc.specialty_id,
            "association created"
        );
        Ok(assoc)
    }

    /// Exact-pair lookup: a partial match on one component is not a match.
    pub fn find_by_id(&self, key: VetSpecialtyId) -> Result<VetSpecialty, ClinicError> {
        self.store
            .get(key)
            .ok_or(ClinicError::VetSpecialtyNotFound(key))
    }

    /// All specialties assigned to a vet.
    pub fn find_by_vet_id(&self, vet_id: i64) -> Vec<VetSpecialty> {
        self.store.by_vet(vet_id)
    }

    /// All vets holding a specialty.
    pub fn find_by_specialty_id(&self, specialty_id: i64) -> Vec<VetSpecialty> {
        self.store.by_specialty(specialty_id)
    }

    pub fn find_all(&self) -> Vec<VetSpecialty> {
        self.store.all()
    }

    pub fn delete(&self, key: VetSpecialtyId) -> Result<(), ClinicError> {
        self.find_by_id(key)?;
        self.store.remove(key);
        tracing::debug!(
            vet_id = key.vet_id,
            specialty_id = key.specialty_id,
            "association deleted"
        );
        Ok(())
    }

    /// Replace the pair at `key` with `replacement`, which may name a
    /// different vet and/or specialty entirely. Two phases: the existing pair
    /// is removed once confirmed to exist, then the replacement is created.
    ///
    /// The two phases are not atomic. If the replacement collides with another
    /// existing pair, the original is already gone and cannot be restored;
    /// the failure carries the lost key so it can be re-created by hand.
    pub fn replace(
        &self,
        key: VetSpecialtyId,
        replacement: VetSpecialty,
    ) -> Result<VetSpecialty, ClinicError> {
        self.find_by_id(key)?;
        self.store.remove(key);
        if !self.store.insert(replacement) {
            tracing::warn!(
                lost_vet_id = key.vet_id,
                lost_specialty_id = key.specialty_id,
                attempted_vet_id = replacement.vet_id,
                attempted_specialty_id = replacement.specialty_id,
                "association replace failed after delete; original pair lost"
            );
            return Err(ClinicError::AssociationReplaceFailed {
                lost: key,
                attempted: replacement.key(),
            });
        }
        tracing::debug!(
            vet_id = replacement.vet_id,
            specialty_id = replacement.specialty_id,
            "association replaced"
        );
        Ok(replacement)
    }
}

impl Default for VetSpecialtyService {
    fn default() -> Self {
        Self::new()
    }
}
