//! Domain records for the clinic reference data. JSON field names are
//! camelCase on the wire, matching the existing client contract.

use crate::error::ClinicError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record held in a [`crate::store::TableStore`], keyed by a store-assigned
/// surrogate id. The id is `None` until the record is created.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Lowercase kind name used in logs.
    const KIND: &'static str;

    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);
    /// Not-found failure for this entity kind.
    fn not_found(id: i64) -> ClinicError;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

impl Owner {
    /// Overlay the mutable fields of `incoming` onto this stored record,
    /// keeping the stored id.
    pub fn merged_with(&self, incoming: Owner) -> Owner {
        Owner {
            id: self.id,
            first_name: incoming.first_name,
            last_name: incoming.last_name,
            address: incoming.address,
            city: incoming.city,
            telephone: incoming.telephone,
        }
    }
}

impl Entity for Owner {
    const KIND: &'static str = "owner";

    fn id(&self) -> Option<i64> {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
    fn not_found(id: i64) -> ClinicError {
        ClinicError::OwnerNotFound(id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetType {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

impl PetType {
    pub fn merged_with(&self, incoming: PetType) -> PetType {
        PetType {
            id: self.id,
            name: incoming.name,
        }
    }
}

impl Entity for PetType {
    const KIND: &'static str = "pet_type";

    fn id(&self) -> Option<i64> {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
    fn not_found(id: i64) -> ClinicError {
        ClinicError::PetTypeNotFound(id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialty {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

impl Specialty {
    pub fn merged_with(&self, incoming: Specialty) -> Specialty {
        Specialty {
            id: self.id,
            name: incoming.name,
        }
    }
}

impl Entity for Specialty {
    const KIND: &'static str = "specialty";

    fn id(&self) -> Option<i64> {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
    fn not_found(id: i64) -> ClinicError {
        ClinicError::SpecialtyNotFound(id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vet {
    #[serde(default)]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
}

impl Vet {
    pub fn merged_with(&self, incoming: Vet) -> Vet {
        Vet {
            id: self.id,
            first_name: incoming.first_name,
            last_name: incoming.last_name,
        }
    }
}

impl Entity for Vet {
    const KIND: &'static str = "vet";

    fn id(&self) -> Option<i64> {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
    fn not_found(id: i64) -> ClinicError {
        ClinicError::VetNotFound(id)
    }
}

/// Composite key of the vet–specialty association. The pair IS the record's
/// identity: equality and ordering are structural over both components.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetSpecialtyId {
    pub vet_id: i64,
    pub specialty_id: i64,
}

/// Pure association row between a vet and a specialty. No attributes beyond
/// the key; no referential check against the vet/specialty tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VetSpecialty {
    pub vet_id: i64,
    pub specialty_id: i64,
}

impl VetSpecialty {
    pub fn new(vet_id: i64, specialty_id: i64) -> Self {
        VetSpecialty {
            vet_id,
            specialty_id,
        }
    }

    pub fn key(&self) -> VetSpecialtyId {
        VetSpecialtyId {
            vet_id: self.vet_id,
            specialty_id: self.specialty_id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    #[serde(default)]
    pub id: Option<i64>,
    pub pet_id: i64,
    #[serde(default)]
    pub vet_id: Option<i64>,
    pub visit_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cost: Option<f64>,
}

impl Visit {
    /// Visit updates overlay only the pet, date, and description; the stored
    /// `vet_id` and `cost` are preserved (they are not part of the update
    /// contract).
    pub fn merged_with(&self, incoming: Visit) -> Visit {
        Visit {
            id: self.id,
            pet_id: incoming.pet_id,
            vet_id: self.vet_id,
            visit_date: incoming.visit_date,
            description: incoming.description,
            cost: self.cost,
        }
    }
}

impl Entity for Visit {
    const KIND: &'static str = "visit";

    fn id(&self) -> Option<i64> {
        self.id
    }
    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
    fn not_found(id: i64) -> ClinicError {
        ClinicError::VisitNotFound(id)
    }
}
