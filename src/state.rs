//! Shared application state for all routes: one service handle per entity,
//! all backed by in-process stores. Cloning shares the underlying tables.

use crate::service::{
    OwnerService, PetTypeService, SpecialtyService, VetService, VetSpecialtyService, VisitService,
};

#[derive(Clone)]
pub struct AppState {
    pub owners: OwnerService,
    pub pet_types: PetTypeService,
    pub specialties: SpecialtyService,
    pub vets: VetService,
    pub vet_specialties: VetSpecialtyService,
    pub visits: VisitService,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            owners: OwnerService::new(),
            pet_types: PetTypeService::new(),
            specialties: SpecialtyService::new(),
            vets: VetService::new(),
            vet_specialties: VetSpecialtyService::new(),
            visits: VisitService::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
