//! PetClinic backend: veterinary clinic reference-data REST services.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::ClinicError;
pub use model::{Entity, Owner, PetType, Specialty, Vet, VetSpecialty, VetSpecialtyId, Visit};
pub use routes::{api_routes, common_routes};
pub use service::{
    EntityService, OwnerService, PetTypeService, SpecialtyService, VetService,
    VetSpecialtyService, VisitService,
};
pub use state::AppState;
