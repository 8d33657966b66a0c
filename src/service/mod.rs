pub mod entity;
pub mod vet_specialty;
pub mod visit;

pub use entity::{EntityService, OwnerService, PetTypeService, SpecialtyService, VetService};
pub use vet_specialty::VetSpecialtyService;
pub use visit::VisitService;
