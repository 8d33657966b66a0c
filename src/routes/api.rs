//! Resource routing table. One block per resource; the association resource
//! is addressed by its composite key and adds lookups by either side.

use crate::handlers::{owner, pet_type, specialty, vet, vet_specialty, visit};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/owners", get(owner::list).post(owner::create))
        .route(
            "/owners/:id",
            get(owner::get).put(owner::update).delete(owner::delete),
        )
        .route("/pet-types", get(pet_type::list).post(pet_type::create))
        .route(
            "/pet-types/:id",
            get(pet_type::get)
                .put(pet_type::update)
                .delete(pet_type::delete),
        )
        .route(
            "/specialties",
            get(specialty::list).post(specialty::create),
        )
        .route(
            "/specialties/:id",
            get(specialty::get)
                .put(specialty::update)
                .delete(specialty::delete),
        )
        .route("/vets", get(vet::list).post(vet::create))
        .route(
            "/vets/:id",
            get(vet::get).put(vet::update).delete(vet::delete),
        )
        .route(
            "/vet-specialties",
            get(vet_specialty::list).post(vet_specialty::create),
        )
        .route("/vet-specialties/vet/:vet_id", get(vet_specialty::list_by_vet))
        .route(
            "/vet-specialties/specialty/:specialty_id",
            get(vet_specialty::list_by_specialty),
        )
        .route(
            "/vet-specialties/:vet_id/:specialty_id",
            get(vet_specialty::get)
                .put(vet_specialty::update)
                .delete(vet_specialty::delete),
        )
        .route("/visits", get(visit::list).post(visit::create))
        .route(
            "/visits/:id",
            get(visit::get).put(visit::update).delete(visit::delete),
        )
        .with_state(state)
}
