//! Vet–specialty association handlers. The resource is addressed by its
//! composite key; PUT on the pair is a replace, and the body may name a
//! different pair than the path.

use crate::error::ClinicError;
use crate::model::{VetSpecialty, VetSpecialtyId};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(State(state): State<AppState>) -> Json<Vec<VetSpecialty>> {
    Json(state.vet_specialties.find_all())
}

pub async fn get(
    State(state): State<AppState>,
    Path((vet_id, specialty_id)): Path<(i64, i64)>,
) -> Result<Json<VetSpecialty>, ClinicError> {
    let key = VetSpecialtyId {
        vet_id,
        specialty_id,
    };
    Ok(Json(state.vet_specialties.find_by_id(key)?))
}

pub async fn list_by_vet(
    State(state): State<AppState>,
    Path(vet_id): Path<i64>,
) -> Json<Vec<VetSpecialty>> {
    Json(state.vet_specialties.find_by_vet_id(vet_id))
}

pub async fn list_by_specialty(
    State(state): State<AppState>,
    Path(specialty_id): Path<i64>,
) -> Json<Vec<VetSpecialty>> {
    Json(state.vet_specialties.find_by_specialty_id(specialty_id))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<VetSpecialty>,
) -> Result<(StatusCode, Json<VetSpecialty>), ClinicError> {
    let created = state.vet_specialties.create(body)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path((vet_id, specialty_id)): Path<(i64, i64)>,
    Json(body): Json<VetSpecialty>,
) -> Result<Json<VetSpecialty>, ClinicError> {
    let key = VetSpecialtyId {
        vet_id,
        specialty_id,
    };
    Ok(Json(state.vet_specialties.replace(key, body)?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path((vet_id, specialty_id)): Path<(i64, i64)>,
) -> Result<StatusCode, ClinicError> {
    let key = VetSpecialtyId {
        vet_id,
        specialty_id,
    };
    state.vet_specialties.delete(key)?;
    Ok(StatusCode::NO_CONTENT)
}
