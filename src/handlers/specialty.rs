//! Specialty resource handlers.

use crate::error::ClinicError;
use crate::model::Specialty;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Specialty>> {
    let specialties = match params.get("name") {
        Some(name) => state.specialties.find_by_name(name),
        None => state.specialties.find_all(),
    };
    Json(specialties)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Specialty>, ClinicError> {
    Ok(Json(state.specialties.find_by_id(id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Specialty>,
) -> (StatusCode, Json<Specialty>) {
    (StatusCode::CREATED, Json(state.specialties.create(body)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Specialty>,
) -> Result<Json<Specialty>, ClinicError> {
    let existing = state.specialties.find_by_id(id)?;
    Ok(Json(state.specialties.update(existing.merged_with(body))?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClinicError> {
    state.specialties.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
