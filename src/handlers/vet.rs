//! Vet resource handlers.

use crate::error::ClinicError;
use crate::model::Vet;
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
) -> Json<Vec<Vet>> {
    let vets = if let Some(first_name) = params.get("firstName") {
        state.vets.find_by_first_name(first_name)
    } else if let Some(last_name) = params.get("lastName") {
        state.vets.find_by_last_name(last_name)
    } else {
        state.vets.find_all()
    };
    Json(vets)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vet>, ClinicError> {
    Ok(Json(state.vets.find_by_id(id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Vet>,
) -> (StatusCode, Json<Vet>) {
    (StatusCode::CREATED, Json(state.vets.create(body)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Vet>,
) -> Result<Json<Vet>, ClinicError> {
    let existing = state.vets.find_by_id(id)?;
    Ok(Json(state.vets.update(existing.merged_with(body))?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClinicError> {
    state.vets.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
