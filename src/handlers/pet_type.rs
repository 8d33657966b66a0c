//! Pet type resource handlers.

use crate::error::ClinicError;
use crate::model::PetType;
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
) -> Json<Vec<PetType>> {
    let types = match params.get("name") {
        Some(name) => state.pet_types.find_by_name(name),
        None => state.pet_types.find_all(),
    };
    Json(types)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PetType>, ClinicError> {
    Ok(Json(state.pet_types.find_by_id(id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<PetType>,
) -> (StatusCode, Json<PetType>) {
    (StatusCode::CREATED, Json(state.pet_types.create(body)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<PetType>,
) -> Result<Json<PetType>, ClinicError> {
    let existing = state.pet_types.find_by_id(id)?;
    Ok(Json(state.pet_types.update(existing.merged_with(body))?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClinicError> {
    state.pet_types.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
