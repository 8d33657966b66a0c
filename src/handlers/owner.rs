//! Owner resource handlers. Updates load the stored record and merge the
//! mutable fields from the body before saving.

use crate::error::ClinicError;
use crate::model::Owner;
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
) -> Json<Vec<Owner>> {
    let owners = if let Some(first_name) = params.get("firstName") {
        state.owners.find_by_first_name(first_name)
    } else if let Some(last_name) = params.get("lastName") {
        state.owners.find_by_last_name(last_name)
    } else if let Some(city) = params.get("city") {
        state.owners.find_by_city(city)
    } else {
        state.owners.find_all()
    };
    Json(owners)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Owner>, ClinicError> {
    Ok(Json(state.owners.find_by_id(id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Owner>,
) -> (StatusCode, Json<Owner>) {
    (StatusCode::CREATED, Json(state.owners.create(body)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Owner>,
) -> Result<Json<Owner>, ClinicError> {
    let existing = state.owners.find_by_id(id)?;
    Ok(Json(state.owners.update(existing.merged_with(body))?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClinicError> {
    state.owners.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
