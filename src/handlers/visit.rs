//! Visit resource handlers. List filters cover the visit finder surface:
//! `?petId=`, `?vetId=`, `?date=`, and `?start=…&end=…` (inclusive range).

use crate::error::ClinicError;
use crate::model::Visit;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use std::collections::HashMap;

fn parse_date(s: &str) -> Option<NaiveDate> {
    s.parse().ok()
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Vec<Visit>> {
    // Malformed filter values match nothing rather than failing.
    let visits = if let (Some(pet), Some(date)) = (params.get("petId"), params.get("date")) {
        match (pet.parse::<i64>().ok(), parse_date(date)) {
            (Some(pet_id), Some(date)) => state.visits.find_by_pet_id_and_date(pet_id, date),
            _ => Vec::new(),
        }
    } else if let Some(pet) = params.get("petId") {
        match pet.parse::<i64>().ok() {
            Some(pet_id) => state.visits.find_by_pet_id(pet_id),
            None => Vec::new(),
        }
    } else if let Some(vet) = params.get("vetId") {
        match vet.parse::<i64>().ok() {
            Some(vet_id) => state.visits.find_by_vet_id(vet_id),
            None => Vec::new(),
        }
    } else if let Some(date) = params.get("date") {
        match parse_date(date) {
            Some(date) => state.visits.find_by_date(date),
            None => Vec::new(),
        }
    } else if let (Some(start), Some(end)) = (params.get("start"), params.get("end")) {
        match (parse_date(start), parse_date(end)) {
            (Some(start), Some(end)) => state.visits.find_by_date_range(start, end),
            _ => Vec::new(),
        }
    } else {
        state.visits.find_all()
    };
    Json(visits)
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Visit>, ClinicError> {
    Ok(Json(state.visits.find_by_id(id)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Visit>,
) -> (StatusCode, Json<Visit>) {
    (StatusCode::CREATED, Json(state.visits.create(body)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Visit>,
) -> Result<Json<Visit>, ClinicError> {
    let existing = state.visits.find_by_id(id)?;
    Ok(Json(state.visits.update(existing.merged_with(body))?))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ClinicError> {
    state.visits.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}
