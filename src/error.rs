//! Typed errors and HTTP mapping.

use crate::model::VetSpecialtyId;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Service-level failures. Not-found kinds are per-entity so the boundary can
/// map each 1:1 to a 404.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClinicError {
    #[error("owner not found: {0}")]
    OwnerNotFound(i64),
    #[error("pet type not found: {0}")]
    PetTypeNotFound(i64),
    #[error("specialty not found: {0}")]
    SpecialtyNotFound(i64),
    #[error("vet not found: {0}")]
    VetNotFound(i64),
    #[error("vet-specialty association not found: vet {} specialty {}", .0.vet_id, .0.specialty_id)]
    VetSpecialtyNotFound(VetSpecialtyId),
    #[error("visit not found: {0}")]
    VisitNotFound(i64),
    #[error("association already exists: vet {} specialty {}", .0.vet_id, .0.specialty_id)]
    DuplicateAssociation(VetSpecialtyId),
    /// The association replace window: the pair at `lost` was removed and the
    /// create of `attempted` was rejected, so `lost` is gone with no rollback.
    #[error(
        "association replace failed: lost vet {} specialty {}, attempted vet {} specialty {}",
        .lost.vet_id, .lost.specialty_id, .attempted.vet_id, .attempted.specialty_id
    )]
    AssociationReplaceFailed {
        lost: VetSpecialtyId,
        attempted: VetSpecialtyId,
    },
    #[error("{entity} update requires an id")]
    MissingId { entity: &'static str },
}

impl ClinicError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ClinicError::OwnerNotFound(_)
                | ClinicError::PetTypeNotFound(_)
                | ClinicError::SpecialtyNotFound(_)
                | ClinicError::VetNotFound(_)
                | ClinicError::VetSpecialtyNotFound(_)
                | ClinicError::VisitNotFound(_)
        )
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ClinicError {
    fn into_response(self) -> Response {
        // Not-found conditions surface as a bare 404; the message text is not
        // part of the contract.
        if self.is_not_found() {
            return StatusCode::NOT_FOUND.into_response();
        }
        let (status, code, details) = match &self {
            ClinicError::DuplicateAssociation(key) => (
                StatusCode::CONFLICT,
                "duplicate_association",
                Some(serde_json::json!({
                    "vetId": key.vet_id,
                    "specialtyId": key.specialty_id,
                })),
            ),
            ClinicError::AssociationReplaceFailed { lost, attempted } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "association_replace_failed",
                // The lost pair is reported so it can be re-created by hand.
                Some(serde_json::json!({
                    "lost": { "vetId": lost.vet_id, "specialtyId": lost.specialty_id },
                    "attempted": { "vetId": attempted.vet_id, "specialtyId": attempted.specialty_id },
                })),
            ),
            ClinicError::MissingId { .. } => (StatusCode::BAD_REQUEST, "missing_id", None),
            _ => (StatusCode::NOT_FOUND, "not_found", None),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                details,
            },
        };
        (status, Json(body)).into_response()
    }
}
