//! Candidate API Handlers
//!
//! `update` is the lifecycle entry point: its response is polymorphic on
//! whether the update promoted the candidate (201 + employee) or wrote it
//! in place (200 + candidate).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{Candidate, CandidateCreate, CandidateUpdate, Employee};
use crate::db::repository::CandidateRepository;
use crate::lifecycle::{LifecycleManager, UpdateOutcome};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text,
};
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
struct CandidateMessage {
    message: &'static str,
    candidate: Candidate,
}

#[derive(Serialize)]
struct PromotedMessage {
    message: &'static str,
    employee: Employee,
}

/// List all candidates
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Candidate>>> {
    let repo = CandidateRepository::new(state.db.clone());
    let candidates = repo.find_all().await?;
    Ok(Json(candidates))
}

/// Get candidate by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Candidate>> {
    let repo = CandidateRepository::new(state.db.clone());
    let candidate = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Candidate {} not found", id)))?;
    Ok(Json(candidate))
}

/// Create a new candidate (application submission)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CandidateCreate>,
) -> AppResult<Response> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&payload.position, "position", MAX_NAME_LEN)?;
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    if let Some(experience) = payload.experience
        && experience < 0
    {
        return Err(AppError::validation("experience must not be negative"));
    }

    let repo = CandidateRepository::new(state.db.clone());
    let candidate = repo.create(payload).await?;

    let body = Json(CandidateMessage {
        message: "Candidate created successfully",
        candidate,
    });
    Ok((StatusCode::CREATED, body).into_response())
}

/// Update a candidate; a `Selected` status may promote it to an employee
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CandidateUpdate>,
) -> AppResult<Response> {
    let manager = LifecycleManager::new(state.db.clone());
    match manager.update_candidate(&id, payload).await? {
        UpdateOutcome::Updated(candidate) => {
            let body = Json(CandidateMessage {
                message: "Candidate updated successfully",
                candidate,
            });
            Ok((StatusCode::OK, body).into_response())
        }
        UpdateOutcome::Promoted(employee) => {
            let body = Json(PromotedMessage {
                message: "Candidate converted to employee and removed from candidates",
                employee,
            });
            Ok((StatusCode::CREATED, body).into_response())
        }
    }
}

/// Hard delete a candidate
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CandidateRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
