//! Leave API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;
use crate::db::models::{Leave, LeaveCreate, LeaveUpdate};
use crate::db::repository::LeaveRepository;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};

/// List all leave requests
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Leave>>> {
    let repo = LeaveRepository::new(state.db.clone());
    let leaves = repo.find_all().await?;
    Ok(Json(leaves))
}

/// Create a leave request
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<LeaveCreate>,
) -> AppResult<Response> {
    validate_required_text(&payload.reason, "reason", MAX_NOTE_LEN)?;
    if payload.total_days <= 0.0 {
        return Err(AppError::validation("totalDays must be positive"));
    }

    let repo = LeaveRepository::new(state.db.clone());
    let leave = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(leave)).into_response())
}

/// Update a leave request (typically the approval status)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<LeaveUpdate>,
) -> AppResult<Json<Leave>> {
    validate_optional_text(&payload.reason, "reason", MAX_NOTE_LEN)?;
    if let Some(total_days) = payload.total_days
        && total_days <= 0.0
    {
        return Err(AppError::validation("totalDays must be positive"));
    }

    let repo = LeaveRepository::new(state.db.clone());
    let leave = repo.update(&id, payload).await?;
    Ok(Json(leave))
}

/// Hard delete a leave request
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = LeaveRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
