//! Attendance API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;
use crate::db::models::{Attendance, AttendanceCreate, AttendanceUpdate};
use crate::db::repository::AttendanceRepository;
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult};

/// List all attendance records
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Attendance>>> {
    let repo = AttendanceRepository::new(state.db.clone());
    let records = repo.find_all().await?;
    Ok(Json(records))
}

/// Record attendance for an employee (one record per employee per day)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AttendanceCreate>,
) -> AppResult<Response> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    if let Some(work_hours) = payload.work_hours
        && work_hours < 0.0
    {
        return Err(AppError::validation("workHours must not be negative"));
    }

    let repo = AttendanceRepository::new(state.db.clone());
    let record = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(record)).into_response())
}

/// Update an attendance record
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AttendanceUpdate>,
) -> AppResult<Json<Attendance>> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;
    if let Some(work_hours) = payload.work_hours
        && work_hours < 0.0
    {
        return Err(AppError::validation("workHours must not be negative"));
    }

    let repo = AttendanceRepository::new(state.db.clone());
    let record = repo.update(&id, payload).await?;
    Ok(Json(record))
}

/// Hard delete an attendance record
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = AttendanceRepository::new(state.db.clone());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
