//! Employee Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Employee ID type (the database record id, not the human-readable `EMPnnnn`)
pub type EmployeeId = RecordId;

/// Employment status of a staff record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    OnLeave,
    Terminated,
}

impl Default for EmployeeStatus {
    fn default() -> Self {
        Self::Active
    }
}

/// Employee model matching the SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub email: String,
    /// Human-readable identifier, `EMP` + zero-padded sequence
    pub employee_id: String,
    pub phone: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Carried over verbatim from the candidate on promotion
    #[serde(default)]
    pub resume: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: EmployeeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create employee payload (direct HR onboarding)
///
/// `employee_id` is allocated from the sequence when not supplied.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub employee_id: Option<String>,
    pub phone: String,
    pub position: String,
    pub department: Option<String>,
    pub resume: Option<String>,
    pub joining_date: Option<DateTime<Utc>>,
    pub status: Option<EmployeeStatus>,
}

/// Update employee payload (all optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub resume: Option<String>,
    pub joining_date: Option<DateTime<Utc>>,
    pub status: Option<EmployeeStatus>,
}

/// Status-only update payload (`PATCH /api/employees/{id}/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeStatusUpdate {
    pub status: EmployeeStatus,
}
