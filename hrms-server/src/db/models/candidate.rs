//! Candidate Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Candidate ID type
pub type CandidateId = RecordId;

/// Hiring pipeline stage of a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    New,
    Scheduled,
    Ongoing,
    Selected,
    Rejected,
}

impl Default for CandidateStatus {
    fn default() -> Self {
        Self::New
    }
}

/// Candidate model matching the SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<CandidateId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    /// Years of experience
    #[serde(default)]
    pub experience: i64,
    /// Resume URL in the document store, empty if none was uploaded
    #[serde(default)]
    pub resume: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default)]
    pub status: CandidateStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create candidate payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CandidateCreate {
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone: String,
    pub position: String,
    pub experience: Option<i64>,
    pub resume: Option<String>,
    pub department: Option<String>,
}

/// Update candidate payload
///
/// Only supplied fields overwrite stored values; a `Selected` status may
/// trigger promotion instead of an in-place write (see `lifecycle`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub experience: Option<i64>,
    pub resume: Option<String>,
    pub department: Option<String>,
    pub status: Option<CandidateStatus>,
}
