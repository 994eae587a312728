//! Leave Request Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Leave ID type
pub type LeaveId = RecordId;

/// Category of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Casual,
    Sick,
    Annual,
    Maternity,
    Paternity,
    Unpaid,
    Other,
}

/// Approval state of a leave request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
    Cancelled,
}

impl Default for LeaveStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Leave request model matching the SurrealDB schema
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leave {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<LeaveId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    pub leave_type: LeaveType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_days: f64,
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create leave payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveCreate {
    /// Employee record id, `"employee:..."`
    pub employee: String,
    pub leave_type: LeaveType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub total_days: f64,
    pub reason: String,
}

/// Update leave payload (all optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveUpdate {
    pub leave_type: Option<LeaveType>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub total_days: Option<f64>,
    pub reason: Option<String>,
    pub status: Option<LeaveStatus>,
}
