//! Attendance Model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

/// Attendance ID type
pub type AttendanceId = RecordId;

/// Daily attendance state of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
    OnLeave,
}

/// Geographic coordinates captured at check-in/check-out
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A check-in or check-out event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckEvent {
    pub time: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

/// Attendance record, unique per (employee, date)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<AttendanceId>,
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<CheckEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<CheckEvent>,
    #[serde(default)]
    pub work_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create attendance payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceCreate {
    /// Employee record id, `"employee:..."`
    pub employee: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<CheckEvent>,
    pub check_out: Option<CheckEvent>,
    pub work_hours: Option<f64>,
    pub notes: Option<String>,
}

/// Update attendance payload (all optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    pub status: Option<AttendanceStatus>,
    pub check_in: Option<CheckEvent>,
    pub check_out: Option<CheckEvent>,
    pub work_hours: Option<f64>,
    pub notes: Option<String>,
}
