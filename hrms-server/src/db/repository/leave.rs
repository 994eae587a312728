//! Leave Repository

use chrono::Utc;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeStatus, Leave, LeaveCreate, LeaveStatus, LeaveUpdate};

#[derive(Clone)]
pub struct LeaveRepository {
    base: BaseRepository,
}

impl LeaveRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All leave requests, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Leave>> {
        let leaves: Vec<Leave> = self
            .base
            .db()
            .query("SELECT * FROM leave ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(leaves)
    }

    /// Find leave by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Leave>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let leave: Option<Leave> = self.base.db().select(thing).await?;
        Ok(leave)
    }

    /// Create a leave request
    ///
    /// Only employees that exist and are currently active may request leave.
    pub async fn create(&self, data: LeaveCreate) -> RepoResult<Leave> {
        let employee_thing: RecordId = data
            .employee
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", data.employee)))?;

        let employee: Option<Employee> = self.base.db().select(employee_thing.clone()).await?;
        let employee =
            employee.ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", data.employee)))?;
        if employee.status != EmployeeStatus::Active {
            return Err(RepoError::Validation(
                "Only active employees can request leave".to_string(),
            ));
        }

        if data.end_date < data.start_date {
            return Err(RepoError::Validation(
                "endDate must not be before startDate".to_string(),
            ));
        }

        let now = Utc::now();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE leave SET
                    employee = $employee,
                    leaveType = $leave_type,
                    startDate = $start_date,
                    endDate = $end_date,
                    totalDays = $total_days,
                    reason = $reason,
                    status = $status,
                    createdAt = $created_at,
                    updatedAt = $updated_at
                RETURN AFTER"#,
            )
            .bind(("employee", employee_thing))
            .bind(("leave_type", data.leave_type))
            .bind(("start_date", data.start_date))
            .bind(("end_date", data.end_date))
            .bind(("total_days", data.total_days))
            .bind(("reason", data.reason))
            .bind(("status", LeaveStatus::Pending))
            .bind(("created_at", now))
            .bind(("updated_at", now))
            .await?;

        let created: Option<Leave> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create leave".to_string()))
    }

    /// Update a leave request
    pub async fn update(&self, id: &str, data: LeaveUpdate) -> RepoResult<Leave> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    leaveType = IF $has_leave_type THEN $leave_type ELSE leaveType END,
                    startDate = IF $has_start_date THEN $start_date ELSE startDate END,
                    endDate = IF $has_end_date THEN $end_date ELSE endDate END,
                    totalDays = IF $has_total_days THEN $total_days ELSE totalDays END,
                    reason = $reason OR reason,
                    status = IF $has_status THEN $status ELSE status END,
                    updatedAt = $updated_at
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("has_leave_type", data.leave_type.is_some()))
            .bind(("leave_type", data.leave_type))
            .bind(("has_start_date", data.start_date.is_some()))
            .bind(("start_date", data.start_date))
            .bind(("has_end_date", data.end_date.is_some()))
            .bind(("end_date", data.end_date))
            .bind(("has_total_days", data.total_days.is_some()))
            .bind(("total_days", data.total_days))
            .bind(("reason", data.reason))
            .bind(("has_status", data.status.is_some()))
            .bind(("status", data.status))
            .bind(("updated_at", Utc::now()))
            .await?;

        result
            .take::<Option<Leave>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Leave {} not found", id)))
    }

    /// Hard delete a leave request
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Leave {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
