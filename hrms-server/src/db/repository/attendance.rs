//! Attendance Repository

use chrono::{NaiveDate, Utc};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Attendance, AttendanceCreate, AttendanceUpdate};

#[derive(Clone)]
pub struct AttendanceRepository {
    base: BaseRepository,
}

impl AttendanceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All attendance records, newest day first
    pub async fn find_all(&self) -> RepoResult<Vec<Attendance>> {
        let records: Vec<Attendance> = self
            .base
            .db()
            .query("SELECT * FROM attendance ORDER BY date DESC")
            .await?
            .take(0)?;
        Ok(records)
    }

    /// Find attendance record by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Attendance>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let record: Option<Attendance> = self.base.db().select(thing).await?;
        Ok(record)
    }

    /// Find the attendance record of one employee for one day
    pub async fn find_by_employee_and_date(
        &self,
        employee: &RecordId,
        date: NaiveDate,
    ) -> RepoResult<Option<Attendance>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM attendance WHERE employee = $employee AND date = $date LIMIT 1")
            .bind(("employee", employee.clone()))
            .bind(("date", date))
            .await?;
        let records: Vec<Attendance> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Create an attendance record (one per employee per day)
    pub async fn create(&self, data: AttendanceCreate) -> RepoResult<Attendance> {
        let employee_thing: RecordId = data
            .employee
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", data.employee)))?;

        if self
            .find_by_employee_and_date(&employee_thing, data.date)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Attendance for {} on {} already recorded",
                data.employee, data.date
            )));
        }

        let now = Utc::now();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE attendance SET
                    employee = $employee,
                    date = $date,
                    status = $status,
                    checkIn = $check_in,
                    checkOut = $check_out,
                    workHours = $work_hours,
                    notes = $notes,
                    createdAt = $created_at,
                    updatedAt = $updated_at
                RETURN AFTER"#,
            )
            .bind(("employee", employee_thing))
            .bind(("date", data.date))
            .bind(("status", data.status))
            .bind(("check_in", data.check_in))
            .bind(("check_out", data.check_out))
            .bind(("work_hours", data.work_hours.unwrap_or(0.0)))
            .bind(("notes", data.notes))
            .bind(("created_at", now))
            .bind(("updated_at", now))
            .await?;

        let created: Option<Attendance> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create attendance record".to_string()))
    }

    /// Update an attendance record
    pub async fn update(&self, id: &str, data: AttendanceUpdate) -> RepoResult<Attendance> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    status = IF $has_status THEN $status ELSE status END,
                    checkIn = IF $has_check_in THEN $check_in ELSE checkIn END,
                    checkOut = IF $has_check_out THEN $check_out ELSE checkOut END,
                    workHours = IF $has_work_hours THEN $work_hours ELSE workHours END,
                    notes = IF $has_notes THEN $notes ELSE notes END,
                    updatedAt = $updated_at
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("has_status", data.status.is_some()))
            .bind(("status", data.status))
            .bind(("has_check_in", data.check_in.is_some()))
            .bind(("check_in", data.check_in))
            .bind(("has_check_out", data.check_out.is_some()))
            .bind(("check_out", data.check_out))
            .bind(("has_work_hours", data.work_hours.is_some()))
            .bind(("work_hours", data.work_hours))
            .bind(("has_notes", data.notes.is_some()))
            .bind(("notes", data.notes))
            .bind(("updated_at", Utc::now()))
            .await?;

        result
            .take::<Option<Attendance>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Attendance {} not found", id)))
    }

    /// Hard delete an attendance record
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Attendance {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
