//! Candidate Lifecycle
//!
//! Owns the status state machine of the hiring pipeline and the one
//! transition with real side effects: promoting a candidate into an
//! employee. Promotion is a move, not a copy. The employee insert and the
//! candidate delete run in one store transaction, so no candidate record
//! survives a successful promotion and a failed one changes nothing.
//!
//! Any status can be written over any other status; only a request moving
//! a candidate TO `Selected` from a different stored status promotes
//! instead of writing in place. A candidate already stored as `Selected`
//! receiving another `Selected` update is a plain (no-op) status write.

pub mod allocator;

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{
    Candidate, CandidateStatus, CandidateUpdate, Employee, EmployeeCreate, EmployeeStatus,
};
use crate::db::repository::{CandidateRepository, EmployeeRepository};
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, MAX_URL_LEN, validate_non_negative,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Result of a candidate update: either the candidate was written in
/// place, or it was promoted and an employee exists instead. Callers
/// dispatch on the variant since the two outcomes have different
/// response shapes.
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(Candidate),
    Promoted(Employee),
}

/// Coordinates candidate status transitions across the candidate pool and
/// the employee directory.
#[derive(Clone)]
pub struct LifecycleManager {
    candidates: CandidateRepository,
    employees: EmployeeRepository,
}

impl LifecycleManager {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            candidates: CandidateRepository::new(db.clone()),
            employees: EmployeeRepository::new(db),
        }
    }

    /// Apply a partial update to a candidate.
    ///
    /// Supplied scalar fields are merged over stored values; a
    /// supplied-but-empty required field is a validation error and leaves
    /// the record untouched. A merge that moves the status to `Selected`
    /// from any other stored status triggers promotion.
    pub async fn update_candidate(
        &self,
        id: &str,
        update: CandidateUpdate,
    ) -> AppResult<UpdateOutcome> {
        let mut candidate = self
            .candidates
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Candidate {} not found", id)))?;

        let previous_email = candidate.email.clone();

        validate_optional_text(&update.resume, "resume", MAX_URL_LEN)?;
        validate_optional_text(&update.department, "department", MAX_NAME_LEN)?;

        merge_required(&mut candidate.name, update.name, "name", MAX_NAME_LEN)?;
        merge_required(&mut candidate.email, update.email, "email", MAX_EMAIL_LEN)?;
        merge_required(&mut candidate.phone, update.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        merge_required(
            &mut candidate.position,
            update.position,
            "position",
            MAX_NAME_LEN,
        )?;

        if let Some(experience) = update.experience {
            validate_non_negative(experience, "experience")?;
            candidate.experience = experience;
        }
        if let Some(resume) = update.resume {
            candidate.resume = resume;
        }
        if let Some(department) = update.department {
            candidate.department = if department.trim().is_empty() {
                None
            } else {
                Some(department)
            };
        }

        // Changing the email must not collide with any identity in either
        // collection.
        if candidate.email != previous_email {
            if self.candidates.find_by_email(&candidate.email).await?.is_some() {
                return Err(AppError::conflict(format!(
                    "Candidate already exists with email '{}'",
                    candidate.email
                )));
            }
            if self.employees.find_by_email(&candidate.email).await?.is_some() {
                return Err(AppError::conflict(format!(
                    "Employee already exists with email '{}'",
                    candidate.email
                )));
            }
        }

        // The one transition with cross-collection side effects: moving TO
        // Selected from any other stored status converts the candidate.
        if update.status == Some(CandidateStatus::Selected)
            && candidate.status != CandidateStatus::Selected
        {
            let employee = self.promote(candidate).await?;
            return Ok(UpdateOutcome::Promoted(employee));
        }

        if let Some(status) = update.status {
            candidate.status = status;
        }
        candidate.updated_at = Utc::now();

        let saved = self.candidates.save(candidate).await?;
        Ok(UpdateOutcome::Updated(saved))
    }

    /// Convert a candidate into an employee and remove it from the pool.
    async fn promote(&self, candidate: Candidate) -> AppResult<Employee> {
        let candidate_id = candidate
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Loaded candidate has no record id"))?;

        let seq = self.employees.next_employee_seq().await?;
        let employee_id = allocator::allocate(seq);

        let now = Utc::now();
        let employee = Employee {
            id: None,
            name: candidate.name,
            email: candidate.email,
            employee_id,
            phone: candidate.phone,
            position: candidate.position,
            department: candidate.department,
            resume: candidate.resume,
            joining_date: Some(now),
            status: EmployeeStatus::Active,
            created_at: now,
            updated_at: now,
        };

        let created = self
            .employees
            .create_from_candidate(employee, &candidate_id)
            .await?;

        tracing::info!(
            candidate = %candidate_id,
            employee_id = %created.employee_id,
            "candidate promoted to employee"
        );
        Ok(created)
    }

    /// Direct HR onboarding: build and insert an employee record,
    /// allocating an `EMPnnnn` id when the caller does not supply one.
    pub async fn onboard(&self, data: EmployeeCreate) -> AppResult<Employee> {
        validate_required_text(&data.name, "name", MAX_NAME_LEN)?;
        validate_required_text(&data.email, "email", MAX_EMAIL_LEN)?;
        validate_required_text(&data.phone, "phone", MAX_SHORT_TEXT_LEN)?;
        validate_required_text(&data.position, "position", MAX_NAME_LEN)?;

        let employee_id = match data.employee_id {
            Some(id) => {
                validate_required_text(&id, "employeeId", MAX_SHORT_TEXT_LEN)?;
                id
            }
            None => allocator::allocate(self.employees.next_employee_seq().await?),
        };

        let now = Utc::now();
        let employee = Employee {
            id: None,
            name: data.name,
            email: data.email,
            employee_id,
            phone: data.phone,
            position: data.position,
            department: data.department,
            resume: data.resume.unwrap_or_default(),
            joining_date: data.joining_date,
            status: data.status.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        let created = self.employees.create(employee).await?;
        Ok(created)
    }
}

/// Merge a supplied value over a stored required field. Absent input keeps
/// the stored value; empty or oversized input is rejected.
fn merge_required(
    current: &mut String,
    incoming: Option<String>,
    field: &str,
    max_len: usize,
) -> AppResult<()> {
    if let Some(value) = incoming {
        validate_required_text(&value, field, max_len)?;
        *current = value;
    }
    Ok(())
}
