//! Employee Repository
//!
//! Also owns the `counter` record backing the human-readable employee id
//! sequence. The sequence is advanced with an atomic `UPSERT ... += 1` so
//! concurrent allocations never observe the same value.

use chrono::Utc;
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeStatus, EmployeeUpdate};

/// Record id of the employee id sequence counter
const SEQ_COUNTER: (&str, &str) = ("counter", "employee_id");

#[derive(Debug, Deserialize)]
struct Counter {
    value: i64,
}

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All employees, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let employee: Option<Employee> = self.base.db().select(thing).await?;
        Ok(employee)
    }

    /// Find employee by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Find employee by the human-readable `EMPnnnn` identifier
    pub async fn find_by_employee_id(&self, employee_id: &str) -> RepoResult<Option<Employee>> {
        let id_owned = employee_id.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE employeeId = $employee_id LIMIT 1")
            .bind(("employee_id", id_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Number of employee records
    pub async fn count(&self) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM employee GROUP ALL")
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Advance the employee id sequence and return the new 1-based value.
    ///
    /// The counter is seeded from the live employee count the first time
    /// through, so ids continue after records onboarded with manual ids.
    /// The increment itself is a single atomic UPSERT; the unique index on
    /// `employeeId` backstops the one-time seeding race.
    pub async fn next_employee_seq(&self) -> RepoResult<u64> {
        let existing: Option<Counter> = self.base.db().select(SEQ_COUNTER).await?;
        if existing.is_none() {
            let count = self.count().await?;
            self.base
                .db()
                .query("CREATE counter:employee_id SET value = $value")
                .bind(("value", count))
                .await?;
        }

        let mut result = self
            .base
            .db()
            .query("UPSERT counter:employee_id SET value += 1 RETURN AFTER")
            .await?;
        let counter: Option<Counter> = result.take(0)?;
        counter
            .map(|c| c.value as u64)
            .ok_or_else(|| RepoError::Database("Failed to advance employee id sequence".to_string()))
    }

    /// Insert a fully-built employee record (direct HR onboarding)
    pub async fn create(&self, employee: Employee) -> RepoResult<Employee> {
        self.check_email_free(&employee.email).await?;
        if self.email_held_by_candidate(&employee.email).await? {
            return Err(RepoError::Duplicate(format!(
                "A candidate already exists with email '{}'",
                employee.email
            )));
        }
        self.check_employee_id_free(&employee.employee_id).await?;

        self.insert(employee).await
    }

    /// Promote a candidate: insert the employee and delete the candidate
    /// record in one store transaction, so a failure leaves both
    /// collections untouched.
    pub async fn create_from_candidate(
        &self,
        employee: Employee,
        candidate_id: &RecordId,
    ) -> RepoResult<Employee> {
        self.check_email_free(&employee.email).await?;
        self.check_employee_id_free(&employee.employee_id).await?;

        let mut result = self
            .base
            .db()
            .query(
                r#"BEGIN TRANSACTION;
                CREATE employee SET
                    name = $name,
                    email = $email,
                    employeeId = $employee_id,
                    phone = $phone,
                    position = $position,
                    department = $department,
                    resume = $resume,
                    joiningDate = $joining_date,
                    status = $status,
                    createdAt = $created_at,
                    updatedAt = $updated_at
                RETURN AFTER;
                DELETE $candidate;
                COMMIT TRANSACTION;"#,
            )
            .bind(("name", employee.name))
            .bind(("email", employee.email))
            .bind(("employee_id", employee.employee_id))
            .bind(("phone", employee.phone))
            .bind(("position", employee.position))
            .bind(("department", employee.department))
            .bind(("resume", employee.resume))
            .bind(("joining_date", employee.joining_date))
            .bind(("status", employee.status))
            .bind(("created_at", employee.created_at))
            .bind(("updated_at", employee.updated_at))
            .bind(("candidate", candidate_id.clone()))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Update an employee
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        // Check duplicate email if changing
        if let Some(ref new_email) = data.email
            && new_email != &existing.email
        {
            self.check_email_free(new_email).await?;
            if self.email_held_by_candidate(new_email).await? {
                return Err(RepoError::Duplicate(format!(
                    "A candidate already exists with email '{}'",
                    new_email
                )));
            }
        }

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name OR name,
                    email = $email OR email,
                    phone = $phone OR phone,
                    position = $position OR position,
                    resume = $resume OR resume,
                    department = IF $has_department THEN $department ELSE department END,
                    joiningDate = IF $has_joining_date THEN $joining_date ELSE joiningDate END,
                    status = IF $has_status THEN $status ELSE status END,
                    updatedAt = $updated_at
                RETURN AFTER"#,
            )
            .bind(("thing", thing))
            .bind(("name", data.name))
            .bind(("email", data.email))
            .bind(("phone", data.phone))
            .bind(("position", data.position))
            .bind(("resume", data.resume))
            .bind(("has_department", data.department.is_some()))
            .bind(("department", data.department))
            .bind(("has_joining_date", data.joining_date.is_some()))
            .bind(("joining_date", data.joining_date))
            .bind(("has_status", data.status.is_some()))
            .bind(("status", data.status))
            .bind(("updated_at", Utc::now()))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Status-only update
    pub async fn update_status(&self, id: &str, status: EmployeeStatus) -> RepoResult<Employee> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        let mut result = self
            .base
            .db()
            .query("UPDATE $thing SET status = $status, updatedAt = $updated_at RETURN AFTER")
            .bind(("thing", thing))
            .bind(("status", status))
            .bind(("updated_at", Utc::now()))
            .await?;

        result
            .take::<Option<Employee>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Hard delete an employee
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    async fn insert(&self, employee: Employee) -> RepoResult<Employee> {
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE employee SET
                    name = $name,
                    email = $email,
                    employeeId = $employee_id,
                    phone = $phone,
                    position = $position,
                    department = $department,
                    resume = $resume,
                    joiningDate = $joining_date,
                    status = $status,
                    createdAt = $created_at,
                    updatedAt = $updated_at
                RETURN AFTER"#,
            )
            .bind(("name", employee.name))
            .bind(("email", employee.email))
            .bind(("employee_id", employee.employee_id))
            .bind(("phone", employee.phone))
            .bind(("position", employee.position))
            .bind(("department", employee.department))
            .bind(("resume", employee.resume))
            .bind(("joining_date", employee.joining_date))
            .bind(("status", employee.status))
            .bind(("created_at", employee.created_at))
            .bind(("updated_at", employee.updated_at))
            .await?;

        let created: Option<Employee> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    async fn check_email_free(&self, email: &str) -> RepoResult<()> {
        if self.find_by_email(email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee already exists with email '{}'",
                email
            )));
        }
        Ok(())
    }

    async fn check_employee_id_free(&self, employee_id: &str) -> RepoResult<()> {
        if self.find_by_employee_id(employee_id).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Employee already exists with id '{}'",
                employee_id
            )));
        }
        Ok(())
    }

    async fn email_held_by_candidate(&self, email: &str) -> RepoResult<bool> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM candidate WHERE email = $email GROUP ALL")
            .bind(("email", email_owned))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) > 0)
    }
}
