//! Candidate Repository

use chrono::Utc;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Candidate, CandidateCreate, CandidateStatus};

#[derive(Clone)]
pub struct CandidateRepository {
    base: BaseRepository,
}

impl CandidateRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All candidates, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Candidate>> {
        let candidates: Vec<Candidate> = self
            .base
            .db()
            .query("SELECT * FROM candidate ORDER BY createdAt DESC")
            .await?
            .take(0)?;
        Ok(candidates)
    }

    /// Find candidate by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Candidate>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let candidate: Option<Candidate> = self.base.db().select(thing).await?;
        Ok(candidate)
    }

    /// Find candidate by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Candidate>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM candidate WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let candidates: Vec<Candidate> = result.take(0)?;
        Ok(candidates.into_iter().next())
    }

    /// Create a new candidate (pipeline entry, status starts at New)
    pub async fn create(&self, data: CandidateCreate) -> RepoResult<Candidate> {
        // The email must be free in the candidate pool AND the employee
        // directory: a candidate and an employee never share an identity.
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Candidate already exists with email '{}'",
                data.email
            )));
        }
        if self.email_held_by_employee(&data.email).await? {
            return Err(RepoError::Duplicate(format!(
                "An employee already exists with email '{}'",
                data.email
            )));
        }

        let now = Utc::now();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE candidate SET
                    name = $name,
                    email = $email,
                    phone = $phone,
                    position = $position,
                    experience = $experience,
                    resume = $resume,
                    department = $department,
                    status = $status,
                    createdAt = $created_at,
                    updatedAt = $updated_at
                RETURN AFTER"#,
            )
            .bind(("name", data.name))
            .bind(("email", data.email))
            .bind(("phone", data.phone))
            .bind(("position", data.position))
            .bind(("experience", data.experience.unwrap_or(0)))
            .bind(("resume", data.resume.unwrap_or_default()))
            .bind(("department", data.department))
            .bind(("status", CandidateStatus::New))
            .bind(("created_at", now))
            .bind(("updated_at", now))
            .await?;

        let created: Option<Candidate> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create candidate".to_string()))
    }

    /// Persist an already-merged candidate record
    pub async fn save(&self, candidate: Candidate) -> RepoResult<Candidate> {
        let thing = candidate
            .id
            .clone()
            .ok_or_else(|| RepoError::Validation("Candidate record has no id".to_string()))?;

        let mut result = self
            .base
            .db()
            .query(
                r#"UPDATE $thing SET
                    name = $name,
                    email = $email,
                    phone = $phone,
                    position = $position,
                    experience = $experience,
                    resume = $resume,
                    department = $department,
                    status = $status,
                    updatedAt = $updated_at
                RETURN AFTER"#,
            )
            .bind(("thing", thing.clone()))
            .bind(("name", candidate.name))
            .bind(("email", candidate.email))
            .bind(("phone", candidate.phone))
            .bind(("position", candidate.position))
            .bind(("experience", candidate.experience))
            .bind(("resume", candidate.resume))
            .bind(("department", candidate.department))
            .bind(("status", candidate.status))
            .bind(("updated_at", candidate.updated_at))
            .await?;

        result
            .take::<Option<Candidate>>(0)?
            .ok_or_else(|| RepoError::NotFound(format!("Candidate {} not found", thing)))
    }

    /// Hard delete a candidate
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Candidate {} not found", id)))?;

        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }

    async fn email_held_by_employee(&self, email: &str) -> RepoResult<bool> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM employee WHERE email = $email GROUP ALL")
            .bind(("email", email_owned))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0) > 0)
    }
}
