//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables backing the HR domain.

pub mod attendance;
pub mod candidate;
pub mod employee;
pub mod leave;

// Re-exports
pub use attendance::AttendanceRepository;
pub use candidate::CandidateRepository;
pub use employee::EmployeeRepository;
pub use leave::LeaveRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings everywhere outside the store
// =============================================================================
//
// surrealdb::RecordId handles all ids:
//   - parse:   let id: RecordId = "employee:abc".parse()?;
//   - table:   id.table()
//   - key:     id.key().to_string()
//   - CRUD:    db.select(id) / db.delete(id) take a RecordId directly

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
