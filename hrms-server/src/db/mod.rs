//! Database Module
//!
//! Owns the embedded SurrealDB instance and the schema (unique indexes)
//! backing the HR collections.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Namespace / database name used by the server
const DB_NS: &str = "hrms";
const DB_NAME: &str = "hrms";

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database and apply the schema
    pub async fn new(db_dir: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        db.use_ns(DB_NS)
            .use_db(DB_NAME)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        init_schema(&db).await?;
        tracing::info!("Database ready at {}", db_dir.display());

        Ok(Self { db })
    }
}

/// Apply idempotent schema definitions.
///
/// Identity uniqueness (candidate email, employee email, employee id) and
/// the one-record-per-employee-per-day attendance rule are enforced at the
/// store level; application-level checks exist only to produce friendlier
/// errors.
pub async fn init_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE INDEX IF NOT EXISTS candidate_email ON TABLE candidate FIELDS email UNIQUE;
        DEFINE INDEX IF NOT EXISTS employee_email ON TABLE employee FIELDS email UNIQUE;
        DEFINE INDEX IF NOT EXISTS employee_employee_id ON TABLE employee FIELDS employeeId UNIQUE;
        DEFINE INDEX IF NOT EXISTS attendance_employee_date ON TABLE attendance FIELDS employee, date UNIQUE;
        "#,
    )
    .await
    .and_then(|response| response.check())
    .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;
    Ok(())
}
