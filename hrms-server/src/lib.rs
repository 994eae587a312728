//! HRMS Server - human resources management backend
//!
//! # Architecture overview
//!
//! - **HTTP API** (`api`): RESTful routes for the hiring pipeline,
//!   employee directory, leave requests and attendance
//! - **Candidate lifecycle** (`lifecycle`): status state machine and the
//!   candidate → employee promotion, plus employee id allocation
//! - **Database** (`db`): embedded SurrealDB storage, models and
//!   repositories
//! - **Core** (`core`): configuration, state, server startup
//!
//! # Module structure
//!
//! ```text
//! hrms-server/src/
//! ├── core/          # configuration, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── lifecycle/     # candidate promotion + id allocator
//! ├── db/            # models and repositories
//! └── utils/         # errors, logging, validation
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod lifecycle;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::DbService;
pub use crate::lifecycle::{LifecycleManager, UpdateOutcome};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging. Call once, before anything else.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   __  ______  __  ________
  / / / / __ \/  |/  / ___/
 / /_/ / /_/ / /|_/ /\__ \
/ __  / _, _/ /  / /___/ /
/_/ /_/_/ |_/_/  /_//____/
    "#
    );
}
