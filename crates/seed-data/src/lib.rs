//! Reference data loading for the wellness backend.
//!
//! Loads SQL scripts such as the bundled `yoga_data.sql` into the database
//! as a single unit of work.
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = PgPool::connect(&database_url).await?;
//! let summary = populate(&pool, &default_script_path()).await?;
//! ```

pub mod config;
pub mod db;
pub mod script;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::LoaderConfig;
    pub use crate::db::{LoadError, LoadSummary, ScriptExecutor, ScriptTransaction, populate};
    pub use crate::script::{default_script_path, split_statements};
}
