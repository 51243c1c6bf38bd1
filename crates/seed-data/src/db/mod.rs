//! Database integration for loading reference data.
//!
//! [`populate`] reads a SQL script and runs all of its statements inside a
//! single transaction: either every statement takes effect or none does.

mod executor;
mod loader;

pub use executor::{ScriptExecutor, ScriptTransaction};
pub use loader::{LoadError, LoadSummary, execute_statements, populate, read_script};
