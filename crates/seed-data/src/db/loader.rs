//! Script loading.

use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, info, warn};

use super::executor::{ScriptExecutor, ScriptTransaction};
use crate::script::split_statements;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("SQL script not found: {}", path.display())]
    AssetNotFound { path: PathBuf },

    #[error("Failed to read SQL script: {0}")]
    Io(#[from] io::Error),

    #[error("Statement {statement} failed: {source}")]
    Execution {
        /// 1-based position of the failing statement in the script.
        statement: usize,
        #[source]
        source: sqlx::Error,
    },

    #[error("Transaction error: {0}")]
    Transaction(#[source] sqlx::Error),
}

impl LoadError {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::AssetNotFound { .. } => "asset_not_found",
            LoadError::Io(_) => "io",
            LoadError::Execution { .. } => "execution",
            LoadError::Transaction(_) => "transaction",
        }
    }
}

/// Outcome of a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub statements: usize,
    pub rows_affected: u64,
}

/// Reads a SQL script as UTF-8 text.
pub fn read_script(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => LoadError::AssetNotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io(e),
    })
}

/// Executes `statements` in order inside one transaction.
///
/// Stops at the first failing statement and rolls the whole transaction
/// back; later statements are never sent. Commits once when all succeed.
pub async fn execute_statements<E>(
    executor: &E,
    statements: &[&str],
) -> Result<LoadSummary, LoadError>
where
    E: ScriptExecutor,
{
    let mut tx = executor.begin().await.map_err(LoadError::Transaction)?;
    let mut rows_affected = 0;

    for (i, statement) in statements.iter().enumerate() {
        match tx.execute(statement).await {
            Ok(rows) => {
                debug!("Statement {}/{} affected {rows} rows", i + 1, statements.len());
                rows_affected += rows;
            }
            Err(source) => {
                if let Err(e) = tx.rollback().await {
                    warn!("Rollback failed: {e}");
                }
                return Err(LoadError::Execution {
                    statement: i + 1,
                    source,
                });
            }
        }
    }

    tx.commit().await.map_err(LoadError::Transaction)?;

    Ok(LoadSummary {
        statements: statements.len(),
        rows_affected,
    })
}

/// Loads the SQL script at `path` into the database.
///
/// The script is read before any database work, so a missing file never
/// touches the executor.
pub async fn populate<E>(executor: &E, path: &Path) -> Result<LoadSummary, LoadError>
where
    E: ScriptExecutor,
{
    let script = read_script(path)?;
    let statements = split_statements(&script);

    info!(
        "Executing {} statements from {}",
        statements.len(),
        path.display()
    );

    execute_statements(executor, &statements).await
}
