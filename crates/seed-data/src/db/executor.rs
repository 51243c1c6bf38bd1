//! Transactional statement execution.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

/// Something that can open a transaction to run script statements in.
#[async_trait]
pub trait ScriptExecutor: Send + Sync {
    type Transaction: ScriptTransaction;

    async fn begin(&self) -> Result<Self::Transaction, sqlx::Error>;
}

/// An open transaction. Dropping it without committing discards its effects.
#[async_trait]
pub trait ScriptTransaction: Send {
    /// Executes one raw statement and returns the number of rows it affected.
    async fn execute(&mut self, statement: &str) -> Result<u64, sqlx::Error>;

    async fn commit(self) -> Result<(), sqlx::Error>;

    async fn rollback(self) -> Result<(), sqlx::Error>;
}

#[async_trait]
impl ScriptExecutor for PgPool {
    type Transaction = Transaction<'static, Postgres>;

    async fn begin(&self) -> Result<Self::Transaction, sqlx::Error> {
        sqlx::Pool::begin(self).await
    }
}

#[async_trait]
impl ScriptTransaction for Transaction<'static, Postgres> {
    async fn execute(&mut self, statement: &str) -> Result<u64, sqlx::Error> {
        // Simple protocol, so DDL and arbitrary statements go through unprepared
        let result = sqlx::Executor::execute(&mut **self, sqlx::raw_sql(statement)).await?;
        Ok(result.rows_affected())
    }

    async fn commit(self) -> Result<(), sqlx::Error> {
        Transaction::commit(self).await
    }

    async fn rollback(self) -> Result<(), sqlx::Error> {
        Transaction::rollback(self).await
    }
}
