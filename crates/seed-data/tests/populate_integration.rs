//! Integration tests for script loading against PostgreSQL.
//!
//! To run these tests, you need a PostgreSQL database and the DATABASE_URL
//! environment variable set. Each test works on its own scratch table.
//!
//! Run with: `DATABASE_URL=postgres://... cargo test -p seed-data --test populate_integration`

use std::env;
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use seed_data::prelude::*;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

fn scratch_table(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    format!("{prefix}_{}_{nanos}", std::process::id())
}

fn script_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

async fn table_exists(pool: &PgPool, table: &str) -> bool {
    let name: Option<String> = sqlx::query_scalar("SELECT to_regclass($1)::text")
        .bind(table)
        .fetch_one(pool)
        .await
        .unwrap();
    name.is_some()
}

#[tokio::test]
async fn test_successful_script_commits_everything() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = scratch_table("load_ok");
    let file = script_file(&format!(
        "CREATE TABLE {table} (id INTEGER PRIMARY KEY);\n\
         INSERT INTO {table} VALUES (1);  ;\n\
         INSERT INTO {table} VALUES (2);\n"
    ));

    let summary = populate(&pool, file.path()).await.unwrap();
    assert_eq!(summary.statements, 3);
    assert_eq!(summary.rows_affected, 2);

    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);

    let _ = sqlx::query(&format!("DROP TABLE {table}"))
        .execute(&pool)
        .await;
}

#[tokio::test]
async fn test_failing_statement_rolls_back_whole_script() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    let table = scratch_table("load_fail");
    let file = script_file(&format!(
        "CREATE TABLE {table} (id INTEGER PRIMARY KEY);\n\
         INSERT INTO {table} VALUES (1);\n\
         INSERT INTO {table} VALUES (1);\n\
         INSERT INTO {table} VALUES (3);\n"
    ));

    let err = populate(&pool, file.path()).await.unwrap_err();

    assert!(matches!(err, LoadError::Execution { statement: 3, .. }));
    assert!(!table_exists(&pool, &table).await);
}
