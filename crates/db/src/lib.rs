pub mod checklist;
pub mod gastos;
pub mod metas;
pub mod semanas;

use std::str::FromStr;

use financeiro_common::error::{FinanceiroError, FinanceiroResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Create a SQLite connection pool from a database URL.
///
/// The pool is capped at one connection: every operation touches a single
/// row synchronously, and with `sqlite::memory:` each extra connection
/// would see its own empty database.
pub async fn create_pool(database_url: &str) -> FinanceiroResult<SqlitePool> {
    tracing::info!("connecting to database");
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| FinanceiroError::Database(e.to_string()))?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))
}

/// Apply pending migrations: the four tables plus the checklist seed rows.
pub async fn run_migrations(pool: &SqlitePool) -> FinanceiroResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| FinanceiroError::Database(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_pool_fails_with_a_non_sqlite_url() {
        let result = create_pool("postgres://localhost:5432/financeiro").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn migrations_apply_on_a_fresh_database() {
        let pool = create_pool("sqlite::memory:").await.expect("pool");
        run_migrations(&pool).await.expect("migrations");

        let count: i64 = sqlx::query_scalar("select count(*) from checklist_items")
            .fetch_one(&pool)
            .await
            .expect("seeded checklist");
        assert_eq!(count, 4);
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let pool = create_pool("sqlite::memory:").await.expect("pool");
        run_migrations(&pool).await.expect("first run");
        run_migrations(&pool).await.expect("second run");

        let count: i64 = sqlx::query_scalar("select count(*) from checklist_items")
            .fetch_one(&pool)
            .await
            .expect("seeded checklist");
        assert_eq!(count, 4);
    }
}
