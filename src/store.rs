//! PostgreSQL pool setup, liveness probe and school table bootstrap.

use crate::config::DatabaseConfig;
use crate::error::StorageError;
use crate::sql::{qualified_table, SCHOOL_TABLE};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Build the bounded pool. Connections are opened on first use, so an unreachable
/// database surfaces as request errors instead of stopping the process.
pub fn connect(config: &DatabaseConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_lazy_with(config.connect_options.clone())
}

/// Acquire one connection and release it. Reports the outcome; never fails.
pub async fn check_connection(pool: &PgPool) -> bool {
    match pool.acquire().await {
        Ok(conn) => {
            drop(conn);
            tracing::info!("successfully connected to the database");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "error connecting to the database");
            false
        }
    }
}

/// Create the school table in `schema` if it does not exist.
pub async fn ensure_school_table(pool: &PgPool, schema: &str) -> Result<(), StorageError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", crate::sql::quoted(schema)))
        .execute(pool)
        .await?;
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            "id" BIGSERIAL PRIMARY KEY,
            "name" TEXT NOT NULL UNIQUE CHECK ("name" <> ''),
            "address" TEXT NOT NULL CHECK ("address" <> ''),
            "latitude" DOUBLE PRECISION NOT NULL CHECK ("latitude" BETWEEN -90 AND 90),
            "longitude" DOUBLE PRECISION NOT NULL CHECK ("longitude" BETWEEN -180 AND 180)
        )
        "#,
        qualified_table(schema, SCHOOL_TABLE)
    );
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}
