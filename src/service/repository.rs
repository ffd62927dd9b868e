//! School persistence operations behind a trait so handlers do not depend on the backend.

use crate::error::StorageError;
use crate::geo::Coordinates;
use crate::model::{NearbySchool, NewSchool, School};
use crate::sql::{bind_params, insert_school, select_all, select_by_proximity};
use async_trait::async_trait;
use sqlx::{PgPool, Row};

#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Insert a school and return its store-assigned id.
    async fn create(&self, school: &NewSchool) -> Result<i64, StorageError>;

    /// Every school, in store order.
    async fn find_all(&self) -> Result<Vec<School>, StorageError>;

    /// Every school with its distance from `origin`, nearest first.
    async fn find_all_sorted_by_proximity(&self, origin: Coordinates) -> Result<Vec<NearbySchool>, StorageError>;
}

/// Repository backed by the shared PostgreSQL pool. Each call checks out one
/// connection for a single statement; the pool reclaims it on every exit path.
#[derive(Clone)]
pub struct PgSchoolRepository {
    pool: PgPool,
    schema: String,
}

impl PgSchoolRepository {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        PgSchoolRepository {
            pool,
            schema: schema.into(),
        }
    }
}

#[async_trait]
impl SchoolRepository for PgSchoolRepository {
    async fn create(&self, school: &NewSchool) -> Result<i64, StorageError> {
        let q = insert_school(&self.schema, school);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_params(sqlx::query(&q.sql), &q.params)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| log_failure("creating school", e))?;
        row.try_get::<i64, _>("id").map_err(|e| log_failure("creating school", e))
    }

    async fn find_all(&self) -> Result<Vec<School>, StorageError> {
        let q = select_all(&self.schema);
        tracing::debug!(sql = %q.sql, "query");
        let rows = sqlx::query(&q.sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| log_failure("fetching all schools", e))?;
        rows.iter()
            .map(School::from_row)
            .collect::<Result<_, _>>()
            .map_err(|e| log_failure("fetching all schools", e))
    }

    async fn find_all_sorted_by_proximity(&self, origin: Coordinates) -> Result<Vec<NearbySchool>, StorageError> {
        let q = select_by_proximity(&self.schema, origin.latitude, origin.longitude);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_params(sqlx::query(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| log_failure("fetching schools sorted by proximity", e))?;
        rows.iter()
            .map(NearbySchool::from_row)
            .collect::<Result<_, _>>()
            .map_err(|e| log_failure("fetching schools sorted by proximity", e))
    }
}

fn log_failure(action: &str, e: sqlx::Error) -> StorageError {
    let err = StorageError::from(e);
    tracing::error!(kind = ?err.kind, error = %err.source, "error {}", action);
    err
}
