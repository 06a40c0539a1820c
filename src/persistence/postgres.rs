//! PostgreSQL implementation of the employer store.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::models::{Employer, NewEmployer};
use super::{EmployerStore, StoreError};
use crate::config::AppConfig;

/// SQLSTATE raised by PostgreSQL on a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

type EmployerRow = (Uuid, String, String, String, NaiveDate, DateTime<Utc>, DateTime<Utc>);

/// Opens the process-wide connection pool.
///
/// # Errors
///
/// Returns the underlying `sqlx` error if no connection can be
/// established within the configured timeout.
pub async fn connect_pool(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await
}

/// PostgreSQL-backed employer store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresEmployerStore {
    pool: PgPool,
}

impl PostgresEmployerStore {
    /// Creates a store over the given connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployerStore for PostgresEmployerStore {
    async fn create(&self, employer: NewEmployer) -> Result<Employer, StoreError> {
        let row = sqlx::query_as::<_, EmployerRow>(
            "INSERT INTO employer (email, nome, situacao, data_admissao) VALUES ($1, $2, $3, $4) \
             RETURNING id, email, nome, situacao, data_admissao, created_at, updated_at",
        )
        .bind(&employer.email)
        .bind(&employer.name)
        .bind(&employer.status)
        .bind(employer.admission_date)
        .fetch_one(&self.pool)
        .await
        .map_err(classify)?;

        Ok(from_row(row))
    }

    async fn list(&self) -> Result<Vec<Employer>, StoreError> {
        let rows = sqlx::query_as::<_, EmployerRow>(
            "SELECT id, email, nome, situacao, data_admissao, created_at, updated_at FROM employer",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(classify)?;

        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(classify)?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// Maps a `sqlx` error onto the store taxonomy by SQLSTATE.
fn classify(error: sqlx::Error) -> StoreError {
    match &error {
        sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            StoreError::DuplicateKey
        }
        _ => StoreError::Unavailable(error.to_string()),
    }
}

fn from_row(
    (id, email, name, status, admission_date, created_at, updated_at): EmployerRow,
) -> Employer {
    Employer {
        id,
        email,
        name,
        status,
        admission_date,
        created_at,
        updated_at,
    }
}
