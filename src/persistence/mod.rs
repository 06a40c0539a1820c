//! Persistence gateway for the `employer` table.
//!
//! Exposes the [`EmployerStore`] trait for the two operations the
//! application needs (insert-one, list-all) and two backends: a
//! PostgreSQL implementation over `sqlx::PgPool` and an in-memory
//! implementation used when persistence is disabled.

pub mod memory;
pub mod models;
pub mod postgres;

use async_trait::async_trait;

pub use memory::InMemoryEmployerStore;
pub use models::{Employer, NewEmployer};
pub use postgres::{PostgresEmployerStore, connect_pool};

/// Errors raised by an [`EmployerStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record with the same email already exists.
    #[error("duplicate key: email already exists")]
    DuplicateKey,

    /// The store could not complete the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Data-access port for employer records.
///
/// Email uniqueness is enforced by the backend, never by callers.
#[async_trait]
pub trait EmployerStore: Send + Sync + std::fmt::Debug {
    /// Inserts a new employer and returns the stored record, including
    /// the generated id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateKey`] if the email is taken and
    /// [`StoreError::Unavailable`] on any other failure.
    async fn create(&self, employer: NewEmployer) -> Result<Employer, StoreError>;

    /// Returns every employer in store-native order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] on store failure.
    async fn list(&self) -> Result<Vec<Employer>, StoreError>;

    /// Checks that the store can serve requests.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when the backend is unreachable.
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name used in logs and health reports.
    fn backend(&self) -> &'static str;
}
