//! In-memory employer store.
//!
//! Backs the application when `PERSISTENCE_ENABLED=false` and drives the
//! test suite. Records live in insertion order behind a
//! [`tokio::sync::RwLock`]; email uniqueness is checked under the write
//! lock so concurrent inserts of the same email cannot both succeed.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Employer, NewEmployer};
use super::{EmployerStore, StoreError};

/// Volatile store holding employers in a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryEmployerStore {
    employers: RwLock<Vec<Employer>>,
}

impl InMemoryEmployerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored employers.
    #[cfg(test)]
    pub(crate) async fn len(&self) -> usize {
        self.employers.read().await.len()
    }

    /// Returns `true` if no employer has been stored.
    #[cfg(test)]
    pub(crate) async fn is_empty(&self) -> bool {
        self.employers.read().await.is_empty()
    }
}

#[async_trait]
impl EmployerStore for InMemoryEmployerStore {
    async fn create(&self, employer: NewEmployer) -> Result<Employer, StoreError> {
        let mut employers = self.employers.write().await;
        if employers.iter().any(|e| e.email == employer.email) {
            return Err(StoreError::DuplicateKey);
        }

        let now = Utc::now();
        let stored = Employer {
            id: Uuid::new_v4(),
            email: employer.email,
            name: employer.name,
            status: employer.status,
            admission_date: employer.admission_date,
            created_at: now,
            updated_at: now,
        };
        employers.push(stored.clone());
        Ok(stored)
    }

    async fn list(&self) -> Result<Vec<Employer>, StoreError> {
        Ok(self.employers.read().await.clone())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
