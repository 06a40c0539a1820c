//! Employer records as stored and as submitted for insertion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A stored row of the `employer` table.
///
/// Serialized with the column names used by the HTTP API
/// (`nome`, `situacao`, `data_admissao`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employer {
    /// Store-generated identifier.
    pub id: Uuid,
    /// Unique contact email.
    pub email: String,
    /// Employer name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Free-text status (e.g. `"ativo"`).
    #[serde(rename = "situacao")]
    pub status: String,
    /// Admission date, serialized as `YYYY-MM-DD`.
    #[serde(rename = "data_admissao")]
    pub admission_date: NaiveDate,
    /// Set by the store on insert.
    pub created_at: DateTime<Utc>,
    /// Maintained by the store.
    pub updated_at: DateTime<Utc>,
}

/// The four client-supplied fields of a new employer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployer {
    /// Unique contact email.
    pub email: String,
    /// Employer name.
    pub name: String,
    /// Free-text status.
    pub status: String,
    /// Admission date.
    pub admission_date: NaiveDate,
}
