//! Request body for `POST /api/employers` and its validation.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::error::{ApiError, MISSING_FIELDS};
use crate::persistence::NewEmployer;

/// Message returned when `data_admissao` is not a `YYYY-MM-DD` date.
pub const INVALID_ADMISSION_DATE: &str = "Data de admissão inválida.";

/// Request body for `POST /api/employers`.
///
/// Every field is optional at the wire level so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateEmployerRequest {
    /// Unique contact email.
    #[serde(default)]
    pub email: Option<String>,
    /// Employer name.
    #[serde(default)]
    pub nome: Option<String>,
    /// Free-text status.
    #[serde(default)]
    pub situacao: Option<String>,
    /// Admission date as `YYYY-MM-DD`.
    #[serde(default)]
    #[schema(example = "2024-01-01")]
    pub data_admissao: Option<String>,
}

impl CreateEmployerRequest {
    /// Checks that all four fields are present and non-empty and converts
    /// the admission date to a calendar date.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if a field is missing or empty, or
    /// if the admission date is not a date or timestamp.
    pub fn validate(self) -> Result<NewEmployer, ApiError> {
        let (Some(email), Some(name), Some(status), Some(date)) = (
            present(self.email),
            present(self.nome),
            present(self.situacao),
            present(self.data_admissao),
        ) else {
            return Err(ApiError::Validation(MISSING_FIELDS.to_string()));
        };

        let admission_date = parse_admission_date(&date)
            .ok_or_else(|| ApiError::Validation(INVALID_ADMISSION_DATE.to_string()))?;

        Ok(NewEmployer {
            email,
            name,
            status,
            admission_date,
        })
    }
}

/// Accepts `YYYY-MM-DD` as well as RFC 3339 and naive ISO timestamps,
/// keeping the calendar date as written by the client.
fn parse_admission_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty())
}
