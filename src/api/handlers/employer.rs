//! Employer handlers: create and list on a single `/employers` resource.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::CreateEmployerRequest;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse, MISSING_FIELDS};
use crate::persistence::{Employer, StoreError};

/// Value of the `Allow` header on 405 responses.
pub const ALLOWED_METHODS: &str = "POST, GET";

/// `POST /api/employers` — Register a new employer.
///
/// # Errors
///
/// Returns [`ApiError::Validation`] for missing fields,
/// [`ApiError::DuplicateKey`] if the email is taken, and
/// [`ApiError::Unavailable`] on store failure.
#[utoipa::path(
    post,
    path = "/api/employers",
    tag = "Employers",
    summary = "Create an employer",
    description = "Stores a new employer. All four fields are required; the email must be unique.",
    request_body = CreateEmployerRequest,
    responses(
        (status = 201, description = "Employer created", body = Employer),
        (status = 400, description = "Missing or malformed field", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn create_employer(
    State(state): State<AppState>,
    payload: Result<Json<CreateEmployerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "rejected employer payload");
        ApiError::Validation(MISSING_FIELDS.to_string())
    })?;
    let new_employer = req.validate()?;

    let employer = match state.store.create(new_employer).await {
        Ok(employer) => employer,
        Err(StoreError::DuplicateKey) => {
            tracing::info!("employer rejected: email already exists");
            return Err(ApiError::DuplicateKey);
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!(id = %employer.id, email = %employer.email, "employer created");
    Ok((StatusCode::CREATED, Json(employer)))
}

/// `GET /api/employers` — List every employer.
///
/// # Errors
///
/// Returns [`ApiError::Unavailable`] on store failure.
#[utoipa::path(
    get,
    path = "/api/employers",
    tag = "Employers",
    summary = "List employers",
    description = "Returns all employers in store order. No filtering or pagination.",
    responses(
        (status = 200, description = "All employers", body = Vec<Employer>),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_employers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employer>>, ApiError> {
    let employers = state.store.list().await?;
    tracing::debug!(count = employers.len(), "employers listed");
    Ok(Json(employers))
}

/// Answers every method other than `POST` and `GET` with 405.
pub async fn method_not_allowed(method: Method) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, ALLOWED_METHODS)],
        format!("Método {method} não permitido"),
    )
}

/// Employer routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/employers",
        post(create_employer)
            .get(list_employers)
            .head(method_not_allowed)
            .fallback(method_not_allowed),
    )
}
