//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.
//!
//! Resource endpoints are mounted under `/api`; system endpoints sit at
//! the root.

pub mod dto;
pub mod handlers;

use axum::Router;
use utoipa::OpenApi;

use crate::app_state::AppState;

/// OpenAPI document for the REST API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "Employer registry API",
        description = "Create and list employers.",
        license(name = "MIT")
    ),
    paths(
        handlers::employer::create_employer,
        handlers::employer::list_employers,
        handlers::system::health_handler,
    ),
    components(schemas(
        crate::persistence::Employer,
        dto::CreateEmployerRequest,
        crate::error::ErrorResponse,
        handlers::system::HealthResponse,
    )),
    tags(
        (name = "Employers", description = "Employer registration"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    let router = Router::new()
        .nest("/api", handlers::routes())
        .merge(handlers::system::routes());

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ApiDoc::openapi()),
    );

    router
}
