//! # employer-registry
//!
//! REST API and web page for registering and listing employers.
//!
//! A single resource, `/api/employers`, accepts `POST` to create an
//! employer and `GET` to list them. Records live in a PostgreSQL table
//! whose unique constraint on `email` is the only source of duplicate
//! detection. The page at `/` lists the employers and posts new ones.
//!
//! ## Architecture
//!
//! ```text
//! Browser
//!     │
//!     ├── Page + client script (view/)
//!     ├── REST Handlers (api/)
//!     │
//!     ├── EmployerStore (persistence/)
//!     │
//!     └── PostgreSQL  |  in-memory
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod persistence;
pub mod view;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Builds the full application: REST API, page routes, and request tracing.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .merge(view::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
