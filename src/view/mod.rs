//! Presentation view: the employer page and its client script.
//!
//! `GET /` returns the page rendered server-side in its initial (loading)
//! state. The browser then loads the script served from
//! [`render::SCRIPT_PATH`], which fetches the list once and drives the
//! form against `/api/employers`, reading its settings from
//! [`render::client_config`].

pub mod page;
pub mod render;

use axum::Router;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;

pub use page::{EmployerForm, EmployerPage, FormField, Listing, Notification, NotificationKind};

use crate::app_state::AppState;

const CLIENT_SCRIPT: &str = include_str!("../../assets/employers.js");

/// `GET /` — The employer page.
pub async fn index_handler() -> Html<String> {
    Html(render::render_page(&EmployerPage::new()))
}

/// Serves the client script.
pub async fn script_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        CLIENT_SCRIPT,
    )
}

/// Page routes mounted at the root.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route(render::SCRIPT_PATH, get(script_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::persistence::InMemoryEmployerStore;

    fn app() -> Router {
        routes().with_state(AppState::new(Arc::new(InMemoryEmployerStore::new())))
    }

    async fn get_path(path: &str) -> (StatusCode, Option<String>, String) {
        let Ok(request) = Request::builder().uri(path).body(Body::empty()) else {
            panic!("valid request");
        };
        let Ok(response) = app().oneshot(request).await;
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("readable body");
        };
        (status, content_type, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn index_serves_loading_page() {
        let (status, content_type, body) = get_path("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.is_some_and(|ct| ct.starts_with("text/html")));
        assert!(body.contains(page::LOADING_MESSAGE));
        assert!(body.contains("id=\"employer-form\""));
    }

    #[tokio::test]
    async fn script_is_served_as_javascript() {
        let (status, content_type, body) = get_path(render::SCRIPT_PATH).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.is_some_and(|ct| ct.starts_with("text/javascript")));
        assert!(body.contains(render::CONFIG_ELEMENT_ID));
        assert!(body.contains("employer-form"));
    }

    #[test]
    fn script_reads_shared_settings_instead_of_literals() {
        assert!(CLIENT_SCRIPT.contains(render::CONFIG_ELEMENT_ID));
        assert!(CLIENT_SCRIPT.contains("config.endpoint"));
        assert!(!CLIENT_SCRIPT.contains(render::API_PATH));
        for key in render::MESSAGE_KEYS {
            assert!(CLIENT_SCRIPT.contains(&format!("messages.{key}")), "unused message {key}");
        }
        for text in [
            page::LOADING_MESSAGE,
            page::EMPTY_MESSAGE,
            page::LIST_FAILED_MESSAGE,
            page::SUBMIT_FAILED_MESSAGE,
            page::UNKNOWN_ERROR_MESSAGE,
            page::SUCCESS_TEXT,
        ] {
            assert!(!CLIENT_SCRIPT.contains(text), "script hardcodes {text:?}");
        }
        for field in FormField::ALL {
            assert!(!CLIENT_SCRIPT.contains(field.label()), "script hardcodes {:?}", field.label());
        }
    }
}
