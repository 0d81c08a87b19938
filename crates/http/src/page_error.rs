//! Typed error for page handlers.
//!
//! Converts service errors into HTML responses with the right status code.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use guide_service::ServiceError;

use crate::render;

/// Page error with HTTP status and a human-readable message.
///
/// `Internal` logs the real error server-side and renders a generic page,
/// so no error detail reaches the visitor.
#[derive(Debug)]
pub enum PageError {
    /// 404 Not Found: no row backs the requested page.
    NotFound(String),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                tracing::debug!(%msg, "page not found");
                (StatusCode::NOT_FOUND, Html(render::not_found(&msg))).into_response()
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(render::internal_error())).into_response()
            },
        }
    }
}

impl From<anyhow::Error> for PageError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for PageError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}
