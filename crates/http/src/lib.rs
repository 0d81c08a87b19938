//! HTTP server for culture-guide.
//!
//! Every route is a GET that renders one HTML page from a single read.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]

mod blocking;
mod handlers;
pub mod page_error;
pub mod render;

use axum::{Router, routing::get};
use guide_core::STATIC_URL_PREFIX;
use guide_service::ContentService;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Page-level read operations
    pub content: Arc<ContentService>,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/culture", get(handlers::pages::culture))
        .route("/history", get(handlers::pages::history))
        .route("/nature", get(handlers::pages::nature))
        .route("/cuisine", get(handlers::pages::cuisine))
        .route("/cuisine/{slug}", get(handlers::pages::cuisine_style))
        .route("/details/{title}", get(handlers::pages::details))
        .route("/about", get(handlers::pages::about))
        .route("/plan", get(handlers::pages::plan))
        .route("/privacy", get(handlers::pages::privacy))
        .route("/terms", get(handlers::pages::terms))
        .route("/health", get(health))
        .nest_service(STATIC_URL_PREFIX, static_files)
        .fallback(handlers::pages::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
