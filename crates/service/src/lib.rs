//! Service layer for culture-guide
//!
//! One operation per page. Each operation reads from storage and returns a
//! page model for the HTTP layer to render.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]

mod content_service;
mod error;
mod pages;

pub use content_service::ContentService;
pub use error::ServiceError;
pub use pages::{CategoryPage, CuisineMenu, CuisineStyle, CuisineStylePage, DetailPage, HomePage};
