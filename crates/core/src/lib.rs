//! Core types for culture-guide
//!
//! Content records shared by the storage, service and HTTP crates.

mod category;
mod constants;
mod content;
mod env_config;
mod error;
mod slug;

pub use category::*;
pub use constants::*;
pub use content::*;
pub use env_config::{db_pool_size, featured_limit};
pub use error::*;
pub use slug::{slugify, unique_slugs};
