//! Shared constants for culture-guide.

/// Number of destinations shown on the home page when not configured.
pub const DEFAULT_FEATURED_LIMIT: usize = 6;

/// Upper bound for the home page featured list.
pub const MAX_FEATURED_LIMIT: usize = 50;

/// Default connection pool size for the SQLite database.
pub const DEFAULT_DB_POOL_SIZE: u32 = 4;

/// URL prefix under which static assets are mounted.
pub const STATIC_URL_PREFIX: &str = "/static";
