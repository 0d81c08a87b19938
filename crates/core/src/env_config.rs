//! Runtime settings read from `GUIDE_*` environment variables.
//!
//! A value that is set but does not parse is logged at warn level and the
//! default is used instead. Startup never fails on a bad setting.

use std::fmt::Display;
use std::str::FromStr;

use crate::constants::{DEFAULT_DB_POOL_SIZE, DEFAULT_FEATURED_LIMIT};

/// Number of destinations highlighted on the home page.
const FEATURED_LIMIT_VAR: &str = "GUIDE_FEATURED_LIMIT";

/// Size of the SQLite connection pool.
const DB_POOL_SIZE_VAR: &str = "GUIDE_DB_POOL_SIZE";

fn parse_setting<T: FromStr + Display>(var: &str, raw: Option<&str>, default: T) -> T {
    let Some(raw) = raw else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(var, value = raw, default = %default, "invalid setting, using default");
        default
    })
}

fn featured_limit_from(raw: Option<&str>) -> usize {
    parse_setting(FEATURED_LIMIT_VAR, raw, DEFAULT_FEATURED_LIMIT)
}

fn db_pool_size_from(raw: Option<&str>) -> u32 {
    parse_setting(DB_POOL_SIZE_VAR, raw, DEFAULT_DB_POOL_SIZE).max(1)
}

/// `GUIDE_FEATURED_LIMIT`, unclamped. The content service bounds it.
#[must_use]
pub fn featured_limit() -> usize {
    featured_limit_from(std::env::var(FEATURED_LIMIT_VAR).ok().as_deref())
}

/// `GUIDE_DB_POOL_SIZE`, at least 1.
#[must_use]
pub fn db_pool_size() -> u32 {
    db_pool_size_from(std::env::var(DB_POOL_SIZE_VAR).ok().as_deref())
}
