//! Path routing
//!
//! Resolves `/api/categories[/<id>]` and checks id presence against the
//! method.

use thiserror::Error;

use crate::store::CategoryId;
use super::Method;

/// Collection path served by the router
pub const CATEGORIES_PATH: &str = "/api/categories";

/// Why a path could not be routed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    #[error("Unknown resource: {0}")]
    NoMatch(String),

    #[error("Resource id not allowed for {0}")]
    IdNotAllowed(Method),

    #[error("Resource id required for {0}")]
    IdRequired(Method),
}

/// Route a path for the given method.
///
/// Returns the category id when the path carries one. `echo` is never
/// routed; callers handle it before reaching here.
pub fn route(method: Method, path: &str) -> Result<Option<CategoryId>, RoutingError> {
    let id = parse_path(path).ok_or_else(|| RoutingError::NoMatch(path.to_string()))?;

    match id {
        Some(_) if method.forbids_id() => Err(RoutingError::IdNotAllowed(method)),
        None if method.requires_id() => Err(RoutingError::IdRequired(method)),
        _ => Ok(id),
    }
}

/// `None` when the path doesn't match, `Some(None)` for the collection,
/// `Some(Some(id))` for a single category.
fn parse_path(path: &str) -> Option<Option<CategoryId>> {
    let rest = path.strip_prefix(CATEGORIES_PATH)?;
    if rest.is_empty() {
        return Some(None);
    }

    let digits = rest.strip_prefix('/')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<CategoryId>().ok().map(Some)
}
