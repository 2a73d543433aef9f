pub mod games;
pub mod scores;
pub mod users;

use crate::error::{WebError, WebResult};

/// Parses the `{id}` path segment of a single-record lookup.
pub(crate) fn parse_id(entity: &str, raw: &str) -> WebResult<i64> {
    if raw.trim().is_empty() {
        return Err(WebError::BadRequest(format!("No {} 'id' provided", entity)));
    }

    raw.parse().map_err(|e| {
        WebError::BadRequest(format!(
            "Error while attempting to convert {} id: {}",
            entity, e
        ))
    })
}
