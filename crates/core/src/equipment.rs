//! Validation of equipment identifiers supplied by clients.

use serde_json::Value;

use crate::coerce::{json_integer, json_scalar_text};
use crate::error::CoreError;
use crate::types::DbId;

/// Trim an internal number (`numeroInterne`) and reject it if nothing is left.
pub fn normalize_numero_interne(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "numeroInterne is required and must not be blank".into(),
        ));
    }
    reject_nul(trimmed, "numeroInterne")?;
    Ok(trimmed.to_string())
}

/// Read an optional free-text member (`affectation`, ...) as submitted.
///
/// Strings are kept untrimmed, numbers are rendered as text and anything else
/// is empty.
pub fn parse_free_text(value: &Value, name: &str) -> Result<String, CoreError> {
    let text = json_scalar_text(value);
    reject_nul(&text, name)?;
    Ok(text)
}

fn reject_nul(text: &str, name: &str) -> Result<(), CoreError> {
    if text.contains('\0') {
        return Err(CoreError::Validation(format!(
            "{name} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// Read a positive integer id from a JSON value (number or numeric string).
pub fn parse_positive_id(value: &Value, name: &str) -> Result<DbId, CoreError> {
    match json_integer(value) {
        Some(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(format!(
            "{name} must be a positive integer"
        ))),
    }
}

/// Read a positive integer id from a URL path segment.
pub fn parse_positive_id_segment(segment: &str, name: &str) -> Result<DbId, CoreError> {
    parse_positive_id(&Value::String(segment.to_string()), name)
}
