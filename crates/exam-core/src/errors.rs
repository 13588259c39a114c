//! Cross-cutting error types.
//!
//! Domain-specific errors (`DatabaseError`, `AuthError`, `ExportError`) live
//! in their respective crates; this module holds only what every crate needs.

use thiserror::Error;

/// Errors that can be raised by any crate in the workspace.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: i64 },

    /// Data failed validation (empty required field, unknown enum string).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Reject an empty or whitespace-only required text field.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the field when the value is blank.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected() {
        assert!(require_non_empty("name", "").is_err());
        assert!(require_non_empty("name", "   ").is_err());
        assert!(require_non_empty("name", "Physics").is_ok());
    }
}
