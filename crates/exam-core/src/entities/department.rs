use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, require_non_empty};

/// A university department. Teachers reference a department by its name,
/// not its id, so a department with employed teachers cannot be deleted
/// and a rename silently orphans the link (kept for schema compatibility
/// with existing deployments).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Insert input for [`Department`]; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
}

impl NewDepartment {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the name is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("department name", &self.name)
    }
}
