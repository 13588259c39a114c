use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, require_non_empty};

/// A teacher employed by a department.
///
/// The `department` field holds the department's *name*, mirroring the
/// deployed schema's name-based link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Teacher {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub email: String,
}

/// Insert input for [`Teacher`]; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTeacher {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub email: String,
}

impl NewTeacher {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: department.into(),
            email: email.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` when any required field is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("first name", &self.first_name)?;
        require_non_empty("last name", &self.last_name)?;
        require_non_empty("department", &self.department)?;
        require_non_empty("email", &self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_fields() {
        let teacher = NewTeacher::new("Ada", "Lovelace", "Mathematics", "ada@uni.edu");
        assert!(teacher.validate().is_ok());

        let blank_email = NewTeacher::new("Ada", "Lovelace", "Mathematics", " ");
        assert!(blank_email.validate().is_err());
    }
}
