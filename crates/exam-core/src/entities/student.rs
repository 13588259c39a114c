use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, require_non_empty};

/// An enrolled student. Exams reference a student by id; the student
/// report card is looked up by email instead, since that is what the
/// login identity carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_year: i64,
}

/// Insert input for [`Student`]; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_year: i64,
}

impl NewStudent {
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        enrollment_year: i64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            enrollment_year,
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` when any required field is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("first name", &self.first_name)?;
        require_non_empty("last name", &self.last_name)?;
        require_non_empty("email", &self.email)
    }
}
