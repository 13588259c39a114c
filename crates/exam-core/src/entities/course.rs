use serde::{Deserialize, Serialize};

use crate::errors::{CoreError, require_non_empty};

/// A course taught by a teacher (referenced by id).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub title: String,
    pub credits: i64,
    pub teacher_id: i64,
}

/// Insert input for [`Course`]; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewCourse {
    pub course_code: String,
    pub title: String,
    pub credits: i64,
    pub teacher_id: i64,
}

impl NewCourse {
    #[must_use]
    pub fn new(
        course_code: impl Into<String>,
        title: impl Into<String>,
        credits: i64,
        teacher_id: i64,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            title: title.into(),
            credits,
            teacher_id,
        }
    }

    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the code or title is blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty("course code", &self.course_code)?;
        require_non_empty("title", &self.title)
    }
}
