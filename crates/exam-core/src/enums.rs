//! Access roles and exam grades.
//!
//! Both enums are closed: the set of roles and the set of grades are fixed
//! by the schema, and unknown strings coming out of the database are data
//! corruption, not extension points.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Access level of an authenticated user.
///
/// Stored in the `user` table as `ADMIN` / `TEACHER` / `STUDENT`. Only
/// `Admin` may invoke mutating repository operations; the service layer
/// enforces this before every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    /// String form used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Teacher => "TEACHER",
            Self::Student => "STUDENT",
        }
    }

    /// Whether this role may invoke mutating repository operations.
    #[must_use]
    pub const fn can_mutate(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Self::Admin),
            "TEACHER" => Ok(Self::Teacher),
            "STUDENT" => Ok(Self::Student),
            other => Err(CoreError::Validation(format!("unknown role '{other}'"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// Result of an exam: `A` through `F`, or `NoGrade` for an exam that has
/// been scheduled but not yet graded.
///
/// Stored (and exported) as the literal strings `"A"`..`"F"` and
/// `"No grade"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
    #[default]
    #[serde(rename = "No grade")]
    NoGrade,
}

impl Grade {
    /// String form used in SQL storage and report output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::NoGrade => "No grade",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            "No grade" => Ok(Self::NoGrade),
            other => Err(CoreError::Validation(format!("unknown grade '{other}'"))),
        }
    }
}
