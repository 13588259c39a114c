//! Row-to-entity parsing helpers.
//!
//! Repositories convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing of the TEXT-encoded calendar
//! dates, grades, and roles.

use std::str::FromStr;

use chrono::NaiveDate;
use exam_core::enums::{Grade, Role};

use crate::error::DatabaseError;

/// Storage format for `exam_date` columns.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a required TEXT column as a calendar date.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Parse a TEXT column as a [`Grade`].
///
/// # Errors
///
/// Returns `DatabaseError::Query` for strings outside `A`..`F` / `No grade`.
pub fn parse_grade(s: &str) -> Result<Grade, DatabaseError> {
    Grade::from_str(s).map_err(|e| DatabaseError::Query(e.to_string()))
}

/// Parse a TEXT column as a [`Role`].
///
/// # Errors
///
/// Returns `DatabaseError::Query` for unknown access levels.
pub fn parse_role(s: &str) -> Result<Role, DatabaseError> {
    Role::from_str(s).map_err(|e| DatabaseError::Query(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_iso_dates() {
        let date = parse_date("2026-05-20").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 5, 20).unwrap());
    }

    #[rstest]
    #[case("20/05/2026")]
    #[case("2026-13-01")]
    #[case("not a date")]
    fn rejects_malformed_dates(#[case] input: &str) {
        assert!(parse_date(input).is_err());
    }

    #[rstest]
    #[case("A", Grade::A)]
    #[case("F", Grade::F)]
    #[case("No grade", Grade::NoGrade)]
    fn parses_grades(#[case] input: &str, #[case] expected: Grade) {
        assert_eq!(parse_grade(input).unwrap(), expected);
    }

    #[test]
    fn parses_roles_and_rejects_unknowns() {
        assert_eq!(parse_role("STUDENT").unwrap(), Role::Student);
        assert!(parse_grade("X").is_err());
        assert!(parse_role("ROOT").is_err());
    }
}
