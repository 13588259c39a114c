//! Database error types for exam-db.

use thiserror::Error;

/// Errors from database operations.
///
/// These are the *internal* errors the low-level query helpers return. The
/// public service methods convert them into [`crate::report::ErrorReport`]s
/// and degraded fallback values; callers only see this type from the
/// `Result`-returning constructors.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL statement failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
