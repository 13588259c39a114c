//! # exam-db
//!
//! libSQL persistence for the exam records manager.
//!
//! [`ExamDb`] is the connection provider: one shared handle per logical
//! session, acquired once and reused, with an explicit `Unavailable` state
//! instead of a hard fault when the store cannot be reached. [`service::ExamService`]
//! wraps the handle with the authenticated identity and the per-call error
//! channel, and hosts all repository methods (`impl ExamService` blocks in
//! `repos/`). The generic CRUD contract lives in [`record`]; per-entity
//! column mappings and entity-specific finders live in [`repos`].

pub mod error;
pub mod helpers;
mod migrations;
pub mod record;
pub mod report;
pub mod repos;
pub mod service;

use error::DatabaseError;
use libsql::Builder;

/// Shared database handle for a logical session.
///
/// Holds the connection in an `Option`: `None` is the first-class
/// `Unavailable` state every repository call must treat as an expected
/// outcome, not an exception. There is no pooling, retry, or reconnection;
/// a dead handle is only detected when a subsequent statement fails.
pub struct ExamDb {
    #[allow(dead_code)]
    db: Option<libsql::Database>,
    conn: Option<libsql::Connection>,
}

impl ExamDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        let exam_db = Self {
            db: Some(db),
            conn: Some(conn),
        };
        exam_db.run_migrations().await?;
        Ok(exam_db)
    }

    /// A handle in the `Unavailable` state. Every operation against it
    /// degrades to an empty read or a no-op write.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            db: None,
            conn: None,
        }
    }

    /// The shared connection, or `None` when the store is unavailable.
    #[must_use]
    pub const fn conn(&self) -> Option<&libsql::Connection> {
        self.conn.as_ref()
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.conn.is_some()
    }

    /// Open a secondary, short-lived connection purely to test
    /// reachability, then discard it. Independent of the session handle.
    pub async fn ping(path: &str) -> bool {
        let Ok(db) = Builder::new_local(path).build().await else {
            return false;
        };
        let Ok(conn) = db.connect() else {
            return false;
        };
        conn.query("SELECT 1", ()).await.is_ok()
    }
}

#[cfg(test)]
mod test_support;
