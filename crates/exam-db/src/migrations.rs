//! Database migration runner.
//!
//! Embeds the SQL migration file at compile time and executes it on open.
//! All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::ExamDb;
use crate::error::DatabaseError;

/// Initial schema: five entity tables, the credential table, four indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl ExamDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let conn = self.conn.as_ref().ok_or(DatabaseError::Migration(
            "no connection to migrate".to_string(),
        ))?;
        conn.execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
