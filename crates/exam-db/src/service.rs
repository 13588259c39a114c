//! Role-gated service layer over the shared connection.
//!
//! `ExamService` bundles the database handle, the authenticated identity,
//! and the per-call error channel. All repository methods are implemented
//! as `impl ExamService` blocks (the generic CRUD here, entity-specific
//! finders in `repos/`).
//!
//! Error policy: no method raises through normal control flow. A read
//! against an unavailable store returns an empty value, a write becomes a
//! no-op, and in both cases exactly one report lands on the error channel.
//! Callers that need to distinguish "succeeded" from "silently degraded"
//! inspect the channel. Mutations additionally require the identity to be
//! an admin — the gate lives here at the service boundary, not only in the
//! presentation layer, so direct callers cannot bypass it.

use exam_config::ExamConfig;
use exam_core::identity::AuthIdentity;

use crate::ExamDb;
use crate::error::DatabaseError;
use crate::record::{self, DeleteGuard, Record};
use crate::report::{ErrorChannel, ErrorReport, ReportKind};

pub struct ExamService {
    db: ExamDb,
    identity: AuthIdentity,
    errors: ErrorChannel,
}

impl ExamService {
    /// Acquire the shared handle for a logical session.
    ///
    /// Never fails through normal control flow: if the store cannot be
    /// opened, the failure is reported once and the service starts in the
    /// `Unavailable` state, where every operation degrades per the error
    /// policy above.
    pub async fn connect(config: &ExamConfig, identity: AuthIdentity) -> Self {
        let errors = ErrorChannel::new();
        let db = match ExamDb::open(&config.database.url).await {
            Ok(db) => db,
            Err(e) => {
                errors.report(
                    ReportKind::ConnectionUnavailable,
                    format!("Failed to connect to database: {e}"),
                );
                ExamDb::unavailable()
            }
        };
        Self {
            db,
            identity,
            errors,
        }
    }

    /// Create from an existing handle (tests, and the CLI after login).
    #[must_use]
    pub fn from_db(db: ExamDb, identity: AuthIdentity) -> Self {
        Self {
            db,
            identity,
            errors: ErrorChannel::new(),
        }
    }

    #[must_use]
    pub const fn db(&self) -> &ExamDb {
        &self.db
    }

    #[must_use]
    pub const fn identity(&self) -> &AuthIdentity {
        &self.identity
    }

    #[must_use]
    pub const fn errors(&self) -> &ErrorChannel {
        &self.errors
    }

    /// Take all accumulated failure reports for this session.
    #[must_use]
    pub fn drain_reports(&self) -> Vec<ErrorReport> {
        self.errors.drain()
    }

    /// The shared connection, reporting once if the store is unavailable.
    pub(crate) fn conn_or_report(&self, context: &str) -> Option<&libsql::Connection> {
        let conn = self.db.conn();
        if conn.is_none() {
            self.errors.report(
                ReportKind::ConnectionUnavailable,
                format!("{context}. No database connection."),
            );
        }
        conn
    }

    /// Admin gate for mutating operations, reporting once on denial.
    pub(crate) fn admin_or_report(&self, context: &str) -> bool {
        if self.identity.is_admin() {
            return true;
        }
        self.errors.report(
            ReportKind::PermissionDenied,
            format!("{context}. Only admin accounts may modify records."),
        );
        false
    }

    pub(crate) fn report_statement(&self, context: &str, error: &DatabaseError) {
        self.errors.report(
            ReportKind::StatementRejected,
            format!("{context}: {error}"),
        );
    }

    // -----------------------------------------------------------------------
    // Generic CRUD
    // -----------------------------------------------------------------------

    /// Fetch one entity by id. `None` covers both not-found and degraded
    /// calls; the error channel distinguishes them.
    pub async fn find_by_id<T: Record>(&self, id: i64) -> Option<T> {
        let conn = self.conn_or_report(&format!("Failed to get {}", T::TABLE))?;
        match fetch_by_id::<T>(conn, id).await {
            Ok(found) => found,
            Err(e) => {
                self.report_statement(&format!("Error while getting {}", T::TABLE), &e);
                None
            }
        }
    }

    /// Fetch all rows, in the entity's declared order (store-default when
    /// none). Empty on a degraded call.
    pub async fn find_all<T: Record>(&self) -> Vec<T> {
        let Some(conn) = self.conn_or_report(&format!("Failed to get {} records", T::TABLE)) else {
            return Vec::new();
        };
        match fetch_all::<T>(conn).await {
            Ok(rows) => rows,
            Err(e) => {
                self.report_statement(&format!("Error while getting {} records", T::TABLE), &e);
                Vec::new()
            }
        }
    }

    /// Insert a new entity; the store assigns the id, returned on success.
    /// Admin only.
    pub async fn add<T: Record>(&self, new: &T::New) -> Option<i64> {
        let context = format!("Failed to add {}", T::TABLE);
        if !self.admin_or_report(&context) {
            return None;
        }
        let conn = self.conn_or_report(&context)?;
        if let Err(e) = T::validate_new(new) {
            self.errors.report(
                ReportKind::StatementRejected,
                format!("Error while adding {}: {e}", T::TABLE),
            );
            return None;
        }
        match insert::<T>(conn, new).await {
            Ok(id) => Some(id),
            Err(e) => {
                self.report_statement(&format!("Error while adding {}", T::TABLE), &e);
                None
            }
        }
    }

    /// Full-row replace keyed by id. Admin only.
    pub async fn update<T: Record>(&self, entity: &T) {
        let context = format!("Failed to update {}", T::TABLE);
        if !self.admin_or_report(&context) {
            return;
        }
        let Some(conn) = self.conn_or_report(&context) else {
            return;
        };
        let mut values = entity.update_values();
        values.push(libsql::Value::Integer(entity.id()));
        let sql = record::update_sql::<T>();
        if let Err(e) = conn
            .execute(&sql, libsql::params_from_iter(values))
            .await
        {
            self.report_statement(&format!("Error while updating {}", T::TABLE), &e.into());
        }
    }

    /// Delete a batch, one independent statement per row. Admin only.
    ///
    /// Each row's delete stands alone: a guard veto or a failed statement
    /// reports and the loop continues with the next entity, so partial
    /// completion is possible and visible only through the error channel.
    pub async fn delete_many<T: Record>(&self, entities: &[T]) {
        let context = format!("Failed to delete {} record(s)", T::TABLE);
        if !self.admin_or_report(&context) {
            return;
        }
        let Some(conn) = self.conn_or_report(&context) else {
            return;
        };
        let sql = record::delete_sql::<T>();
        for entity in entities {
            if let Some(guard) = entity.delete_guard() {
                match count_dependents(conn, &guard).await {
                    Ok(0) => {}
                    Ok(_) => {
                        self.errors
                            .report(ReportKind::ReferentialConflict, guard.conflict_message);
                        continue;
                    }
                    Err(e) => {
                        self.report_statement(
                            &format!("Error while deleting {} record(s)", T::TABLE),
                            &e,
                        );
                        continue;
                    }
                }
            }
            if let Err(e) = conn.execute(&sql, libsql::params![entity.id()]).await {
                self.report_statement(
                    &format!("Error while deleting {} record(s)", T::TABLE),
                    &e.into(),
                );
            }
        }
    }
}

async fn fetch_by_id<T: Record>(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<T>, DatabaseError> {
    let sql = format!("{} WHERE id = ?1", record::select_sql::<T>());
    let mut rows = conn.query(&sql, libsql::params![id]).await?;
    match rows.next().await? {
        Some(row) => Ok(Some(T::from_row(&row)?)),
        None => Ok(None),
    }
}

async fn fetch_all<T: Record>(conn: &libsql::Connection) -> Result<Vec<T>, DatabaseError> {
    let sql = record::select_all_sql::<T>();
    let mut rows = conn.query(&sql, ()).await?;
    let mut results = Vec::new();
    while let Some(row) = rows.next().await? {
        results.push(T::from_row(&row)?);
    }
    Ok(results)
}

async fn insert<T: Record>(conn: &libsql::Connection, new: &T::New) -> Result<i64, DatabaseError> {
    let sql = record::insert_sql::<T>();
    conn.execute(&sql, libsql::params_from_iter(T::insert_values(new)))
        .await?;
    Ok(conn.last_insert_rowid())
}

async fn count_dependents(
    conn: &libsql::Connection,
    guard: &DeleteGuard,
) -> Result<i64, DatabaseError> {
    let mut rows = conn
        .query(
            guard.dependents_sql,
            libsql::params_from_iter(vec![guard.param.clone()]),
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}
