//! User account management.
//!
//! Credentials live in the `user` table keyed by email. Passwords are
//! salted and hashed in `exam-auth` before they reach this module; the
//! plaintext never touches the database.

use exam_core::enums::Role;
use exam_core::errors::require_non_empty;

use crate::error::DatabaseError;
use crate::report::ReportKind;
use crate::service::ExamService;

impl ExamService {
    /// Add a user account. Admin only. Returns whether the row was inserted.
    pub async fn add_user(&self, email: &str, password: &str, role: Role) -> bool {
        let context = "Failed to add user";
        if !self.admin_or_report(context) {
            return false;
        }
        let Some(conn) = self.conn_or_report(context) else {
            return false;
        };
        if let Err(e) = require_non_empty("email", email)
            .and_then(|()| require_non_empty("password", password))
        {
            self.errors()
                .report(ReportKind::StatementRejected, format!("{context}: {e}"));
            return false;
        }

        let salt = exam_auth::generate_salt();
        let hash = exam_auth::hash_password(password, &salt);

        let result = conn
            .execute(
                "INSERT INTO user (email, hash, salt, access_level) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![email, hash.as_str(), salt.as_str(), role.as_str()],
            )
            .await;
        match result {
            Ok(_) => true,
            Err(e) => {
                self.report_statement("Error while adding user", &e.into());
                false
            }
        }
    }

    /// Delete a user account. Admin only, and never the account currently
    /// logged in. Returns whether the row was deleted.
    pub async fn delete_user(&self, email: &str) -> bool {
        let context = "Failed to delete user";
        if !self.admin_or_report(context) {
            return false;
        }
        let Some(conn) = self.conn_or_report(context) else {
            return false;
        };
        if email == self.identity().email {
            self.errors().report(
                ReportKind::PermissionDenied,
                "Cannot delete the currently logged-in account.",
            );
            return false;
        }

        match conn
            .execute("DELETE FROM user WHERE email = ?1", [email])
            .await
        {
            Ok(deleted) => deleted > 0,
            Err(e) => {
                self.report_statement("Error while deleting user", &e.into());
                false
            }
        }
    }

    /// Emails of all registered accounts.
    pub async fn list_users(&self) -> Vec<String> {
        let Some(conn) = self.conn_or_report("Failed to get users") else {
            return Vec::new();
        };
        let result: Result<Vec<String>, DatabaseError> = async {
            let mut rows = conn
                .query("SELECT email FROM user ORDER BY email", ())
                .await?;
            let mut emails = Vec::new();
            while let Some(row) = rows.next().await? {
                emails.push(row.get::<String>(0)?);
            }
            Ok(emails)
        }
        .await;
        match result {
            Ok(emails) => emails,
            Err(e) => {
                self.report_statement("Error while getting users", &e);
                Vec::new()
            }
        }
    }
}
