//! # exam-auth
//!
//! Credential verification for the exam records manager.
//!
//! Resolves an email + password pair to an [`AuthIdentity`] by looking up
//! the stored hash, salt, and access level in the `user` table, recomputing
//! the PBKDF2 hash under the stored salt, and comparing. Unknown emails and
//! wrong passwords are indistinguishable to the caller: both yield
//! [`AuthError::Rejected`] with the same message.

mod crypto;
mod error;

pub use crypto::{generate_salt, hash_password};
pub use error::AuthError;

use std::str::FromStr;

use exam_core::enums::Role;
use exam_core::identity::AuthIdentity;

/// Resolve credentials against the `user` table.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] for an unknown email or a wrong password
/// (identical message in both cases), [`AuthError::InvalidRecord`] when a
/// stored row cannot be interpreted, and [`AuthError::LibSql`] when the
/// lookup statement itself fails.
pub async fn authenticate(
    conn: &libsql::Connection,
    email: &str,
    password: &str,
) -> Result<AuthIdentity, AuthError> {
    let mut rows = conn
        .query(
            "SELECT hash, salt, access_level FROM user WHERE email = ?1",
            [email],
        )
        .await?;

    let Some(row) = rows.next().await? else {
        tracing::debug!("login rejected: no credential row");
        return Err(AuthError::Rejected);
    };

    let stored_hash = row.get::<String>(0)?;
    let salt = row.get::<String>(1)?;
    let role_str = row.get::<String>(2)?;
    let role = Role::from_str(&role_str)
        .map_err(|_| AuthError::InvalidRecord(format!("unknown access level '{role_str}'")))?;

    if hash_password(password, &salt) == stored_hash {
        Ok(AuthIdentity::new(email, role))
    } else {
        tracing::debug!("login rejected: hash mismatch");
        Err(AuthError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_conn() -> libsql::Connection {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .unwrap();
        let conn = db.connect().unwrap();
        conn.execute(
            "CREATE TABLE user (
                email TEXT PRIMARY KEY,
                hash TEXT NOT NULL,
                salt TEXT NOT NULL,
                access_level TEXT NOT NULL
            )",
            (),
        )
        .await
        .unwrap();
        conn
    }

    async fn insert_user(conn: &libsql::Connection, email: &str, password: &str, role: &str) {
        let salt = generate_salt();
        let hash = hash_password(password, &salt);
        conn.execute(
            "INSERT INTO user (email, hash, salt, access_level) VALUES (?1, ?2, ?3, ?4)",
            libsql::params![email, hash.as_str(), salt.as_str(), role],
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn correct_password_resolves_stored_role() {
        let conn = test_conn().await;
        insert_user(&conn, "admin@uni.edu", "s3cret", "ADMIN").await;

        let identity = authenticate(&conn, "admin@uni.edu", "s3cret").await.unwrap();
        assert_eq!(identity.role, Role::Admin);
        assert_eq!(identity.email, "admin@uni.edu");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_report_identically() {
        let conn = test_conn().await;
        insert_user(&conn, "ada@uni.edu", "s3cret", "TEACHER").await;

        let wrong = authenticate(&conn, "ada@uni.edu", "wrong").await.unwrap_err();
        let unknown = authenticate(&conn, "nobody@uni.edu", "s3cret")
            .await
            .unwrap_err();
        assert_eq!(wrong.to_string(), unknown.to_string());
        assert_eq!(wrong.to_string(), "Incorrect email or password.");
    }

    #[tokio::test]
    async fn malformed_role_is_not_a_rejection() {
        let conn = test_conn().await;
        insert_user(&conn, "odd@uni.edu", "pw", "SUPERUSER").await;

        let err = authenticate(&conn, "odd@uni.edu", "pw").await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidRecord(_)));
    }
}
