use thiserror::Error;

/// Errors from credential verification.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown email or wrong password. The message is identical for both
    /// cases so a caller cannot probe which emails are registered.
    #[error("Incorrect email or password.")]
    Rejected,

    /// A stored credential row holds data that cannot be interpreted
    /// (e.g. an unknown role string).
    #[error("Malformed credential record: {0}")]
    InvalidRecord(String),

    /// Underlying libSQL error during the credential lookup.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}
