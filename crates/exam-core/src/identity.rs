//! Authenticated caller identity.

use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// Lightweight authenticated identity for cross-crate passing.
///
/// Produced by `exam-auth` on a successful login, consumed by `exam-db`
/// (role-gated mutations) and `exam-export` (scoping a student's report
/// card to their own records). Contains only data fields — no auth logic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthIdentity {
    /// Contact address the credential row is keyed by.
    pub email: String,
    /// Resolved access level.
    pub role: Role,
}

impl AuthIdentity {
    #[must_use]
    pub fn new(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
        }
    }

    /// Whether this identity may invoke mutating repository operations.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.can_mutate()
    }
}
