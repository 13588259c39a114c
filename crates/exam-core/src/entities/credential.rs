use serde::{Deserialize, Serialize};

use crate::enums::Role;

/// A stored login credential, keyed by email. `hash` is the base64-encoded
/// PBKDF2 output; `salt` is the per-credential random string mixed into the
/// derivation. The plaintext password is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Credential {
    pub email: String,
    pub hash: String,
    pub salt: String,
    pub role: Role,
}
