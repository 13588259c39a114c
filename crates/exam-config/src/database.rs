//! Database connection configuration.

use serde::{Deserialize, Serialize};

/// Default local database file.
fn default_url() -> String {
    "examdesk.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database location: a local file path, or `":memory:"` for tests.
    #[serde(default = "default_url")]
    pub url: String,

    /// Auth token for a remote libSQL deployment. Empty for local files.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Check whether a database location has been supplied.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.url, "examdesk.db");
        assert!(config.auth_token.is_empty());
        assert!(config.is_configured());
    }
}
