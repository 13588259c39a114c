//! Export output configuration.

use serde::{Deserialize, Serialize};

/// Default export directory (relative to the working directory).
fn default_directory() -> String {
    "export".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// Directory CSV exports and reports are written to when no `--dir`
    /// override is given.
    #[serde(default = "default_directory")]
    pub directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}
