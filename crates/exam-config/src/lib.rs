//! # exam-config
//!
//! Layered configuration loading for the exam records manager using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`EXAMDESK_*` prefix, `__` as separator)
//! 2. Project-level `.examdesk/config.toml`
//! 3. User-level `~/.config/examdesk/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `EXAMDESK_DATABASE__URL` -> `database.url`,
//! `EXAMDESK_EXPORT__DIRECTORY` -> `export.directory`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use exam_config::ExamConfig;
//!
//! let config = ExamConfig::load_with_dotenv().expect("config");
//! println!("database at {}", config.database.url);
//! ```

mod database;
mod error;
mod export;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use export::ExportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExamConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

impl ExamConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to merge or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any layer fails to merge or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".examdesk/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("EXAMDESK_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("examdesk").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ExamConfig::default();
        assert_eq!(config.database.url, "examdesk.db");
        assert_eq!(config.export.directory, "export");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: ExamConfig = ExamConfig::figment().extract()?;
            assert_eq!(config.database.url, "examdesk.db");
            Ok(())
        });
    }

    #[test]
    fn env_vars_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("EXAMDESK_DATABASE__URL", ":memory:");
            jail.set_env("EXAMDESK_EXPORT__DIRECTORY", "/tmp/out");
            let config: ExamConfig = ExamConfig::figment().extract()?;
            assert_eq!(config.database.url, ":memory:");
            assert_eq!(config.export.directory, "/tmp/out");
            Ok(())
        });
    }
}
