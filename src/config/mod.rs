//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOPSIS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use topsis_service::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod analysis;
mod email;
mod error;
mod server;
mod storage;

pub use analysis::AnalysisConfig;
pub use email::EmailConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, limits)
    #[serde(default)]
    pub server: ServerConfig,

    /// Upload and result directories
    #[serde(default)]
    pub storage: StorageConfig,

    /// Email configuration (Resend). Result delivery is disabled when absent.
    #[serde(default)]
    pub email: Option<EmailConfig>,

    /// Pipeline settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TOPSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TOPSIS__EMAIL__RESEND_API_KEY=...` -> `email.resend_api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.storage.validate()?;
        if let Some(email) = &self.email {
            email.validate()?;
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::ValidationMode;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "TOPSIS__SERVER__PORT",
        "TOPSIS__SERVER__ENVIRONMENT",
        "TOPSIS__STORAGE__UPLOAD_DIR",
        "TOPSIS__EMAIL__RESEND_API_KEY",
        "TOPSIS__EMAIL__FROM_EMAIL",
        "TOPSIS__ANALYSIS__VALIDATION_MODE",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.email.is_none());
        assert_eq!(config.analysis.validation_mode, ValidationMode::FailFast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_email_section_is_loaded_when_key_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__EMAIL__RESEND_API_KEY", "re_test123");
        env::set_var("TOPSIS__EMAIL__FROM_EMAIL", "results@example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        let email = config.email.as_ref().expect("email section");
        assert_eq!(email.resend_api_key.expose_secret(), "re_test123");
        assert_eq!(email.from_email, "results@example.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_email_key_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__EMAIL__RESEND_API_KEY", "sk_wrong");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::InvalidResendKey));
    }

    #[test]
    fn test_aggregate_validation_mode() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__ANALYSIS__VALIDATION_MODE", "aggregate");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.analysis.validation_mode, ValidationMode::Aggregate);
    }

    #[test]
    fn test_shared_storage_dir_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__STORAGE__UPLOAD_DIR", "results");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.validate(), Err(ValidationError::SharedStorageDir));
    }
}
