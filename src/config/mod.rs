//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MCDA_SHERPA` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a runnable
//! development configuration.
//!
//! # Example
//!
//! ```no_run
//! use mcda_sherpa::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod error;
mod features;
mod limits;
mod server;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use limits::{LimitsConfig, MAX_SUPPORTED_DIMENSION};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Calculation input limits
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MCDA_SHERPA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MCDA_SHERPA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `MCDA_SHERPA__LIMITS__MAX_CRITERIA=10` -> `limits.max_criteria = 10`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MCDA_SHERPA")
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
        self.limits.validate()?;
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
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("MCDA_SHERPA__SERVER__PORT");
        env::remove_var("MCDA_SHERPA__SERVER__ENVIRONMENT");
        env::remove_var("MCDA_SHERPA__LIMITS__MAX_ALTERNATIVES");
        env::remove_var("MCDA_SHERPA__LIMITS__MAX_CRITERIA");
        env::remove_var("MCDA_SHERPA__FEATURES__VERBOSE_ERRORS");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.limits.max_alternatives, 20);
        assert_eq!(config.limits.max_criteria, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDA_SHERPA__SERVER__PORT", "9000");
        env::set_var("MCDA_SHERPA__SERVER__ENVIRONMENT", "production");
        env::set_var("MCDA_SHERPA__LIMITS__MAX_CRITERIA", "7");
        env::set_var("MCDA_SHERPA__FEATURES__VERBOSE_ERRORS", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.is_production());
        assert_eq!(config.limits.max_criteria, 7);
        assert_eq!(config.limits.max_alternatives, 20);
        assert!(config.features.verbose_errors);
    }

    #[test]
    fn test_validate_rejects_oversized_limits() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDA_SHERPA__LIMITS__MAX_ALTERNATIVES", "50");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidLimit("max_alternatives"))
        ));
    }

    #[test]
    fn test_invalid_port_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MCDA_SHERPA__SERVER__PORT", "not-a-port");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
