//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is loaded
//! with the `VERITY` prefix and nested values use double underscores as
//! separators, layered over an optional local `verity` config file.
//!
//! # Example
//!
//! ```no_run
//! use verity::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Researching: {}", config.interview.domain);
//! ```

mod error;
mod interview;
mod runtime;

pub use error::{ConfigError, ValidationError};
pub use interview::InterviewConfig;
pub use runtime::RuntimeConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Verity application.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Runtime configuration (log filter, banner)
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Interview configuration (research texts, prompt deck)
    #[serde(default)]
    pub interview: InterviewConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Layers an optional `verity` config file in the working directory
    /// 3. Reads environment variables with `VERITY` prefix
    /// 4. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `VERITY__RUNTIME__LOG_LEVEL=debug` -> `runtime.log_level = debug`
    /// - `VERITY__INTERVIEW__DOMAIN=...` -> `interview.domain = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("verity").required(false))
            .add_source(
                config::Environment::default()
                    .prefix("VERITY")
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
        self.runtime.validate()?;
        self.interview.validate()?;
        Ok(())
    }
}
