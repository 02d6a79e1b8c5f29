//! Runtime configuration

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::ValidationError;

/// Runtime configuration for the terminal binary
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether the logotype banner is rendered
    #[serde(default = "default_show_banner")]
    pub show_banner: bool,
}

impl RuntimeConfig {
    /// Validate runtime configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        EnvFilter::try_new(&self.log_level)
            .map_err(|_| ValidationError::InvalidLogFilter(self.log_level.clone()))?;
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            show_banner: default_show_banner(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_show_banner() -> bool {
    true
}
