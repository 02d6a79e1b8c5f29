//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to read prompt deck {path}: {source}")]
    DeckRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse prompt deck: {0}")]
    DeckParse(#[from] serde_yaml::Error),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Researched domain must not be empty")]
    EmptyDomain,

    #[error("Problem statement must not be empty")]
    EmptyProblemStatement,

    #[error("Value proposition must not be empty")]
    EmptyValueProposition,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
