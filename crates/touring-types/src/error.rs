//! Error types for touring-cost

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Scenario book errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("Scenario name is empty")]
    EmptyName,

    #[error("Scenario limit reached ({max}); delete one before saving another")]
    LimitReached { max: usize },

    #[error("Scenario not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid assignment (expected KEY=VALUE): {0}")]
    InvalidAssignment(String),

    #[error("Remembering inputs is disabled (enable with `config --set-remember true`)")]
    StateDisabled,
}

pub type Result<T> = std::result::Result<T, Error>;
