use thiserror::Error;
use ventureflow_config::ConfigError;
use ventureflow_core::CoreError;

use crate::api::ApiError;

/// Failures raised while wiring the application together or talking to its
/// collaborators.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors surfaced by the interactive CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    Input(String),
    #[error("Prompt failed: {0}")]
    Prompt(String),
    #[error("Cancelled")]
    Cancelled,
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::App(err.into())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::App(err.into())
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CliError::App(err.into())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::App(err.into())
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        CliError::Prompt(err.to_string())
    }
}
