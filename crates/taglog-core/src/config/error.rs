//! Configuration loading errors

use thiserror::Error;

use crate::engine::EngineError;

/// Errors that can occur while loading a configuration and configuring an engine from it
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("Engine rejected configuration: {0}")]
    Engine(#[from] EngineError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
