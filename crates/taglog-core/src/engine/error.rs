//! Engine error types

use thiserror::Error;

/// Errors raised while configuring or running a logging engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Configuration must define a \"default\" category")]
    MissingDefaultCategory,

    #[error("Category {category} references unknown appender {appender}")]
    UnknownAppender { category: String, appender: String },

    #[error("Category {0} has no appenders")]
    NoAppenders(String),

    #[error("Unknown appender type: {0}")]
    UnknownAppenderType(String),

    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Appender error: {0}")]
    Appender(String),
}

impl EngineError {
    /// Create an invalid pattern error
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create an unknown appender error
    pub fn unknown_appender(category: impl Into<String>, appender: impl Into<String>) -> Self {
        Self::UnknownAppender {
            category: category.into(),
            appender: appender.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
