//! Log events as seen by layouts and appenders

use std::collections::BTreeMap;

use chrono::{DateTime, Local};

use super::level::Level;

/// Context attached to a logger handle and copied onto each of its events
pub type Context = BTreeMap<String, String>;

/// A single log event
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub category: String,
    pub message: String,
    pub context: Context,
}

impl LogEvent {
    /// Create an event stamped with the current local time
    pub fn new(level: Level, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            category: category.into(),
            message: message.into(),
            context: Context::new(),
        }
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = context;
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Look up a context value by key
    pub fn context_value(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}
