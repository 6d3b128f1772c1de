//! Logger handles

use std::fmt;

use crate::engine::{Context, Level, LogEvent, SharedEngine};

use super::traits::Log;

/// A logger for one category, carrying its own context
///
/// Every event the handle emits copies the handle's context, which is how
/// the `call` layout token learns who is logging. Cloning a handle clones
/// its context; the two can then diverge.
#[derive(Clone)]
pub struct Logger {
    category: String,
    context: Context,
    engine: SharedEngine,
}

impl Logger {
    /// Create a handle for `category` on `engine`
    pub fn new(category: impl Into<String>, engine: SharedEngine) -> Self {
        Self {
            category: category.into(),
            context: Context::new(),
            engine,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Attach a context entry, replacing any previous value for `key`
    pub fn add_context(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.context.insert(key.into(), value.into());
    }

    pub fn remove_context(&mut self, key: &str) -> Option<String> {
        self.context.remove(key)
    }

    pub fn clear_context(&mut self) {
        self.context.clear();
    }

    /// Builder form of [`Logger::add_context`]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add_context(key, value);
        self
    }

    /// The engine this handle emits to
    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }
}

impl Log for Logger {
    fn is_enabled(&self, level: Level) -> bool {
        self.engine.is_enabled(&self.category, level)
    }

    fn log(&self, level: Level, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        let event = LogEvent::new(level, self.category.as_str(), message).with_context(self.context.clone());
        self.engine.dispatch(event);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("category", &self.category)
            .field("context", &self.context)
            .finish()
    }
}
