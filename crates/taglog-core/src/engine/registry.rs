//! Appender type registry for creating appenders by configured type name

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::AppenderConfig;
use crate::layout::CompiledLayout;
use crate::logging::diag;

use super::appender::{Appender, ConsoleAppender, ConsoleTarget, LogBuffer, MemoryAppender};
use super::error::{EngineError, EngineResult};

/// Factory function type for creating appenders
///
/// Receives the appender's configuration and its already compiled layout.
pub type AppenderFactory =
    Box<dyn Fn(&AppenderConfig, CompiledLayout) -> EngineResult<Arc<dyn Appender>> + Send + Sync>;

/// Factory for console appenders on `target`
pub fn console_factory(target: ConsoleTarget) -> AppenderFactory {
    Box::new(
        move |_config: &AppenderConfig, layout: CompiledLayout| -> EngineResult<Arc<dyn Appender>> {
            Ok(Arc::new(ConsoleAppender::new(target, layout)))
        },
    )
}

/// Factory for memory appenders that all write into `buffer`
pub fn memory_factory(buffer: LogBuffer) -> AppenderFactory {
    Box::new(
        move |_config: &AppenderConfig, layout: CompiledLayout| -> EngineResult<Arc<dyn Appender>> {
            Ok(Arc::new(MemoryAppender::new(layout, buffer.clone())))
        },
    )
}

/// Definition of a registered appender type
pub struct AppenderDefinition {
    /// Type name used in configurations (`type: stdout`)
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Factory function to create instances
    pub factory: AppenderFactory,
}

impl fmt::Debug for AppenderDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppenderDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Appender types known to an engine
///
/// `stdout`, `console` and `stderr` are registered on creation.
pub struct AppenderRegistry {
    types: RwLock<HashMap<String, AppenderDefinition>>,
}

impl Default for AppenderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AppenderRegistry {
    /// Create a registry with the built-in appender types
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.register("stdout", "Write to standard output", console_factory(ConsoleTarget::Stdout));
        registry.register(
            "console",
            "Write to standard output (alias of stdout)",
            console_factory(ConsoleTarget::Stdout),
        );
        registry.register("stderr", "Write to standard error", console_factory(ConsoleTarget::Stderr));
        registry
    }

    /// Create a registry with no appender types
    pub fn empty() -> Self {
        Self {
            types: RwLock::new(HashMap::new()),
        }
    }

    /// Register an appender type, replacing any previous type of that name
    ///
    /// # Example
    ///
    /// ```
    /// use taglog_core::engine::{memory_factory, AppenderRegistry, LogBuffer};
    ///
    /// let registry = AppenderRegistry::new();
    /// let buffer = LogBuffer::new();
    /// registry.register("capture", "Capture lines in memory", memory_factory(buffer.clone()));
    /// assert!(registry.has("capture"));
    /// ```
    pub fn register(&self, name: &str, description: &str, factory: AppenderFactory) {
        diag::debug(module_path!(), &format!("registering appender type {}", name));
        self.types.write().insert(
            name.to_string(),
            AppenderDefinition {
                name: name.to_string(),
                description: description.to_string(),
                factory,
            },
        );
    }

    /// Remove an appender type
    pub fn unregister(&self, name: &str) -> bool {
        self.types.write().remove(name).is_some()
    }

    /// Check if an appender type is registered
    pub fn has(&self, name: &str) -> bool {
        self.types.read().contains_key(name)
    }

    /// List registered appender types as (name, description) pairs, sorted by name
    pub fn list(&self) -> Vec<(String, String)> {
        let mut types: Vec<_> = self
            .types
            .read()
            .values()
            .map(|def| (def.name.clone(), def.description.clone()))
            .collect();
        types.sort();
        types
    }

    /// Create an appender from its configuration
    ///
    /// Appenders without a layout get the basic layout.
    pub fn create(&self, config: &AppenderConfig) -> EngineResult<Arc<dyn Appender>> {
        let layout = config.layout.clone().unwrap_or_default().compile()?;
        let types = self.types.read();
        let def = types
            .get(&config.kind)
            .ok_or_else(|| EngineError::UnknownAppenderType(config.kind.clone()))?;
        (def.factory)(config, layout)
    }
}

impl fmt::Debug for AppenderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.list().into_iter().map(|(n, _)| n).collect();
        f.debug_struct("AppenderRegistry").field("types", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Level, LogEvent};
    use crate::layout::Layout;

    #[test]
    fn test_builtin_types_registered() {
        let registry = AppenderRegistry::new();
        assert!(registry.has("stdout"));
        assert!(registry.has("console"));
        assert!(registry.has("stderr"));

        let names: Vec<_> = registry.list().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["console", "stderr", "stdout"]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = AppenderRegistry::empty();
        assert!(registry.list().is_empty());
        assert!(matches!(
            registry.create(&AppenderConfig::new("stdout")),
            Err(EngineError::UnknownAppenderType(ref t)) if t == "stdout"
        ));
    }

    #[test]
    fn test_register_custom_type() {
        let registry = AppenderRegistry::new();
        let buffer = LogBuffer::new();
        registry.register("capture", "test capture", memory_factory(buffer.clone()));

        let config = AppenderConfig::new("capture").with_layout(Layout::MessagePassThrough);
        let appender = registry.create(&config).unwrap();
        appender.append(&LogEvent::new(Level::Info, "app", "captured"));
        assert_eq!(buffer.lines(), vec!["captured"]);

        assert!(registry.unregister("capture"));
        assert!(!registry.has("capture"));
        assert!(!registry.unregister("capture"));
    }

    #[test]
    fn test_factory_sees_options() {
        let registry = AppenderRegistry::empty();
        registry.register(
            "picky",
            "requires a target option",
            Box::new(|config: &AppenderConfig, _layout: CompiledLayout| -> EngineResult<Arc<dyn Appender>> {
                config
                    .options
                    .get("target")
                    .ok_or_else(|| EngineError::Appender("picky: missing target".to_string()))?;
                Ok(Arc::new(MemoryAppender::new(
                    Layout::MessagePassThrough.compile()?,
                    LogBuffer::new(),
                )))
            }),
        );

        assert!(registry.create(&AppenderConfig::new("picky")).is_err());
        let config = AppenderConfig::new("picky").with_option("target", serde_json::json!("x"));
        assert!(registry.create(&config).is_ok());
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let registry = AppenderRegistry::new();
        let config = AppenderConfig::new("stdout").with_layout(Layout::Pattern {
            pattern: "%d{nope}".to_string(),
            tokens: Default::default(),
        });
        assert!(matches!(
            registry.create(&config),
            Err(EngineError::InvalidPattern { .. })
        ));
    }
}
