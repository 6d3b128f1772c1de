//! Logger factory: configures an engine once and hands out tagged loggers

use std::path::Path;
use std::sync::Arc;

use crate::config::{build_defaults, ConfigResult, Configuration, FileConfigSource};
use crate::engine::{Dispatcher, EngineResult, SharedEngine};
use crate::identity::{IdentityValue, InvalidIdentityError};
use crate::layout::{build_layout, Layout, TokenTable, DEFAULT_PATTERN};
use crate::logging::{diag, Logger};

/// How to configure the engine when a factory is created
#[derive(Debug, Clone)]
pub enum FactoryInit {
    /// A bare level: use [`build_defaults`] for it
    Level(String),
    /// A full configuration, passed to the engine as is
    Config(Configuration),
}

impl From<&str> for FactoryInit {
    fn from(level: &str) -> Self {
        FactoryInit::Level(level.to_string())
    }
}

impl From<String> for FactoryInit {
    fn from(level: String) -> Self {
        FactoryInit::Level(level)
    }
}

impl From<Configuration> for FactoryInit {
    fn from(config: Configuration) -> Self {
        FactoryInit::Config(config)
    }
}

/// Produces loggers tagged with who is logging
///
/// Create one at startup and pass it (or the loggers it produces) to the
/// components that need it.
///
/// # Example
///
/// ```
/// use taglog_core::identity::{fn_ref, obj_ref};
/// use taglog_core::logging::Log;
/// use taglog_core::LoggerFactory;
///
/// struct Scheduler;
/// fn tick() {}
///
/// let factory = LoggerFactory::new("info").unwrap();
///
/// // Renders as "[..] [INFO] [jobs] [Scheduler.run()]: starting"
/// let logger = factory.get_logger("jobs", obj_ref(&Scheduler), Some("run")).unwrap();
/// logger.info("starting");
///
/// // Renders as "[..] [INFO] [jobs] [tick()]: tick"
/// let logger = factory.get_logger("jobs", fn_ref(&tick), None).unwrap();
/// logger.info("tick");
/// ```
#[derive(Clone)]
pub struct LoggerFactory {
    engine: SharedEngine,
}

impl LoggerFactory {
    /// Create a factory on the built-in [`Dispatcher`] engine
    pub fn new(init: impl Into<FactoryInit>) -> EngineResult<Self> {
        Self::with_engine(Arc::new(Dispatcher::new()), init)
    }

    /// Create a factory on a given engine, configuring it
    pub fn with_engine(engine: SharedEngine, init: impl Into<FactoryInit>) -> EngineResult<Self> {
        let config = match init.into() {
            FactoryInit::Level(level) => Self::defaults(&level),
            FactoryInit::Config(config) => config,
        };
        engine.configure(&config)?;
        diag::debug(module_path!(), "logger factory initialized");
        Ok(Self { engine })
    }

    /// Create a factory from a YAML or JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let config = FileConfigSource::new(path.as_ref()).load()?;
        Ok(Self::new(config)?)
    }

    /// Get a logger for `category` tagged with `caller`
    ///
    /// Functions tag the logger with `funcName`. Objects tag it with
    /// `className`, plus `funcName` when `method` is a non-empty string.
    /// `method` is ignored for functions.
    ///
    /// Fails before touching the engine if `caller` is not a function or
    /// a non-null object.
    pub fn get_logger(
        &self,
        category: &str,
        caller: impl IdentityValue,
        method: Option<&str>,
    ) -> Result<Logger, InvalidIdentityError> {
        let identity = caller.identify()?.with_method(method);

        let mut logger = Logger::new(category, Arc::clone(&self.engine));
        for (key, value) in identity.context_entries() {
            logger.add_context(key, value);
        }
        Ok(logger)
    }

    /// The engine loggers from this factory emit to
    pub fn engine(&self) -> &SharedEngine {
        &self.engine
    }

    /// Flush the engine's appenders
    pub fn flush(&self) {
        self.engine.flush();
    }

    /// The default call-site aware layout, for composing custom configurations
    pub fn default_layout(
        pattern: Option<&str>,
        include_call: bool,
        tokens: Option<TokenTable>,
    ) -> Layout {
        build_layout(pattern, include_call, tokens)
    }

    /// The date, severity and category prefix of the default layout
    pub fn default_pattern() -> &'static str {
        DEFAULT_PATTERN
    }

    /// A ready-to-use configuration for `level`
    pub fn defaults(level: &str) -> Configuration {
        build_defaults(level)
    }
}

impl std::fmt::Debug for LoggerFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerFactory").finish_non_exhaustive()
    }
}
