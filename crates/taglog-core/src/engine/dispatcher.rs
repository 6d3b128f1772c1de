//! The built-in engine: routes events from categories to appenders

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::{Configuration, DEFAULT_CATEGORY};
use crate::logging::diag;

use super::appender::Appender;
use super::error::{EngineError, EngineResult};
use super::event::LogEvent;
use super::level::Level;
use super::registry::AppenderRegistry;
use super::traits::LogEngine;

struct Route {
    level: Level,
    appenders: Vec<Arc<dyn Appender>>,
}

/// A validated, ready-to-use configuration
struct Router {
    appenders: BTreeMap<String, Arc<dyn Appender>>,
    routes: HashMap<String, Route>,
}

impl Router {
    fn compile(config: &Configuration, registry: &AppenderRegistry) -> EngineResult<Self> {
        if !config.categories.contains_key(DEFAULT_CATEGORY) {
            return Err(EngineError::MissingDefaultCategory);
        }

        let mut appenders = BTreeMap::new();
        for (name, appender) in &config.appenders {
            appenders.insert(name.clone(), registry.create(appender)?);
        }

        let mut routes = HashMap::new();
        for (category, cat_config) in &config.categories {
            if cat_config.appenders.is_empty() {
                return Err(EngineError::NoAppenders(category.clone()));
            }
            let level: Level = cat_config.level.parse()?;
            let targets = cat_config
                .appenders
                .iter()
                .map(|name| {
                    appenders
                        .get(name)
                        .cloned()
                        .ok_or_else(|| EngineError::unknown_appender(category, name))
                })
                .collect::<EngineResult<Vec<_>>>()?;
            routes.insert(
                category.clone(),
                Route {
                    level,
                    appenders: targets,
                },
            );
        }

        Ok(Self { appenders, routes })
    }

    /// Most specific configured category: `a.b.c`, then `a.b`, then `a`, then `default`
    fn route(&self, category: &str) -> Option<&Route> {
        let mut name = category;
        loop {
            if let Some(route) = self.routes.get(name) {
                return Some(route);
            }
            match name.rfind('.') {
                Some(pos) => name = &name[..pos],
                None => break,
            }
        }
        self.routes.get(DEFAULT_CATEGORY)
    }
}

/// Category-routing engine
///
/// Until configured, nothing is emitted. Reconfiguring swaps the whole
/// routing table at once; handles created earlier pick up the new one.
///
/// # Example
///
/// ```
/// use taglog_core::config::build_defaults;
/// use taglog_core::engine::{Dispatcher, Level, LogEngine};
///
/// let engine = Dispatcher::new();
/// assert!(!engine.is_enabled("app", Level::Error));
///
/// engine.configure(&build_defaults("warn")).unwrap();
/// assert!(engine.is_enabled("app", Level::Error));
/// assert!(!engine.is_enabled("app", Level::Info));
/// ```
pub struct Dispatcher {
    registry: AppenderRegistry,
    router: RwLock<Option<Arc<Router>>>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// Create an unconfigured engine with the built-in appender types
    pub fn new() -> Self {
        Self::with_registry(AppenderRegistry::new())
    }

    pub fn with_registry(registry: AppenderRegistry) -> Self {
        Self {
            registry,
            router: RwLock::new(None),
        }
    }

    /// Appender types available to `configure`
    pub fn registry(&self) -> &AppenderRegistry {
        &self.registry
    }

    pub fn is_configured(&self) -> bool {
        self.router.read().is_some()
    }

    /// Threshold that applies to `category`, if configured
    pub fn level_for(&self, category: &str) -> Option<Level> {
        self.current()?.route(category).map(|r| r.level)
    }

    fn current(&self) -> Option<Arc<Router>> {
        self.router.read().clone()
    }
}

impl LogEngine for Dispatcher {
    fn configure(&self, config: &Configuration) -> EngineResult<()> {
        let router = Router::compile(config, &self.registry)?;
        diag::debug(
            module_path!(),
            &format!(
                "configured {} appender(s), {} categor(ies)",
                router.appenders.len(),
                router.routes.len()
            ),
        );
        *self.router.write() = Some(Arc::new(router));
        Ok(())
    }

    fn is_enabled(&self, category: &str, level: Level) -> bool {
        self.level_for(category)
            .map(|threshold| level.passes(threshold))
            .unwrap_or(false)
    }

    fn dispatch(&self, event: LogEvent) {
        let Some(router) = self.current() else {
            return;
        };
        let Some(route) = router.route(&event.category) else {
            return;
        };
        if !event.level.passes(route.level) {
            return;
        }
        for appender in &route.appenders {
            appender.append(&event);
        }
    }

    fn flush(&self) {
        if let Some(router) = self.current() {
            for appender in router.appenders.values() {
                appender.flush();
            }
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("configured", &self.is_configured())
            .finish()
    }
}
