//! Logging engine trait

use std::sync::Arc;

use crate::config::Configuration;

use super::error::EngineResult;
use super::event::LogEvent;
use super::level::Level;

/// The engine behind logger handles
///
/// Routing, severity filtering and transport all live behind this trait.
/// The factory only configures an engine and creates handles against it.
///
/// Implementations:
/// - `Dispatcher`: the built-in engine (category routing, console and memory appenders)
/// - Custom implementations bridging to another logging backend
pub trait LogEngine: Send + Sync {
    /// Replace the engine's configuration
    ///
    /// Either the whole configuration is accepted or the previous one stays
    /// in effect.
    fn configure(&self, config: &Configuration) -> EngineResult<()>;

    /// Whether an event at `level` in `category` would be emitted
    fn is_enabled(&self, category: &str, level: Level) -> bool;

    /// Emit an event. Events that are not enabled are dropped.
    fn dispatch(&self, event: LogEvent);

    /// Flush buffered output
    fn flush(&self) {}
}

/// Type alias for an Arc-wrapped engine
pub type SharedEngine = Arc<dyn LogEngine>;
