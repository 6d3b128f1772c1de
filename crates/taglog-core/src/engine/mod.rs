//! Logging engine: severity filtering, routing and appenders
//!
//! This module provides:
//! - `LogEngine` trait, the seam between logger handles and whatever emits events
//! - `Dispatcher`, the built-in engine (category routing, level filtering)
//! - Console and memory appenders plus a registry for creating appenders by type name

mod appender;
mod dispatcher;
mod error;
mod event;
mod level;
mod registry;
mod traits;

pub use appender::{Appender, ConsoleAppender, ConsoleTarget, LogBuffer, MemoryAppender};
pub use dispatcher::Dispatcher;
pub use error::{EngineError, EngineResult};
pub use event::{Context, LogEvent};
pub use level::Level;
pub use registry::{console_factory, memory_factory, AppenderDefinition, AppenderFactory, AppenderRegistry};
pub use traits::{LogEngine, SharedEngine};
