//! taglog core
//!
//! Context-tagged loggers. A [`LoggerFactory`] hands out loggers that know
//! who is logging: a function, or an object and optionally one of its
//! methods. The default layout renders that identity next to the category:
//!
//! ```text
//! [2024-03-09T14:05:06.000] [INFO] [jobs] [Scheduler.run()]: starting
//! ```
//!
//! ## Pieces
//!
//! - `identity`: classifying caller values into function / instance identities
//! - `layout`: the default pattern and the `call` token that renders identities
//! - `config`: engine configuration, defaults and configuration files
//! - `engine`: the `LogEngine` seam and the built-in `Dispatcher`
//! - `logging`: logger handles and the `Log` capability
//!
//! ```rust
//! use taglog_core::identity::obj_ref;
//! use taglog_core::logging::Log;
//! use taglog_core::LoggerFactory;
//!
//! struct Scheduler;
//!
//! impl Scheduler {
//!     fn run(&self, factory: &LoggerFactory) {
//!         let logger = factory.get_logger("jobs", obj_ref(self), Some("run")).unwrap();
//!         logger.info("starting");
//!     }
//! }
//!
//! let factory = LoggerFactory::new("info").unwrap();
//! Scheduler.run(&factory);
//! ```

pub mod config;
pub mod engine;
pub mod factory;
pub mod identity;
pub mod layout;
pub mod logging;

// Re-export commonly used types
pub use config::{build_defaults, AppenderConfig, CategoryConfig, ConfigError, Configuration};

pub use engine::{Dispatcher, EngineError, Level, LogEngine, LogEvent};

pub use factory::{FactoryInit, LoggerFactory};

pub use identity::{fn_ref, obj_ref, Identity, IdentityValue, InvalidIdentityError};

pub use layout::{build_layout, render_call_site, Layout, Token, TokenTable};

pub use logging::{Log, LogExt, Logger, NoOpLogger};
