//! Logger handles and the logging capability
//!
//! - `Log` / `LogExt`: what components log through
//! - `Logger`: a category handle with attached context
//! - `NoOpLogger`: silent implementation
//! - `diag`: the crate's own diagnostics file

pub mod diag;
mod logger;
mod noop;
mod traits;

pub use logger::Logger;
pub use noop::NoOpLogger;
pub use traits::{BoxedLog, Log, LogExt, SharedLog};
