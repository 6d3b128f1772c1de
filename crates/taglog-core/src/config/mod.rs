//! Engine configuration
//!
//! - `Configuration` and friends: the structure handed to an engine
//! - `build_defaults`: a one-appender, one-category default
//! - `FileConfigSource`: YAML/JSON configuration files

mod defaults;
mod error;
mod file;
mod types;

pub use defaults::{build_defaults, DEFAULT_APPENDER, DEFAULT_CATEGORY};
pub use error::{ConfigError, ConfigResult};
pub use file::{default_config_path, ConfigFormat, FileConfigSource};
pub use types::{AppenderConfig, CategoryConfig, Configuration};
