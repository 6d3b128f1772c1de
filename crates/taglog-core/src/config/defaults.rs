//! Default configuration assembly

use crate::layout::build_layout;

use super::types::{AppenderConfig, CategoryConfig, Configuration};

/// Name of the single appender in the default configuration
pub const DEFAULT_APPENDER: &str = "out";

/// Name of the catch-all category
pub const DEFAULT_CATEGORY: &str = "default";

/// A ready-to-use configuration for `level`
///
/// One `stdout` appender using the default call-site layout, and one
/// `default` category at `level` routed to it. The level is not checked
/// here; the engine rejects unknown levels when configured.
pub fn build_defaults(level: &str) -> Configuration {
    Configuration::new()
        .with_appender(
            DEFAULT_APPENDER,
            AppenderConfig::new("stdout").with_layout(build_layout(None, true, None)),
        )
        .with_category(
            DEFAULT_CATEGORY,
            CategoryConfig::new([DEFAULT_APPENDER], level),
        )
}
