//! Log trait: the capability handed to components that need to log

use std::sync::Arc;

use crate::engine::Level;

/// Something that accepts log messages
///
/// Implementations:
/// - `Logger`: a context-tagged handle obtained from `LoggerFactory`
/// - `NoOpLogger`: silent logger for testing
pub trait Log: Send + Sync {
    /// Whether a message at `level` would be emitted
    fn is_enabled(&self, level: Level) -> bool;

    /// Log a message at `level`
    fn log(&self, level: Level, message: &str);

    fn trace(&self, message: &str) {
        self.log(Level::Trace, message);
    }

    fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.log(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    fn fatal(&self, message: &str) {
        self.log(Level::Fatal, message);
    }

    /// Log regardless of category threshold (except `OFF`)
    fn mark(&self, message: &str) {
        self.log(Level::Mark, message);
    }
}

/// Type alias for a boxed logger
pub type BoxedLog = Box<dyn Log>;

/// Type alias for an Arc-wrapped logger
pub type SharedLog = Arc<dyn Log>;

/// Extension trait for logging with format arguments
///
/// Formatting is skipped when the level is not enabled.
pub trait LogExt: Log {
    fn log_fmt(&self, level: Level, args: std::fmt::Arguments<'_>) {
        if self.is_enabled(level) {
            self.log(level, &args.to_string());
        }
    }

    fn debug_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log_fmt(Level::Debug, args);
    }

    fn info_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log_fmt(Level::Info, args);
    }

    fn warn_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log_fmt(Level::Warn, args);
    }

    fn error_fmt(&self, args: std::fmt::Arguments<'_>) {
        self.log_fmt(Level::Error, args);
    }
}

// Implement LogExt for all Log implementations
impl<T: Log + ?Sized> LogExt for T {}

/// Convenience macros for logging
#[macro_export]
macro_rules! log_trace {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LogExt as _;
            $logger.log_fmt($crate::engine::Level::Trace, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LogExt as _;
            $logger.log_fmt($crate::engine::Level::Debug, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LogExt as _;
            $logger.log_fmt($crate::engine::Level::Info, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LogExt as _;
            $logger.log_fmt($crate::engine::Level::Warn, format_args!($($arg)*))
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        {
            use $crate::logging::LogExt as _;
            $logger.log_fmt($crate::engine::Level::Error, format_args!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder {
        threshold: Option<Level>,
        seen: Mutex<Vec<(Level, String)>>,
    }

    impl Log for Recorder {
        fn is_enabled(&self, level: Level) -> bool {
            self.threshold.map(|t| level.passes(t)).unwrap_or(true)
        }

        fn log(&self, level: Level, message: &str) {
            self.seen.lock().push((level, message.to_string()));
        }
    }

    #[test]
    fn test_default_methods_route_levels() {
        let rec = Recorder::default();
        rec.trace("t");
        rec.warn("w");
        rec.fatal("f");
        rec.mark("m");
        let seen = rec.seen.lock().clone();
        assert_eq!(
            seen,
            vec![
                (Level::Trace, "t".to_string()),
                (Level::Warn, "w".to_string()),
                (Level::Fatal, "f".to_string()),
                (Level::Mark, "m".to_string()),
            ]
        );
    }

    #[test]
    fn test_macros_format_and_filter() {
        let rec = Recorder {
            threshold: Some(Level::Info),
            ..Default::default()
        };
        log_debug!(rec, "skipped {}", 1);
        log_info!(rec, "loaded {} items", 3);
        log_error!(rec, "{}: {}", "disk", "full");

        let seen = rec.seen.lock().clone();
        assert_eq!(
            seen,
            vec![
                (Level::Info, "loaded 3 items".to_string()),
                (Level::Error, "disk: full".to_string()),
            ]
        );
    }

    #[test]
    fn test_shared_log_through_arc() {
        let rec: SharedLog = Arc::new(Recorder::default());
        rec.info_fmt(format_args!("x={}", 1));
        log_warn!(rec, "via arc");
        log_trace!(rec, "trace via arc");
    }
}
