//! Severity levels

use std::fmt;
use std::str::FromStr;

use super::error::EngineError;

/// Severity levels, ordered from most to least verbose
///
/// `All` and `Off` are thresholds only: a category at `All` emits everything,
/// a category at `Off` emits nothing. Events are never logged at either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    All,
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Mark,
    Off,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::All => "ALL",
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
            Level::Mark => "MARK",
            Level::Off => "OFF",
        }
    }

    /// Whether an event at `self` passes a category threshold of `threshold`
    pub fn passes(&self, threshold: Level) -> bool {
        !matches!(self, Level::All | Level::Off) && threshold != Level::Off && *self >= threshold
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Level {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Level::All),
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            "mark" => Ok(Level::Mark),
            "off" => Ok(Level::Off),
            _ => Err(EngineError::UnknownLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::All < Level::Trace);
        assert!(Level::Debug > Level::Trace);
        assert!(Level::Info > Level::Debug);
        assert!(Level::Warn > Level::Info);
        assert!(Level::Error > Level::Warn);
        assert!(Level::Off > Level::Mark);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!(" Debug ".parse::<Level>().unwrap(), Level::Debug);
        assert!(matches!(
            "verbose".parse::<Level>(),
            Err(EngineError::UnknownLevel(ref l)) if l == "verbose"
        ));
    }

    #[test]
    fn test_passes_threshold() {
        assert!(Level::Info.passes(Level::Info));
        assert!(Level::Error.passes(Level::Info));
        assert!(!Level::Debug.passes(Level::Info));
        assert!(Level::Trace.passes(Level::All));
        assert!(!Level::Fatal.passes(Level::Off));
        assert!(!Level::Off.passes(Level::All));
        assert!(!Level::All.passes(Level::All));
    }
}
