//! Appenders: where rendered events go

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::layout::CompiledLayout;
use crate::logging::diag;

use super::event::LogEvent;

/// A destination for log events
pub trait Appender: Send + Sync {
    /// Render and write one event. Write failures are reported to the
    /// internal diagnostics log, never to the caller.
    fn append(&self, event: &LogEvent);

    fn flush(&self) {}
}

/// Which standard stream a console appender writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleTarget {
    Stdout,
    Stderr,
}

/// Writes rendered events to stdout or stderr, one per line
#[derive(Debug)]
pub struct ConsoleAppender {
    target: ConsoleTarget,
    layout: CompiledLayout,
}

impl ConsoleAppender {
    pub fn new(target: ConsoleTarget, layout: CompiledLayout) -> Self {
        Self { target, layout }
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn line(&self, event: &LogEvent) -> String {
        let mut line = self.layout.render(event);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}

impl Appender for ConsoleAppender {
    fn append(&self, event: &LogEvent) {
        let line = self.line(event);
        let result = match self.target {
            ConsoleTarget::Stdout => std::io::stdout().lock().write_all(line.as_bytes()),
            ConsoleTarget::Stderr => std::io::stderr().lock().write_all(line.as_bytes()),
        };
        if let Err(e) = result {
            diag::warn(module_path!(), &format!("console write failed: {}", e));
        }
    }

    fn flush(&self) {
        let result = match self.target {
            ConsoleTarget::Stdout => std::io::stdout().flush(),
            ConsoleTarget::Stderr => std::io::stderr().flush(),
        };
        if let Err(e) = result {
            diag::warn(module_path!(), &format!("console flush failed: {}", e));
        }
    }
}

/// Shared in-memory store of rendered lines
///
/// Clones share the same buffer, so one handle can be given to an appender
/// and another kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct LogBuffer {
    lines: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: String) {
        self.lines.lock().push(line);
    }

    /// Snapshot of the captured lines
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Take the captured lines, leaving the buffer empty
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Whether any captured line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|l| l.contains(needle))
    }
}

/// Captures rendered events in a [`LogBuffer`]
#[derive(Debug)]
pub struct MemoryAppender {
    layout: CompiledLayout,
    buffer: LogBuffer,
}

impl MemoryAppender {
    pub fn new(layout: CompiledLayout, buffer: LogBuffer) -> Self {
        Self { layout, buffer }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }
}

impl Appender for MemoryAppender {
    fn append(&self, event: &LogEvent) {
        self.buffer.push(self.layout.render(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Level;
    use crate::layout::Layout;

    fn pass_through() -> CompiledLayout {
        Layout::MessagePassThrough.compile().unwrap()
    }

    #[test]
    fn test_memory_appender() {
        let buffer = LogBuffer::new();
        let appender = MemoryAppender::new(pass_through(), buffer.clone());

        appender.append(&LogEvent::new(Level::Info, "app", "one"));
        appender.append(&LogEvent::new(Level::Warn, "app", "two"));

        assert_eq!(buffer.len(), 2);
        assert!(buffer.contains("two"));
        assert_eq!(appender.buffer().drain(), vec!["one", "two"]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_console_line_terminated_once() {
        let appender = ConsoleAppender::new(ConsoleTarget::Stdout, pass_through());
        let event = LogEvent::new(Level::Info, "app", "hello");
        assert_eq!(appender.line(&event), "hello\n");

        let event = LogEvent::new(Level::Info, "app", "already\n");
        assert_eq!(appender.line(&event), "already\n");
    }

    #[test]
    fn test_console_appender_writes() {
        // Just make sure it doesn't panic
        let appender = ConsoleAppender::new(ConsoleTarget::Stderr, pass_through());
        assert_eq!(appender.target(), ConsoleTarget::Stderr);
        appender.append(&LogEvent::new(Level::Error, "app", "to stderr"));
        appender.flush();
    }
}
