//! Internal diagnostics for the logging machinery itself
//!
//! The engine cannot log its own problems through itself, so appender write
//! failures and configuration changes go to a plain file in the temp dir.
//! Off unless `TAGLOG_DEBUG` is `1` or `true`; `TAGLOG_DEBUG_LEVEL` sets the
//! threshold (default `debug`).

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::engine::Level;

struct DiagState {
    file: Option<File>,
    min_level: Level,
    enabled: bool,
}

impl DiagState {
    fn from_env() -> Self {
        let enabled = std::env::var("TAGLOG_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        let min_level = std::env::var("TAGLOG_DEBUG_LEVEL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(Level::Debug);
        let file = if enabled { open_log_file() } else { None };

        Self {
            file,
            min_level,
            enabled,
        }
    }

    fn write(&mut self, level: Level, module: &str, message: &str) {
        if !self.enabled || !level.passes(self.min_level) {
            return;
        }

        if let Some(ref mut file) = self.file {
            let timestamp = Local::now().format("%H:%M:%S%.3f");
            let _ = writeln!(file, "[{}] [{:<5}] [{}] {}", timestamp, level, module, message);
            let _ = file.flush();
        }
    }
}

fn open_log_file() -> Option<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path())
        .ok()
}

static DIAG: Lazy<Mutex<DiagState>> = Lazy::new(|| Mutex::new(DiagState::from_env()));

/// Whether diagnostics are being written
pub fn is_enabled() -> bool {
    DIAG.lock().enabled
}

/// Write a diagnostic line at the specified level
pub fn log(level: Level, module: &str, message: &str) {
    DIAG.lock().write(level, module, message);
}

pub fn trace(module: &str, message: &str) {
    log(Level::Trace, module, message);
}

pub fn debug(module: &str, message: &str) {
    log(Level::Debug, module, message);
}

pub fn info(module: &str, message: &str) {
    log(Level::Info, module, message);
}

pub fn warn(module: &str, message: &str) {
    log(Level::Warn, module, message);
}

pub fn error(module: &str, message: &str) {
    log(Level::Error, module, message);
}

/// Path of the diagnostics file
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("taglog-debug.log")
}

/// Truncate the diagnostics file
pub fn clear_log() {
    let path = log_file_path();
    if let Ok(file) = File::create(&path) {
        drop(file);
    }
    let mut state = DIAG.lock();
    if state.enabled {
        state.file = open_log_file();
    }
}
