#![deny(missing_docs)]
//! Shared logging utilities for the filepeek workspace.
//!
//! This crate provides the `engine_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Messages logged
//! through the macros carry the current request id (when one is set), so log
//! lines from concurrent fetches can be correlated across the privilege
//! boundary.

use std::cell::Cell;

thread_local! {
    /// Thread-local storage for the request id currently being handled.
    /// Zero means "no request in flight".
    static REQUEST_ID: Cell<u64> = const { Cell::new(0) };
}

/// Sets the request id for the current thread. Call this when a privileged
/// handler starts working on a boundary request.
pub fn set_request_id(id: u64) {
    REQUEST_ID.with(|v| v.set(id));
}

/// Clears the request id for the current thread.
pub fn clear_request_id() {
    REQUEST_ID.with(|v| v.set(0));
}

/// Retrieves the request id for the current thread. Returns 0 if none is set.
pub fn current_request_id() -> u64 {
    REQUEST_ID.with(|v| v.get())
}

/// Internal helper used by the logging macros. Not part of the public API.
#[doc(hidden)]
pub fn __log_with_request_id(level: log::Level, args: std::fmt::Arguments<'_>) {
    let rid = current_request_id();
    if rid != 0 {
        log::log!(level, "[req {rid}] {args}");
    } else {
        log::log!(level, "{args}");
    }
}

/// Logs a trace-level message, tagged with the current request id.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        $crate::__log_with_request_id(log::Level::Trace, format_args!($($arg)*));
    }};
}

/// Logs a debug-level message, tagged with the current request id.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        $crate::__log_with_request_id(log::Level::Debug, format_args!($($arg)*));
    }};
}

/// Logs an info-level message, tagged with the current request id.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        $crate::__log_with_request_id(log::Level::Info, format_args!($($arg)*));
    }};
}

/// Logs a warn-level message, tagged with the current request id.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        $crate::__log_with_request_id(log::Level::Warn, format_args!($($arg)*));
    }};
}

/// Logs an error-level message, tagged with the current request id.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        $crate::__log_with_request_id(log::Level::Error, format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
