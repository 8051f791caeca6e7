//! Log callback system.
//!
//! The library never writes to stdout/stderr on its own. Embedders that want
//! diagnostics register a callback and route records into their own logger.

use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Log level for debug callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Arc<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback, replacing any previous one.
///
/// The callback runs outside the registry lock, so it may itself log,
/// format input, or swap the callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Arc::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// The installed callback, cloned out so the lock is released before it runs.
fn current_callback() -> Option<LogCallback> {
    log_callback()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Emit a log record to the registered callback, if any.
pub fn emit_log(level: LogLevel, message: &str) {
    if let Some(callback) = current_callback() {
        callback(level, message);
    }
}

/// Emit a lazily formatted log record.
///
/// The message closure only runs when a callback is installed.
pub(crate) fn emit_log_with<F>(level: LogLevel, message: F)
where
    F: FnOnce() -> String,
{
    if let Some(callback) = current_callback() {
        callback(level, &message());
    }
}
