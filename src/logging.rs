//! Logging capability injected into [`ArtifactIo`](crate::ArtifactIo)
//!
//! The library never installs a global subscriber. Callers hand in an
//! [`IoLogger`]; the default forwards to `tracing` so that whatever
//! subscriber the host binary installed picks the messages up.

use std::sync::{Arc, Mutex};
use tracing::Level;

/// Sink for the log lines emitted by artifact operations
///
/// Any `Fn(Level, &str) + Send + Sync` closure implements this trait, so a
/// caller can route messages anywhere:
///
/// ```
/// use artifactio::{ArtifactIo, IoLogger};
/// use tracing::Level;
///
/// let io = ArtifactIo::new(|level: Level, message: &str| {
///     eprintln!("[{}] {}", level, message);
/// });
/// # let _ = io;
/// ```
pub trait IoLogger: Send + Sync {
    /// Record one message at the given level
    fn log(&self, level: Level, message: &str);
}

impl<F> IoLogger for F
where
    F: Fn(Level, &str) + Send + Sync,
{
    fn log(&self, level: Level, message: &str) {
        self(level, message)
    }
}

/// Logger that emits `tracing` events under the `artifactio` target
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl IoLogger for TracingLogger {
    fn log(&self, level: Level, message: &str) {
        match level {
            Level::ERROR => tracing::error!(target: "artifactio", "{}", message),
            Level::WARN => tracing::warn!(target: "artifactio", "{}", message),
            Level::INFO => tracing::info!(target: "artifactio", "{}", message),
            Level::DEBUG => tracing::debug!(target: "artifactio", "{}", message),
            Level::TRACE => tracing::trace!(target: "artifactio", "{}", message),
        }
    }
}

/// A single captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
}

/// Logger that keeps every message in memory
///
/// Clones share the same buffer, so one handle can be given to
/// [`ArtifactIo`](crate::ArtifactIo) while another is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Messages only, in emission order
    pub fn messages(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogRecord>> {
        // A panic while holding the lock cannot leave a Vec half-pushed.
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl IoLogger for MemoryLogger {
    fn log(&self, level: Level, message: &str) {
        self.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records_in_order() {
        let logger = MemoryLogger::new();
        logger.log(Level::INFO, "first");
        logger.log(Level::DEBUG, "second");

        assert_eq!(logger.len(), 2);
        assert_eq!(logger.messages(), vec!["first", "second"]);
        assert_eq!(logger.records()[1].level, Level::DEBUG);
    }

    #[test]
    fn test_memory_logger_clones_share_buffer() {
        let logger = MemoryLogger::new();
        let handle = logger.clone();
        logger.log(Level::WARN, "shared");

        assert_eq!(handle.messages(), vec!["shared"]);
        handle.clear();
        assert!(logger.is_empty());
    }

    #[test]
    fn test_closure_logger() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let logger = move |level: Level, message: &str| {
            sink.lock().unwrap().push(format!("{}:{}", level, message));
        };

        logger.log(Level::INFO, "hello");
        assert_eq!(*seen.lock().unwrap(), vec!["INFO:hello".to_string()]);
    }

    #[test]
    fn test_tracing_logger_without_subscriber() {
        // No subscriber installed: events are dropped, never panic.
        TracingLogger.log(Level::ERROR, "nobody listening");
    }
}
