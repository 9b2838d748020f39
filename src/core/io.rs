//! The `ArtifactIo` handle
//!
//! Operations themselves live next to the format they deal with
//! (`config`, `binary`, `image`, `fs`); this module only holds the shared
//! handle and its logger.

use crate::logging::{IoLogger, TracingLogger};
use std::fmt;
use std::sync::Arc;
use tracing::Level;

/// Stateless entry point for reading and writing configuration and
/// artifact files
///
/// The only state is the injected logger. Cloning is cheap and clones share
/// the same logger.
#[derive(Clone)]
pub struct ArtifactIo {
    logger: Arc<dyn IoLogger>,
}

impl ArtifactIo {
    /// Create a handle that reports through `logger`
    pub fn new(logger: impl IoLogger + 'static) -> Self {
        Self {
            logger: Arc::new(logger),
        }
    }

    /// Create a handle from an already shared logger
    pub fn with_shared_logger(logger: Arc<dyn IoLogger>) -> Self {
        Self { logger }
    }

    pub(crate) fn info(&self, message: &str) {
        self.logger.log(Level::INFO, message);
    }

    pub(crate) fn debug(&self, message: &str) {
        self.logger.log(Level::DEBUG, message);
    }
}

impl Default for ArtifactIo {
    fn default() -> Self {
        Self::new(TracingLogger)
    }
}

impl fmt::Debug for ArtifactIo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactIo").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemoryLogger;

    #[test]
    fn test_clones_share_logger() {
        let logger = MemoryLogger::new();
        let io = ArtifactIo::new(logger.clone());
        let copy = io.clone();

        io.info("one");
        copy.debug("two");

        let records = logger.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::INFO);
        assert_eq!(records[1].level, Level::DEBUG);
    }

    #[test]
    fn test_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ArtifactIo>();
    }
}
