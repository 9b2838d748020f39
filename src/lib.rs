//! artifactio - file I/O helpers for configuration and model artifacts
//!
//! Reads and writes YAML/JSON configuration, serde-backed binary artifacts
//! and base64 image payloads through a single [`ArtifactIo`] handle.
//!
//! ```no_run
//! use artifactio::ArtifactIo;
//!
//! # fn main() -> artifactio::Result<()> {
//! let io = ArtifactIo::default();
//! let config = io.read_config("config/config.yaml")?;
//! let root = config.require_str("artifacts_root")?;
//! io.create_directories([root], true)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use crate::core::{decode_bytes, encode_bytes, ArtifactIo, ConfigMapping};
pub use crate::error::{ArtifactError, ErrorKind, Format, Result};
pub use crate::logging::{IoLogger, LogRecord, MemoryLogger, TracingLogger};
