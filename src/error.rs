//! Error types for artifact I/O

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File format an error was raised for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Binary,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => write!(f, "YAML"),
            Format::Json => write!(f, "JSON"),
            Format::Binary => write!(f, "binary"),
        }
    }
}

/// Coarse error category, one per failure class callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyConfig,
    Parse,
    Io,
    Decode,
    Serialization,
    Deserialization,
    MissingKey,
    InvalidValue,
}

/// Error types for artifact operations
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file is empty: {}", .path.display())]
    EmptyConfig { path: PathBuf },

    #[error("failed to parse {format} file {}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("failed to serialize {format} for {}: {message}", .path.display())]
    Serialization {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("invalid binary artifact {}: {message}", .path.display())]
    Deserialization { path: PathBuf, message: String },

    #[error("invalid base64 input: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("missing required config key '{key}'")]
    MissingKey { key: String },

    #[error("config key '{key}' has an unexpected value: {message}")]
    InvalidValue { key: String, message: String },
}

impl ArtifactError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ArtifactError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, format: Format, message: impl fmt::Display) -> Self {
        ArtifactError::Parse {
            path: path.to_path_buf(),
            format,
            message: message.to_string(),
        }
    }

    pub(crate) fn serialization(path: &Path, format: Format, message: impl fmt::Display) -> Self {
        ArtifactError::Serialization {
            path: path.to_path_buf(),
            format,
            message: message.to_string(),
        }
    }

    pub(crate) fn deserialization(path: &Path, message: impl fmt::Display) -> Self {
        ArtifactError::Deserialization {
            path: path.to_path_buf(),
            message: message.to_string(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArtifactError::Io { .. } => ErrorKind::Io,
            ArtifactError::EmptyConfig { .. } => ErrorKind::EmptyConfig,
            ArtifactError::Parse { .. } => ErrorKind::Parse,
            ArtifactError::Serialization { .. } => ErrorKind::Serialization,
            ArtifactError::Deserialization { .. } => ErrorKind::Deserialization,
            ArtifactError::Decode(_) => ErrorKind::Decode,
            ArtifactError::MissingKey { .. } => ErrorKind::MissingKey,
            ArtifactError::InvalidValue { .. } => ErrorKind::InvalidValue,
        }
    }

    /// Path the error was raised for, if it concerns a file
    pub fn path(&self) -> Option<&Path> {
        match self {
            ArtifactError::Io { path, .. }
            | ArtifactError::EmptyConfig { path }
            | ArtifactError::Parse { path, .. }
            | ArtifactError::Serialization { path, .. }
            | ArtifactError::Deserialization { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result alias for artifact operations
pub type Result<T> = std::result::Result<T, ArtifactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_mentions_path() {
        let err = ArtifactError::io(
            Path::new("/data/params.yaml"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.path(), Some(Path::new("/data/params.yaml")));
        assert!(err.to_string().contains("/data/params.yaml"));
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = ArtifactError::parse(Path::new("scores.json"), Format::Json, "expected value");
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(
            err.to_string(),
            "failed to parse JSON file scores.json: expected value"
        );
    }

    #[test]
    fn test_key_errors_have_no_path() {
        let err = ArtifactError::MissingKey {
            key: "model.lr".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::MissingKey);
        assert!(err.path().is_none());
    }
}
