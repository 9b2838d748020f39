//! Directory creation and file size reporting

use crate::core::ArtifactIo;
use crate::error::{ArtifactError, Result};
use std::io;
use std::path::{Path, PathBuf};

const BYTES_PER_KB: f64 = 1024.0;

impl ArtifactIo {
    /// Create every directory in `paths` (with parents) that does not exist yet
    ///
    /// Existing directories are left alone and produce no log line. When
    /// `verbose` is set, each newly created directory is logged once.
    /// Returns the directories that were actually created, in input order.
    ///
    /// A path that already exists as a regular file is not skipped: it is
    /// reported as an `AlreadyExists` I/O error, since the directory the
    /// caller asked for cannot exist there.
    ///
    /// # Errors
    /// [`ArtifactError::Io`] if a directory cannot be created, or if the path
    /// exists but is not a directory. Directories created before the failing
    /// entry are kept.
    pub fn create_directories<I, P>(&self, paths: I, verbose: bool) -> Result<Vec<PathBuf>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut created = Vec::new();

        for path in paths {
            let path = path.as_ref();
            if path.is_dir() {
                continue;
            }
            if path.exists() {
                return Err(ArtifactError::io(
                    path,
                    io::Error::new(io::ErrorKind::AlreadyExists, "path exists and is not a directory"),
                ));
            }

            std::fs::create_dir_all(path).map_err(|e| ArtifactError::io(path, e))?;
            if verbose {
                self.info(&format!("Creating directory: {}", path.display()));
            }
            created.push(path.to_path_buf());
        }

        Ok(created)
    }

    /// Size of the file at `path` in kilobytes, e.g. `"12.34 KB"`
    pub fn get_file_size<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        file_size_bytes(path).map(format_kilobytes)
    }
}

/// Size of the file at `path` in bytes
pub fn file_size_bytes<P: AsRef<Path>>(path: P) -> Result<u64> {
    let path = path.as_ref();
    std::fs::metadata(path)
        .map(|meta| meta.len())
        .map_err(|e| ArtifactError::io(path, e))
}

/// Render a byte count as kilobytes with two decimals
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.2} KB", bytes as f64 / BYTES_PER_KB)
}
