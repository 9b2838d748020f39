//! Binary artifacts (trained models, encoders, fitted transforms)
//!
//! On-disk layout:
//!
//! ```text
//! +------+---------+-------------------------------------+
//! | AIOB | version | MessagePack payload (named fields)  |
//! +------+---------+-------------------------------------+
//!   4 B     1 B
//! ```
//!
//! MessagePack is self-describing, so values that deserialize through
//! `deserialize_any` (`serde_json::Value`, untagged enums, skipped fields)
//! load back as they were saved. The payload must be consumed exactly;
//! trailing bytes are rejected.

use crate::core::ArtifactIo;
use crate::error::{ArtifactError, Format, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Leading bytes of every binary artifact
pub const MAGIC: &[u8; 4] = b"AIOB";

/// Envelope version written by this build
///
/// Version 1 carried a bincode payload and is no longer readable.
pub const FORMAT_VERSION: u8 = 2;

const HEADER_LEN: usize = MAGIC.len() + 1;

impl ArtifactIo {
    /// Serialize `data` into a binary artifact at `path`, overwriting it
    pub fn save_binary<T: Serialize + ?Sized, P: AsRef<Path>>(&self, data: &T, path: P) -> Result<()> {
        let path = path.as_ref();
        let payload = rmp_serde::to_vec_named(data)
            .map_err(|e| ArtifactError::serialization(path, Format::Binary, e))?;

        let file = File::create(path).map_err(|e| ArtifactError::io(path, e))?;
        write_envelope(file, &payload).map_err(|e| ArtifactError::io(path, e))?;

        self.info(&format!("binary file: {} successfully saved", path.display()));
        Ok(())
    }

    /// Read a binary artifact back into a `T`
    ///
    /// # Errors
    /// * [`ArtifactError::Io`] if the file cannot be read
    /// * [`ArtifactError::Deserialization`] if the header is wrong or the
    ///   payload does not decode to exactly one `T`
    pub fn load_binary<T: DeserializeOwned, P: AsRef<Path>>(&self, path: P) -> Result<T> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ArtifactError::io(path, e))?;
        let data = decode_artifact(path, &bytes)?;
        self.info(&format!("binary file: {} successfully loaded", path.display()));
        Ok(data)
    }
}

fn write_envelope(file: File, payload: &[u8]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(MAGIC)?;
    writer.write_all(&[FORMAT_VERSION])?;
    writer.write_all(payload)?;
    writer.flush()
}

fn decode_artifact<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> Result<T> {
    if bytes.len() < HEADER_LEN || &bytes[..MAGIC.len()] != MAGIC {
        return Err(ArtifactError::deserialization(
            path,
            "missing artifact header",
        ));
    }

    let version = bytes[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(ArtifactError::deserialization(
            path,
            format!(
                "unsupported format version {} (expected {})",
                version, FORMAT_VERSION
            ),
        ));
    }

    let payload = &bytes[HEADER_LEN..];
    let mut de = rmp_serde::Deserializer::new(Cursor::new(payload));
    let data = T::deserialize(&mut de).map_err(|e| ArtifactError::deserialization(path, e))?;

    let consumed = de.into_inner().position() as usize;
    if consumed != payload.len() {
        return Err(ArtifactError::deserialization(
            path,
            format!("{} trailing bytes after payload", payload.len() - consumed),
        ));
    }
    Ok(data)
}
