//! Base64 image payloads

use crate::core::ArtifactIo;
use crate::error::{ArtifactError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::Path;

/// Encode raw bytes as standard, padded base64
pub fn encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard, padded base64
///
/// ASCII whitespace is ignored so line-wrapped payloads decode, and a
/// leading `data:<mime>;base64,` URL prefix is stripped. Anything else
/// outside the standard alphabet is an error.
pub fn decode_bytes(encoded: &str) -> Result<Vec<u8>> {
    let payload = strip_data_url(encoded.trim_start());
    let compact: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    Ok(STANDARD.decode(compact)?)
}

fn strip_data_url(text: &str) -> &str {
    if !text.starts_with("data:") {
        return text;
    }
    match text.find(";base64,") {
        Some(idx) => &text[idx + ";base64,".len()..],
        None => text,
    }
}

impl ArtifactIo {
    /// Decode base64 text and write the bytes to `output_path`, overwriting it
    ///
    /// Nothing is written when the input does not decode.
    pub fn decode_image<P: AsRef<Path>>(&self, encoded: &str, output_path: P) -> Result<()> {
        let path = output_path.as_ref();
        let bytes = decode_bytes(encoded)?;
        std::fs::write(path, &bytes).map_err(|e| ArtifactError::io(path, e))?;
        self.debug(&format!(
            "image written to {} ({} bytes)",
            path.display(),
            bytes.len()
        ));
        Ok(())
    }

    /// Read a file and return its contents as base64 text
    pub fn encode_image<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| ArtifactError::io(path, e))?;
        self.debug(&format!("encoded {} ({} bytes)", path.display(), bytes.len()));
        Ok(encode_bytes(&bytes))
    }
}
