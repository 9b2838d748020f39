//! YAML and JSON configuration files

use crate::core::mapping::{value_kind, ConfigMapping};
use crate::core::ArtifactIo;
use crate::error::{ArtifactError, Format, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

impl ArtifactIo {
    /// Load a YAML file as a [`ConfigMapping`]
    ///
    /// # Errors
    /// * [`ArtifactError::Io`] if the file cannot be read
    /// * [`ArtifactError::EmptyConfig`] if the document is empty or `null`
    /// * [`ArtifactError::Parse`] on malformed YAML, invalid UTF-8 or a
    ///   non-mapping document
    ///
    /// Merge keys (`<<: *anchor`) are resolved before the mapping is built.
    pub fn read_config<P: AsRef<Path>>(&self, path: P) -> Result<ConfigMapping> {
        let path = path.as_ref();
        let content = read_text(path, Format::Yaml)?;
        let mapping = parse_yaml(path, &content)?;
        self.info(&format!("yaml file: {} successfully loaded", path.display()));
        Ok(mapping)
    }

    /// Load a YAML file straight into a typed configuration struct
    ///
    /// Missing required fields and wrongly typed values are reported as
    /// [`ArtifactError::Parse`] so a bad file is rejected at load time.
    pub fn read_config_as<T: DeserializeOwned, P: AsRef<Path>>(&self, path: P) -> Result<T> {
        let path = path.as_ref();
        let mapping = self.read_config(path)?;
        serde_json::from_value(mapping.into_value())
            .map_err(|e| ArtifactError::parse(path, Format::Yaml, e))
    }

    /// Write `data` as YAML, overwriting `path`
    pub fn save_yaml<T: Serialize + ?Sized, P: AsRef<Path>>(&self, data: &T, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = serde_yaml::to_string(data)
            .map_err(|e| ArtifactError::serialization(path, Format::Yaml, e))?;
        write_text(path, &text)?;
        self.info(&format!("yaml file: {} successfully saved", path.display()));
        Ok(())
    }

    /// Write `data` as JSON, overwriting `path`
    pub fn save_json<T: Serialize + ?Sized, P: AsRef<Path>>(&self, data: &T, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ArtifactError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, data).map_err(|e| {
            if e.is_io() {
                ArtifactError::io(path, e.into())
            } else {
                ArtifactError::serialization(path, Format::Json, e)
            }
        })?;
        writer.flush().map_err(|e| ArtifactError::io(path, e))?;
        self.info(&format!("json file: {} successfully saved", path.display()));
        Ok(())
    }

    /// Load a JSON file as a [`ConfigMapping`]
    pub fn load_json<P: AsRef<Path>>(&self, path: P) -> Result<ConfigMapping> {
        let path = path.as_ref();
        let content = read_text(path, Format::Json)?;
        let mapping = parse_json(path, &content)?;
        self.info(&format!("json file: {} successfully loaded", path.display()));
        Ok(mapping)
    }

    /// Load a JSON file straight into a typed structure
    pub fn load_json_as<T: DeserializeOwned, P: AsRef<Path>>(&self, path: P) -> Result<T> {
        let path = path.as_ref();
        let mapping = self.load_json(path)?;
        serde_json::from_value(mapping.into_value())
            .map_err(|e| ArtifactError::parse(path, Format::Json, e))
    }
}

/// Parse YAML text into a mapping, attributing errors to `path`
pub fn parse_yaml(path: &Path, content: &str) -> Result<ConfigMapping> {
    if is_blank_yaml(content) {
        return Err(ArtifactError::EmptyConfig {
            path: path.to_path_buf(),
        });
    }

    let mut document: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| ArtifactError::parse(path, Format::Yaml, e))?;

    match &document {
        serde_yaml::Value::Null => {
            return Err(ArtifactError::EmptyConfig {
                path: path.to_path_buf(),
            })
        }
        serde_yaml::Value::Mapping(_) => {}
        other => {
            return Err(ArtifactError::parse(
                path,
                Format::Yaml,
                format!("top-level value must be a mapping, got {}", yaml_kind(other)),
            ))
        }
    }

    document
        .apply_merge()
        .map_err(|e| ArtifactError::parse(path, Format::Yaml, e))?;
    let value = serde_json::to_value(&document)
        .map_err(|e| ArtifactError::parse(path, Format::Yaml, e))?;
    into_mapping(path, Format::Yaml, value)
}

/// Parse JSON text into a mapping, attributing errors to `path`
pub fn parse_json(path: &Path, content: &str) -> Result<ConfigMapping> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| ArtifactError::parse(path, Format::Json, e))?;
    into_mapping(path, Format::Json, value)
}

fn into_mapping(path: &Path, format: Format, value: Value) -> Result<ConfigMapping> {
    match value {
        Value::Object(map) => Ok(ConfigMapping::from(map)),
        other => Err(ArtifactError::parse(
            path,
            format,
            format!("top-level value must be a mapping, got {}", value_kind(&other)),
        )),
    }
}

/// True when the text holds no YAML content at all: only whitespace,
/// comments and document markers.
fn is_blank_yaml(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "a boolean",
        serde_yaml::Value::Number(_) => "a number",
        serde_yaml::Value::String(_) => "a string",
        serde_yaml::Value::Sequence(_) => "a sequence",
        serde_yaml::Value::Mapping(_) => "a mapping",
        serde_yaml::Value::Tagged(_) => "a tagged value",
    }
}

/// Read a whole file as UTF-8; undecodable content is a parse failure
fn read_text(path: &Path, format: Format) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| ArtifactError::io(path, e))?;
    String::from_utf8(bytes).map_err(|e| ArtifactError::parse(path, format, e))
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ArtifactError::io(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| ArtifactError::io(path, e))
}
