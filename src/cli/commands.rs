//! CLI command definitions

use clap::Args;
use std::path::Path;

/// Load a YAML config
#[derive(Debug, Args, Clone)]
pub struct ReadConfigCommand {
    /// Path to the YAML file
    #[arg(short, long)]
    pub file: String,

    /// Dotted key to print instead of the whole mapping
    #[arg(short, long)]
    pub key: Option<String>,

    /// Print the whole mapping as JSON instead of a key summary
    #[arg(long)]
    pub json: bool,
}

/// Load a JSON file
#[derive(Debug, Args, Clone)]
pub struct LoadJsonCommand {
    /// Path to the JSON file
    #[arg(short, long)]
    pub file: String,

    /// Dotted key to print instead of the whole mapping
    #[arg(short, long)]
    pub key: Option<String>,
}

/// Convert between config formats
#[derive(Debug, Args, Clone)]
pub struct ConvertCommand {
    /// Input file (.yaml, .yml or .json)
    #[arg(short, long)]
    pub input: String,

    /// Output file (.yaml, .yml or .json)
    #[arg(short, long)]
    pub output: String,
}

/// Create directories
#[derive(Debug, Args, Clone)]
pub struct MkdirsCommand {
    /// Directories to create
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Don't log created directories
    #[arg(short, long)]
    pub quiet: bool,
}

/// Report a file size
#[derive(Debug, Args, Clone)]
pub struct SizeCommand {
    /// File to measure
    #[arg(short, long)]
    pub file: String,
}

/// Base64-encode a file
#[derive(Debug, Args, Clone)]
pub struct EncodeCommand {
    /// File to encode
    #[arg(short, long)]
    pub file: String,

    /// Write the base64 text here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Decode base64 text into a file
#[derive(Debug, Args, Clone)]
pub struct DecodeCommand {
    /// File holding the base64 text, or `-` for stdin
    #[arg(short, long)]
    pub input: String,

    /// Where to write the decoded bytes
    #[arg(short, long)]
    pub output: String,
}

/// Config file format, picked from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}
