//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{
    ConvertCommand, DecodeCommand, EncodeCommand, LoadJsonCommand, MkdirsCommand,
    ReadConfigCommand, SizeCommand,
};
use std::ffi::OsString;

/// Configuration and artifact file helper
#[derive(Debug, Parser, Clone)]
#[command(name = "artifactio")]
#[command(version = "0.1.0")]
#[command(about = "Read, write and inspect configuration and artifact files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load a YAML config and print it (or one key)
    ReadConfig(ReadConfigCommand),

    /// Load a JSON file and print it (or one key)
    LoadJson(LoadJsonCommand),

    /// Re-serialize a YAML/JSON config into another format
    Convert(ConvertCommand),

    /// Create directories that do not exist yet
    Mkdirs(MkdirsCommand),

    /// Print the size of a file in kilobytes
    Size(SizeCommand),

    /// Base64-encode a file
    Encode(EncodeCommand),

    /// Decode base64 text into a file
    Decode(DecodeCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
