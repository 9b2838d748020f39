//! Core file I/O operations
//!
//! [`ArtifactIo`] is the entry point. Each submodule adds the operations for
//! one kind of file to it.

pub mod binary;
pub mod config;
pub mod fs;
pub mod image;
pub mod io;
pub mod mapping;

pub use binary::{FORMAT_VERSION, MAGIC};
pub use config::{parse_json, parse_yaml};
pub use fs::{file_size_bytes, format_kilobytes};
pub use image::{decode_bytes, encode_bytes};
pub use io::ArtifactIo;
pub use mapping::ConfigMapping;
