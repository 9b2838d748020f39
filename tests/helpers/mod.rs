//! Shared fixtures for artifactio integration tests

#![allow(dead_code)]

use artifactio::{ArtifactIo, MemoryLogger};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory plus an `ArtifactIo` whose log is captured
pub struct Workspace {
    pub dir: TempDir,
    pub io: ArtifactIo,
    pub log: MemoryLogger,
}

impl Workspace {
    pub fn new() -> Self {
        let log = MemoryLogger::new();
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
            io: ArtifactIo::new(log.clone()),
            log,
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `name` inside the workspace and return its path
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create fixture dir");
        }
        std::fs::write(&path, content).expect("Failed to write fixture");
        path
    }
}

/// Project config in the layout the training pipeline expects
pub const PROJECT_CONFIG: &str = r#"
artifacts_root: artifacts

data_ingestion:
  root_dir: artifacts/data_ingestion
  source_URL: https://example.com/chest-ct-scan-data.zip
  local_data_file: artifacts/data_ingestion/data.zip
  unzip_dir: artifacts/data_ingestion

prepare_base_model:
  root_dir: artifacts/prepare_base_model
  base_model_path: artifacts/prepare_base_model/base_model.h5
  updated_base_model_path: artifacts/prepare_base_model/base_model_updated.h5

training:
  root_dir: artifacts/training
  trained_model_path: artifacts/training/model.h5
"#;

/// Hyper-parameters file
pub const PARAMS: &str = r#"
AUGMENTATION: True
IMAGE_SIZE: [224, 224, 3]
BATCH_SIZE: 16
INCLUDE_TOP: False
EPOCHS: 1
CLASSES: 2
WEIGHTS: imagenet
LEARNING_RATE: 0.01
"#;

pub fn file_bytes(path: &Path) -> Vec<u8> {
    std::fs::read(path).expect("Failed to read file")
}
