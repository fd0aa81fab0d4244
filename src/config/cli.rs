use crate::core::{deserialize, serialize, Snapshot, SnapshotFormat};
use crate::utils::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Snapshot files on the local filesystem, resolved against a base directory.
#[derive(Debug, Clone)]
pub struct LocalSnapshots {
    base_path: PathBuf,
}

impl LocalSnapshots {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn load<T: Snapshot>(&self, path: &str, format: SnapshotFormat) -> Result<T> {
        let full_path = self.base_path.join(path);
        tracing::debug!("Loading snapshot from {}", full_path.display());
        let content = fs::read_to_string(&full_path)?;
        deserialize(&content, format)
    }

    pub fn save<T: Snapshot>(&self, path: &str, model: &T, format: SnapshotFormat) -> Result<PathBuf> {
        let full_path = self.base_path.join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, serialize(model, format)?)?;
        Ok(full_path)
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
