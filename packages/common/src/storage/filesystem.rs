use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::BufReader;

use super::error::StorageError;
use super::traits::{BoxReader, ByteResource};

/// A byte resource backed by a single file on disk.
///
/// Writes go to a sibling temporary file first and are renamed over the
/// target, so a reader never observes a half-written document.
#[derive(Debug, Clone)]
pub struct FileResource {
    path: PathBuf,
    name: String,
}

impl FileResource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path for a temporary file during writes.
    fn temp_path(&self) -> PathBuf {
        let temp_name = format!(".{}.{}.tmp", self.name, uuid::Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(temp_name),
            None => PathBuf::from(temp_name),
        }
    }

    fn not_found(&self) -> StorageError {
        StorageError::NotFound(self.path.display().to_string())
    }
}

#[async_trait]
impl ByteResource for FileResource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn open(&self) -> Result<BoxReader, StorageError> {
        let file = match fs::File::open(&self.path).await {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(self.not_found()),
            Err(e) => return Err(e.into()),
        };
        Ok(Box::new(BufReader::new(file)))
    }

    async fn write_all(&self, data: &[u8]) -> Result<(), StorageError> {
        let temp_path = self.temp_path();
        if let Err(e) = fs::write(&temp_path, data).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(e.into());
        }

        Ok(())
    }
}
