use std::fmt;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::storage::{ByteResource, FileResource, StorageError};

/// Canonical filename of a module's document body.
pub const CONTENT_FILENAME: &str = "index.cnxml";

/// A content module: its identity, its CNXML body and any auxiliary files
/// that sit next to the body.
pub struct Module {
    /// External id (e.g. `m42`). `None` for a module that was never published.
    pub id: Option<String>,
    /// The serialized document body.
    pub file: Box<dyn ByteResource>,
    /// Images, attachments and other files shipped alongside the body.
    pub resources: Vec<PathBuf>,
}

impl Module {
    pub fn new(id: Option<String>, file: impl ByteResource + 'static) -> Self {
        Self {
            id,
            file: Box::new(file),
            resources: Vec::new(),
        }
    }

    /// Load a module from a directory holding `index.cnxml`.
    ///
    /// The directory name becomes the module id and every other regular
    /// file is listed as a resource, in name order.
    pub async fn from_dir(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        let content_path = dir.join(CONTENT_FILENAME);
        if !fs::try_exists(&content_path).await? {
            return Err(StorageError::NotFound(content_path.display().to_string()));
        }

        let mut resources = Vec::new();
        let mut entries = fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_file() || entry.file_name() == CONTENT_FILENAME {
                continue;
            }
            resources.push(entry.path());
        }
        resources.sort();
        debug!(dir = %dir.display(), resources = resources.len(), "loaded module directory");

        // `.` and `..` have no file name of their own.
        let id = fs::canonicalize(dir)
            .await?
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());

        Ok(Self {
            id,
            file: Box::new(FileResource::new(content_path)),
            resources,
        })
    }
}

impl fmt::Debug for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Module")
            .field("id", &self.id)
            .field("file", &self.file.name())
            .field("resources", &self.resources)
            .finish()
    }
}
