use std::io::Cursor;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::StorageError;
use super::traits::{BoxReader, ByteResource};

/// A byte resource held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryResource {
    name: String,
    data: RwLock<Vec<u8>>,
}

impl MemoryResource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: RwLock::new(data.into()),
        }
    }
}

#[async_trait]
impl ByteResource for MemoryResource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn open(&self) -> Result<BoxReader, StorageError> {
        let snapshot = self.data.read().await.clone();
        Ok(Box::new(Cursor::new(snapshot)))
    }

    async fn read_all(&self) -> Result<Vec<u8>, StorageError> {
        Ok(self.data.read().await.clone())
    }

    async fn write_all(&self, data: &[u8]) -> Result<(), StorageError> {
        let mut guard = self.data.write().await;
        guard.clear();
        guard.extend_from_slice(data);
        Ok(())
    }
}
