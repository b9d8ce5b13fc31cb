use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};

use super::error::StorageError;

/// Type alias for a boxed async reader.
pub type BoxReader = Box<dyn AsyncRead + Unpin + Send>;

/// A named, readable and rewritable blob of bytes, such as a module's
/// `index.cnxml`.
#[async_trait]
pub trait ByteResource: Send + Sync {
    /// Name of the resource, used for logs and error messages.
    fn name(&self) -> &str;

    /// Open the resource for streaming reads.
    async fn open(&self) -> Result<BoxReader, StorageError>;

    /// Read the whole resource into memory.
    async fn read_all(&self) -> Result<Vec<u8>, StorageError> {
        let mut reader = self.open().await?;
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await?;
        Ok(buf)
    }

    /// Replace the resource's content.
    ///
    /// Readers opened after this returns observe the new bytes.
    async fn write_all(&self, data: &[u8]) -> Result<(), StorageError>;
}
