pub mod metadata;
pub mod module;
pub mod storage;

pub use metadata::{ModuleMetadata, Submission};
pub use module::{CONTENT_FILENAME, Module};
pub use storage::{ByteResource, FileResource, MemoryResource, StorageError};
