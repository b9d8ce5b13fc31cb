mod error;
mod traits;

pub mod filesystem;
pub mod memory;

pub use error::StorageError;
pub use filesystem::FileResource;
pub use memory::MemoryResource;
pub use traits::{BoxReader, ByteResource};
