pub mod errors;
pub mod id;
pub mod storage;

pub use errors::{ConfigError, PlatformError, SawitError, StorageError};
pub use id::new_request_id;
pub use storage::{KeyValueStore, MemoryStore};

pub type Result<T> = std::result::Result<T, SawitError>;
