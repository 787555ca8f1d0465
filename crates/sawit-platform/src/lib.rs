pub mod paths;
pub mod sound;
pub mod store;

pub use paths::{config_dir, data_dir, ensure_dirs, storage_dir};
pub use sound::{play_notification_cue, NOTIFICATION_CUE};
pub use store::FileStore;
