pub mod config;
pub mod error;
pub mod services;

pub use config::BoardConfig;
pub use error::{StorageError, StorageResult};
