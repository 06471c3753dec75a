//! Configuration loading

mod file_config;
mod loader;

pub use file_config::{FileAskConfig, FileBackendConfig, FileConfig, FileOutputConfig};
pub use loader::ConfigLoader;
