//! Infrastructure layer for policyq
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP gateway to the policy backend, the system
//! clipboard adapter, and configuration file loading.

pub mod backend;
pub mod clipboard;
pub mod config;

// Re-export commonly used types
pub use backend::gateway::HttpAskGateway;
pub use clipboard::SystemClipboard;
pub use config::{ConfigLoader, FileAskConfig, FileBackendConfig, FileConfig, FileOutputConfig};
