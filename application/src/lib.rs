//! Application layer for policyq
//!
//! This crate contains use cases, port definitions, and the session
//! controller that orchestrates the ask lifecycle. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod session_controller;
pub mod use_cases;

// Re-export commonly used types
pub use config::AskParams;
pub use ports::{
    ask_gateway::{AskGateway, AskRequest, BackendHealth, Feedback, GatewayError},
    clipboard::{ClipboardError, ClipboardPort, NoClipboard},
};
pub use session_controller::SessionController;
pub use use_cases::ask_policy::AskPolicyUseCase;
