//! Application ports
//!
//! Interfaces the application layer needs from the outside world.
//! Implementations (adapters) live in the infrastructure layer.

pub mod ask_gateway;
pub mod clipboard;
