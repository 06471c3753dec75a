//! Presentation layer for policyq
//!
//! This crate contains the CLI definition, console output formatting,
//! the pending-state spinner, and the interactive REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::AskRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::citations::{build_citation_views, CitationView, NO_CITATIONS_NOTICE};
pub use output::console::{set_color_enabled, ConsoleFormatter, RenderOptions, ESCALATION_NOTICE};
pub use progress::reporter::PendingSpinner;
