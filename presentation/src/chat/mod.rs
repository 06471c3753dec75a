//! Interactive chat interface

pub mod repl;

pub use repl::AskRepl;
