//! Output formatting

pub mod citations;
pub mod console;
