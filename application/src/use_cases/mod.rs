//! Application use cases

pub mod ask_policy;
