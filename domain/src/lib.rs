//! Domain layer for policyq
//!
//! This crate contains the core business logic of the HR policy assistant
//! client. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Answer
//!
//! The structured response to one policy question: answer text, a confidence
//! level, optional disclaimer, and an ordered list of citations into the
//! policy corpus.
//!
//! ## Rendering pipeline
//!
//! The backend returns lightly marked-up text. The [`render`] module turns it
//! into displayable structure: paragraph/policy-reference blocks with bold
//! spans, normalized citation snippets, and human-readable document titles.
//!
//! ## Session
//!
//! A single question/answer interaction is a small state machine
//! (idle → pending → answered) owned by [`session::SessionState`]. Stale
//! request completions are discarded via a request sequence counter.

pub mod answer;
pub mod core;
pub mod render;
pub mod session;
pub mod util;

// Re-export commonly used types
pub use answer::{Answer, Citation, CitationKey, Confidence};
pub use crate::core::question::Question;
pub use render::{
    answer::{format_answer, Block, Span},
    snippet::normalize_snippet,
    title::titleize_doc_id,
};
pub use session::{Phase, RequestTicket, SessionState};
pub use util::truncate_str;
