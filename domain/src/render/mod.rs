//! Answer rendering pipeline
//!
//! Pure text-to-structure transforms shared by every presentation surface:
//!
//! - [`answer`] — segments an answer body into paragraph and policy-reference
//!   blocks and scans bold-emphasis spans.
//! - [`snippet`] — strips markdown noise from raw citation excerpts.
//! - [`title`] — derives a readable document title from a doc id.
//!
//! None of these operations can fail: malformed input degrades to plain text.

pub mod answer;
pub mod snippet;
pub mod title;
