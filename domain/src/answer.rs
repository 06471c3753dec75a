//! Answer and citation value objects
//!
//! An [`Answer`] is the structured response to one question. It is immutable
//! once applied to a session and is replaced wholesale by each new request,
//! so the rendering layer never observes a partially updated answer.

use serde::{Deserialize, Serialize};

/// Canned answer text shown when the backend fails or the policy corpus has
/// no match. Worded so the fallback itself tells the user what to do next.
pub const FALLBACK_ANSWER_TEXT: &str = "I don't have that in policy. Please contact HR.";

/// Backend confidence in an answer.
///
/// `Unknown` covers an absent or unrecognized confidence field and renders
/// as `N/A` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Confidence {
    /// Parse a backend confidence string. Anything outside the contract
    /// degrades to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Confidence::High,
            "medium" => Confidence::Medium,
            "low" => Confidence::Low,
            _ => Confidence::Unknown,
        }
    }

    /// Upper-case badge label for display.
    pub fn badge(&self) -> &'static str {
        match self {
            Confidence::High => "HIGH",
            Confidence::Medium => "MEDIUM",
            Confidence::Low => "LOW",
            Confidence::Unknown => "N/A",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.badge())
    }
}

/// A pointer to a source document excerpt supporting part of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Opaque document identifier, typically a filename-like token.
    pub doc_id: String,
    /// Raw excerpt; may carry residual markdown/heading noise until it goes
    /// through the snippet normalizer.
    pub snippet: String,
    /// Source page, when the backend knows one.
    pub page: Option<u32>,
}

impl Citation {
    pub fn new(doc_id: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            doc_id: doc_id.into(),
            snippet: snippet.into(),
            page: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Stable identity for per-citation UI state.
///
/// Keyed by document id plus original rank rather than raw list position, so
/// duplicate doc ids stay independently addressable and expansion state from
/// one answer cannot bleed into an unrelated citation of the next.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CitationKey {
    doc_id: String,
    rank: usize,
}

impl CitationKey {
    pub fn new(doc_id: impl Into<String>, rank: usize) -> Self {
        Self {
            doc_id: doc_id.into(),
            rank,
        }
    }

    pub fn doc_id(&self) -> &str {
        &self.doc_id
    }

    pub fn rank(&self) -> usize {
        self.rank
    }
}

/// The structured response to one policy question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    /// Raw answer body, possibly empty.
    pub text: String,
    /// Backend confidence level.
    pub confidence: Confidence,
    /// Optional disclaimer shown under the answer body.
    pub disclaimer: Option<String>,
    /// Citations in backend relevance order.
    pub citations: Vec<Citation>,
}

impl Answer {
    pub fn new(text: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            text: text.into(),
            confidence,
            disclaimer: None,
            citations: Vec::new(),
        }
    }

    pub fn with_disclaimer(mut self, disclaimer: impl Into<String>) -> Self {
        self.disclaimer = Some(disclaimer.into());
        self
    }

    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        self.citations = citations;
        self
    }

    /// The fixed answer synthesized locally when the backend call fails.
    ///
    /// Shaped exactly like a real answer so downstream rendering needs no
    /// special-casing: canned text, low confidence, no citations.
    pub fn fallback() -> Self {
        Answer::new(FALLBACK_ANSWER_TEXT, Confidence::Low)
    }

    /// Identity key for the citation at `rank`, if one exists.
    pub fn citation_key(&self, rank: usize) -> Option<CitationKey> {
        self.citations
            .get(rank)
            .map(|c| CitationKey::new(c.doc_id.clone(), rank))
    }

    /// Identity keys for all citations, in relevance order.
    pub fn citation_keys(&self) -> Vec<CitationKey> {
        self.citations
            .iter()
            .enumerate()
            .map(|(rank, c)| CitationKey::new(c.doc_id.clone(), rank))
            .collect()
    }
}
