//! Wire types for the policy backend's JSON contract.
//!
//! Every field is optional and defaulted: the backend may omit or null any
//! of them, and extra metadata fields are ignored. Decoding never fails for
//! a structurally valid JSON object — degradation to defaults is the
//! contract, not an error path.

use policyq_domain::{Answer, Citation, Confidence};
use serde::Deserialize;

/// Raw `/ask` response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AskReply {
    pub answer: Option<String>,
    pub citations: Option<Vec<WireCitation>>,
    pub confidence: Option<String>,
    pub disclaimer: Option<String>,
}

/// Raw citation entry within an `/ask` response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireCitation {
    pub doc_id: Option<String>,
    pub snippet: Option<String>,
    pub page: Option<u32>,
}

/// Raw `/health` response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HealthReply {
    pub status: Option<String>,
    pub service: Option<String>,
    pub model: Option<String>,
}

impl From<WireCitation> for Citation {
    fn from(wire: WireCitation) -> Self {
        Citation {
            doc_id: wire.doc_id.unwrap_or_default(),
            snippet: wire.snippet.unwrap_or_default(),
            page: wire.page,
        }
    }
}

impl From<AskReply> for Answer {
    fn from(reply: AskReply) -> Self {
        let confidence = reply
            .confidence
            .as_deref()
            .map(Confidence::parse)
            .unwrap_or(Confidence::Unknown);

        // The backend always sends the disclaimer field, often empty; only
        // a non-empty one is worth showing.
        let disclaimer = reply.disclaimer.filter(|d| !d.trim().is_empty());

        Answer {
            text: reply.answer.unwrap_or_default(),
            confidence,
            disclaimer,
            citations: reply
                .citations
                .unwrap_or_default()
                .into_iter()
                .map(Citation::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_reply_decodes() {
        let json = r#"{
            "answer": "You get **12 days**.",
            "citations": [
                {"doc_id": "casual_leave_policy.md", "snippet": "12 days annually.", "page": 3}
            ],
            "confidence": "high",
            "disclaimer": "Check with HR for exceptions.",
            "policy_matches": ["leave"],
            "metadata": {"latency_ms": 120}
        }"#;
        let reply: AskReply = serde_json::from_str(json).unwrap();
        let answer = Answer::from(reply);

        assert_eq!(answer.text, "You get **12 days**.");
        assert_eq!(answer.confidence, Confidence::High);
        assert_eq!(answer.disclaimer.as_deref(), Some("Check with HR for exceptions."));
        assert_eq!(answer.citations.len(), 1);
        assert_eq!(answer.citations[0].doc_id, "casual_leave_policy.md");
        assert_eq!(answer.citations[0].page, Some(3));
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let reply: AskReply = serde_json::from_str("{}").unwrap();
        let answer = Answer::from(reply);

        assert_eq!(answer.text, "");
        assert_eq!(answer.confidence, Confidence::Unknown);
        assert!(answer.disclaimer.is_none());
        assert!(answer.citations.is_empty());
    }

    #[test]
    fn null_fields_decode_to_defaults() {
        let json = r#"{"answer": null, "citations": null, "confidence": null, "disclaimer": null}"#;
        let reply: AskReply = serde_json::from_str(json).unwrap();
        let answer = Answer::from(reply);
        assert_eq!(answer.text, "");
        assert!(answer.citations.is_empty());
    }

    #[test]
    fn empty_disclaimer_becomes_absent() {
        let reply: AskReply = serde_json::from_str(r#"{"disclaimer": ""}"#).unwrap();
        assert!(Answer::from(reply).disclaimer.is_none());
    }

    #[test]
    fn unknown_confidence_degrades() {
        let reply: AskReply = serde_json::from_str(r#"{"confidence": "certain"}"#).unwrap();
        assert_eq!(Answer::from(reply).confidence, Confidence::Unknown);
    }

    #[test]
    fn citation_with_missing_fields_decodes() {
        let json = r#"{"citations": [{"doc_id": "a.md"}, {}]}"#;
        let reply: AskReply = serde_json::from_str(json).unwrap();
        let answer = Answer::from(reply);
        assert_eq!(answer.citations.len(), 2);
        assert_eq!(answer.citations[0].doc_id, "a.md");
        assert_eq!(answer.citations[1].doc_id, "");
        assert!(answer.citations[1].page.is_none());
    }
}
