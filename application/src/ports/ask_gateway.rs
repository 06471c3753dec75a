//! Ask gateway port
//!
//! Defines the interface for reaching the policy-assistant backend.

use async_trait::async_trait;
use policyq_domain::{Answer, Question};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while talking to the backend.
///
/// Every variant is recoverable at the use-case level: any of them collapses
/// into the fallback answer rather than surfacing to the user as an error.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Backend returned status {0}")]
    BadStatus(u16),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),

    #[error("Timeout")]
    Timeout,

    #[error("Other error: {0}")]
    Other(String),
}

/// Wire-shaped ask request: `{question, filters, top_k}`.
///
/// `filters` is always an empty object in this client; the field is carried
/// because the backend contract requires it.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub question: String,
    pub filters: serde_json::Map<String, serde_json::Value>,
    pub top_k: u32,
}

impl AskRequest {
    pub fn new(question: &Question, top_k: u32) -> Self {
        Self {
            question: question.content().to_string(),
            filters: serde_json::Map::new(),
            top_k,
        }
    }
}

/// Backend health report from `GET /health`.
#[derive(Debug, Clone)]
pub struct BackendHealth {
    pub status: String,
    pub service: Option<String>,
    pub model: Option<String>,
}

/// User feedback on an answer, posted to `POST /feedback`.
#[derive(Debug, Clone, Serialize)]
pub struct Feedback {
    pub question: String,
    pub helpful: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl Feedback {
    pub fn new(question: impl Into<String>, helpful: bool) -> Self {
        Self {
            question: question.into(),
            helpful,
            comments: None,
        }
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }
}

/// Gateway to the policy-assistant backend.
#[async_trait]
pub trait AskGateway: Send + Sync {
    /// Send one question and return the decoded answer.
    async fn ask(&self, request: &AskRequest) -> Result<Answer, GatewayError>;

    /// Probe backend availability.
    async fn health(&self) -> Result<BackendHealth, GatewayError>;

    /// Record whether an answer was helpful. Fire-and-forget semantics:
    /// callers may ignore failures.
    async fn send_feedback(&self, feedback: &Feedback) -> Result<(), GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_request_carries_empty_filters_and_top_k() {
        let question = Question::new("How many casual leaves do I get per year?");
        let request = AskRequest::new(&question, 5);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "question": "How many casual leaves do I get per year?",
                "filters": {},
                "top_k": 5,
            })
        );
    }

    #[test]
    fn feedback_serializes_without_empty_comments() {
        let json = serde_json::to_value(Feedback::new("q", true)).unwrap();
        assert_eq!(json, serde_json::json!({"question": "q", "helpful": true}));

        let json = serde_json::to_value(Feedback::new("q", false).with_comments("too vague")).unwrap();
        assert_eq!(json["comments"], "too vague");
    }
}
