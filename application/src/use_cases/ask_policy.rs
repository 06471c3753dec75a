//! Ask policy use case.
//!
//! Sends exactly one question to the backend and always produces an
//! [`Answer`]: a transport failure, a non-success status, or a malformed
//! body all collapse into the fixed fallback answer. Downstream rendering
//! never sees an error state distinct from an answer.

use crate::config::AskParams;
use crate::ports::ask_gateway::{AskGateway, AskRequest};
use policyq_domain::{Answer, Question};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for answering one policy question.
pub struct AskPolicyUseCase {
    gateway: Arc<dyn AskGateway>,
}

impl AskPolicyUseCase {
    pub fn new(gateway: Arc<dyn AskGateway>) -> Self {
        Self { gateway }
    }

    /// Ask the backend, falling back to the canned answer on any failure.
    pub async fn execute(&self, question: &Question, params: &AskParams) -> Answer {
        let request = AskRequest::new(question, params.top_k);
        debug!(top_k = params.top_k, "Sending ask request");

        match self.gateway.ask(&request).await {
            Ok(answer) => {
                info!(
                    citations = answer.citations.len(),
                    confidence = %answer.confidence,
                    "Ask request answered"
                );
                answer
            }
            Err(e) => {
                warn!("Ask request failed, serving fallback answer: {}", e);
                Answer::fallback()
            }
        }
    }
}
