//! Session controller
//!
//! Owns the session state machine and drives it from user intents: submit,
//! clear, copy, toggle citation. The only suspension point is the gateway
//! call inside [`SessionController::submit`]; everything else is immediate.

use crate::config::AskParams;
use crate::ports::ask_gateway::AskGateway;
use crate::ports::clipboard::{ClipboardError, ClipboardPort};
use crate::use_cases::ask_policy::AskPolicyUseCase;
use policyq_domain::{Question, SessionState};
use std::sync::Arc;
use tracing::debug;

/// Orchestrates one question/answer session.
pub struct SessionController {
    state: SessionState,
    use_case: AskPolicyUseCase,
    clipboard: Arc<dyn ClipboardPort>,
    params: AskParams,
}

impl SessionController {
    pub fn new(
        gateway: Arc<dyn AskGateway>,
        clipboard: Arc<dyn ClipboardPort>,
        params: AskParams,
    ) -> Self {
        Self {
            state: SessionState::new(),
            use_case: AskPolicyUseCase::new(gateway),
            clipboard,
            params,
        }
    }

    /// Read access for rendering.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.state.set_query(query);
    }

    pub fn can_submit(&self) -> bool {
        self.state.can_submit()
    }

    /// Submit the current query. Returns `true` when an answer was applied.
    ///
    /// A blank query or an already-pending request makes this a no-op. The
    /// use case absorbs every backend failure into the fallback answer, so
    /// a started submission always completes with some answer — unless the
    /// session was cleared underneath it, in which case the stale result is
    /// discarded by the state machine.
    pub async fn submit(&mut self) -> bool {
        let Some(question) = Question::try_new(self.state.query()) else {
            return false;
        };
        let Some(ticket) = self.state.begin_request() else {
            return false;
        };

        debug!("Submitting question: {}", question);
        let answer = self.use_case.execute(&question, &self.params).await;
        self.state.complete_request(ticket, answer)
    }

    /// Reset to idle, dropping the query, answer, and expansion state.
    pub fn clear(&mut self) {
        self.state.clear();
    }

    /// Copy the current answer's raw text to the system clipboard.
    ///
    /// Returns `Ok(false)` when no answer is present; no state transition
    /// either way.
    pub async fn copy_answer(&self) -> Result<bool, ClipboardError> {
        match self.state.answer() {
            Some(answer) => {
                self.clipboard.copy(&answer.text).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Toggle the disclosure flag of the citation at `rank`.
    ///
    /// Returns `false` when no answer is present or the rank is out of
    /// range; other citations are never affected.
    pub fn toggle_citation(&mut self, rank: usize) -> bool {
        let Some(key) = self.state.answer().and_then(|a| a.citation_key(rank)) else {
            return false;
        };
        self.state.toggle_expanded(key);
        true
    }
}
