//! Session state machine
//!
//! Single source of truth for one question/answer interaction. Mutated only
//! by the orchestrating controller, and only through the transitions below:
//!
//! ```text
//! Idle ──begin_request──▶ Pending ──complete_request──▶ Answered
//!   ▲                                                      │
//!   └──────────────────── clear ◀───────── begin_request ──┘
//! ```
//!
//! Each request is tagged with a monotonically increasing sequence number.
//! A completion only applies while its ticket still matches the session's
//! current sequence and the session is still pending, so a late response
//! from a request superseded by [`SessionState::clear`] is discarded rather
//! than resurrecting cleared state.

use crate::answer::{Answer, CitationKey};
use std::collections::HashMap;

/// Where the session is in the ask lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Answered,
}

/// Proof that a request was issued, carrying the sequence number it was
/// issued under. Consumed by [`SessionState::complete_request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
}

/// UI session state: current query, phase, the applied answer, and
/// per-citation disclosure flags.
#[derive(Debug, Default)]
pub struct SessionState {
    query: String,
    phase: Phase,
    answer: Option<Answer>,
    expanded: HashMap<CitationKey, bool>,
    seq: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The current answer. Present once a request has completed; a prior
    /// answer stays visible while a re-ask is pending.
    pub fn answer(&self) -> Option<&Answer> {
        self.answer.as_ref()
    }

    /// Whether the ask action is available: a non-whitespace query and no
    /// request already in flight.
    pub fn can_submit(&self) -> bool {
        self.phase != Phase::Pending && !self.query.trim().is_empty()
    }

    /// Move to `Pending` and issue a ticket for the outgoing request.
    ///
    /// Returns `None` when submission is not permitted (blank query or a
    /// request already pending); the previous answer is left untouched
    /// either way.
    pub fn begin_request(&mut self) -> Option<RequestTicket> {
        if !self.can_submit() {
            return None;
        }
        self.phase = Phase::Pending;
        self.seq += 1;
        Some(RequestTicket { seq: self.seq })
    }

    /// Apply a completed request's answer.
    ///
    /// Returns `false` without touching state when the ticket is stale:
    /// the session was cleared, or a newer request has since been issued.
    pub fn complete_request(&mut self, ticket: RequestTicket, answer: Answer) -> bool {
        if self.phase != Phase::Pending || ticket.seq != self.seq {
            return false;
        }
        self.answer = Some(answer);
        self.expanded.clear();
        self.phase = Phase::Answered;
        true
    }

    /// Reset to idle, discarding the query, answer, and expansion state.
    ///
    /// Works from any phase. An in-flight request is not cancelled, but its
    /// eventual completion will no longer apply.
    pub fn clear(&mut self) {
        self.query.clear();
        self.answer = None;
        self.expanded.clear();
        self.phase = Phase::Idle;
    }

    /// Disclosure flag for one citation. Unknown keys are collapsed.
    pub fn is_expanded(&self, key: &CitationKey) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    /// Toggle one citation's disclosure flag, leaving all others untouched.
    pub fn toggle_expanded(&mut self, key: CitationKey) {
        let entry = self.expanded.entry(key).or_insert(false);
        *entry = !*entry;
    }
}
