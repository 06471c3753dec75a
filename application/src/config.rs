//! Request parameters for the ask flow

/// Number of passages the backend retrieves per question.
pub const DEFAULT_TOP_K: u32 = 5;

/// Parameters carried by every ask request.
#[derive(Debug, Clone)]
pub struct AskParams {
    /// Retrieval depth sent as `top_k`.
    pub top_k: u32,
}

impl Default for AskParams {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl AskParams {
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }
}
