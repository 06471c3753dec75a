//! HTTP gateway to the policy backend.
//!
//! Implements [`AskGateway`] over reqwest. The original deployment put a
//! same-origin relay between the browser and the backend; this client talks
//! to the backend base URL directly and keeps the relay's one contractual
//! behavior — failing fast when no backend URL is configured — at
//! construction time.

use crate::backend::protocol::{AskReply, HealthReply};
use async_trait::async_trait;
use policyq_application::{AskGateway, AskRequest, BackendHealth, Feedback, GatewayError};
use policyq_domain::Answer;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default request timeout. Not contractual; a hung backend otherwise looks
/// identical to one that is still thinking.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors constructing the gateway.
#[derive(Error, Debug)]
pub enum GatewayConfigError {
    #[error("No backend URL configured. Set [backend].base_url in policyq.toml")]
    MissingBaseUrl,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

/// reqwest-backed gateway to `POST {base}/ask`, `GET {base}/health`, and
/// `POST {base}/feedback`.
pub struct HttpAskGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAskGateway {
    /// Build a gateway for the given base URL.
    ///
    /// Fails fast when the URL is absent or blank — the configuration
    /// precondition lives here, not in the request path.
    pub fn new(base_url: Option<&str>) -> Result<Self, GatewayConfigError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        base_url: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, GatewayConfigError> {
        let base_url = base_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or(GatewayConfigError::MissingBaseUrl)?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GatewayConfigError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn map_transport_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::ConnectionError(e.to_string())
        } else {
            GatewayError::Other(e.to_string())
        }
    }
}

#[async_trait]
impl AskGateway for HttpAskGateway {
    async fn ask(&self, request: &AskRequest) -> Result<Answer, GatewayError> {
        let url = self.endpoint("/ask");
        debug!(%url, "POST ask");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::BadStatus(status.as_u16()));
        }

        let reply: AskReply = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedBody(e.to_string()))?;

        Ok(Answer::from(reply))
    }

    async fn health(&self) -> Result<BackendHealth, GatewayError> {
        let response = self
            .client
            .get(self.endpoint("/health"))
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::BadStatus(status.as_u16()));
        }

        let reply: HealthReply = response
            .json()
            .await
            .map_err(|e| GatewayError::MalformedBody(e.to_string()))?;

        Ok(BackendHealth {
            status: reply.status.unwrap_or_else(|| "unknown".to_string()),
            service: reply.service,
            model: reply.model,
        })
    }

    async fn send_feedback(&self, feedback: &Feedback) -> Result<(), GatewayError> {
        let response = self
            .client
            .post(self.endpoint("/feedback"))
            .json(feedback)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::BadStatus(status.as_u16()));
        }
        Ok(())
    }
}
