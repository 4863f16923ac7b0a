//! Agent API client
//!
//! HTTP transport for the ask endpoint. One call sends exactly one POST;
//! there are no retries and the HTTP status does not change how the body
//! is interpreted.

use crate::config::Config;
use crate::constants::MAX_ERROR_BODY_LEN;
use crate::error::{truncate_body, ClientError};
use crate::types::{AgentRequest, AgentResponse};
use async_trait::async_trait;
use std::time::Instant;

/// Something that can deliver a question to the agent
///
/// Implemented by [`AgentClient`] for real requests and by test doubles.
#[async_trait]
pub trait AgentTransport: Send + Sync {
    /// Send one question and return the parsed response
    async fn ask(&self, question: &str) -> Result<AgentResponse, ClientError>;
}

/// HTTP client for the agent backend
#[derive(Debug, Clone)]
pub struct AgentClient {
    client: reqwest::Client,
    config: Config,
}

impl AgentClient {
    /// Create a client from configuration
    ///
    /// # Errors
    /// * Returns `ClientError::Config` if the configuration is invalid
    /// * Returns `ClientError::Transport` if the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, ClientError> {
        config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check that the backend is reachable
    ///
    /// # Returns
    /// * `Ok(String)` - The banner text served at the backend root
    /// * `Err(ClientError)` - If the request failed or returned a non-success status
    pub async fn ping(&self) -> Result<String, ClientError> {
        let url = self.config.root_url();
        tracing::debug!(url = %url, "Pinging agent backend");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::UnexpectedStatus {
                status: status.as_u16(),
                body: truncate_body(&body, MAX_ERROR_BODY_LEN),
            });
        }

        Ok(body)
    }

    /// Post a question to the ask endpoint
    ///
    /// # Errors
    /// * Returns `ClientError::Transport` if the request could not be sent
    ///   or the body could not be read
    /// * Returns `ClientError::InvalidJson` if the body is not JSON,
    ///   whatever the HTTP status
    pub async fn post_question(&self, question: &str) -> Result<AgentResponse, ClientError> {
        let url = self.config.agent_url();
        let request = AgentRequest::new(question);
        let start = Instant::now();

        tracing::debug!(
            url = %url,
            question_len = question.len(),
            "Posting question to agent"
        );

        // `.json()` also sets `Content-Type: application/json`
        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                "Agent returned non-success status, reading body anyway"
            );
        }

        let parsed: AgentResponse =
            serde_json::from_str(&body).map_err(|source| ClientError::InvalidJson {
                status: status.as_u16(),
                source,
                body: truncate_body(&body, MAX_ERROR_BODY_LEN),
            })?;

        tracing::debug!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            body_len = body.len(),
            "Received agent response"
        );

        Ok(parsed)
    }
}

#[async_trait]
impl AgentTransport for AgentClient {
    async fn ask(&self, question: &str) -> Result<AgentResponse, ClientError> {
        self.post_question(question).await
    }
}
