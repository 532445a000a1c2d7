//! Client for a running chat API server.

use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
enum RequestError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

impl RequestError {
    /// Transport errors and 5xx responses are worth another attempt.
    fn is_retryable(&self) -> bool {
        match self {
            RequestError::Transport(_) => true,
            RequestError::Status { status, .. } => *status >= 500,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    success: bool,
    #[serde(default)]
    response: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Sends chat messages to `POST {base_url}/api/chat`.
#[derive(Debug, Clone)]
pub struct ChatClient {
    base_url: String,
    http: reqwest::Client,
    retry: RetryConfig,
}

impl ChatClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            retry: RetryConfig::chat_request(),
        })
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the server for a reply.
    pub async fn send(&self, message: &str, language: Option<&str>) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = ChatRequest { message, language };
        let (http, url_ref, request_ref) = (&self.http, &url, &request);

        let body: ChatResponse = with_retry_if(
            &self.retry,
            "Chat request",
            || async move {
                let response = http.post(url_ref).json(request_ref).send().await?;
                let status = response.status();
                if !status.is_success() {
                    let body = response.text().await.unwrap_or_default();
                    return Err(RequestError::Status {
                        status: status.as_u16(),
                        body,
                    });
                }
                Ok(response.json::<ChatResponse>().await?)
            },
            RequestError::is_retryable,
        )
        .await
        .with_context(|| format!("Failed to reach chat server at {}", self.base_url))?;

        if !body.success {
            anyhow::bail!(
                "Chat server error: {}",
                body.error.unwrap_or_else(|| "unknown error".to_string())
            );
        }
        body.response.context("Chat server response has no 'response' field")
    }

    /// Check that the server is up.
    pub async fn health(&self) -> Result<()> {
        let url = format!("{}/api/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to reach chat server at {}", self.base_url))?;

        if !response.status().is_success() {
            anyhow::bail!("Chat server health check failed ({})", response.status());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = ChatClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn test_retryable_errors() {
        let server = RequestError::Status {
            status: 503,
            body: String::new(),
        };
        let client = RequestError::Status {
            status: 400,
            body: String::new(),
        };
        assert!(server.is_retryable());
        assert!(!client.is_retryable());
    }

    #[test]
    fn test_request_omits_missing_language() {
        let json = serde_json::to_value(ChatRequest {
            message: "hi",
            language: None,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"message": "hi"}));
    }
}
