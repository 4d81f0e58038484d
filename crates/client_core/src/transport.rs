//! Network boundary to the remote scoring service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use shared::{
    error::ErrorBody,
    protocol::{ValidationResult, VALIDATE_SENTENCE_ROUTE},
};
use tracing::{info, warn};

use crate::{
    config::ClientSettings,
    error::{ValidationError, REMOTE_FALLBACK_MESSAGE},
    validator::ValidationRequest,
};

#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, ValidationError>;
}

pub struct HttpScoringService {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpScoringService {
    /// Client for `base_url` with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        Self::from_settings(&ClientSettings {
            api_base_url: base_url.into(),
            ..ClientSettings::default()
        })
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, reqwest::Error> {
        let timeout = Duration::from_secs(settings.request_timeout_secs);
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: normalize_base_url(settings.api_base_url.clone()),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl ScoringService for HttpScoringService {
    async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, ValidationError> {
        let url = format!("{}{}", self.base_url, VALIDATE_SENTENCE_ROUTE);
        info!(word_id = request.word_id().0, %url, "submitting sentence for scoring");

        let response = self
            .http
            .post(&url)
            .json(&request.to_wire())
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(transport_error)?;

        decode_response(status, &body)
    }
}

pub(crate) fn decode_response(
    status: StatusCode,
    body: &[u8],
) -> Result<ValidationResult, ValidationError> {
    if !status.is_success() {
        let message = remote_message(body);
        warn!(status = status.as_u16(), %message, "scoring service rejected submission");
        return Err(ValidationError::Remote {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_slice(body).map_err(|error| {
        warn!(%error, "malformed scoring response body");
        ValidationError::MalformedResponse {
            reason: error.to_string(),
        }
    })
}

fn remote_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .map(|body| body.detail)
        .filter(|detail| !detail.trim().is_empty())
        .unwrap_or_else(|| REMOTE_FALLBACK_MESSAGE.to_string())
}

fn transport_error(error: reqwest::Error) -> ValidationError {
    warn!(%error, timeout = error.is_timeout(), "scoring request failed");
    ValidationError::Transport {
        reason: error.to_string(),
    }
}

fn normalize_base_url(raw: String) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
