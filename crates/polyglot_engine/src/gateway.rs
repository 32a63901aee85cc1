use std::time::Duration;

use polyglot_core::{TranslationJob, TranslationOutcome};
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use url::Url;

use crate::endpoint::join_below;

pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";
const FALLBACK_FAILURE: &str = "Translation failed";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid gateway url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone)]
pub struct GatewaySettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl GatewaySettings {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(180),
        }
    }
}

/// Client side of the translation boundary: one job, one request, one result.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    async fn translate(&self, job: &TranslationJob) -> Result<TranslationOutcome, GatewayError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
}

#[derive(Deserialize)]
struct MessageBody {
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    translate_url: Url,
    health_url: Url,
}

impl HttpGateway {
    pub fn new(settings: GatewaySettings) -> Result<Self, GatewayError> {
        let translate_url = join_below(&settings.base_url, "translate")
            .map_err(|err| GatewayError::InvalidUrl(err.to_string()))?;
        // Health lives at the server root, outside the API prefix.
        let health_url = settings
            .base_url
            .join("/health")
            .map_err(|err| GatewayError::InvalidUrl(err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| GatewayError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            translate_url,
            health_url,
        })
    }

    pub async fn health(&self) -> Result<HealthStatus, GatewayError> {
        let response = self
            .client
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &text));
        }
        serde_json::from_str(&text).map_err(|err| GatewayError::Malformed(err.to_string()))
    }
}

#[async_trait::async_trait]
impl Gateway for HttpGateway {
    async fn translate(&self, job: &TranslationJob) -> Result<TranslationOutcome, GatewayError> {
        let payload =
            serde_json::to_vec(job).map_err(|err| GatewayError::Malformed(err.to_string()))?;
        let response = self
            .client
            .post(self.translate_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(status_error(status.as_u16(), &text));
        }
        let outcome: TranslationOutcome = serde_json::from_str(&text)
            .map_err(|err| GatewayError::Malformed(err.to_string()))?;
        if !outcome.covers_exactly(job.target_languages()) {
            return Err(GatewayError::Malformed(
                "response does not cover the requested targets exactly once".to_string(),
            ));
        }
        Ok(outcome)
    }
}

fn status_error(status: u16, body: &str) -> GatewayError {
    let message = serde_json::from_str::<MessageBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_FAILURE.to_string());
    GatewayError::Status { status, message }
}

fn map_reqwest_error(err: reqwest::Error) -> GatewayError {
    if err.is_timeout() {
        return GatewayError::Timeout;
    }
    GatewayError::Transport(err.to_string())
}
