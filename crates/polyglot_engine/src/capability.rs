use std::fmt;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::endpoint::join_below;

pub const DEFAULT_ANTHROPIC_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// One segment of a capability reply. Only text segments carry translations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text { text: String },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CapabilityError {
    #[error("network error: {0}")]
    Network(String),
    #[error("translation capability timed out")]
    Timeout,
    #[error("translation capability returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed capability response: {0}")]
    Malformed(String),
    #[error("{0}")]
    Failed(String),
}

/// The opaque code-generation service: one prompt in, free text (maybe) out.
#[async_trait::async_trait]
pub trait Capability: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<Vec<ContentBlock>, CapabilityError>;
}

#[derive(Clone)]
pub struct CapabilitySettings {
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl CapabilitySettings {
    pub fn new(api_key: impl Into<String>) -> Result<Self, url::ParseError> {
        Ok(Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: 4096,
            base_url: Url::parse(DEFAULT_ANTHROPIC_URL)?,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(120),
        })
    }
}

impl fmt::Debug for CapabilitySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilitySettings")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("base_url", &self.base_url.as_str())
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Anthropic Messages API client. One instance is shared by every request so
/// the underlying connection pool is reused.
#[derive(Debug, Clone)]
pub struct AnthropicCapability {
    settings: CapabilitySettings,
    endpoint: Url,
    client: reqwest::Client,
}

impl AnthropicCapability {
    pub fn new(settings: CapabilitySettings) -> Result<Self, CapabilityError> {
        let endpoint = join_below(&settings.base_url, "v1/messages")
            .map_err(|err| CapabilityError::Failed(format!("invalid capability url: {err}")))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CapabilityError::Network(err.to_string()))?;
        Ok(Self {
            settings,
            endpoint,
            client,
        })
    }

    pub fn settings(&self) -> &CapabilitySettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl Capability for AnthropicCapability {
    async fn complete(&self, prompt: &str) -> Result<Vec<ContentBlock>, CapabilityError> {
        let body = MessagesRequest {
            model: &self.settings.model,
            max_tokens: self.settings.max_tokens,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
        };
        let payload =
            serde_json::to_vec(&body).map_err(|err| CapabilityError::Failed(err.to_string()))?;

        let response = self
            .client
            .post(self.endpoint.clone())
            .header("x-api-key", &self.settings.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;
        if !status.is_success() {
            return Err(CapabilityError::Status {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        let parsed: MessagesResponse = serde_json::from_str(&text)
            .map_err(|err| CapabilityError::Malformed(err.to_string()))?;
        Ok(parsed.content)
    }
}

fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error.message,
        Err(_) if body.trim().is_empty() => "no error details".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CapabilityError {
    if err.is_timeout() {
        return CapabilityError::Timeout;
    }
    CapabilityError::Network(err.to_string())
}
