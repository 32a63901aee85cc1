//! Polyglot engine: backend fan-out and client-side IO.
//!
//! The backend half turns one validated request into concurrent single-target
//! translations against an injected [`Capability`]. The client half sends
//! jobs through a [`Gateway`] and reports completions via [`EngineHandle`].
mod capability;
mod dispatch;
mod endpoint;
mod engine;
mod fence;
mod gateway;
mod prompt;
mod translator;
mod types;
mod validate;

pub use capability::{
    AnthropicCapability, Capability, CapabilityError, CapabilitySettings, ContentBlock,
    DEFAULT_ANTHROPIC_URL, DEFAULT_MODEL,
};
pub use dispatch::{display_name_for, FanOutDispatcher};
pub use engine::EngineHandle;
pub use fence::strip_code_fences;
pub use gateway::{Gateway, GatewayError, GatewaySettings, HealthStatus, HttpGateway, DEFAULT_API_URL};
pub use prompt::build_translation_prompt;
pub use translator::{translate_single, TranslateError, NO_TEXT_MESSAGE};
pub use types::{EngineEvent, TranslateRequest, TranslationReport};
pub use validate::{validate, ValidatedRequest, ValidationError, MAX_CODE_CHARS};
