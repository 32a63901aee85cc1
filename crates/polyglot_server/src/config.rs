//! Environment-driven server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use polyglot_engine::CapabilitySettings;
use url::Url;

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ANTHROPIC_API_KEY must be set for the translation capability")]
    MissingApiKey,
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub capability: CapabilitySettings,
}

impl ServerConfig {
    /// Reads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        let api_key = read("ANTHROPIC_API_KEY").ok_or(ConfigError::MissingApiKey)?;
        let mut capability = CapabilitySettings::new(api_key).map_err(|err| ConfigError::Invalid {
            var: "ANTHROPIC_BASE_URL",
            value: err.to_string(),
        })?;
        if let Some(model) = read("POLYGLOT_MODEL") {
            capability.model = model;
        }
        if let Some(raw) = read("POLYGLOT_MAX_TOKENS") {
            capability.max_tokens = parse("POLYGLOT_MAX_TOKENS", &raw)?;
        }
        if let Some(raw) = read("ANTHROPIC_BASE_URL") {
            capability.base_url = Url::parse(raw.trim()).map_err(|_| ConfigError::Invalid {
                var: "ANTHROPIC_BASE_URL",
                value: raw.clone(),
            })?;
        }

        let bind_addr = match read("POLYGLOT_BIND") {
            Some(raw) => parse("POLYGLOT_BIND", &raw)?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let port = match read("PORT") {
            Some(raw) => parse("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            bind_addr,
            port,
            capability,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}
