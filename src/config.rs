// src/config.rs
use anyhow::Context;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Process-level settings, read once at startup. Handlers never touch the
/// environment themselves.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub openai_api_key: String,
    pub openai_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT is not a valid port number: {raw:?}"))?,
            Err(_) => DEFAULT_PORT,
        };

        let openai_api_key =
            std::env::var("OPENAI_API_KEY").context("OPENAI_API_KEY must be set")?;

        let openai_base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            port,
            openai_api_key,
            openai_base_url,
        })
    }
}
