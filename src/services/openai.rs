// src/services/openai.rs
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::completion::CompletionClient;

pub const MODEL: &str = "gpt-4o-mini";
// ~200 words, matching the system prompt's length guidance.
pub const MAX_TOKENS: u32 = 400;

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ApiMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ApiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Reqwest-backed client for an OpenAI-style `/chat/completions` endpoint.
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(api_key: &str, base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn build_request<'a>(system_prompt: &'a str, user_message: &'a str) -> CompletionRequest<'a> {
        CompletionRequest {
            model: MODEL,
            messages: vec![
                ApiMessage {
                    role: "system",
                    content: system_prompt,
                },
                ApiMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            max_tokens: MAX_TOKENS,
        }
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> anyhow::Result<Option<String>> {
        let body = Self::build_request(system_prompt, user_message);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .context("completion request failed to send")?
            .error_for_status()
            .context("completion API returned an error status")?;

        let completion: CompletionResponse = response
            .json()
            .await
            .context("completion API response did not parse")?;

        Ok(completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}
