//! Gemini adapter.

use std::time::Duration;

use async_trait::async_trait;
use reviewbot_aiapi_interface::{AiError, AiService, Result};
use reviewbot_config::Config;
use serde::Deserialize;
use serde_json::json;

use crate::errors::GoogleAiError;

/// Gemini text generation service.
#[derive(Clone)]
pub struct GoogleAiService {
    client: reqwest::Client,
    config: Config,
}

impl GoogleAiService {
    /// Build a Gemini service from the configuration.
    pub fn new(config: Config) -> Result<Self, GoogleAiError> {
        if config.ai.google.api_key.trim().is_empty() {
            return Err(GoogleAiError::MissingApiKey);
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.ai.google.request_timeout.max(1)))
            .build()
            .map_err(GoogleAiError::from)?;

        Ok(Self { client, config })
    }

    fn generate_content_url(&self) -> String {
        let base = self.config.ai.google.root_url.trim_end_matches('/');
        format!("{base}/models/{}:generateContent", self.config.ai.google.model)
    }
}

#[async_trait(?Send)]
impl AiService for GoogleAiService {
    #[tracing::instrument(skip_all)]
    async fn text_generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "contents": [
                { "role": "user", "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self
            .client
            .post(self.generate_content_url())
            .query(&[("key", self.config.ai.google.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(GoogleAiError::from)?;

        let status = response.status();
        let raw = response.text().await.map_err(GoogleAiError::from)?;

        if !status.is_success() {
            return Err(GoogleAiError::HttpStatus {
                status: status.as_u16(),
                body: raw,
            }
            .into());
        }

        parse_generate_content_response(&raw)
    }
}

fn parse_generate_content_response(raw: &str) -> Result<String> {
    #[derive(Deserialize)]
    struct Response {
        #[serde(default)]
        candidates: Vec<Candidate>,
    }

    #[derive(Deserialize)]
    struct Candidate {
        #[serde(default)]
        content: Content,
    }

    #[derive(Deserialize, Default)]
    struct Content {
        #[serde(default)]
        parts: Vec<Part>,
    }

    #[derive(Deserialize)]
    struct Part {
        #[serde(default)]
        text: String,
    }

    let response: Response =
        serde_json::from_str(raw).map_err(|e| GoogleAiError::InvalidResponse {
            message: e.to_string(),
        })?;

    let text = response
        .candidates
        .first()
        .map(|candidate| {
            candidate
                .content
                .parts
                .iter()
                .map(|part| part.text.as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AiError::EmptyResponse);
    }

    Ok(text)
}
