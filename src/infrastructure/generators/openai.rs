//! OpenAI-compatible vision client
//!
//! Sends the photo plus the fixed instruction to a chat-completions
//! endpoint with strict structured output, and decodes the enveloped
//! profile. Any OpenAI-compatible server works; the base URL is
//! injectable.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::application::ports::outbound::{CreatureProfile, GeneratorError, VisionGeneratorPort};

use super::profile_parser::parse_profile_envelope;
use super::prompts::{profile_schema, PROFILE_INSTRUCTION};

/// Client for an OpenAI-compatible chat-completions API.
pub struct OpenAiVisionClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiVisionClient {
    pub fn new(base_url: &str, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    fn request_body(&self, photo_base64: &str) -> serde_json::Value {
        json!({
            "model": self.model,
            "messages": [{
                "role": "user",
                "content": [
                    {"type": "text", "text": PROFILE_INSTRUCTION},
                    {"type": "image_url", "image_url": {"url": photo_base64}},
                ],
            }],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "creature_profile",
                    "strict": true,
                    "schema": profile_schema(),
                },
            },
        })
    }
}

#[async_trait]
impl VisionGeneratorPort for OpenAiVisionClient {
    async fn generate_profile(
        &self,
        photo_base64: &str,
    ) -> Result<CreatureProfile, GeneratorError> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&self.request_body(photo_base64))
            .send()
            .await
            .map_err(|err| GeneratorError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ProviderUnavailable { status: status.as_u16(), body });
        }

        let envelope: serde_json::Value = response
            .json()
            .await
            .map_err(|_| GeneratorError::malformed("response body is not valid JSON"))?;

        parse_profile_envelope(&envelope)
    }
}
