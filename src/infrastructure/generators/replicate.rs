//! Replicate image client
//!
//! Prediction-style provider: one blocking POST (`Prefer: wait`) returns an
//! `output` array whose first element is a URL for the finished image; a
//! second request downloads the bytes. The seed is fixed so reruns of the
//! same prompt reproduce the same artwork.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::application::ports::outbound::{GeneratedImage, GeneratorError, ImageGeneratorPort};

const DEFAULT_MODEL: &str = "black-forest-labs/flux-schnell";

pub struct ReplicateImageClient {
    client: Client,
    base_url: String,
    api_token: String,
    model: String,
}

impl ReplicateImageClient {
    pub fn new(base_url: &str, api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token: api_token.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "input": {
                "prompt": prompt,
                "output_format": "webp",
                // Fixed seed keeps generation reproducible per prompt
                "seed": 42,
                "go_fast": true,
                "megapixels": "1",
                "num_outputs": 1,
                "aspect_ratio": "1:1",
                "output_quality": 80,
                "num_inference_steps": 4,
            },
        })
    }
}

/// Pull the image URL out of a prediction response.
fn image_url_from_prediction(prediction: &Value) -> Result<String, GeneratorError> {
    let output = prediction
        .get("output")
        .and_then(Value::as_array)
        .filter(|array| !array.is_empty())
        .ok_or_else(|| GeneratorError::malformed("missing or empty 'output' array"))?;

    output[0]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| GeneratorError::malformed("'output[0]' is not an image URL string"))
}

#[async_trait]
impl ImageGeneratorPort for ReplicateImageClient {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GeneratorError> {
        let response = self
            .client
            .post(format!("{}/v1/models/{}/predictions", self.base_url, self.model))
            .header("Authorization", format!("Token {}", self.api_token))
            .header("Prefer", "wait")
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|err| GeneratorError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ProviderUnavailable { status: status.as_u16(), body });
        }

        let prediction: Value = response
            .json()
            .await
            .map_err(|_| GeneratorError::malformed("prediction body is not valid JSON"))?;
        let image_url = image_url_from_prediction(&prediction)?;

        let image_response = self
            .client
            .get(&image_url)
            .send()
            .await
            .map_err(|err| GeneratorError::Transport(err.to_string()))?;

        let status = image_response.status();
        if !status.is_success() {
            let body = image_response.text().await.unwrap_or_default();
            return Err(GeneratorError::ProviderUnavailable { status: status.as_u16(), body });
        }

        let bytes = image_response
            .bytes()
            .await
            .map_err(|err| GeneratorError::Transport(err.to_string()))?;

        Ok(GeneratedImage {
            bytes: bytes.to_vec(),
            content_type: "image/webp".to_string(),
            file_extension: "webp".to_string(),
        })
    }
}
