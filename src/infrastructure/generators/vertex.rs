//! Vertex Imagen image client
//!
//! Inline-payload provider: a single predict call returns the finished
//! image as base64 in `predictions[0].bytesBase64Encoded`. Each call picks
//! its serving region from the injected [`RegionCycler`]; bearer tokens
//! come from the host through [`TokenProviderPort`].

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use serde_json::{json, Value};

use crate::application::ports::outbound::{
    GeneratedImage, GeneratorError, ImageGeneratorPort, TokenProviderPort,
};

use super::region::RegionCycler;

pub struct VertexImagenClient {
    client: Client,
    project_id: String,
    model: String,
    regions: RegionCycler,
    tokens: Arc<dyn TokenProviderPort>,
    /// Overrides the per-region public endpoint; used for private service
    /// connect setups and for tests.
    endpoint_override: Option<String>,
}

impl VertexImagenClient {
    pub fn new(
        project_id: impl Into<String>,
        model: impl Into<String>,
        regions: RegionCycler,
        tokens: Arc<dyn TokenProviderPort>,
    ) -> Self {
        Self {
            client: Client::new(),
            project_id: project_id.into(),
            model: model.into(),
            regions,
            tokens,
            endpoint_override: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint_override = Some(endpoint.trim_end_matches('/').to_string());
        self
    }

    fn predict_url(&self, region: &str) -> String {
        let model_path = format!(
            "v1/projects/{}/locations/{}/publishers/google/models/{}:predict",
            self.project_id, region, self.model
        );
        match &self.endpoint_override {
            Some(endpoint) => format!("{endpoint}/{model_path}"),
            None => format!("https://{region}-aiplatform.googleapis.com/{model_path}"),
        }
    }

    fn request_body(prompt: &str) -> Value {
        json!({
            "instances": [{"prompt": prompt}],
            "parameters": {
                "sampleCount": 1,
                "aspectRatio": "1:1",
                "personGeneration": "dont_allow",
                "safetySetting": "block_only_high",
                "addWatermark": false,
                "outputOptions": {"mimeType": "image/png"},
            },
        })
    }
}

/// Decode the inline image bytes from a predict response.
fn image_from_prediction(response: &Value) -> Result<Vec<u8>, GeneratorError> {
    let predictions = response
        .get("predictions")
        .and_then(Value::as_array)
        .filter(|array| !array.is_empty())
        .ok_or_else(|| GeneratorError::malformed("missing or empty 'predictions' array"))?;

    let encoded = predictions[0]
        .get("bytesBase64Encoded")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            GeneratorError::malformed("missing or invalid 'bytesBase64Encoded' field")
        })?;

    BASE64.decode(encoded).map_err(|err| {
        GeneratorError::malformed(format!("image payload is not valid base64: {err}"))
    })
}

#[async_trait]
impl ImageGeneratorPort for VertexImagenClient {
    async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, GeneratorError> {
        let region = self.regions.next();
        let token = self
            .tokens
            .access_token()
            .await
            .map_err(|err| GeneratorError::Transport(format!("token acquisition failed: {err}")))?;

        let response = self
            .client
            .post(self.predict_url(region))
            .bearer_auth(token)
            .json(&Self::request_body(prompt))
            .send()
            .await
            .map_err(|err| GeneratorError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeneratorError::ProviderUnavailable { status: status.as_u16(), body });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| GeneratorError::malformed("predict body is not valid JSON"))?;

        Ok(GeneratedImage {
            bytes: image_from_prediction(&body)?,
            content_type: "image/png".to_string(),
            file_extension: "png".to_string(),
        })
    }
}
