use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{OpenAiConfig, entities::app_errors::CoreError},
    recipes::ports::{GeneratedImage, ImageClient, LlmClient},
};

/// Temperature for recipe completions; low enough to keep the JSON shape
/// stable across runs.
const COMPLETION_TEMPERATURE: f64 = 0.4;
const IMAGE_SIZE: &str = "1024x1024";

#[derive(Debug, Clone)]
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageGenerationRequest {
    model: String,
    prompt: String,
    size: String,
    response_format: String,
}

#[derive(Debug, Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
    b64_json: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, CoreError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|e| {
            CoreError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self { config, client })
    }

    fn api_key(&self) -> Result<&str, CoreError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                CoreError::Configuration("OPENAI_API_KEY is not configured".to_string())
            })
    }

    async fn post_json<Req, Resp>(&self, path: &str, request: &Req) -> Result<Resp, CoreError>
    where
        Req: Serialize + Sync,
        Resp: serde::de::DeserializeOwned,
    {
        let api_key = self.api_key()?;
        let url = format!("{}{}", self.config.api_base, path);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("AI API error: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "AI API returned error: {status} - {error_text}"
            )));
        }

        response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse AI response: {e}"))
        })
    }
}

impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: String) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: self.config.chat_model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            temperature: COMPLETION_TEMPERATURE,
        };

        let response: ChatCompletionResponse =
            self.post_json("/chat/completions", &request).await?;

        // Empty content degrades to an empty string; the normalizer turns
        // that into a raw-text fallback rather than an error.
        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default())
    }
}

impl ImageClient for OpenAiClient {
    async fn generate_image(&self, prompt: String) -> Result<GeneratedImage, CoreError> {
        let request = ImageGenerationRequest {
            model: self.config.image_model.clone(),
            prompt,
            size: IMAGE_SIZE.to_string(),
            response_format: "url".to_string(),
        };

        let response: ImageGenerationResponse =
            self.post_json("/images/generations", &request).await?;

        Ok(response
            .data
            .into_iter()
            .next()
            .map(|image| GeneratedImage {
                url: image.url,
                b64_json: image.b64_json,
            })
            .unwrap_or_default())
    }
}
