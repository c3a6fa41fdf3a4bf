//! reqwest client for the OpenAI generation endpoints.

use std::time::Duration;

use async_trait::async_trait;
use gloamquest_core::error::GenerationError;
use gloamquest_core::generator::{CompletionRequest, Generator, IllustrationRequest};

use crate::protocol::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ImageGenerationRequest,
    ImageGenerationResponse,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the OpenAI API, injected at startup.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API base URL, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Bearer credential.
    pub api_key: String,
    /// Chat model used for both text calls.
    pub model: String,
}

/// A [`Generator`] that talks to the OpenAI API over HTTPS.
#[derive(Debug, Clone)]
pub struct OpenAiGenerator {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiGenerator {
    /// Build a generator with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client cannot be constructed.
    pub fn new(config: OpenAiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, config })
    }

    async fn post_json<B, R>(&self, endpoint: &str, body: &B) -> Result<R, GenerationError>
    where
        B: serde::Serialize + Sync,
        R: serde::de::DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GenerationError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, endpoint, "upstream call failed");
            return Err(GenerationError::Upstream(format!(
                "{endpoint} returned {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GenerationError::Upstream(format!("decoding {endpoint} reply: {e}")))
    }
}

#[async_trait]
impl Generator for OpenAiGenerator {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        let body = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: request.prompt,
            }],
            max_tokens: request.max_tokens,
        };

        let reply: ChatCompletionResponse = self.post_json("/chat/completions", &body).await?;
        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyCompletion)
    }

    async fn illustrate(
        &self,
        request: IllustrationRequest,
    ) -> Result<Vec<String>, GenerationError> {
        let body = ImageGenerationRequest {
            prompt: request.prompt,
            n: request.count,
            size: request.size,
        };

        let reply: ImageGenerationResponse = self.post_json("/images/generations", &body).await?;
        Ok(reply.data.into_iter().map(|image| image.url).collect())
    }
}
