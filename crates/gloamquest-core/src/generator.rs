//! Upstream generation abstraction.

use async_trait::async_trait;

use crate::error::GenerationError;

/// Parameters for a chat completion call.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The full prompt text sent as a single user message.
    pub prompt: String,
    /// Upper bound on completion length.
    pub max_tokens: u32,
}

/// Parameters for an image generation call.
#[derive(Debug, Clone)]
pub struct IllustrationRequest {
    /// The image prompt text.
    pub prompt: String,
    /// Number of images to generate.
    pub count: u8,
    /// Image resolution, e.g. `256x256`.
    pub size: String,
}

/// Trait for the upstream text/image generation API.
///
/// The API server holds this as `Arc<dyn Generator>` so tests can swap in
/// scripted fakes.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Request a chat completion and return the first choice's text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError>;

    /// Request image generations and return the image URLs in upstream order.
    async fn illustrate(
        &self,
        request: IllustrationRequest,
    ) -> Result<Vec<String>, GenerationError>;
}
