//! Fake `Generator` implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use gloamquest_core::error::GenerationError;
use gloamquest_core::generator::{CompletionRequest, Generator, IllustrationRequest};

/// A generator that returns the same completion text and URL list on every
/// call. Useful for happy-path tests that don't inspect the prompts.
#[derive(Debug)]
pub struct CannedGenerator {
    completion: String,
    urls: Vec<String>,
}

impl CannedGenerator {
    /// Create a generator returning `completion` from every `complete` call
    /// and `urls` from every `illustrate` call.
    #[must_use]
    pub fn new(completion: impl Into<String>, urls: Vec<String>) -> Self {
        Self {
            completion: completion.into(),
            urls,
        }
    }
}

#[async_trait]
impl Generator for CannedGenerator {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, GenerationError> {
        Ok(self.completion.clone())
    }

    async fn illustrate(
        &self,
        _request: IllustrationRequest,
    ) -> Result<Vec<String>, GenerationError> {
        Ok(self.urls.clone())
    }
}

/// A generator that plays back scripted completion results in order and
/// records every request it receives.
#[derive(Debug, Default)]
pub struct SequenceGenerator {
    completions: Mutex<VecDeque<Result<String, GenerationError>>>,
    urls: Vec<String>,
    completion_requests: Mutex<Vec<CompletionRequest>>,
    illustration_requests: Mutex<Vec<IllustrationRequest>>,
}

impl SequenceGenerator {
    /// Create a generator that answers `complete` calls with `completions`
    /// in order and every `illustrate` call with `urls`. Calls beyond the
    /// script fail with an upstream error.
    #[must_use]
    pub fn new(completions: Vec<Result<String, GenerationError>>, urls: Vec<String>) -> Self {
        Self {
            completions: Mutex::new(completions.into()),
            urls,
            completion_requests: Mutex::new(Vec::new()),
            illustration_requests: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of the completion requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn completion_requests(&self) -> Vec<CompletionRequest> {
        self.completion_requests.lock().unwrap().clone()
    }

    /// Returns a snapshot of the illustration requests received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn illustration_requests(&self) -> Vec<IllustrationRequest> {
        self.illustration_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Generator for SequenceGenerator {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        self.completion_requests.lock().unwrap().push(request);
        self.completions
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationError::Upstream("script exhausted".into())))
    }

    async fn illustrate(
        &self,
        request: IllustrationRequest,
    ) -> Result<Vec<String>, GenerationError> {
        self.illustration_requests.lock().unwrap().push(request);
        Ok(self.urls.clone())
    }
}

/// A generator whose every call fails with an upstream error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingGenerator;

#[async_trait]
impl Generator for FailingGenerator {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, GenerationError> {
        Err(GenerationError::Upstream("connection refused".into()))
    }

    async fn illustrate(
        &self,
        _request: IllustrationRequest,
    ) -> Result<Vec<String>, GenerationError> {
        Err(GenerationError::Upstream("connection refused".into()))
    }
}
