//! HTTP transport to the generation endpoint.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use gloamquest_core::quest::Quest;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors from talking to the generation endpoint.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with an error status.
    #[error("endpoint returned {status}: {message}")]
    Endpoint {
        /// HTTP status code.
        status: u16,
        /// The server's error message, or the status text if none decoded.
        message: String,
    },
}

/// The three calls the pipeline makes, behind a trait so tests can script
/// them.
#[async_trait]
pub trait QuestApi: Send + Sync {
    /// Request the intro narration for a goal.
    async fn intro(&self, goal: &str) -> Result<String, ClientError>;

    /// Request the two quest options for a goal.
    async fn quests(&self, goal: &str) -> Result<Vec<Quest>, ClientError>;

    /// Request one illustration URL per quest.
    async fn images(&self, quests: &[Quest]) -> Result<Vec<String>, ClientError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoalRequest<'a> {
    request_type: &'a str,
    goal: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ImagesRequest<'a> {
    request_type: &'a str,
    quests: &'a [Quest],
}

#[derive(Deserialize)]
struct IntroReply {
    text: String,
}

#[derive(Deserialize)]
struct QuestsReply {
    quests: Vec<Quest>,
}

#[derive(Deserialize)]
struct ImagesReply {
    urls: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorReply {
    error: String,
}

/// reqwest-backed [`QuestApi`] pointed at the configured endpoint URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    /// Build a client for the given endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    async fn post<B, R>(&self, body: &B) -> Result<R, ClientError>
    where
        B: Serialize + Sync,
        R: serde::de::DeserializeOwned,
    {
        let response = self.http.post(&self.endpoint).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorReply>().await {
                Ok(reply) => reply.error,
                Err(_) => status.to_string(),
            };
            return Err(ClientError::Endpoint {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl QuestApi for ApiClient {
    async fn intro(&self, goal: &str) -> Result<String, ClientError> {
        let reply: IntroReply = self
            .post(&GoalRequest {
                request_type: "intro",
                goal,
            })
            .await?;
        Ok(reply.text)
    }

    async fn quests(&self, goal: &str) -> Result<Vec<Quest>, ClientError> {
        let reply: QuestsReply = self
            .post(&GoalRequest {
                request_type: "quests",
                goal,
            })
            .await?;
        Ok(reply.quests)
    }

    async fn images(&self, quests: &[Quest]) -> Result<Vec<String>, ClientError> {
        let reply: ImagesReply = self
            .post(&ImagesRequest {
                request_type: "images",
                quests,
            })
            .await?;
        Ok(reply.urls)
    }
}
