//! Gloamquest — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gloamquest_core::error::GenerationError;
use serde::Serialize;
use thiserror::Error;

/// Startup and runtime errors for the API server binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The upstream HTTP client could not be constructed.
    #[error("http client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// HTTP-layer error for the generate endpoint.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body carried no `requestType` field.
    #[error("missing 'requestType' in body")]
    MissingRequestType,

    /// The request body carried a `requestType` the handler does not know.
    #[error("unknown 'requestType': {0}")]
    UnknownRequestType(String),

    /// A generation routine failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingRequestType | Self::UnknownRequestType(_) => StatusCode::BAD_REQUEST,
            Self::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "generate request failed");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
