//! The generation dispatch endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use gloamquest_core::quest::Quest;
use gloamquest_quests::service;

use crate::error::{ApiError, ErrorBody};
use crate::state::AppState;

/// Request envelope for POST /generate.
///
/// Every field is optional so that a missing or unknown `requestType` is an
/// explicit 400 instead of a deserialization 422. A missing goal is treated
/// as an empty string and missing quests as an empty list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// One of `intro`, `quests`, `images`.
    #[serde(default)]
    pub request_type: Option<String>,
    /// The user's goal, for `intro` and `quests`.
    #[serde(default)]
    pub goal: Option<String>,
    /// The quests to illustrate, for `images`.
    #[serde(default)]
    pub quests: Option<Vec<Quest>>,
}

/// Response body for `intro`.
#[derive(Debug, Serialize)]
pub struct IntroResponse {
    /// The narrative text.
    pub text: String,
}

/// Response body for `quests`.
#[derive(Debug, Serialize)]
pub struct QuestsResponse {
    /// The two parsed quest options.
    pub quests: Vec<Quest>,
}

/// Response body for `images`.
#[derive(Debug, Serialize)]
pub struct ImagesResponse {
    /// Image URLs in upstream order.
    pub urls: Vec<String>,
}

/// POST /generate
#[instrument(skip(state, request), fields(request_type = ?request.request_type))]
async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Response, ApiError> {
    let correlation_id = Uuid::new_v4();
    let request_type = request
        .request_type
        .as_deref()
        .ok_or(ApiError::MissingRequestType)?;

    info!(%correlation_id, request_type, "handling generate request");

    let generator = state.generator.as_ref();
    match request_type {
        "intro" => {
            let goal = request.goal.clone().unwrap_or_default();
            let text = service::generate_intro(generator, &goal).await?;
            Ok(Json(IntroResponse { text }).into_response())
        }
        "quests" => {
            let goal = request.goal.clone().unwrap_or_default();
            let quests = service::generate_quests(generator, &goal).await?;
            Ok(Json(QuestsResponse { quests }).into_response())
        }
        "images" => {
            let quests = request.quests.clone().unwrap_or_default();
            let urls = service::generate_illustrations(generator, &quests).await?;
            Ok(Json(ImagesResponse { urls }).into_response())
        }
        other => Err(ApiError::UnknownRequestType(other.to_string())),
    }
}

/// Rejects non-POST methods with a JSON error body.
async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody {
            error: "method not allowed; use POST".to_string(),
        }),
    )
        .into_response()
}

/// Returns the router for the generation endpoint.
pub fn router() -> Router<AppState> {
    Router::new().route("/generate", post(generate).fallback(method_not_allowed))
}
