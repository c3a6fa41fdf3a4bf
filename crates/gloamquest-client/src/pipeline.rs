//! The sequential generation pipeline.
//!
//! Three calls in strict order (intro, quests, images), each awaiting the
//! previous one. A cancellation token is consulted before every step and
//! raced against the in-flight call, so a superseded run stops instead of
//! landing stale results.

use std::future::Future;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use gloamquest_core::quest::Quest;

use crate::api::{ClientError, QuestApi};

/// Number of quest options a run must yield before images are requested.
const QUESTS_REQUIRED: usize = 2;

/// A completed pipeline run.
#[derive(Debug)]
pub struct Adventure {
    /// The intro narration.
    pub intro: String,
    /// The two quest options.
    pub quests: Vec<Quest>,
    /// Illustration URLs, positionally aligned with `quests` by upstream
    /// ordering.
    pub image_urls: Vec<String>,
}

/// Errors that abort a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The goal was empty after trimming; no call was made.
    #[error("goal is empty")]
    EmptyGoal,

    /// The quests step yielded fewer than two entries; images are skipped.
    #[error("expected 2 quests, got {found}")]
    QuestShortfall {
        /// Number of quests the endpoint returned.
        found: usize,
    },

    /// The run was cancelled.
    #[error("cancelled")]
    Cancelled,

    /// A step failed against the endpoint.
    #[error(transparent)]
    Api(#[from] ClientError),
}

/// Drive the three calls in strict sequence and collect the results.
///
/// # Errors
///
/// Returns `EmptyGoal` without any network activity for a blank goal,
/// `QuestShortfall` when fewer than two quests come back (the images step is
/// never invoked), `Cancelled` when the token fires, and `Api` when a step
/// fails.
pub async fn run(
    api: &dyn QuestApi,
    goal: &str,
    cancel: &CancellationToken,
) -> Result<Adventure, PipelineError> {
    let goal = goal.trim();
    if goal.is_empty() {
        return Err(PipelineError::EmptyGoal);
    }

    let intro = step(cancel, api.intro(goal)).await?;
    tracing::debug!("intro received");

    let quests = step(cancel, api.quests(goal)).await?;
    if quests.len() < QUESTS_REQUIRED {
        return Err(PipelineError::QuestShortfall {
            found: quests.len(),
        });
    }

    let image_urls = step(cancel, api.images(&quests)).await?;
    tracing::debug!(urls = image_urls.len(), "pipeline complete");

    Ok(Adventure {
        intro,
        quests,
        image_urls,
    })
}

/// Race one call against cancellation. The cancel branch is checked first,
/// so an already-cancelled token stops the run before the call is polled.
async fn step<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T, ClientError>>,
) -> Result<T, PipelineError> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(PipelineError::Cancelled),
        result = call => Ok(result?),
    }
}
