//! The three generation operations.
//!
//! Each operation builds its prompt, calls the injected [`Generator`], and
//! reshapes the reply. Failures propagate as [`GenerationError`] values so
//! callers can tell a dead upstream apart from a model that answered with
//! nothing useful.

use gloamquest_core::error::GenerationError;
use gloamquest_core::generator::{CompletionRequest, Generator, IllustrationRequest};
use gloamquest_core::quest::Quest;

use crate::parser::parse_quests;
use crate::prompts;

/// Generate the short dark fantasy introduction for a goal.
///
/// # Errors
///
/// Returns `Upstream` if the generation call fails and `EmptyCompletion` if
/// the reply trims down to nothing.
pub async fn generate_intro(
    generator: &dyn Generator,
    goal: &str,
) -> Result<String, GenerationError> {
    let request = CompletionRequest {
        prompt: prompts::intro(goal),
        max_tokens: prompts::INTRO_MAX_TOKENS,
    };
    let text = generator.complete(request).await?;
    let text = text.trim();
    if text.is_empty() {
        return Err(GenerationError::EmptyCompletion);
    }
    Ok(text.to_string())
}

/// Generate and parse the two quest options for a goal.
///
/// # Errors
///
/// Returns `Upstream` if the generation call fails and `MalformedQuests` if
/// the reply does not contain two complete title/action pairs.
pub async fn generate_quests(
    generator: &dyn Generator,
    goal: &str,
) -> Result<Vec<Quest>, GenerationError> {
    let request = CompletionRequest {
        prompt: prompts::quests(goal),
        max_tokens: prompts::QUESTS_MAX_TOKENS,
    };
    let text = generator.complete(request).await?;
    let quests = parse_quests(&text)?;
    tracing::debug!(count = quests.len(), "parsed quest options");
    Ok(quests)
}

/// Generate one illustration URL per quest.
///
/// The returned URLs are assumed to be positionally aligned with the
/// submitted quests; that is upstream ordering behavior, not a checked
/// contract.
///
/// # Errors
///
/// Returns `NotEnoughQuests` when fewer than two quests are supplied and
/// `Upstream` if the generation call fails.
pub async fn generate_illustrations(
    generator: &dyn Generator,
    quests: &[Quest],
) -> Result<Vec<String>, GenerationError> {
    if quests.len() < prompts::QUESTS_REQUIRED {
        return Err(GenerationError::NotEnoughQuests {
            found: quests.len(),
        });
    }
    let request = IllustrationRequest {
        prompt: prompts::illustration(&quests[0].title, &quests[1].title),
        count: prompts::ILLUSTRATION_COUNT,
        size: prompts::ILLUSTRATION_SIZE.to_string(),
    };
    generator.illustrate(request).await
}
