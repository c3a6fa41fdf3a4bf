//! Generation error types.

use thiserror::Error;

/// Top-level error type for quest generation.
///
/// Upstream failure and upstream-returned-nothing are distinct variants so
/// callers can tell a dead connection apart from a model that answered with
/// unusable content.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Transport or HTTP failure while calling the generation API.
    #[error("upstream generation call failed: {0}")]
    Upstream(String),

    /// The generation API answered but the reply carried no usable text.
    #[error("upstream returned an empty completion")]
    EmptyCompletion,

    /// Quest parsing found fewer than two complete title/action pairs.
    #[error("quest text malformed: found {found} complete quest(s), need 2")]
    MalformedQuests {
        /// Number of complete pairs that were parsed.
        found: usize,
    },

    /// The illustration step was invoked with fewer than two quests.
    #[error("illustration step needs 2 quests, got {found}")]
    NotEnoughQuests {
        /// Number of quests that were supplied.
        found: usize,
    },
}
