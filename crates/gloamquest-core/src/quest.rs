//! Quest value type.

use serde::{Deserialize, Serialize};

/// A quest choice: a fantasy-themed title paired with a real-world action.
///
/// Produced by parsing generator output; neither field is length- or
/// content-validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// One-line fantasy-themed title.
    pub title: String,
    /// One-line real-world action description.
    pub description: String,
}

impl Quest {
    /// Create a new quest.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
