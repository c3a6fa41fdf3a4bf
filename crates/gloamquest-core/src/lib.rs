//! Gloamquest Core — shared domain abstractions.
//!
//! This crate defines the types and traits the other crates depend on: the
//! quest value type, the generation error taxonomy, and the trait the API
//! server and services use to reach the upstream generation API. It contains
//! no infrastructure code.

pub mod error;
pub mod generator;
pub mod quest;

pub use error::GenerationError;
pub use generator::{CompletionRequest, Generator, IllustrationRequest};
pub use quest::Quest;
