//! OpenAI-backed implementation of the Gloamquest generation trait.

pub mod client;
pub mod protocol;

pub use client::{OpenAiConfig, OpenAiGenerator};
