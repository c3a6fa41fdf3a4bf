//! Gloamquest terminal client library.
//!
//! Drives the three sequential generation calls against the API server and
//! renders the resulting story and quest cards in the terminal.

pub mod api;
pub mod pipeline;
pub mod render;
