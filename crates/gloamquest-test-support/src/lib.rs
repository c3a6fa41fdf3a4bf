//! Shared test fakes for the Gloamquest generation trait.

mod generator;

pub use generator::{CannedGenerator, FailingGenerator, SequenceGenerator};
