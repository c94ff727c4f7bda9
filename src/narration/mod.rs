//! Voice-ready route narration.

mod generator;

pub use generator::{NarrationConfig, Narrator, annotate};
