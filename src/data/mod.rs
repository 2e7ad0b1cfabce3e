//! Data sources: seeded synthetic samples for fixtures and experiments.

pub mod sample;

pub use sample::*;
