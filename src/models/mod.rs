//! Polynomial model implementation.
//!
//! Kept as small, pure functions so fitting and selection code can stay
//! generic.

pub mod polynomial;

pub use polynomial::*;
