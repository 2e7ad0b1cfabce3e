//! Polynomial fitting and model selection.
//!
//! Responsibilities:
//!
//! - closed-form fits for one degree (plain and ridge)
//! - candidate grids for degree / λ sweeps
//! - selection of the best candidate by validation MSE (optionally parallel)

pub mod fitter;
pub mod grid;
pub mod selection;

pub use fitter::*;
pub use grid::*;
pub use selection::*;
