//! `polyfit-select` library crate.
//!
//! Polynomial regression by closed-form least squares (plain and ridge), with
//! hyperparameter selection on a held-out validation sample:
//!
//! - [`design_matrix`] builds the `N × (M+1)` polynomial basis
//! - [`least_squares`] / [`regularized_least_squares`] solve the normal equations
//! - [`mean_squared_error`] scores a coefficient vector on a sample
//! - [`model_selection`] / [`regularized_model_selection`] sweep degrees or λ
//!
//! Selectors log the chosen model through the `log` facade; install any
//! logger to see it.

pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod math;
pub mod models;

pub use domain::{
    Candidate, PolyFit, RegularizedSelectionResult, Sample, SampleConfig, SelectionResult,
    SolveOptions, SweepOptions, SweepReport,
};
pub use error::{FitError, Result};
pub use fit::{
    least_squares, model_selection, regularized_least_squares, regularized_model_selection,
    select_best,
};
pub use math::{design_matrix, mean_squared_error};
pub use models::polynomial;
