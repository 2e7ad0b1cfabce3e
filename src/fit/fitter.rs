//! Closed-form polynomial fits for a single degree.
//!
//! Given training inputs `x_i`, outputs `y_i` and a degree `M` we:
//! - build the design matrix Φ
//! - solve the (optionally ridge-regularized) normal equations for `w`
//! - report the plain training MSE of the fit
//!
//! The training MSE never includes the `λ‖w‖²` penalty.

use nalgebra::DVector;

use crate::domain::{PolyFit, SolveOptions};
use crate::error::{FitError, Result, ensure_same_len};
use crate::math::{design_matrix, mean_squared_error, solve_normal_equations};

/// Ordinary least squares fit of a degree-`degree` polynomial.
pub fn least_squares(x_train: &[f64], y_train: &[f64], degree: usize) -> Result<PolyFit> {
    least_squares_with(x_train, y_train, degree, &SolveOptions::default())
}

/// [`least_squares`] with explicit solve options.
pub fn least_squares_with(
    x_train: &[f64],
    y_train: &[f64],
    degree: usize,
    opts: &SolveOptions,
) -> Result<PolyFit> {
    fit_polynomial(x_train, y_train, degree, 0.0, opts)
}

/// Ridge (L2) regularized fit of a degree-`degree` polynomial.
///
/// `lambda = 0` is the same computation as [`least_squares`], including its
/// singular-matrix failure.
pub fn regularized_least_squares(
    x_train: &[f64],
    y_train: &[f64],
    degree: usize,
    lambda: f64,
) -> Result<PolyFit> {
    regularized_least_squares_with(x_train, y_train, degree, lambda, &SolveOptions::default())
}

/// [`regularized_least_squares`] with explicit solve options.
pub fn regularized_least_squares_with(
    x_train: &[f64],
    y_train: &[f64],
    degree: usize,
    lambda: f64,
    opts: &SolveOptions,
) -> Result<PolyFit> {
    if !(lambda.is_finite() && lambda >= 0.0) {
        return Err(FitError::InvalidRegularization(lambda));
    }
    fit_polynomial(x_train, y_train, degree, lambda, opts)
}

fn fit_polynomial(
    x: &[f64],
    y: &[f64],
    degree: usize,
    lambda: f64,
    opts: &SolveOptions,
) -> Result<PolyFit> {
    ensure_same_len("y_train", x.len(), y.len())?;
    if x.is_empty() {
        return Err(FitError::EmptyInput("training sample"));
    }

    let phi = design_matrix(x, degree);
    let y_vec = DVector::from_column_slice(y);
    let w = solve_normal_equations(&phi, &y_vec, lambda, opts)?;

    let weights: Vec<f64> = w.iter().copied().collect();
    let train_mse = mean_squared_error(x, y, &weights)?;
    Ok(PolyFit { weights, train_mse })
}
