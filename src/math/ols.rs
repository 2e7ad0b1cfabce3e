//! Least squares solver for the (optionally ridge-regularized) normal equations.
//!
//! The minimizer of `‖Φ w - y‖² + λ‖w‖²` is the solution of
//!
//! ```text
//! (Φᵀ Φ + λ I) w = Φᵀ y
//! ```
//!
//! Implementation choices:
//! - We never form `Φᵀ Φ`. It squares the condition number of Φ, and for
//!   large-magnitude inputs `λ I` vanishes in rounding next to it.
//! - With `λ > 0` we solve the stacked system `[Φ; √λ I] w = [y; 0]` by SVD.
//!   Its normal equations are exactly the ridge ones and every singular value
//!   is at least `√λ`, so the solve cannot be singular.
//! - With `λ = 0` we take the SVD of Φ itself and reject a rank-deficient
//!   design (too few distinct inputs for the degree) instead of solving it
//!   into noise.

use nalgebra::{DMatrix, DVector};

use crate::domain::SolveOptions;
use crate::error::{FitError, Result};

/// Numerical rank of `phi`.
///
/// Singular values at or below `tolerance` count as zero. Without an explicit
/// tolerance we use `σ_max · max(rows, cols) · ε`.
pub fn numerical_rank(phi: &DMatrix<f64>, tolerance: Option<f64>) -> usize {
    if phi.is_empty() {
        return 0;
    }
    let sv = phi.singular_values();
    let tol = rank_tolerance(&sv, phi.nrows(), phi.ncols(), tolerance);
    sv.iter().filter(|&&s| s > tol).count()
}

fn rank_tolerance(sv: &DVector<f64>, rows: usize, cols: usize, explicit: Option<f64>) -> f64 {
    let tol = explicit.unwrap_or_else(|| {
        let s_max = sv.iter().copied().fold(0.0_f64, f64::max);
        s_max * rows.max(cols) as f64 * f64::EPSILON
    });
    // nalgebra asserts a non-negative threshold.
    tol.max(0.0)
}

/// Solve `(Φᵀ Φ + λ I) w = Φᵀ y` for `w`.
///
/// Callers validate `λ` (finite, non-negative) and the `phi`/`y` pairing.
pub fn solve_normal_equations(
    phi: &DMatrix<f64>,
    y: &DVector<f64>,
    lambda: f64,
    opts: &SolveOptions,
) -> Result<DVector<f64>> {
    let (n, k) = phi.shape();

    let w = if lambda > 0.0 {
        let (a, b) = augment(phi, y, lambda);
        let svd = a.svd(true, true);
        svd.solve(&b, 0.0).map_err(FitError::Algebra)?
    } else {
        let svd = phi.clone().svd(true, true);
        let tol = rank_tolerance(&svd.singular_values, n, k, opts.rank_tolerance);
        let rank = svd.rank(tol);
        if rank < k {
            return Err(FitError::SingularMatrix { n, k, rank });
        }
        svd.solve(y, tol).map_err(FitError::Algebra)?
    };

    if !w.iter().all(|v| v.is_finite()) {
        return Err(FitError::NonFiniteSolution { n, k });
    }
    Ok(w)
}

/// Stack `√λ I` under Φ and zeros under `y`.
fn augment(phi: &DMatrix<f64>, y: &DVector<f64>, lambda: f64) -> (DMatrix<f64>, DVector<f64>) {
    let (n, k) = phi.shape();
    let root = lambda.sqrt();
    let mut a = phi.clone().resize_vertically(n + k, 0.0);
    for j in 0..k {
        a[(n + j, j)] = root;
    }
    let b = y.clone().resize_vertically(n + k, 0.0);
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn least_squares_solves_simple_system() {
        // Fit y = 2 + 3x on x = [0,1,2]
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[2.0, 5.0, 8.0]);

        let w = solve_normal_equations(&x, &y, 0.0, &SolveOptions::default()).unwrap();
        assert!((w[0] - 2.0).abs() < 1e-10);
        assert!((w[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn duplicate_rows_are_rank_deficient() {
        // Two copies of the same input can't pin down a line.
        let x = DMatrix::from_row_slice(2, 2, &[1.0, 3.0, 1.0, 3.0]);
        assert_eq!(numerical_rank(&x, None), 1);

        let y = DVector::from_row_slice(&[1.0, 2.0]);
        let err = solve_normal_equations(&x, &y, 0.0, &SolveOptions::default()).unwrap_err();
        assert_eq!(err, FitError::SingularMatrix { n: 2, k: 2, rank: 1 });
    }

    #[test]
    fn ridge_solves_rank_deficient_system() {
        let x = DMatrix::from_row_slice(2, 2, &[1.0, 3.0, 1.0, 3.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0]);
        let w = solve_normal_equations(&x, &y, 0.1, &SolveOptions::default()).unwrap();
        assert!(w.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn ridge_matches_closed_form() {
        // Single column of ones: w = Σy / (n + λ).
        let x = DMatrix::from_element(4, 1, 1.0);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 4.0]);
        let w = solve_normal_equations(&x, &y, 1.0, &SolveOptions::default()).unwrap();
        assert!((w[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_outputs_give_non_finite_solution() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        let y = DVector::from_row_slice(&[1.0, f64::NAN, 2.0]);
        let err = solve_normal_equations(&x, &y, 0.0, &SolveOptions::default()).unwrap_err();
        assert_eq!(err, FitError::NonFiniteSolution { n: 3, k: 2 });
    }

    #[test]
    fn explicit_tolerance_overrides_default() {
        let x = DMatrix::from_row_slice(3, 2, &[1.0, 0.0, 1.0, 1.0, 1.0, 2.0]);
        assert_eq!(numerical_rank(&x, None), 2);
        assert_eq!(numerical_rank(&x, Some(1e6)), 0);
    }
}
