//! Polynomial model evaluation.
//!
//! The fitter relies on two primitive operations:
//! - build a design row for a given input (for least squares)
//! - predict y(x) given coefficients (for errors and selection)

/// Fill a design row `[1, x, x², ..., x^M]` where `M = out.len() - 1`.
///
/// Powers are built by repeated multiplication, so `0^0 = 1`.
pub fn fill_design_row(x: f64, out: &mut [f64]) {
    let mut power = 1.0;
    for slot in out.iter_mut() {
        *slot = power;
        power *= x;
    }
}

/// Predict `y(x) = Σ w_j x^j` using Horner's rule.
///
/// An empty coefficient slice is the zero polynomial.
pub fn predict(x: f64, weights: &[f64]) -> f64 {
    weights.iter().rev().fold(0.0, |acc, &w| acc * x + w)
}

/// Evaluate the polynomial with coefficients `weights` at every input.
pub fn polynomial(x: &[f64], weights: &[f64]) -> Vec<f64> {
    x.iter().map(|&xi| predict(xi, weights)).collect()
}
