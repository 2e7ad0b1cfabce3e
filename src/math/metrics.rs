//! Mean squared error.

use crate::error::{FitError, Result, ensure_same_len};
use crate::models::polynomial;

/// Mean squared error of the polynomial `w` evaluated at `x` against `y`.
pub fn mean_squared_error(x: &[f64], y: &[f64], w: &[f64]) -> Result<f64> {
    ensure_same_len("outputs", x.len(), y.len())?;
    mse_from_predictions(y, &polynomial(x, w))
}

/// Mean of `(y_pred - y_true)²`.
pub fn mse_from_predictions(y_true: &[f64], y_pred: &[f64]) -> Result<f64> {
    ensure_same_len("predictions", y_true.len(), y_pred.len())?;
    if y_true.is_empty() {
        return Err(FitError::EmptyInput("error sample"));
    }
    let sse: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(&t, &p)| {
            let r = p - t;
            r * r
        })
        .sum();
    Ok(sse / y_true.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_exact_predictions() {
        let x = [0.0, 1.0, 2.0];
        let w = [1.0, 2.0];
        let y = [1.0, 3.0, 5.0];
        assert_eq!(mean_squared_error(&x, &y, &w).unwrap(), 0.0);
    }

    #[test]
    fn residual_sign_does_not_matter() {
        let y = [1.0, 2.0, 3.0];
        let above = [1.5, 2.5, 3.5];
        let below = [0.5, 1.5, 2.5];
        let a = mse_from_predictions(&y, &above).unwrap();
        let b = mse_from_predictions(&y, &below).unwrap();
        assert_eq!(a, b);
        assert!((a - 0.25).abs() < 1e-15);
    }

    #[test]
    fn mismatched_lengths_fail() {
        let err = mean_squared_error(&[1.0, 2.0], &[1.0], &[0.0]).unwrap_err();
        assert!(matches!(err, FitError::DimensionMismatch { .. }));
    }

    #[test]
    fn empty_sample_fails() {
        let err = mse_from_predictions(&[], &[]).unwrap_err();
        assert_eq!(err, FitError::EmptyInput("error sample"));
    }
}
