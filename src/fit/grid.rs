//! Candidate grids for hyperparameter sweeps.
//!
//! Regularization strengths span orders of magnitude, so the default λ grid
//! is log-spaced. Degrees are a plain inclusive range.

use crate::error::{FitError, Result};

/// Generate `steps` log-spaced points between `min` and `max` (inclusive).
pub fn log_space(min: f64, max: f64, steps: usize) -> Result<Vec<f64>> {
    if !(min.is_finite() && max.is_finite() && 0.0 < min && min < max) {
        return Err(FitError::InvalidGrid(format!(
            "range must be finite with 0 < min < max; got min={min}, max={max}"
        )));
    }
    if steps < 2 {
        return Err(FitError::InvalidGrid(format!("steps must be >= 2, got {steps}")));
    }

    // Endpoints are returned exactly so callers can match on them.
    let last = steps - 1;
    let ratio = (max / min).ln() / last as f64;
    Ok((0..steps)
        .map(|i| match i {
            0 => min,
            i if i == last => max,
            i => min * (ratio * i as f64).exp(),
        })
        .collect())
}

/// λ candidates: `log_space(min, max, steps)`, optionally preceded by `0.0`.
pub fn lambda_grid(min: f64, max: f64, steps: usize, include_zero: bool) -> Result<Vec<f64>> {
    let values = log_space(min, max, steps)?;
    if !include_zero {
        return Ok(values);
    }
    let mut out = Vec::with_capacity(values.len() + 1);
    out.push(0.0);
    out.extend(values);
    Ok(out)
}

/// Degree candidates `0..=max_degree`.
pub fn degree_range(max_degree: usize) -> Vec<usize> {
    (0..=max_degree).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_space_includes_endpoints() {
        let v = log_space(1e-4, 10.0, 6).unwrap();
        assert_eq!(v.len(), 6);
        assert_eq!(v[0], 1e-4);
        assert_eq!(v[5], 10.0);
        assert!(v.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn log_space_rejects_bad_range() {
        assert!(matches!(log_space(0.0, 1.0, 3), Err(FitError::InvalidGrid(_))));
        assert!(matches!(log_space(1.0, 0.5, 3), Err(FitError::InvalidGrid(_))));
        assert!(matches!(log_space(0.1, 1.0, 1), Err(FitError::InvalidGrid(_))));
    }

    #[test]
    fn lambda_grid_can_lead_with_zero() {
        let v = lambda_grid(0.01, 1.0, 3, true).unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v[0], 0.0);
        assert!((v[2] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn degree_range_is_inclusive() {
        assert_eq!(degree_range(3), vec![0, 1, 2, 3]);
    }
}
