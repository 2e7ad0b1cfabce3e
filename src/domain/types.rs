//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so callers
//! can persist a selected model or load fit options from a config file.

use serde::{Deserialize, Serialize};

use crate::error::{FitError, Result, ensure_same_len};

/// Positionally paired inputs and outputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Sample {
    /// Pair `x` with `y`, rejecting sequences of different length.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        ensure_same_len("sample outputs", x.len(), y.len())?;
        Ok(Self { x, y })
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Output of a single least squares solve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolyFit {
    /// Polynomial coefficients `w_0..w_M`, ascending powers.
    pub weights: Vec<f64>,
    /// Unpenalised mean squared error on the training sample.
    pub train_mse: f64,
}

impl PolyFit {
    pub fn degree(&self) -> usize {
        self.weights.len().saturating_sub(1)
    }
}

/// Best model found by a degree sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub weights: Vec<f64>,
    pub train_mse: f64,
    pub val_mse: f64,
}

impl SelectionResult {
    pub fn degree(&self) -> usize {
        self.weights.len().saturating_sub(1)
    }
}

/// Best model found by a regularization sweep at a fixed degree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularizedSelectionResult {
    pub weights: Vec<f64>,
    pub train_mse: f64,
    pub val_mse: f64,
    pub lambda: f64,
}

impl RegularizedSelectionResult {
    pub fn degree(&self) -> usize {
        self.weights.len().saturating_sub(1)
    }
}

/// One evaluated entry of a hyperparameter sweep.
///
/// `P` is the swept hyperparameter: a degree (`usize`) or a regularization
/// strength (`f64`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate<P> {
    /// Position in the caller's candidate list. Earlier wins exact ties.
    pub index: usize,
    pub param: P,
    pub weights: Vec<f64>,
    pub train_mse: f64,
    pub val_mse: f64,
}

/// Every candidate of a sweep, in input order, plus the selected one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport<P> {
    pub best: Candidate<P>,
    pub candidates: Vec<Candidate<P>>,
}

impl From<Candidate<usize>> for SelectionResult {
    fn from(c: Candidate<usize>) -> Self {
        Self {
            weights: c.weights,
            train_mse: c.train_mse,
            val_mse: c.val_mse,
        }
    }
}

impl From<Candidate<f64>> for RegularizedSelectionResult {
    fn from(c: Candidate<f64>) -> Self {
        Self {
            weights: c.weights,
            train_mse: c.train_mse,
            val_mse: c.val_mse,
            lambda: c.param,
        }
    }
}

/// Options for a single normal-equations solve.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveOptions {
    /// Singular values of the design matrix at or below this threshold count
    /// as zero when checking rank.
    ///
    /// `None` uses `σ_max · max(N, M+1) · ε`.
    pub rank_tolerance: Option<f64>,
}

/// Options for a hyperparameter sweep.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepOptions {
    /// Evaluate candidates on the rayon thread pool.
    pub parallel: bool,
    pub solve: SolveOptions,
}

/// Recipe for a synthetic polynomial sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Number of observations.
    pub n: usize,
    pub x_min: f64,
    pub x_max: f64,
    /// Ground-truth coefficients, ascending powers.
    pub coefficients: Vec<f64>,
    /// Standard deviation of the additive Gaussian noise.
    pub noise_std: f64,
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            n: 50,
            x_min: -1.0,
            x_max: 1.0,
            coefficients: vec![0.0],
            noise_std: 0.0,
            seed: 42,
        }
    }
}

impl SampleConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(FitError::InvalidSample("n must be > 0".to_string()));
        }
        if !(self.x_min.is_finite() && self.x_max.is_finite() && self.x_max >= self.x_min) {
            return Err(FitError::InvalidSample(format!(
                "x range must be finite with x_min <= x_max, got {}..{}",
                self.x_min, self.x_max
            )));
        }
        if !(self.noise_std.is_finite() && self.noise_std >= 0.0) {
            return Err(FitError::InvalidSample(format!(
                "noise_std must be finite and >= 0, got {}",
                self.noise_std
            )));
        }
        if self.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(FitError::InvalidSample(
                "coefficients must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
