//! Error type shared by every fitting and selection routine.

/// Failure modes of design-matrix fitting and model selection.
///
/// All failures are deterministic: retrying the same call with the same
/// inputs fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FitError {
    /// Two sequences that must be paired positionally have different lengths.
    #[error("{what}: expected length {expected}, found {found}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// A sample sequence has no observations.
    #[error("{0} is empty")]
    EmptyInput(&'static str),

    /// The unregularized design matrix is rank deficient, so `Φᵀ Φ` is not
    /// invertible. `rank` is the measured numerical rank of Φ.
    ///
    /// Usually the degree is too high for the number of distinct inputs.
    #[error(
        "normal equations are singular: design matrix has rank {rank} but {k} columns [n: {n}]"
    )]
    SingularMatrix { n: usize, k: usize, rank: usize },

    /// The solve produced NaN or infinite coefficients, typically from
    /// non-finite inputs or overflow.
    #[error("least squares solution is not finite [n: {n}, k: {k}]")]
    NonFiniteSolution { n: usize, k: usize },

    /// The linear algebra backend refused the solve.
    #[error("failed to solve: {0}")]
    Algebra(&'static str),

    /// A selector was handed no candidates, so there is no best result.
    #[error("no {0} candidates to evaluate")]
    EmptyCandidates(&'static str),

    /// Regularization strength must be finite and non-negative.
    #[error("invalid regularization strength: {0}")]
    InvalidRegularization(f64),

    #[error("invalid candidate grid: {0}")]
    InvalidGrid(String),

    #[error("invalid sample configuration: {0}")]
    InvalidSample(String),
}

pub type Result<T> = std::result::Result<T, FitError>;

/// Check that two positionally-paired sequences have the same length.
pub(crate) fn ensure_same_len(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(FitError::DimensionMismatch {
            what,
            expected,
            found,
        });
    }
    Ok(())
}
