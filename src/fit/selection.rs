//! Model selection by validation error.
//!
//! Each candidate hyperparameter (a polynomial degree, or a ridge strength at
//! a fixed degree) is fitted on the training sample and scored by MSE on the
//! validation sample.
//!
//! Selection rules:
//! 1. The first candidate is the initial best.
//! 2. A later candidate replaces it only with a strictly lower validation MSE.
//! 3. Exact ties keep the earlier candidate.
//!
//! A failed fit aborts the whole sweep; there is no partial result.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::domain::{
    Candidate, RegularizedSelectionResult, SelectionResult, SweepOptions, SweepReport,
};
use crate::error::{FitError, Result, ensure_same_len};
use crate::fit::fitter::{least_squares_with, regularized_least_squares_with};
use crate::math::mean_squared_error;

/// Pick the degree in `m_values` with the lowest validation MSE.
pub fn model_selection(
    x_train: &[f64],
    y_train: &[f64],
    x_val: &[f64],
    y_val: &[f64],
    m_values: &[usize],
) -> Result<SelectionResult> {
    let report = sweep_degrees(x_train, y_train, x_val, y_val, m_values, &SweepOptions::default())?;
    Ok(report.best.into())
}

/// Pick the ridge strength in `lambda_values` with the lowest validation MSE
/// for a degree-`degree` polynomial.
pub fn regularized_model_selection(
    x_train: &[f64],
    y_train: &[f64],
    x_val: &[f64],
    y_val: &[f64],
    degree: usize,
    lambda_values: &[f64],
) -> Result<RegularizedSelectionResult> {
    let report = sweep_lambdas(
        x_train,
        y_train,
        x_val,
        y_val,
        degree,
        lambda_values,
        &SweepOptions::default(),
    )?;
    Ok(report.best.into())
}

/// Fit every degree in `m_values` and report all candidates plus the best.
pub fn sweep_degrees(
    x_train: &[f64],
    y_train: &[f64],
    x_val: &[f64],
    y_val: &[f64],
    m_values: &[usize],
    opts: &SweepOptions,
) -> Result<SweepReport<usize>> {
    if m_values.is_empty() {
        return Err(FitError::EmptyCandidates("degree"));
    }
    check_validation_sample(x_val, y_val)?;

    let n = x_train.len();
    for &m in m_values {
        if n < m + 1 {
            warn!("degree {m} needs at least {} training points, have {n}", m + 1);
        }
    }

    let candidates = evaluate_all(m_values, opts.parallel, |index, m| {
        let fit = least_squares_with(x_train, y_train, m, &opts.solve)?;
        let val_mse = mean_squared_error(x_val, y_val, &fit.weights)?;
        debug!(
            "degree {m}: train MSE {:.6e}, validation MSE {val_mse:.6e}",
            fit.train_mse
        );
        Ok(Candidate {
            index,
            param: m,
            weights: fit.weights,
            train_mse: fit.train_mse,
            val_mse,
        })
    })?;

    let report = into_report(candidates, "degree")?;
    info!(
        "best degree {}: train MSE {:.6e}, validation MSE {:.6e}",
        report.best.param, report.best.train_mse, report.best.val_mse
    );
    Ok(report)
}

/// Fit every ridge strength in `lambda_values` at a fixed degree and report all
/// candidates plus the best.
pub fn sweep_lambdas(
    x_train: &[f64],
    y_train: &[f64],
    x_val: &[f64],
    y_val: &[f64],
    degree: usize,
    lambda_values: &[f64],
    opts: &SweepOptions,
) -> Result<SweepReport<f64>> {
    if lambda_values.is_empty() {
        return Err(FitError::EmptyCandidates("regularization"));
    }
    check_validation_sample(x_val, y_val)?;

    let candidates = evaluate_all(lambda_values, opts.parallel, |index, lambda| {
        let fit = regularized_least_squares_with(x_train, y_train, degree, lambda, &opts.solve)?;
        let val_mse = mean_squared_error(x_val, y_val, &fit.weights)?;
        debug!(
            "lambda {lambda:e} (degree {degree}): train MSE {:.6e}, validation MSE {val_mse:.6e}",
            fit.train_mse
        );
        Ok(Candidate {
            index,
            param: lambda,
            weights: fit.weights,
            train_mse: fit.train_mse,
            val_mse,
        })
    })?;

    let report = into_report(candidates, "regularization")?;
    info!(
        "best lambda {:e} (degree {degree}): train MSE {:.6e}, validation MSE {:.6e}",
        report.best.param, report.best.train_mse, report.best.val_mse
    );
    Ok(report)
}

/// Reduce evaluated candidates to the one with the lowest validation MSE.
///
/// Exact ties go to the lower `index`. Returns `None` for an empty input.
///
/// NaN validation errors are ordered after every real number: a NaN never
/// replaces a finite best, and a finite candidate does replace a NaN best,
/// even when the NaN came first. Plain `<` would let a leading NaN win the
/// whole sweep.
pub fn select_best<P>(candidates: impl IntoIterator<Item = Candidate<P>>) -> Option<Candidate<P>> {
    candidates
        .into_iter()
        .fold(None, |best, c| match best {
            Some(b) if !beats(&c, &b) => Some(b),
            _ => Some(c),
        })
}

fn beats<P>(challenger: &Candidate<P>, best: &Candidate<P>) -> bool {
    if best.val_mse.is_nan() {
        return !challenger.val_mse.is_nan() || challenger.index < best.index;
    }
    challenger.val_mse < best.val_mse
        || (challenger.val_mse == best.val_mse && challenger.index < best.index)
}

fn check_validation_sample(x_val: &[f64], y_val: &[f64]) -> Result<()> {
    ensure_same_len("y_val", x_val.len(), y_val.len())?;
    if x_val.is_empty() {
        return Err(FitError::EmptyInput("validation sample"));
    }
    Ok(())
}

/// Evaluate each parameter, keeping results in input order.
///
/// The parallel path collects in index order too, so the reduction that
/// follows sees the same sequence either way.
fn evaluate_all<P, F>(params: &[P], parallel: bool, eval: F) -> Result<Vec<Candidate<P>>>
where
    P: Copy + Send + Sync,
    F: Fn(usize, P) -> Result<Candidate<P>> + Send + Sync,
{
    if parallel {
        params
            .par_iter()
            .enumerate()
            .map(|(i, &p)| eval(i, p))
            .collect()
    } else {
        params.iter().enumerate().map(|(i, &p)| eval(i, p)).collect()
    }
}

fn into_report<P: Clone>(
    candidates: Vec<Candidate<P>>,
    kind: &'static str,
) -> Result<SweepReport<P>> {
    let best = select_best(candidates.iter().cloned()).ok_or(FitError::EmptyCandidates(kind))?;
    Ok(SweepReport { best, candidates })
}
