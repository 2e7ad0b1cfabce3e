//! Synthetic polynomial samples.
//!
//! Inputs are drawn uniformly from `[x_min, x_max]` and outputs are the
//! ground-truth polynomial plus Gaussian noise. The generator is seeded, so
//! the same config always produces the same sample.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::{Sample, SampleConfig};
use crate::error::{FitError, Result};
use crate::models::predict;

/// Generate a noisy sample of the polynomial in `config.coefficients`.
pub fn generate_polynomial_sample(config: &SampleConfig) -> Result<Sample> {
    config.validate()?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let normal = Normal::new(0.0, config.noise_std)
        .map_err(|e| FitError::InvalidSample(format!("noise distribution error: {e}")))?;

    let mut x = Vec::with_capacity(config.n);
    let mut y = Vec::with_capacity(config.n);
    for _ in 0..config.n {
        let xi = rng.gen_range(config.x_min..=config.x_max);
        let noise = normal.sample(&mut rng);
        x.push(xi);
        y.push(predict(xi, &config.coefficients) + noise);
    }

    Sample::new(x, y)
}
