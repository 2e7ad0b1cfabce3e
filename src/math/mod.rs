//! Mathematical utilities: design matrix, normal equations and error metrics.

pub mod design;
pub mod metrics;
pub mod ols;

pub use design::*;
pub use metrics::*;
pub use ols::*;
