//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - sample sequences (`Sample`) and synthetic sample recipes (`SampleConfig`)
//! - solver and selector outputs (`PolyFit`, `SelectionResult`, etc.)
//! - solve/sweep options (`SolveOptions`, `SweepOptions`)

pub mod types;

pub use types::*;
