//! Polynomial design matrix.
//!
//! Row `i` of the matrix is `[1, x_i, x_i², ..., x_i^M]`, which turns
//! polynomial regression into a linear least squares problem in the
//! coefficients.

use nalgebra::DMatrix;

use crate::models::fill_design_row;

/// Build the `N × (M+1)` design matrix for inputs `x` and degree `M`.
///
/// An empty `x` yields a `0 × (M+1)` matrix; solvers reject empty samples
/// before getting here.
pub fn design_matrix(x: &[f64], degree: usize) -> DMatrix<f64> {
    let k = degree + 1;
    let mut phi = DMatrix::<f64>::zeros(x.len(), k);
    let mut row = vec![0.0; k];
    for (i, &xi) in x.iter().enumerate() {
        fill_design_row(xi, &mut row);
        for (j, &v) in row.iter().enumerate() {
            phi[(i, j)] = v;
        }
    }
    phi
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_and_constant_column() {
        let x = [-1.0, -0.5, 0.0, 0.5, 1.0, 2.0];
        for degree in 0..6 {
            let phi = design_matrix(&x, degree);
            assert_eq!(phi.shape(), (x.len(), degree + 1));
            assert!(phi.column(0).iter().all(|&v| v == 1.0));
        }
    }

    #[test]
    fn entries_are_powers_of_inputs() {
        let phi = design_matrix(&[2.0, 3.0], 3);
        assert_eq!(phi[(0, 3)], 8.0);
        assert_eq!(phi[(1, 2)], 9.0);
    }

    #[test]
    fn empty_inputs_give_empty_rows() {
        let phi = design_matrix(&[], 2);
        assert_eq!(phi.shape(), (0, 3));
    }
}
