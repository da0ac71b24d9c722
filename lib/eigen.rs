//! Extraction of the lowest eigenpairs of the Hamiltonian.

use ndarray as nd;
use ndarray_linalg::{ self as la, EighInto };
use crate::error::UnsolvableSystemError;

/// A single eigenvalue/eigenvector pair, prior to normalization.
pub type Eigenpair = (f64, nd::Array1<f64>);

/// A backend for the symmetric eigenproblem.
///
/// Implementations take ownership of the Hamiltonian (it is not retained
/// anywhere after extraction) and return the `n_lowest` smallest-eigenvalue
/// pairs sorted ascending. Ties keep the backend's own ordering; it is stable
/// for a given backend but not guaranteed bit-identical across
/// algorithmically equivalent ones. The trait exists so an iterative or
/// sparse lowest-N solver can replace the dense one for large grids without
/// touching the Hamiltonian assembly or any caller.
pub trait EigenSolver {
    /// Compute the `n_lowest` smallest eigenpairs, ascending by eigenvalue.
    fn lowest(&self, h: nd::Array2<f64>, n_lowest: usize)
        -> Result<Vec<Eigenpair>, UnsolvableSystemError>;
}

/// Dense full-spectrum symmetric eigendecomposition (LAPACK `eigh`).
///
/// Adequate for grids up to a few thousand points; beyond that the full
/// decomposition becomes the scaling bottleneck and a lowest-N backend should
/// be swapped in through [`EigenSolver`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Dense;

impl EigenSolver for Dense {
    fn lowest(&self, h: nd::Array2<f64>, n_lowest: usize)
        -> Result<Vec<Eigenpair>, UnsolvableSystemError>
    {
        let dim = h.nrows();
        if n_lowest == 0 || n_lowest > dim {
            return Err(UnsolvableSystemError::BadStateCount {
                requested: n_lowest,
                dim,
            });
        }
        let (evals, evecs): (nd::Array1<f64>, nd::Array2<f64>)
            = h.eigh_into(la::UPLO::Lower)?;
        // LAPACK already returns eigenvalues ascending; re-sorting here keeps
        // the ordering guarantee independent of the backend
        let mut pairs: Vec<Eigenpair>
            = evals.iter().zip(evecs.columns())
            .map(|(e, v)| (*e, v.to_owned()))
            .collect();
        pairs.sort_by(|(ea, _), (eb, _)| ea.total_cmp(eb));
        pairs.truncate(n_lowest);
        Ok(pairs)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use ndarray as nd;
    use super::*;

    #[test]
    fn diagonal_matrix_eigenpairs() {
        let h = nd::Array2::from_diag(&nd::array![3.0, 1.0, 2.0]);
        let pairs = Dense.lowest(h, 2).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_abs_diff_eq!(pairs[0].0, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pairs[1].0, 2.0, epsilon = 1e-12);
        // eigenvector of the smallest eigenvalue points along index 1
        assert_abs_diff_eq!(pairs[0].1[1].abs(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn energies_come_out_ascending() {
        let h = nd::array![
            [2.0, -1.0, 0.0],
            [-1.0, 2.0, -1.0],
            [0.0, -1.0, 2.0],
        ];
        let pairs = Dense.lowest(h, 3).unwrap();
        assert!(pairs.windows(2).all(|w| w[0].0 <= w[1].0));
    }

    #[test]
    fn rejects_zero_or_oversized_requests() {
        let h = nd::Array2::<f64>::eye(4);
        assert!(matches!(
            Dense.lowest(h.clone(), 0),
            Err(UnsolvableSystemError::BadStateCount { .. }),
        ));
        assert!(matches!(
            Dense.lowest(h, 5),
            Err(UnsolvableSystemError::BadStateCount { .. }),
        ));
    }
}
