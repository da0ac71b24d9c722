//! Assembly of the discretized Hamiltonian `H = T + V`.

use ndarray as nd;
use crate::{ error::DegenerateGridError, grid::Grid };

/// Physical constants entering the kinetic-energy operator.
///
/// Both values must be positive. The core is unit-agnostic: callers choose a
/// unit system (natural, SI, ...) and interpret the output energies in it; no
/// conversion happens internally.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Reduced Planck constant.
    pub h_bar: f64,
    /// Particle mass.
    pub m: f64,
}

impl PhysicalConstants {
    /// Natural (dimensionless) units: `h_bar = m = 1`.
    pub fn natural() -> Self { Self { h_bar: 1.0, m: 1.0 } }
}

impl Default for PhysicalConstants {
    fn default() -> Self { Self::natural() }
}

/// Builds the Hamiltonian matrix for a grid and a set of constants.
///
/// The second derivative is approximated with the centered three-point
/// stencil, so with `c = h_bar² / (2 m dx²)` the kinetic term contributes
/// `2c` on the diagonal and `-c` on the nearest-neighbor off-diagonals, with
/// no coupling beyond the first and last nodes (implied Dirichlet
/// boundaries). The potential is added on the diagonal. The result is exactly
/// symmetric by construction.
#[derive(Copy, Clone, Debug)]
pub struct HamiltonianBuilder<'a> {
    grid: &'a Grid,
    constants: PhysicalConstants,
}

impl<'a> HamiltonianBuilder<'a> {
    /// Create a new `HamiltonianBuilder`.
    pub fn new(grid: &'a Grid, constants: PhysicalConstants) -> Self {
        Self { grid, constants }
    }

    /// Assemble `H = T + V` for a potential sampled on the grid.
    ///
    /// The matrix dimension follows `v`, which must be aligned
    /// index-for-index with the grid.
    pub fn build<S>(&self, v: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<nd::Array2<f64>, DegenerateGridError>
    where S: nd::Data<Elem = f64>
    {
        let dx = self.grid.dx();
        if dx <= 0.0 || !dx.is_finite() {
            return Err(DegenerateGridError(dx));
        }
        let n = v.len();
        let c = self.constants.h_bar.powi(2)
            / (2.0 * self.constants.m * dx.powi(2));
        let mut h: nd::Array2<f64> = nd::Array2::from_diag_elem(n, 2.0 * c);
        h.slice_mut(nd::s![1..n, 0..n - 1]).diag_mut().fill(-c);
        h.slice_mut(nd::s![0..n - 1, 1..n]).diag_mut().fill(-c);
        let mut h_diag = h.diag_mut();
        h_diag += v;
        Ok(h)
    }
}
