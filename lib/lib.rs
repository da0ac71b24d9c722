//! Numerical solution of the one-dimensional, time-independent Schrödinger
//! equation (TISE) for arbitrary potentials sampled on a uniform coordinate
//! grid.
//!
//! The second spatial derivative is discretized with a centered three-point
//! finite-difference stencil, giving a real symmetric (tridiagonal kinetic +
//! diagonal potential) Hamiltonian whose lowest eigenpairs are extracted with
//! a dense Hermitian eigendecomposition. Wavefunctions are returned
//! normalized to unit probability under the Riemann sum `Σ ψ_k² dx = 1` with
//! a fixed sign convention.
//!
//! ```no_run
//! use qmsolver::{ Grid, PhysicalConstants, Solver };
//! use qmsolver::potential::FiniteSquareWell;
//!
//! let grid = Grid::new(2000, -5.0, 5.0).unwrap();
//! let well = FiniteSquareWell::new(&grid, 25.0, 2.0).unwrap();
//! let mut solver
//!     = Solver::new(grid, PhysicalConstants::default(), Box::new(well), 7);
//! solver.solve().unwrap();
//! for (n, state) in solver.results().unwrap().states().iter().enumerate() {
//!     println!("E({}) = {:.6}", n, state.energy);
//! }
//! ```

pub mod error;
pub mod grid;
pub mod potential;
pub mod hamiltonian;
pub mod eigen;
pub mod normalize;
pub mod solver;
pub mod units;

pub use error::SolverError;
pub use grid::Grid;
pub use hamiltonian::PhysicalConstants;
pub use potential::Potential;
pub use solver::{ Eigenstate, ResultSet, Solver };
