//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! Every failure here indicates a configuration mistake on the caller's side:
//! solving is deterministic given valid inputs, so nothing is retried or
//! recovered internally.
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when grid construction arguments do not describe a valid spatial
/// domain.
#[derive(Debug, Error)]
#[error("grids require steps >= 2 and x_min < x_max; got steps = {steps}, bounds = [{x_min}, {x_max}]")]
pub struct InvalidDomainError {
    /// Requested number of grid points.
    pub steps: usize,
    /// Requested lower domain bound.
    pub x_min: f64,
    /// Requested upper domain bound.
    pub x_max: f64,
}

/// Returned by potential constructors when a shape-specific parameter lies
/// outside its valid range.
#[derive(Debug, Error)]
#[error("potential parameter `{param}` out of range: {value} ({constraint})")]
pub struct ShapeParameterError {
    /// Name of the offending parameter.
    pub param: &'static str,
    /// Value that was rejected.
    pub value: f64,
    /// Human-readable constraint, e.g. `"must be > 0"`.
    pub constraint: &'static str,
}

impl ShapeParameterError {
    pub(crate) fn check_positive(param: &'static str, value: f64)
        -> Result<(), Self>
    {
        (value > 0.0).then_some(())
            .ok_or(Self { param, value, constraint: "must be > 0" })
    }
}

/// Returned when the grid spacing degenerates to zero or a non-finite value,
/// making the kinetic-energy stencil undefined.
#[derive(Debug, Error)]
#[error("grid spacing must be positive and finite; got dx = {0}")]
pub struct DegenerateGridError(pub f64);

/// Returned when the eigenproblem cannot produce the requested states.
#[derive(Debug, Error)]
pub enum UnsolvableSystemError {
    /// Requested state count is zero or exceeds the matrix dimension.
    #[error("requested {requested} lowest eigenstates; expected between 1 and {dim}")]
    BadStateCount {
        /// Requested number of eigenstates.
        requested: usize,
        /// Dimension of the Hamiltonian.
        dim: usize,
    },

    /// The dense eigendecomposition failed to converge. Non-finite potential
    /// values supplied by a [`Potential`][crate::potential::Potential] surface
    /// here as well.
    #[error("eigendecomposition failed: {0}")]
    Decomposition(#[from] LinalgError),
}

/// Returned from [`Solver`][crate::solver::Solver] operations.
#[derive(Debug, Error)]
pub enum SolverError {
    /// [`InvalidDomainError`]
    #[error("invalid domain: {0}")]
    InvalidDomain(#[from] InvalidDomainError),

    /// [`ShapeParameterError`]
    #[error("invalid potential shape: {0}")]
    ShapeParameter(#[from] ShapeParameterError),

    /// [`DegenerateGridError`]
    #[error("degenerate grid: {0}")]
    DegenerateGrid(#[from] DegenerateGridError),

    /// [`UnsolvableSystemError`]
    #[error("unsolvable system: {0}")]
    Unsolvable(#[from] UnsolvableSystemError),

    /// Returned when results are accessed before the first successful call to
    /// [`solve`][crate::solver::Solver::solve].
    #[error("results accessed before solve()")]
    NotSolved,
}

pub type SolverResult<T> = Result<T, SolverError>;
