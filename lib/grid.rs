//! Uniform discretization of the spatial domain.

use ndarray as nd;
use crate::error::InvalidDomainError;

/// An ordered set of evenly spaced coordinates over `[x_min, x_max]`,
/// inclusive of both endpoints.
///
/// Immutable once constructed; the spacing `dx = (x_max - x_min) / (steps - 1)`
/// is constant and positive.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    // coordinate array
    x: nd::Array1<f64>,
    // constant grid spacing
    dx: f64,
}

impl Grid {
    /// Create a new `Grid` from "linspace-style" arguments (an array length,
    /// start, and inclusive end).
    pub fn new(steps: usize, x_min: f64, x_max: f64)
        -> Result<Self, InvalidDomainError>
    {
        if steps < 2 || !(x_min < x_max) {
            return Err(InvalidDomainError { steps, x_min, x_max });
        }
        let x: nd::Array1<f64> = nd::Array1::linspace(x_min, x_max, steps);
        let dx = (x_max - x_min) / (steps - 1) as f64;
        Ok(Self { x, dx })
    }

    /// Get a reference to the coordinate array.
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the grid spacing.
    pub fn dx(&self) -> f64 { self.dx }

    /// Get the number of grid points.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }

    /// Get the lower domain bound.
    pub fn x_min(&self) -> f64 { self.x[0] }

    /// Get the upper domain bound.
    pub fn x_max(&self) -> f64 { self.x[self.x.len() - 1] }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use super::*;

    #[test]
    fn endpoints_and_length() {
        let grid = Grid::new(101, -5.0, 5.0).unwrap();
        assert_eq!(grid.len(), 101);
        assert_relative_eq!(grid.x_min(), -5.0);
        assert_relative_eq!(grid.x_max(), 5.0);
        assert_relative_eq!(grid.dx(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn spacing_is_constant() {
        let grid = Grid::new(777, -1.3, 2.7).unwrap();
        let x = grid.x();
        for k in 1..grid.len() {
            assert_relative_eq!(x[k] - x[k - 1], grid.dx(), epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_too_few_steps() {
        assert!(Grid::new(1, 0.0, 1.0).is_err());
        assert!(Grid::new(0, 0.0, 1.0).is_err());
    }

    #[test]
    fn rejects_inverted_or_empty_bounds() {
        assert!(Grid::new(100, 1.0, -1.0).is_err());
        assert!(Grid::new(100, 2.0, 2.0).is_err());
    }

    #[test]
    fn rejects_nan_bounds() {
        assert!(Grid::new(100, f64::NAN, 1.0).is_err());
    }
}
