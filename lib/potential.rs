//! Potential-energy suppliers.
//!
//! Every supplier implements [`Potential`]: sample one potential-energy value
//! per grid point, purely as a function of position. Shape parameters are
//! validated at construction so [`Potential::generate`] itself is infallible.
//! The solver core only ever sees the trait, never a concrete shape.

use std::f64::consts::PI;
use ndarray as nd;
use crate::{ error::ShapeParameterError, grid::Grid };

/// A supplier of potential-energy values on a fixed coordinate grid.
///
/// `generate` must return one finite value per grid point and must not mutate
/// hidden state across calls; non-finite values are not validated here and
/// surface later as eigendecomposition failures.
pub trait Potential {
    /// Sample the potential on the grid the supplier was constructed with.
    fn generate(&self) -> nd::Array1<f64>;
}

/// A finite square well: constant depth `-depth` over a width-`width` window
/// centered on `x = 0`, zero elsewhere.
#[derive(Clone, Debug)]
pub struct FiniteSquareWell {
    grid: Grid,
    depth: f64,
    width: f64,
}

impl FiniteSquareWell {
    /// Create a new `FiniteSquareWell`.
    ///
    /// `depth` is the (positive) magnitude of the attractive well; `width` is
    /// the full spatial extent of the well region. Both must be positive.
    pub fn new(grid: &Grid, depth: f64, width: f64)
        -> Result<Self, ShapeParameterError>
    {
        ShapeParameterError::check_positive("depth", depth)?;
        ShapeParameterError::check_positive("width", width)?;
        Ok(Self { grid: grid.clone(), depth, width })
    }
}

impl Potential for FiniteSquareWell {
    fn generate(&self) -> nd::Array1<f64> {
        let half_width = self.width / 2.0;
        self.grid.x()
            .mapv(|xk| if xk.abs() <= half_width { -self.depth } else { 0.0 })
    }
}

/// A harmonic oscillator `0.5 k x²`, optionally restricted to an interior
/// fraction of the grid.
///
/// Boundary policy: the quadratic form applies over the centered
/// `active_fraction` of the domain extent; outside that window the potential
/// is the constant `ceiling` (zero unless overridden with
/// [`with_ceiling`][Self::with_ceiling]). Restricting the active window with
/// a low ceiling changes which states near the grid edges remain bound, so
/// the window is part of the shape, not a cosmetic mask.
#[derive(Clone, Debug)]
pub struct HarmonicOscillator {
    grid: Grid,
    spring_constant: f64,
    active_fraction: f64,
    ceiling: f64,
}

impl HarmonicOscillator {
    /// Create a new `HarmonicOscillator`.
    ///
    /// `spring_constant` must be positive; `active_fraction` must lie in
    /// `(0, 1]`, with `1` meaning the oscillator covers the entire grid.
    pub fn new(grid: &Grid, spring_constant: f64, active_fraction: f64)
        -> Result<Self, ShapeParameterError>
    {
        ShapeParameterError::check_positive(
            "spring_constant", spring_constant)?;
        if !(active_fraction > 0.0 && active_fraction <= 1.0) {
            return Err(ShapeParameterError {
                param: "active_fraction",
                value: active_fraction,
                constraint: "must lie in (0, 1]",
            });
        }
        Ok(Self {
            grid: grid.clone(),
            spring_constant,
            active_fraction,
            ceiling: 0.0,
        })
    }

    /// Set the constant potential value outside the active window.
    pub fn with_ceiling(mut self, ceiling: f64) -> Self {
        self.ceiling = ceiling;
        self
    }
}

impl Potential for HarmonicOscillator {
    fn generate(&self) -> nd::Array1<f64> {
        let center = (self.grid.x_min() + self.grid.x_max()) / 2.0;
        let half_window
            = self.active_fraction
            * (self.grid.x_max() - self.grid.x_min()) / 2.0;
        let k = self.spring_constant;
        let ceiling = self.ceiling;
        self.grid.x()
            .mapv(|xk| {
                if (xk - center).abs() <= half_window {
                    0.5 * k * xk.powi(2)
                } else {
                    ceiling
                }
            })
    }
}

/// A single region rule for a [`Composite`] potential: a membership predicate
/// paired with the value function applied where it holds.
pub struct Region {
    applies: Box<dyn Fn(f64) -> bool>,
    value: Box<dyn Fn(f64) -> f64>,
}

impl Region {
    /// Create a new `Region` from a membership predicate and a value function.
    pub fn new<P, V>(applies: P, value: V) -> Self
    where
        P: Fn(f64) -> bool + 'static,
        V: Fn(f64) -> f64 + 'static,
    {
        Self { applies: Box::new(applies), value: Box::new(value) }
    }
}

/// A piecewise potential built from an ordered list of [`Region`] rules.
///
/// Rules are evaluated in insertion order and the first matching rule wins;
/// points matching no rule take the `default` value. Grid points sitting
/// exactly on a boundary shared by several regions therefore take the value
/// of the earliest rule rather than an order-dependent combination.
pub struct Composite {
    grid: Grid,
    regions: Vec<Region>,
    default: f64,
}

impl Composite {
    /// Create a new `Composite` with no rules; every point maps to `default`
    /// until rules are added.
    pub fn new(grid: &Grid, default: f64) -> Self {
        Self { grid: grid.clone(), regions: Vec::new(), default }
    }

    /// Append a region rule with lower precedence than all existing rules.
    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }
}

impl Potential for Composite {
    fn generate(&self) -> nd::Array1<f64> {
        self.grid.x()
            .mapv(|xk| {
                self.regions.iter()
                    .find(|reg| (reg.applies)(xk))
                    .map(|reg| (reg.value)(xk))
                    .unwrap_or(self.default)
            })
    }
}

/// A sinusoidal well/barrier/plateau potential:
///
/// ```text
/// V(x) = -A |sin x|   for        |x| ≤ π
///      = +A |sin x|   for    π < |x| ≤ (5/6 + 2) π
///      = A/2          for        |x| > (5/6 + 2) π
/// ```
///
/// Built on [`Composite`], so the region boundaries follow its
/// first-match-wins precedence: `|x| = π` belongs to the well and
/// `|x| = (5/6 + 2) π` to the barrier.
pub struct SinusoidalWell(Composite);

impl SinusoidalWell {
    /// Create a new `SinusoidalWell` with modulation amplitude `amplitude`
    /// (must be positive).
    pub fn new(grid: &Grid, amplitude: f64)
        -> Result<Self, ShapeParameterError>
    {
        ShapeParameterError::check_positive("amplitude", amplitude)?;
        const BARRIER_EDGE: f64 = (5.0 / 6.0 + 2.0) * PI;
        let composite
            = Composite::new(grid, amplitude / 2.0)
            .with_region(Region::new(
                |x| x.abs() <= PI,
                move |x| -amplitude * x.sin().abs(),
            ))
            .with_region(Region::new(
                |x| x.abs() <= BARRIER_EDGE,
                move |x| amplitude * x.sin().abs(),
            ));
        Ok(Self(composite))
    }
}

impl Potential for SinusoidalWell {
    fn generate(&self) -> nd::Array1<f64> { self.0.generate() }
}
