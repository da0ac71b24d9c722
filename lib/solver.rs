//! High-level facade tying the grid, potential supplier, Hamiltonian
//! assembly, eigensolver, and normalization together behind a single
//! [`solve`][Solver::solve] call.

use std::fmt::Write;
use ndarray as nd;
use crate::{
    eigen::{ Dense, EigenSolver },
    error::{ SolverError, SolverResult },
    grid::Grid,
    hamiltonian::{ HamiltonianBuilder, PhysicalConstants },
    normalize::{ fix_sign, wf_renormalize },
    potential::Potential,
};

/// A single solution to the TISE: an energy eigenvalue paired with its
/// normalized wavefunction, aligned index-for-index with the grid.
#[derive(Clone, Debug)]
pub struct Eigenstate {
    /// Energy eigenvalue.
    pub energy: f64,
    /// Wavefunction, normalized to `Σ ψ_k² dx = 1` with its
    /// largest-magnitude component positive.
    pub wavefunction: nd::Array1<f64>,
}

/// The complete output of one [`solve`][Solver::solve] call.
///
/// Holds the `n_lowest` eigenstates ascending by energy, together with the
/// grid coordinates and the raw potential vector so presentation
/// collaborators can plot potential-overlaid wavefunctions without reaching
/// back into the solver.
#[derive(Clone, Debug)]
pub struct ResultSet {
    x: nd::Array1<f64>,
    potential: nd::Array1<f64>,
    states: Vec<Eigenstate>,
}

impl ResultSet {
    /// Get the computed eigenstates, ascending by energy.
    pub fn states(&self) -> &[Eigenstate] { &self.states }

    /// Get the energies alone, ascending.
    pub fn energies(&self) -> Vec<f64> {
        self.states.iter().map(|s| s.energy).collect()
    }

    /// Get the grid coordinates the wavefunctions are sampled on.
    pub fn x(&self) -> &nd::Array1<f64> { &self.x }

    /// Get the potential vector the states were solved in.
    pub fn potential(&self) -> &nd::Array1<f64> { &self.potential }

    /// Get the number of computed eigenstates.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.states.len() }

    /// Render a plain-text energy table, one `E(n)` line per state.
    pub fn report(&self) -> String {
        let mut out = String::new();
        for (n, state) in self.states.iter().enumerate() {
            let _ = writeln!(out, "E({}) = {:.8}", n, state.energy);
        }
        out
    }
}

/// Finite-difference TISE solver.
///
/// Construction fixes all inputs (grid, physical constants, potential
/// supplier, state count); [`solve`][Self::solve] performs the full
/// discretize-decompose-normalize pipeline and caches the [`ResultSet`].
/// Mutating any input through a setter drops the cached results, so stale
/// results can never be observed: accessors fail with
/// [`SolverError::NotSolved`] until the next `solve`.
pub struct Solver {
    grid: Grid,
    constants: PhysicalConstants,
    potential: Box<dyn Potential>,
    n_lowest: usize,
    eigensolver: Box<dyn EigenSolver>,
    results: Option<ResultSet>,
}

impl Solver {
    /// Create a new `Solver` over a grid with a potential supplier and a
    /// requested number of lowest-energy states.
    pub fn new(
        grid: Grid,
        constants: PhysicalConstants,
        potential: Box<dyn Potential>,
        n_lowest: usize,
    ) -> Self
    {
        Self {
            grid,
            constants,
            potential,
            n_lowest,
            eigensolver: Box::new(Dense),
            results: None,
        }
    }

    /// Get a reference to the grid.
    pub fn grid(&self) -> &Grid { &self.grid }

    /// Get the physical constants.
    pub fn constants(&self) -> PhysicalConstants { self.constants }

    /// Get the requested number of states.
    pub fn n_lowest(&self) -> usize { self.n_lowest }

    /// Replace the physical constants, invalidating any cached results.
    pub fn set_constants(&mut self, constants: PhysicalConstants) {
        self.constants = constants;
        self.results = None;
    }

    /// Replace the potential supplier, invalidating any cached results.
    pub fn set_potential(&mut self, potential: Box<dyn Potential>) {
        self.potential = potential;
        self.results = None;
    }

    /// Change the requested number of states, invalidating any cached
    /// results.
    pub fn set_n_lowest(&mut self, n_lowest: usize) {
        self.n_lowest = n_lowest;
        self.results = None;
    }

    /// Replace the eigensolver backend, invalidating any cached results.
    pub fn set_eigensolver(&mut self, eigensolver: Box<dyn EigenSolver>) {
        self.eigensolver = eigensolver;
        self.results = None;
    }

    /// Solve for the `n_lowest` eigenstates.
    ///
    /// The potential vector and Hamiltonian are rebuilt from scratch on every
    /// call and discarded once the eigenpairs are extracted; repeated calls
    /// with unchanged inputs reproduce the same results up to floating-point
    /// determinism.
    pub fn solve(&mut self) -> SolverResult<&ResultSet> {
        let v: nd::Array1<f64> = self.potential.generate();
        let h = HamiltonianBuilder::new(&self.grid, self.constants)
            .build(&v)?;
        let pairs = self.eigensolver.lowest(h, self.n_lowest)?;
        let dx = self.grid.dx();
        let states: Vec<Eigenstate>
            = pairs.into_iter()
            .map(|(energy, mut wf)| {
                wf_renormalize(&mut wf, dx);
                fix_sign(&mut wf);
                Eigenstate { energy, wavefunction: wf }
            })
            .collect();
        Ok(self.results.insert(ResultSet {
            x: self.grid.x().clone(),
            potential: v,
            states,
        }))
    }

    /// Get the results of the most recent [`solve`][Self::solve].
    ///
    /// Fails with [`SolverError::NotSolved`] before the first successful
    /// solve or after any setter has invalidated the cache.
    pub fn results(&self) -> SolverResult<&ResultSet> {
        self.results.as_ref().ok_or(SolverError::NotSolved)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use crate::{ normalize::wf_norm, potential::FiniteSquareWell };
    use super::*;

    fn well_solver(steps: usize, n_lowest: usize) -> Solver {
        let grid = Grid::new(steps, -5.0, 5.0).unwrap();
        let well = FiniteSquareWell::new(&grid, 25.0, 2.0).unwrap();
        Solver::new(
            grid, PhysicalConstants::natural(), Box::new(well), n_lowest)
    }

    #[test]
    fn results_before_solve_fails() {
        let solver = well_solver(200, 3);
        assert!(matches!(solver.results(), Err(SolverError::NotSolved)));
    }

    #[test]
    fn solve_populates_ascending_normalized_states() {
        let mut solver = well_solver(400, 5);
        let dx = solver.grid().dx();
        let results = solver.solve().unwrap();
        assert_eq!(results.len(), 5);
        let e = results.energies();
        assert!(e.windows(2).all(|w| w[0] <= w[1]));
        for state in results.states() {
            assert_abs_diff_eq!(
                wf_norm(&state.wavefunction, dx), 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn solve_is_idempotent() {
        let mut solver = well_solver(300, 4);
        let first = solver.solve().unwrap().clone();
        let second = solver.solve().unwrap().clone();
        for (a, b) in first.states().iter().zip(second.states()) {
            assert_abs_diff_eq!(a.energy, b.energy, epsilon = 1e-10);
            for (qa, qb) in a.wavefunction.iter().zip(&b.wavefunction) {
                assert_abs_diff_eq!(qa, qb, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn setters_invalidate_cached_results() {
        let mut solver = well_solver(200, 3);
        solver.solve().unwrap();
        assert!(solver.results().is_ok());
        solver.set_n_lowest(4);
        assert!(matches!(solver.results(), Err(SolverError::NotSolved)));
        solver.solve().unwrap();
        assert_eq!(solver.results().unwrap().len(), 4);
        solver.set_constants(PhysicalConstants { h_bar: 1.0, m: 2.0 });
        assert!(solver.results().is_err());
    }

    #[test]
    fn oversized_request_is_unsolvable() {
        let mut solver = well_solver(50, 51);
        assert!(matches!(
            solver.solve(),
            Err(SolverError::Unsolvable(_)),
        ));
    }

    #[test]
    fn result_set_carries_grid_and_potential() {
        let mut solver = well_solver(200, 2);
        let results = solver.solve().unwrap();
        assert_eq!(results.x().len(), 200);
        assert_eq!(results.potential().len(), 200);
        assert_abs_diff_eq!(results.potential()[100], -25.0);
    }

    #[test]
    fn report_lists_one_line_per_state() {
        let mut solver = well_solver(200, 3);
        solver.solve().unwrap();
        let report = solver.results().unwrap().report();
        assert_eq!(report.lines().count(), 3);
        assert!(report.starts_with("E(0) = "));
    }
}
