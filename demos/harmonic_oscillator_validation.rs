use qmsolver::{ Grid, PhysicalConstants, Solver, units };
use qmsolver::potential::HarmonicOscillator;

// solve for an electron in a harmonic trap in SI units and compare against
// the analytic spectrum E_n = ħω(n + 1/2)

fn main() {
    const OMEGA: f64 = 1e14; // trap angular frequency; s⁻¹

    let grid = Grid::new(10_000, -10e-9, 10e-9).unwrap();
    let ho = HarmonicOscillator::new(
        &grid, units::me * OMEGA.powi(2), 1.0).unwrap();
    let constants = PhysicalConstants { h_bar: units::hbar, m: units::me };
    let mut solver = Solver::new(grid, constants, Box::new(ho), 5);
    solver.solve().unwrap();

    println!("Energies in electron volts:");
    let mut total_err: f64 = 0.0;
    let energies = solver.results().unwrap().energies();
    for (n, energy) in energies.iter().enumerate() {
        let computed = energy / units::e;
        let analytic = units::hbar * OMEGA * (n as f64 + 0.5) / units::e;
        let err = 100.0 * (computed - analytic).abs() / analytic;
        total_err += err;
        println!(
            "E({}) = {:.8} eV | E_HO({}): {:.8} eV | Error: {:.8} %",
            n, computed, n, analytic, err,
        );
    }
    println!();
    println!("Average error: {:.8} %", total_err / energies.len() as f64);
}
