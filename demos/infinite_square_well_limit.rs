use std::f64::consts::PI;
use qmsolver::{ Grid, PhysicalConstants, Solver, units };
use qmsolver::potential::FiniteSquareWell;

// push the well depth toward the infinite-square-well limit and compare the
// levels above the well floor against the hard-wall box spectrum

fn main() {
    let well_depth = 1e12 * units::e; // 10¹² eV in J
    let well_width = 1e-9; // 1 nm in m

    let grid = Grid::new(10_000, -3e-9, 3e-9).unwrap();
    let well = FiniteSquareWell::new(&grid, well_depth, well_width).unwrap();
    let constants = PhysicalConstants { h_bar: units::hbar, m: units::me };
    let mut solver = Solver::new(grid, constants, Box::new(well), 5);
    solver.solve().unwrap();

    println!("Energies in electron volts:");
    for (n, energy) in solver.results().unwrap().energies().iter().enumerate()
    {
        let box_level = ((n + 1) as f64).powi(2)
            * units::hbar.powi(2) * PI.powi(2)
            / (2.0 * units::me * well_width.powi(2))
            / units::e;
        let above_floor = (energy + well_depth) / units::e;
        let err = 100.0 * (above_floor - box_level).abs() / box_level;
        println!(
            "E({}) = {:.8} eV | E_ISW({}): {:.8} eV | Error: {:.8} %",
            n, above_floor, n, box_level, err,
        );
    }
}
