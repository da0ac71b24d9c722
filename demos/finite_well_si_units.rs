use qmsolver::{ Grid, PhysicalConstants, Solver, units };
use qmsolver::potential::FiniteSquareWell;

// solve a 1 eV deep, 1 nm wide square well for an electron, working fully in
// SI units and converting the output energies to electron volts

fn main() {
    let well_depth = 1.0 * units::e; // 1 eV in J
    let well_width = 1e-9; // 1 nm in m

    let grid = Grid::new(2000, -3e-9, 3e-9).unwrap();
    let well = FiniteSquareWell::new(&grid, well_depth, well_width).unwrap();
    let constants = PhysicalConstants { h_bar: units::hbar, m: units::me };
    let mut solver = Solver::new(grid, constants, Box::new(well), 3);
    solver.solve().unwrap();

    println!("Energies in electron volts:");
    for (n, energy) in solver.results().unwrap().energies().iter().enumerate()
    {
        println!("E({}) = {:.8} eV", n, energy / units::e);
    }
}
