use std::f64::consts::PI;
use qmsolver::{ Grid, PhysicalConstants, Solver };
use qmsolver::potential::SinusoidalWell;

// solve a composite sinusoidal well/barrier/plateau potential

fn main() {
    let grid = Grid::new(2000, -4.0 * PI, 4.0 * PI).unwrap();
    let well = SinusoidalWell::new(&grid, 5.0).unwrap();
    let mut solver
        = Solver::new(grid, PhysicalConstants::natural(), Box::new(well), 15);
    solver.solve().unwrap();
    print!("{}", solver.results().unwrap().report());
}
