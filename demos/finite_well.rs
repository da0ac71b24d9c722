use qmsolver::{ Grid, PhysicalConstants, Solver };
use qmsolver::potential::FiniteSquareWell;

// solve for the lowest states of a finite square well in natural units

fn main() {
    let grid = Grid::new(2000, -5.0, 5.0).unwrap();
    let well = FiniteSquareWell::new(&grid, 25.0, 2.0).unwrap();
    let mut solver
        = Solver::new(grid, PhysicalConstants::natural(), Box::new(well), 7);
    solver.solve().unwrap();
    print!("{}", solver.results().unwrap().report());
}
