use grid_backtracking::{Topology, TrailGrid};

// In this example a king path is found on a 5x5 grid from corner to corner:
//  _____
// |S    |
// |     |
// |     |
// |     |
// |    E|
//  _____
// S marks the start
// E marks the end
// The solved grid is printed with each cell holding its step number.
fn main() {
    let mut grid = TrailGrid::new(5, 5).unwrap();
    if grid.solve(1, 1, 5, 5, Topology::King).unwrap() {
        println!("A path has been found:");
        print!("{grid}");
        println!("failed branches: {}", grid.failed_branches());
    }
}
