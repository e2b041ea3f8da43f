use grid_backtracking::{Topology, TrailGrid};

// In this example a knight path is found on a 5x5 grid from corner to
// corner. Knight jumps are L-shaped, so the path hops around the board
// rather than walking the diagonal.
fn main() {
    let mut grid = TrailGrid::new(5, 5).unwrap();
    if grid.solve(1, 1, 5, 5, Topology::Knight).unwrap() {
        println!("A path has been found:");
        print!("{grid}");
        for step in grid.marked_path() {
            println!("{step}");
        }
        println!("failed branches: {}", grid.failed_branches());
    }
}
