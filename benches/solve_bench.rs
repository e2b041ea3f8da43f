use criterion::{criterion_group, criterion_main, Criterion};
use grid_backtracking::{Topology, TrailGrid};
use std::hint::black_box;

fn solve_bench(c: &mut Criterion) {
    let cases = [
        ("king 16x16", 16, Topology::King),
        ("knight 6x6", 6, Topology::Knight),
    ];
    for (name, n, topology) in cases {
        c.bench_function(name, |b| {
            b.iter(|| {
                let mut grid = TrailGrid::new(n, n).unwrap();
                black_box(grid.solve(1, 1, n, n, topology).unwrap())
            })
        });
    }
}

criterion_group!(benches, solve_bench);
criterion_main!(benches);
