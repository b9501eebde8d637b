use criterion::{criterion_group, criterion_main, Criterion};

use aoc2024::{default_input, Data, ALL_SOLUTIONS};

pub fn criterion_benchmark(c: &mut Criterion) {
    for puzzle in &ALL_SOLUTIONS {
        // Real inputs are not checked in; skip days without one.
        let Ok(input) = default_input(puzzle.day) else {
            continue;
        };
        c.bench_function(&format!("day{}", puzzle.day), |b| {
            b.iter(|| (puzzle.solve)(&input, Data::Actual))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
