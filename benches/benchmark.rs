use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};

use puzzlegen::flow::generator::{BoardGenerator, DEFAULT_TIMEOUT};
use puzzlegen::sudoku::generator::{
    Generator,
    Reducer,
    DEFAULT_TARGET_REMOVALS
};
use puzzlegen::sudoku::solver::{BacktrackingSolver, Solution};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use std::time::Duration;

// Explanation of benchmark classes:
//
// generate filled grid: Filling an empty grid with the randomized
//                       backtracking generator.
// reduce to puzzle: Removing clues from a freshly generated grid while the
//                   solution stays unique. This dominates puzzle generation
//                   since every removal runs the counting solver.
// solve puzzle: Solving a reduced puzzle with the backtracking solver.
// generate flow board: Tiling a 6x6 board with 4 colored paths, including
//                      the rejected attempts.

const MEASUREMENT_TIME_SECS: u64 = 30;
const REDUCE_SAMPLE_SIZE: usize = 20;

fn benchmark_generate_filled_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("sudoku generation");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));

    group.bench_function("generate filled grid", |b| {
        let mut generator = Generator::new(ChaCha8Rng::seed_from_u64(42));
        b.iter(|| generator.generate())
    });
}

fn benchmark_reduce_to_puzzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sudoku reduction");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sample_size(REDUCE_SAMPLE_SIZE);
    group.sampling_mode(SamplingMode::Flat);

    let solution = Generator::new(ChaCha8Rng::seed_from_u64(42)).generate();

    group.bench_function("reduce to puzzle", |b| {
        let mut reducer = Reducer::new(ChaCha8Rng::seed_from_u64(43),
            DEFAULT_TARGET_REMOVALS);
        b.iter(|| reducer.reduce(solution.clone()))
    });
}

fn benchmark_solve_puzzle(c: &mut Criterion) {
    let mut group = c.benchmark_group("sudoku solving");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));

    let solution = Generator::new(ChaCha8Rng::seed_from_u64(42)).generate();
    let puzzle = Reducer::new(ChaCha8Rng::seed_from_u64(43),
        DEFAULT_TARGET_REMOVALS).reduce(solution);

    group.bench_function("solve puzzle", |b| b.iter(|| {
        let computed = BacktrackingSolver.solve(puzzle.puzzle());
        assert!(matches!(computed, Solution::Unique(_)));
    }));
}

fn benchmark_generate_flow_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("flow generation");
    group.measurement_time(Duration::from_secs(MEASUREMENT_TIME_SECS));
    group.sampling_mode(SamplingMode::Flat);

    group.bench_function("generate flow board", |b| {
        let mut generator = BoardGenerator::new(
            ChaCha8Rng::seed_from_u64(42), 6, 6, 4, DEFAULT_TIMEOUT)
            .unwrap();
        b.iter(|| generator.generate().unwrap())
    });
}

criterion_group!(all,
    benchmark_generate_filled_grid,
    benchmark_reduce_to_puzzle,
    benchmark_solve_puzzle,
    benchmark_generate_flow_board
);

criterion_main!(all);
