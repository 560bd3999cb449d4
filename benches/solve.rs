use criterion::{criterion_group, criterion_main, Criterion};
use sudoku_enumerate::Sudoku;

// puzzle with exactly one solution
const UNIQUE_LINE: &str =
    "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...";

// nine clues, leaving a huge solution space
const SPARSE_LINE: &str =
    "123456789........................................................................";

fn solve_one_unique(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_line(UNIQUE_LINE).unwrap();
    c.bench_function("solve_one_unique", |b| b.iter(|| sudoku.solve_one()));
}

fn exhaust_unique(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_line(UNIQUE_LINE).unwrap();
    c.bench_function("exhaust_unique", |b| b.iter(|| sudoku.solutions().count()));
}

fn enumerate_100_of_sparse(c: &mut Criterion) {
    let sudoku = Sudoku::from_str_line(SPARSE_LINE).unwrap();
    c.bench_function("enumerate_100_of_sparse", |b| {
        b.iter(|| sudoku.count_at_most(100))
    });
}

criterion_group!(
    benches,
    solve_one_unique,
    exhaust_unique,
    enumerate_100_of_sparse
);
criterion_main!(benches);
