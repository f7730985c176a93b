#[macro_use]
extern crate criterion;
extern crate sudoku_solver;
use criterion::Criterion;
use sudoku_solver::Sudoku;

static EASY_SUDOKUS: &[&str] = &[
    "...2...633....54.1..1..398........9....538....3........263..5..5.37....847...1...",
    "..3.2.6..9..3.5..1..18.64....81.29..7.......8..67.82....26.95..8..2.3..9..5.1.3..",
    "200080300060070084030500209000105408000000000402706000301007040720040060004010003",
];

static HARD_SUDOKUS: &[&str] = &[
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......",
];

fn read_sudokus(sudokus: &[&str]) -> Vec<Sudoku> {
    sudokus
        .iter()
        .map(|line| Sudoku::from_str_line(line).unwrap_or_else(|err| panic!("{:?}", err)))
        .collect()
}

fn _1_easy_sudokus_solve_one(c: &mut Criterion) {
    let sudokus = read_sudokus(EASY_SUDOKUS);
    let mut iter = sudokus.iter().cycle().cloned();
    c.bench_function("_1_easy_sudokus_solve_one", |b| {
        b.iter(|| iter.next().unwrap().solve_one())
    });
}

fn _2_hard_sudokus_solve_one(c: &mut Criterion) {
    let sudokus = read_sudokus(HARD_SUDOKUS);
    let mut iter = sudokus.iter().cycle().cloned();
    c.bench_function("_2_hard_sudokus_solve_one", |b| {
        b.iter(|| iter.next().unwrap().solve_one())
    });
}

fn _3_is_valid(c: &mut Criterion) {
    let sudokus = read_sudokus(EASY_SUDOKUS);
    let mut iter = sudokus.iter().cycle();
    c.bench_function("_3_is_valid", |b| b.iter(|| iter.next().unwrap().is_valid()));
}

criterion_group!(
    benches,
    _1_easy_sudokus_solve_one,
    _2_hard_sudokus_solve_one,
    _3_is_valid
);
criterion_main!(benches);
