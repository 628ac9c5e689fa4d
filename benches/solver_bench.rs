use criterion::{black_box, criterion_group, criterion_main, Criterion};
use letter_boxed::{load_dictionary, LetterBoxedPuzzle, LetterBoxedSolver, SolverConfig};

fn bench_solver(c: &mut Criterion) {
    let dictionary = load_dictionary();
    let puzzle = LetterBoxedPuzzle::from_strs(&["yts", "bna", "cor", "eif"]).unwrap();
    let config = SolverConfig {
        stop_early: false,
        ..SolverConfig::default()
    };
    let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config).unwrap();

    c.bench_function("find_possible_words", |b| {
        b.iter(|| black_box(solver.find_possible_words()))
    });
    c.bench_function("find_top_solutions", |b| {
        b.iter(|| black_box(solver.find_top_solutions()))
    });
}

criterion_group!(benches, bench_solver);
criterion_main!(benches);
