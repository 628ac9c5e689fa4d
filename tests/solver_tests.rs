use std::collections::BTreeSet;

use letter_boxed::result::character_overlap;
use letter_boxed::{
    load_dictionary, Dictionary, LetterBoxedPuzzle, LetterBoxedSolver, PuzzleSolutionResult,
    SolutionChecker, SolverConfig, SolverError,
};

fn nyt_puzzle() -> LetterBoxedPuzzle {
    LetterBoxedPuzzle::from_strs(&["yts", "bna", "cor", "eif"]).unwrap()
}

fn words(solution: &PuzzleSolutionResult) -> Vec<&str> {
    solution.words().iter().map(String::as_str).collect()
}

fn config(workers: usize, stop_early: bool) -> SolverConfig {
    SolverConfig {
        workers,
        stop_early,
    }
}

#[test]
fn test_default_config() {
    let config = SolverConfig::default();
    assert_eq!(config.workers, 16);
    assert!(config.stop_early);
    assert_eq!(config.window_size(), 48);
}

#[test]
fn test_zero_workers_rejected() {
    let puzzle = nyt_puzzle();
    let dictionary = Dictionary::new(["sofa"]);
    let result = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(0, true));
    assert!(matches!(result, Err(SolverError::InvalidWorkerCount)));
}

#[test]
fn test_find_possible_words() {
    let puzzle = nyt_puzzle();
    let dictionary = Dictionary::new(["sofa", "tab", "cybernetics", "zebra", "oat", "fact"]);
    let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(4, true)).unwrap();

    let candidates = solver.find_possible_words();
    let order: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
    assert_eq!(order, vec!["cybernetics", "fact", "sofa", "oat"]);

    let cybernetics = &candidates[0];
    assert_eq!(cybernetics.remaining_letters, BTreeSet::from(['a', 'f', 'o']));
    for pair in candidates.windows(2) {
        assert!(pair[0].remaining_letters.len() <= pair[1].remaining_letters.len());
    }
}

#[test]
fn test_find_possible_words_with_more_workers_than_words() {
    let puzzle = nyt_puzzle();
    let dictionary = Dictionary::new(["sofa", "oat"]);
    let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(16, true)).unwrap();
    assert_eq!(solver.find_possible_words().len(), 2);
}

#[test]
fn test_empty_dictionary() {
    let puzzle = nyt_puzzle();
    let dictionary = Dictionary::default();
    let solver = LetterBoxedSolver::new(&puzzle, &dictionary).unwrap();

    let report = solver.search();
    assert!(report.solutions.is_empty());
    assert!(report.best_partial.is_none());
    assert_eq!(report.candidate_count, 0);
    assert_eq!(report.windows_searched, 0);
}

#[test]
fn test_no_playable_words() {
    let puzzle = nyt_puzzle();
    let dictionary = Dictionary::new(["tab", "zebra", "quiz"]);
    let solver = LetterBoxedSolver::new(&puzzle, &dictionary).unwrap();
    assert!(solver.find_top_solutions().is_empty());
}

#[test]
fn test_two_word_solution() {
    let puzzle = nyt_puzzle();
    let dictionary = Dictionary::new(["cybernetics", "sofa", "fact", "tab", "oat"]);
    let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(2, true)).unwrap();

    let solutions = solver.find_top_solutions();
    assert_eq!(solutions.len(), 1);
    assert_eq!(words(&solutions[0]), vec!["cybernetics", "sofa"]);
    assert!(solutions[0].is_valid());
}

#[test]
fn test_solutions_revalidate_with_fresh_checker() {
    let puzzle = nyt_puzzle();
    let dictionary = load_dictionary();
    let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(4, false)).unwrap();

    let solutions = solver.find_top_solutions();
    assert!(!solutions.is_empty());
    for solution in &solutions {
        let mut checker = SolutionChecker::new(&puzzle, &dictionary);
        assert_eq!(&checker.check_solution(solution.words()), solution);
    }
}

#[test]
fn test_later_window_is_searched() {
    // With one worker the window holds three candidates. The three fillers
    // cover all but 'o' and 'f', sort first, and end in a letter no word
    // starts with, so the only solution is found in the second window.
    let puzzle = nyt_puzzle();
    let dictionary = Dictionary::new([
        "becatinesry",
        "bicatenesry",
        "necatibesry",
        "cybernetics",
        "sofa",
        "oat",
        "ate",
        "bet",
    ]);

    let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(1, true)).unwrap();
    let report = solver.search();
    assert_eq!(report.candidate_count, 8);
    assert_eq!(report.windows_searched, 2);
    assert_eq!(report.solutions.len(), 1);
    assert_eq!(words(&report.solutions[0]), vec!["cybernetics", "sofa"]);

    let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(1, false)).unwrap();
    let report = solver.search();
    assert_eq!(report.windows_searched, 3);
    assert_eq!(report.solutions.len(), 1);
}

#[test]
fn test_stop_early_keeps_whole_window() {
    let puzzle = LetterBoxedPuzzle::from_strs(&["ab", "cd"]).unwrap();
    let dictionary = Dictionary::new(["acbd", "ad", "dacb", "bc", "cadb", "db", "bdac", "ca"]);

    let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(1, true)).unwrap();
    let report = solver.search();
    assert_eq!(report.windows_searched, 1);
    let found: Vec<Vec<&str>> = report.solutions.iter().map(words).collect();
    assert_eq!(found, vec![vec!["acbd"], vec!["bdac"], vec!["cadb"]]);
}

#[test]
fn test_ranking() {
    let puzzle = LetterBoxedPuzzle::from_strs(&["ab", "cd"]).unwrap();
    let dictionary = Dictionary::new(["acbd", "ad", "dacb", "bc", "cadb", "db", "bdac", "ca"]);
    let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(1, false)).unwrap();

    let report = solver.search();
    assert_eq!(report.windows_searched, 3);
    let found: Vec<Vec<&str>> = report.solutions.iter().map(words).collect();
    assert_eq!(
        found,
        vec![
            vec!["acbd"],
            vec!["bdac"],
            vec!["cadb"],
            vec!["dacb"],
            vec!["ad", "dacb"],
            vec!["bc", "cadb"],
            vec!["ca", "acbd"],
            vec!["db", "bdac"],
        ]
    );
    for pair in report.solutions.windows(2) {
        assert!(character_overlap(pair[0].words()) <= character_overlap(pair[1].words()));
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let puzzle = nyt_puzzle();
    let dictionary = load_dictionary();

    let first = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(8, false))
        .unwrap()
        .find_top_solutions();
    let second = LetterBoxedSolver::with_config(&puzzle, &dictionary, config(3, false))
        .unwrap()
        .find_top_solutions();
    assert_eq!(first, second);
}

#[test]
fn test_best_partial_when_no_solution() {
    let puzzle = LetterBoxedPuzzle::from_strs(&["ab", "cd"]).unwrap();
    let dictionary = Dictionary::new(["ad", "db"]);
    let solver = LetterBoxedSolver::new(&puzzle, &dictionary).unwrap();

    let report = solver.search();
    assert!(report.solutions.is_empty());
    assert_eq!(
        report.best_partial,
        Some(PuzzleSolutionResult::Incomplete {
            words: vec!["ad".to_string(), "db".to_string()],
            remaining_letters: ['c'].into_iter().collect(),
        })
    );
}

#[test]
fn test_reference_puzzles() {
    let dictionary = load_dictionary();
    let cases = [
        (["yts", "bna", "cor", "eif"], ["cybernetics", "sofa"]),
        (["tam", "urd", "qbi", "one"], ["quotidian", "number"]),
        (["ilp", "urn", "soa", "htd"], ["outlandish", "harp"]),
    ];

    for (sides, expected) in cases {
        let puzzle = LetterBoxedPuzzle::from_strs(&sides).unwrap();
        let solver = LetterBoxedSolver::new(&puzzle, &dictionary).unwrap();
        let solutions = solver.find_top_solutions();
        assert!(!solutions.is_empty(), "no solution for {}", puzzle);
        assert_eq!(words(&solutions[0]), expected.to_vec());
    }
}
