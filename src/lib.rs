//! # Letter Boxed
//!
//! A multithreaded solver and solution checker for "Letter Boxed" word puzzles.
//!
//! A puzzle has four (or more) sides of letters. Words are spelled by hopping
//! between letters that sit on different sides, each word starts with the last
//! letter of the previous one, and a solution must use every letter at least
//! once. The solver filters a dictionary down to playable words in parallel,
//! then searches one- and two-word chains, best-covering words first.

pub mod checker;
pub mod dictionary;
pub mod log;
pub mod puzzle;
pub mod result;
pub mod solver;

pub use checker::SolutionChecker;
pub use dictionary::{Dictionary, DictionaryError};
pub use puzzle::{LetterBoxedPuzzle, PuzzleError};
pub use result::{CheckedWordResult, PuzzleSolutionResult, WordRejection};
pub use solver::{BoxedWords, LetterBoxedSolver, SearchReport, SolverConfig, SolverError};

/// Load the dictionary from the embedded word list
pub fn load_dictionary() -> Dictionary {
    Dictionary::parse_from_str(include_str!("../dictionary/words.txt"))
}
