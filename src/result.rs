//! Outcomes of checking single words and whole word chains.
//!
//! Invalid input is never an error path here: each outcome is a variant the
//! caller matches on, carrying the words involved and, for failures, a typed
//! reason whose `Display` is the human-readable explanation.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Why a single word cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum WordRejection {
    #[error("the given word is not in the dictionary")]
    NotInDictionary,

    #[error("first letter '{0}' not possible")]
    UnknownInitialLetter(char),

    #[error("first letter of '{word}' must match initial letter {expected}")]
    InitialLetterMismatch { word: String, expected: char },

    #[error("cannot form word '{word}' given current puzzle: '{letter}' is not reachable")]
    Unreachable { word: String, letter: char },
}

/// The result of checking one word against a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CheckedWordResult {
    /// The word is playable. `remaining_letters` is the checker's uncovered
    /// set right after this word.
    Valid {
        word: String,
        remaining_letters: BTreeSet<char>,
    },
    Invalid {
        word: String,
        reason: WordRejection,
    },
}

impl CheckedWordResult {
    pub fn word(&self) -> &str {
        match self {
            CheckedWordResult::Valid { word, .. } | CheckedWordResult::Invalid { word, .. } => word,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, CheckedWordResult::Valid { .. })
    }
}

impl fmt::Display for CheckedWordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckedWordResult::Valid {
                word,
                remaining_letters,
            } => write!(
                f,
                "\"{}\" ✅ valid word; remaining letters= {:?}",
                word, remaining_letters
            ),
            CheckedWordResult::Invalid { word, reason } => {
                write!(f, "\"{}\" ❌ invalid word: {}", word, reason)
            }
        }
    }
}

/// The result of checking a chain of words against a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PuzzleSolutionResult {
    /// Every word is playable, the chain links up, and every letter is covered.
    Valid { words: Vec<String> },
    /// The chain is well formed but leaves `remaining_letters` uncovered.
    Incomplete {
        words: Vec<String>,
        remaining_letters: BTreeSet<char>,
    },
    /// The chain breaks at `word`.
    Invalid {
        words: Vec<String>,
        word: String,
        reason: WordRejection,
    },
}

impl PuzzleSolutionResult {
    pub fn words(&self) -> &[String] {
        match self {
            PuzzleSolutionResult::Valid { words }
            | PuzzleSolutionResult::Incomplete { words, .. }
            | PuzzleSolutionResult::Invalid { words, .. } => words,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, PuzzleSolutionResult::Valid { .. })
    }

    /// Number of letters left uncovered, if the chain itself is well formed.
    pub fn remaining_count(&self) -> Option<usize> {
        match self {
            PuzzleSolutionResult::Valid { .. } => Some(0),
            PuzzleSolutionResult::Incomplete {
                remaining_letters, ..
            } => Some(remaining_letters.len()),
            PuzzleSolutionResult::Invalid { .. } => None,
        }
    }

    /// Ranking order for solutions: lower character overlap first, then
    /// fewer total characters, then word order so the ranking is total.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        compare_solutions(self.words(), other.words())
    }
}

impl fmt::Display for PuzzleSolutionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PuzzleSolutionResult::Valid { words } => write!(
                f,
                "{:?} ✅ valid solution in {} words",
                words,
                words.len()
            ),
            PuzzleSolutionResult::Incomplete {
                words,
                remaining_letters,
            } => write!(
                f,
                "{:?} ❌ incomplete solution; remaining letters= {:?}",
                words, remaining_letters
            ),
            PuzzleSolutionResult::Invalid { words, reason, .. } => {
                write!(f, "{:?} ❌ invalid solution, {}", words, reason)
            }
        }
    }
}

/// Total characters across all words, repeats included.
pub fn character_count<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| w.as_ref().chars().count()).sum()
}

/// Total characters across all words minus the number of distinct characters.
pub fn character_overlap<S: AsRef<str>>(words: &[S]) -> usize {
    let distinct: HashSet<char> = words.iter().flat_map(|w| w.as_ref().chars()).collect();
    character_count(words) - distinct.len()
}

pub fn compare_solutions<S: AsRef<str>>(a: &[S], b: &[S]) -> Ordering {
    character_overlap(a)
        .cmp(&character_overlap(b))
        .then_with(|| character_count(a).cmp(&character_count(b)))
        .then_with(|| {
            a.iter()
                .map(AsRef::<str>::as_ref)
                .cmp(b.iter().map(AsRef::<str>::as_ref))
        })
}
