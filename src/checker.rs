//! Stateful validation of words and word chains against a puzzle.
//!
//! A [`SolutionChecker`] tracks which puzzle letters are still uncovered.
//! Every successful [`SolutionChecker::check_word`] shrinks that set, which
//! is what lets [`SolutionChecker::check_solution`] decide completeness after
//! a chain. The state is owned: parallel work constructs one checker per task.

use std::collections::BTreeSet;

use crate::dictionary::Dictionary;
use crate::puzzle::LetterBoxedPuzzle;
use crate::result::{CheckedWordResult, PuzzleSolutionResult, WordRejection};

#[derive(Debug, Clone)]
pub struct SolutionChecker<'a> {
    puzzle: &'a LetterBoxedPuzzle,
    dictionary: &'a Dictionary,
    remaining_letters: BTreeSet<char>,
}

impl<'a> SolutionChecker<'a> {
    pub fn new(puzzle: &'a LetterBoxedPuzzle, dictionary: &'a Dictionary) -> Self {
        Self {
            puzzle,
            dictionary,
            remaining_letters: puzzle.letters().clone(),
        }
    }

    /// Uncover every letter again, as if freshly constructed.
    pub fn reset(&mut self) {
        self.remaining_letters = self.puzzle.letters().clone();
    }

    pub fn remaining_letters(&self) -> &BTreeSet<char> {
        &self.remaining_letters
    }

    /// Check a single word, optionally requiring it to start with
    /// `initial_letter` (the last letter of the previous word in a chain).
    ///
    /// Letters the word reaches are marked covered even when a later letter
    /// turns out to be unreachable; call [`reset`](Self::reset) between
    /// unrelated checks.
    pub fn check_word(&mut self, word: &str, initial_letter: Option<char>) -> CheckedWordResult {
        match self.walk(word, initial_letter) {
            Ok(()) => CheckedWordResult::Valid {
                word: word.to_string(),
                remaining_letters: self.remaining_letters.clone(),
            },
            Err(reason) => CheckedWordResult::Invalid {
                word: word.to_string(),
                reason,
            },
        }
    }

    fn walk(&mut self, word: &str, initial_letter: Option<char>) -> Result<(), WordRejection> {
        let puzzle = self.puzzle;
        let mut letters = word.chars();
        let first = letters.clone().next();
        if first.is_none() || !self.dictionary.is_valid_word(word) {
            return Err(WordRejection::NotInDictionary);
        }

        let mut possible = match initial_letter {
            Some(initial) => {
                let next = puzzle
                    .adjacency(initial)
                    .ok_or(WordRejection::UnknownInitialLetter(initial))?;
                if first != Some(initial) {
                    return Err(WordRejection::InitialLetterMismatch {
                        word: word.to_string(),
                        expected: initial,
                    });
                }
                // the link from the previous word is implicit
                letters.next();
                next
            }
            None => puzzle.letters(),
        };

        for letter in letters {
            possible = match puzzle.adjacency(letter) {
                Some(next) if possible.contains(&letter) => next,
                _ => {
                    return Err(WordRejection::Unreachable {
                        word: word.to_string(),
                        letter,
                    })
                }
            };
            self.remaining_letters.remove(&letter);
        }
        Ok(())
    }

    /// Check a chain of words. Each word after the first must start with the
    /// previous word's last letter. Stops at the first invalid word.
    pub fn check_solution<S: AsRef<str>>(&mut self, words: &[S]) -> PuzzleSolutionResult {
        let words: Vec<String> = words.iter().map(|w| w.as_ref().to_string()).collect();
        let mut initial_letter = None;
        for word in &words {
            match self.check_word(word, initial_letter) {
                CheckedWordResult::Valid { .. } => initial_letter = word.chars().last(),
                CheckedWordResult::Invalid { word, reason } => {
                    return PuzzleSolutionResult::Invalid {
                        words,
                        word,
                        reason,
                    };
                }
            }
        }

        if self.remaining_letters.is_empty() {
            PuzzleSolutionResult::Valid { words }
        } else {
            PuzzleSolutionResult::Incomplete {
                words,
                remaining_letters: self.remaining_letters.clone(),
            }
        }
    }
}
