//! The Letter Boxed board.
//!
//! A puzzle is an ordered list of sides, each holding the same number of
//! distinct letters. Consecutive letters of a word may never come from the
//! same side, so the only thing the rest of the crate needs from the board
//! is the adjacency relation: for each letter, every puzzle letter that lives
//! on a different side.

use std::collections::{BTreeSet, HashMap};

/// Reasons a board definition cannot be turned into a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    #[error("cannot use an empty puzzle")]
    Empty,

    #[error("sides must be at least of length 2, found a side of length {size}")]
    SideTooSmall { size: usize },

    #[error("all sides must be of equal length: side {side} has {found} letters, expected {expected}")]
    UnequalSides {
        side: usize,
        expected: usize,
        found: usize,
    },

    #[error("letter '{letter}' appears on more than one side")]
    DuplicateLetter { letter: char },
}

/// A validated board together with its letter adjacency relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBoxedPuzzle {
    sides: Vec<BTreeSet<char>>,
    letters: BTreeSet<char>,
    adjacency: HashMap<char, BTreeSet<char>>,
}

impl LetterBoxedPuzzle {
    /// Build a puzzle from its sides.
    ///
    /// Letters repeated within one side collapse, since a side is a set.
    /// Fails if there are no sides, if the first side holds fewer than two
    /// letters, if the sides differ in size, or if a letter sits on two sides.
    pub fn new<I, S>(sides: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = char>,
    {
        let sides: Vec<BTreeSet<char>> = sides
            .into_iter()
            .map(|side| side.into_iter().collect())
            .collect();

        let side_size = sides.first().ok_or(PuzzleError::Empty)?.len();
        if side_size < 2 {
            return Err(PuzzleError::SideTooSmall { size: side_size });
        }
        if let Some((index, side)) = sides
            .iter()
            .enumerate()
            .find(|(_, side)| side.len() != side_size)
        {
            return Err(PuzzleError::UnequalSides {
                side: index,
                expected: side_size,
                found: side.len(),
            });
        }

        let mut letters = BTreeSet::new();
        for &letter in sides.iter().flatten() {
            if !letters.insert(letter) {
                return Err(PuzzleError::DuplicateLetter { letter });
            }
        }

        let mut adjacency = HashMap::with_capacity(letters.len());
        for side in &sides {
            let reachable: BTreeSet<char> = letters.difference(side).copied().collect();
            for &letter in side {
                adjacency.insert(letter, reachable.clone());
            }
        }

        Ok(Self {
            sides,
            letters,
            adjacency,
        })
    }

    /// Build a puzzle from one string per side, e.g. `["yts", "bna", "cor", "eif"]`.
    pub fn from_strs<S: AsRef<str>>(sides: &[S]) -> Result<Self, PuzzleError> {
        Self::new(sides.iter().map(|side| side.as_ref().chars()))
    }

    pub fn sides(&self) -> &[BTreeSet<char>] {
        &self.sides
    }

    /// Every distinct letter on the board.
    pub fn letters(&self) -> &BTreeSet<char> {
        &self.letters
    }

    pub fn contains(&self, letter: char) -> bool {
        self.adjacency.contains_key(&letter)
    }

    /// Letters that may legally follow `letter`, or `None` if it is not on the board.
    pub fn adjacency(&self, letter: char) -> Option<&BTreeSet<char>> {
        self.adjacency.get(&letter)
    }
}

impl std::fmt::Display for LetterBoxedPuzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sides: Vec<String> = self
            .sides
            .iter()
            .map(|side| side.iter().collect())
            .collect();
        write!(f, "{}", sides.join("/"))
    }
}
