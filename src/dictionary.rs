//! Word list and membership oracle.
//!
//! The checker only ever asks two things of a dictionary: whether a word is
//! known, and (for the candidate filter) the full list of words in order.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("cannot access dictionary file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An ordered, de-duplicated word list with O(1) membership checks.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary, trimming entries and dropping blanks and repeats.
    /// The first occurrence of each word fixes its position.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            let word = word.as_ref().trim();
            if !word.is_empty() && dictionary.index.insert(word.to_string()) {
                dictionary.words.push(word.to_string());
            }
        }
        dictionary
    }

    /// One word per line.
    pub fn parse_from_str(contents: &str) -> Self {
        Self::new(contents.lines())
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse_from_str(&contents))
    }

    /// Reduce a raw word source to playable words: at least two characters,
    /// all of them lowercase letters. Hyphenated words, abbreviations,
    /// proper nouns and anything carrying digits or punctuation are dropped.
    /// The result is sorted.
    pub fn sanitize(raw: &str) -> Self {
        let mut words: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|word| word.chars().count() >= 2)
            .filter(|word| word.chars().all(|c| c.is_alphabetic() && c.is_lowercase()))
            .collect();
        words.sort_unstable();
        words.dedup();
        Self::new(words)
    }

    pub fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), DictionaryError> {
        let path = path.as_ref();
        let mut contents = self.words.join("\n");
        contents.push('\n');
        fs::write(path, contents).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn is_valid_word(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
