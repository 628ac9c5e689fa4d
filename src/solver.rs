//! Parallel search for Letter Boxed solutions.
//!
//! The search runs in two fork-join phases on a dedicated thread pool:
//!
//! 1. The dictionary is split into one chunk per worker and every chunk is
//!    filtered down to the words playable on the puzzle ([`BoxedWords`]),
//!    each tagged with the letters it leaves uncovered on its own.
//! 2. Candidates are taken in windows of `3 × workers`, best coverage first.
//!    Each candidate in a window becomes one task that tries it alone (if it
//!    covers everything) or chained with every candidate starting with its
//!    last letter. Windows run until the pool is exhausted, or until the first
//!    window that produced a solution when stopping early.
//!
//! Every task owns its own [`SolutionChecker`]; only the puzzle, the
//! dictionary and the candidate list are shared, read-only.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap, HashSet};

use log::{debug, info};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::checker::SolutionChecker;
use crate::dictionary::Dictionary;
use crate::puzzle::LetterBoxedPuzzle;
use crate::result::{CheckedWordResult, PuzzleSolutionResult};

pub const DEFAULT_WORKERS: usize = 16;

/// Candidates examined per window, per worker.
const WINDOW_FACTOR: usize = 3;

/// A word playable on the puzzle and the letters it leaves uncovered alone.
///
/// Ordered by fewest remaining letters, then by word, so the best-covering
/// words are searched first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoxedWords {
    pub word: String,
    pub remaining_letters: BTreeSet<char>,
}

impl Ord for BoxedWords {
    fn cmp(&self, other: &Self) -> Ordering {
        self.remaining_letters
            .len()
            .cmp(&other.remaining_letters.len())
            .then_with(|| self.word.cmp(&other.word))
            .then_with(|| self.remaining_letters.cmp(&other.remaining_letters))
    }
}

impl PartialOrd for BoxedWords {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Threads in the worker pool; also sets the filter chunk count and window size.
    pub workers: usize,
    /// Stop after the first window that produced a complete solution.
    pub stop_early: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            stop_early: true,
        }
    }
}

impl SolverConfig {
    pub fn window_size(&self) -> usize {
        self.workers * WINDOW_FACTOR
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Everything a search run learned.
#[derive(Debug, Clone, Default)]
pub struct SearchReport {
    /// Complete solutions, best first.
    pub solutions: Vec<PuzzleSolutionResult>,
    /// The incomplete chain covering the most letters, if any was seen.
    pub best_partial: Option<PuzzleSolutionResult>,
    pub candidate_count: usize,
    pub windows_searched: usize,
}

/// Finds and ranks solutions for one puzzle against one dictionary.
#[derive(Debug)]
pub struct LetterBoxedSolver<'a> {
    puzzle: &'a LetterBoxedPuzzle,
    dictionary: &'a Dictionary,
    config: SolverConfig,
    pool: ThreadPool,
}

impl<'a> LetterBoxedSolver<'a> {
    pub fn new(puzzle: &'a LetterBoxedPuzzle, dictionary: &'a Dictionary) -> Result<Self, SolverError> {
        Self::with_config(puzzle, dictionary, SolverConfig::default())
    }

    pub fn with_config(
        puzzle: &'a LetterBoxedPuzzle,
        dictionary: &'a Dictionary,
        config: SolverConfig,
    ) -> Result<Self, SolverError> {
        if config.workers == 0 {
            return Err(SolverError::InvalidWorkerCount);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(config.workers)
            .thread_name(|i| format!("letter-boxed-{}", i))
            .build()?;

        Ok(Self {
            puzzle,
            dictionary,
            config,
            pool,
        })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn puzzle(&self) -> &LetterBoxedPuzzle {
        self.puzzle
    }

    /// Every dictionary word playable on the puzzle, best coverage first.
    pub fn find_possible_words(&self) -> Vec<BoxedWords> {
        let words = self.dictionary.words();
        let chunk_size = words.len().div_ceil(self.config.workers).max(1);

        let found: BTreeSet<BoxedWords> = self.pool.install(|| {
            words
                .par_chunks(chunk_size)
                .map(|chunk| self.filter_chunk(chunk))
                .reduce(BTreeSet::new, |mut all, chunk| {
                    all.extend(chunk);
                    all
                })
        });

        info!(
            "filtered the possible words down to {} from {} dictionary words",
            found.len(),
            words.len()
        );
        found.into_iter().collect()
    }

    fn filter_chunk(&self, chunk: &[String]) -> BTreeSet<BoxedWords> {
        let mut found = BTreeSet::new();
        let (Some(first), Some(last)) = (chunk.first(), chunk.last()) else {
            return found;
        };

        let mut checker = SolutionChecker::new(self.puzzle, self.dictionary);
        for word in chunk {
            if let CheckedWordResult::Valid {
                word,
                remaining_letters,
            } = checker.check_word(word, None)
            {
                found.insert(BoxedWords {
                    word,
                    remaining_letters,
                });
            }
            checker.reset();
        }

        debug!(
            "finished checking from words \"{}\" to \"{}\", found {} valid words",
            first,
            last,
            found.len()
        );
        found
    }

    /// Complete solutions, ranked best first.
    pub fn find_top_solutions(&self) -> Vec<PuzzleSolutionResult> {
        self.search().solutions
    }

    pub fn search(&self) -> SearchReport {
        let candidates = self.find_possible_words();
        let successors = successor_index(&candidates);
        let window_size = self.config.window_size();

        let mut report = SearchReport {
            candidate_count: candidates.len(),
            ..SearchReport::default()
        };
        let mut found: HashSet<PuzzleSolutionResult> = HashSet::new();

        for (index, window) in candidates.chunks(window_size).enumerate() {
            let start = index * window_size;
            debug!("checking from indices {} to {}", start, start + window.len());

            let outcomes: Vec<Vec<PuzzleSolutionResult>> = self.pool.install(|| {
                window
                    .par_iter()
                    .map(|candidate| self.check_candidate(candidate, &successors))
                    .collect()
            });
            report.windows_searched += 1;

            for result in outcomes.into_iter().flatten() {
                match result {
                    PuzzleSolutionResult::Valid { .. } => {
                        found.insert(result);
                    }
                    PuzzleSolutionResult::Incomplete { .. } => {
                        if is_better_partial(&result, report.best_partial.as_ref()) {
                            report.best_partial = Some(result);
                        }
                    }
                    PuzzleSolutionResult::Invalid { .. } => {}
                }
            }

            if self.config.stop_early && !found.is_empty() {
                info!("exiting solution search because a solution has been found");
                break;
            }
        }

        let mut solutions: Vec<PuzzleSolutionResult> = found.into_iter().collect();
        solutions.sort_by(PuzzleSolutionResult::rank_cmp);
        info!(
            "found {} valid solutions, top={:?}",
            solutions.len(),
            solutions.first().map(PuzzleSolutionResult::words)
        );

        report.solutions = solutions;
        report
    }

    /// One search task: the complete solutions starting with `candidate`,
    /// or failing that its best incomplete chain.
    fn check_candidate(
        &self,
        candidate: &BoxedWords,
        successors: &HashMap<char, Vec<&BoxedWords>>,
    ) -> Vec<PuzzleSolutionResult> {
        let mut checker = SolutionChecker::new(self.puzzle, self.dictionary);
        let mut solutions = Vec::new();

        if candidate.remaining_letters.is_empty() {
            let result = checker.check_solution(&[candidate.word.as_str()]);
            if result.is_valid() {
                debug!("found a solution in one word: {}", candidate.word);
                solutions.push(result);
            }
            return solutions;
        }

        let Some(last) = candidate.word.chars().last() else {
            return solutions;
        };
        let mut best_partial: Option<PuzzleSolutionResult> = None;

        for next in successors
            .get(&last)
            .into_iter()
            .flatten()
            .filter(|next| next.word != candidate.word)
        {
            checker.reset();
            let result = checker.check_solution(&[candidate.word.as_str(), next.word.as_str()]);
            match result {
                PuzzleSolutionResult::Valid { .. } => {
                    debug!("found solution with {:?}", result.words());
                    solutions.push(result);
                }
                PuzzleSolutionResult::Incomplete { .. } => {
                    if is_better_partial(&result, best_partial.as_ref()) {
                        best_partial = Some(result);
                    }
                }
                PuzzleSolutionResult::Invalid { .. } => {}
            }
        }

        if solutions.is_empty() {
            best_partial.into_iter().collect()
        } else {
            solutions
        }
    }
}

/// Candidates grouped by first letter, keeping candidate order within a group.
fn successor_index(candidates: &[BoxedWords]) -> HashMap<char, Vec<&BoxedWords>> {
    let mut index: HashMap<char, Vec<&BoxedWords>> = HashMap::new();
    for candidate in candidates {
        if let Some(first) = candidate.word.chars().next() {
            index.entry(first).or_default().push(candidate);
        }
    }
    index
}

/// Fewer remaining letters wins; ties go to the earlier word chain.
fn is_better_partial(result: &PuzzleSolutionResult, current: Option<&PuzzleSolutionResult>) -> bool {
    match current {
        None => true,
        Some(current) => result
            .remaining_count()
            .cmp(&current.remaining_count())
            .then_with(|| result.words().cmp(current.words()))
            .is_lt(),
    }
}
