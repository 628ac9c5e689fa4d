//! Letter Boxed CLI
//!
//! Solve puzzles, check word chains, and sanitize raw word lists.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use letter_boxed::{
    load_dictionary, Dictionary, LetterBoxedPuzzle, LetterBoxedSolver, SolutionChecker, SolverConfig,
};

/// Reference puzzles and their published solutions.
const REFERENCE_PUZZLES: [([&str; 4], [&str; 2]); 3] = [
    (["yts", "bna", "cor", "eif"], ["cybernetics", "sofa"]),
    (["tam", "urd", "qbi", "one"], ["quotidian", "number"]),
    (["ilp", "urn", "soa", "htd"], ["outlandish", "harp"]),
];

#[derive(Parser)]
#[command(name = "letter-boxed")]
#[command(about = "Multithreaded Letter Boxed puzzle solver")]
#[command(version)]
struct Cli {
    /// Log search progress at debug level
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best solutions for a puzzle
    Solve {
        /// Letters of each side, e.g. `yts bna cor eif`
        #[arg(required = true)]
        sides: Vec<String>,

        /// Word list to use instead of the embedded dictionary (one word per line)
        #[arg(short, long, value_name = "FILE")]
        dictionary: Option<PathBuf>,

        /// Number of worker threads
        #[arg(short, long, default_value_t = letter_boxed::solver::DEFAULT_WORKERS)]
        workers: usize,

        /// Search every candidate window instead of stopping at the first with a solution
        #[arg(long)]
        exhaustive: bool,

        /// Number of solutions to print
        #[arg(short = 'n', long, default_value_t = 10)]
        top: usize,
    },
    /// Check a chain of words against a puzzle
    Check {
        /// Letters of each side, e.g. `yts bna cor eif`
        #[arg(required = true)]
        sides: Vec<String>,

        /// Words of the proposed solution, in order
        #[arg(short = 'w', long, num_args = 1.., required = true)]
        words: Vec<String>,

        /// Word list to use instead of the embedded dictionary (one word per line)
        #[arg(short, long, value_name = "FILE")]
        dictionary: Option<PathBuf>,
    },
    /// Reduce a raw word list to lowercase alphabetic words of two or more letters
    Sanitize {
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        #[arg(value_name = "OUTPUT")]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    letter_boxed::log::init_logger(cli.debug);

    if let Err(e) = try_main(cli) {
        eprintln!("Error: {e}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn try_main(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Some(Commands::Solve {
            sides,
            dictionary,
            workers,
            exhaustive,
            top,
        }) => {
            let dictionary = open_dictionary(dictionary)?;
            let puzzle = parse_puzzle(&sides)?;
            let config = SolverConfig {
                workers,
                stop_early: !exhaustive,
            };
            solve(&puzzle, &dictionary, config, top)
        }
        Some(Commands::Check {
            sides,
            words,
            dictionary,
        }) => {
            let dictionary = open_dictionary(dictionary)?;
            let puzzle = parse_puzzle(&sides)?;
            let words: Vec<String> = words.iter().map(|w| w.trim().to_string()).collect();
            let mut checker = SolutionChecker::new(&puzzle, &dictionary);
            println!("{}", checker.check_solution(&words));
            Ok(())
        }
        Some(Commands::Sanitize { input, output }) => {
            let raw = std::fs::read_to_string(&input)
                .map_err(|e| format!("cannot read {}: {}", input.display(), e))?;
            let sanitized = Dictionary::sanitize(&raw);
            sanitized.write_to_path(&output)?;
            println!(
                "Wrote {} sanitized words to {}",
                sanitized.len(),
                output.display()
            );
            Ok(())
        }
        None => run_reference_puzzles(),
    }
}

fn open_dictionary(path: Option<PathBuf>) -> Result<Dictionary, Box<dyn Error>> {
    let dictionary = match path {
        Some(path) => Dictionary::load_from_path(path)?,
        None => load_dictionary(),
    };
    log::info!("loaded {} words into the dictionary", dictionary.len());
    Ok(dictionary)
}

fn parse_puzzle(sides: &[String]) -> Result<LetterBoxedPuzzle, Box<dyn Error>> {
    let sides: Vec<String> = sides.iter().map(|side| side.trim().to_lowercase()).collect();
    Ok(LetterBoxedPuzzle::from_strs(&sides)?)
}

fn solve(
    puzzle: &LetterBoxedPuzzle,
    dictionary: &Dictionary,
    config: SolverConfig,
    top: usize,
) -> Result<(), Box<dyn Error>> {
    let solver = LetterBoxedSolver::with_config(puzzle, dictionary, config)?;

    let start = Instant::now();
    let report = solver.search();
    let elapsed = start.elapsed();

    println!();
    println!("Puzzle: {}", puzzle);
    println!(
        "{} candidate words, {} windows searched in {:.2?}",
        report.candidate_count, report.windows_searched, elapsed
    );
    println!();

    let Some(best) = report.solutions.first() else {
        println!("No complete solution found.");
        if let Some(partial) = &report.best_partial {
            println!("Best partial: {}", partial);
        }
        return Ok(());
    };

    println!("Top {} solutions:", report.solutions.len().min(top));
    println!("{:>4} {:>8} {:>6}  Words", "#", "Overlap", "Chars");
    println!("{}", "-".repeat(50));
    for (i, solution) in report.solutions.iter().take(top).enumerate() {
        let words = solution.words();
        println!(
            "{:>4} {:>8} {:>6}  {}",
            i + 1,
            letter_boxed::result::character_overlap(words),
            letter_boxed::result::character_count(words),
            words.join(" → ").to_uppercase()
        );
    }
    println!();

    let mut checker = SolutionChecker::new(puzzle, dictionary);
    println!("{}", checker.check_solution(best.words()));
    Ok(())
}

fn run_reference_puzzles() -> Result<(), Box<dyn Error>> {
    let dictionary = load_dictionary();
    log::info!("loaded {} words into the dictionary", dictionary.len());

    let config = SolverConfig {
        stop_early: false,
        ..SolverConfig::default()
    };

    for (sides, published) in REFERENCE_PUZZLES {
        let puzzle = LetterBoxedPuzzle::from_strs(&sides)?;
        let solver = LetterBoxedSolver::with_config(&puzzle, &dictionary, config)?;
        let solutions = solver.find_top_solutions();

        let mut checker = SolutionChecker::new(&puzzle, &dictionary);
        match solutions.first() {
            Some(best) => println!("{}", checker.check_solution(best.words())),
            None => println!("{} ❌ no solution found", puzzle),
        }

        checker.reset();
        println!("{}", checker.check_solution(&published));
    }
    Ok(())
}
