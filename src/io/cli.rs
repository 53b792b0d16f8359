//! Command-line interface driving the solver
//!
//! One hand can be passed as an argument; otherwise lines are read from
//! stdin and solved one by one. The exhaustive mode solves every possible
//! single-suit hand, and the check mode cross-validates the solver against
//! randomly generated hands.

use crate::hand::generator::{complete_tiles, random_tiles};
use crate::hand::{Hand, tile_char};
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{Result, SolverError};
use crate::io::input::parse_hand;
use crate::io::progress::EnumerationProgress;
use crate::solver::enumerate::{for_each_hand, total_hands};
use crate::solver::verify::verify;
use crate::solver::waits::{solve, solve_rendered};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "tilewait")]
#[command(
    author,
    version,
    about = "List winning tiles for a 13-tile single-suit mahjong hand"
)]
/// Command-line arguments for the wait solver
pub struct Cli {
    /// 13-digit hand to solve; reads lines from stdin when omitted
    #[arg(value_name = "HAND")]
    pub hand: Option<String>,

    /// Solve every possible 13-tile single-suit hand
    #[arg(short, long)]
    pub all: bool,

    /// Run randomized self-check rounds instead of solving
    #[arg(short, long, value_name = "ROUNDS")]
    pub check: Option<u64>,

    /// Random seed for the self-check generators
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Drives one run of the tool according to the CLI arguments
pub struct Processor {
    cli: Cli,
}

impl Processor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Execute the selected mode, writing results to `out`
    ///
    /// # Errors
    ///
    /// Returns an error on invalid one-shot input, a failed self-check
    /// round, or an I/O failure on either stream.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        if let Some(rounds) = self.cli.check {
            self.run_checks(rounds, out)
        } else if self.cli.all {
            self.solve_all(out)
        } else if let Some(line) = &self.cli.hand {
            Self::solve_line(line, out)
        } else {
            Self::solve_stdin(out)
        }
    }

    fn solve_line(line: &str, out: &mut impl Write) -> Result<()> {
        let hand = parse_hand(line)?;
        write!(out, "{}", solve_rendered(&hand)).map_err(|source| SolverError::Io {
            operation: "write result",
            source,
        })
    }

    // Invalid lines report to stderr and the loop continues, so one typo
    // does not end an interactive session
    #[allow(clippy::print_stderr)]
    fn solve_stdin(out: &mut impl Write) -> Result<()> {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.map_err(|source| SolverError::Io {
                operation: "read input line",
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_hand(&line) {
                Ok(hand) => {
                    write!(out, "{}", solve_rendered(&hand)).map_err(|source| SolverError::Io {
                        operation: "write result",
                        source,
                    })?;
                }
                Err(error) => eprintln!("{error}"),
            }
        }
        Ok(())
    }

    fn solve_all(&self, out: &mut impl Write) -> Result<()> {
        let progress = EnumerationProgress::new(total_hands(), !self.cli.should_show_progress());
        let mut io_failure: Option<std::io::Error> = None;

        for_each_hand(|tiles| {
            if io_failure.is_some() {
                return;
            }
            // Enumerated hands are wall-limited, so construction cannot fail
            if let Ok(hand) = Hand::from_tiles(tiles.to_vec()) {
                let digits: String = tiles.iter().map(|&tile| tile_char(tile)).collect();
                let text = solve_rendered(&hand);
                if let Err(source) = write!(out, "{digits}:\n{text}") {
                    io_failure = Some(source);
                }
            }
            progress.tick();
        });
        progress.finish();

        match io_failure {
            Some(source) => Err(SolverError::Io {
                operation: "write results",
                source,
            }),
            None => Ok(()),
        }
    }

    fn run_checks(&self, rounds: u64, out: &mut impl Write) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        for _ in 0..rounds {
            let hand = Hand::from_tiles(random_tiles(&mut rng))?;
            verify(&hand.to_string(), &solve(&hand), None)?;
        }

        for _ in 0..rounds {
            let complete = complete_tiles(&mut rng);
            // Every tile of a winning hand must be reachable as a wait once
            // removed
            for position in 0..complete.len() {
                let mut tiles = complete.clone();
                let removed = tiles.remove(position);
                let hand = Hand::from_tiles(tiles)?;
                verify(&hand.to_string(), &solve(&hand), Some(removed))?;
            }
        }

        writeln!(out, "All checks passed ({rounds} rounds, seed {})", self.cli.seed).map_err(
            |source| SolverError::Io {
                operation: "write check summary",
                source,
            },
        )
    }
}
