//! CLI entry point for the single-suit wait solver

use clap::Parser;
use tilewait::io::cli::{Cli, Processor};

fn main() -> tilewait::Result<()> {
    let cli = Cli::parse();
    let processor = Processor::new(cli);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    processor.run(&mut out)
}
