//! css-root-check: reports stylesheet content that escapes its enclosing block.

mod cli;
mod config;
mod logging;
mod orchestrator;
mod output;

use clap::Parser;
use cli::Args;
use miette::Result;

fn main() -> Result<()> {
    logging::init();

    let args = Args::parse();
    let summary = orchestrator::run(args)?;

    if summary.should_fail() {
        std::process::exit(1);
    }
    Ok(())
}
