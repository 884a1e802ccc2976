//! Command-line entry point: filter dependency rules from stdin to stdout.

use std::io::{self, BufWriter};

use anyhow::Result;
use clap::Parser;

use depfilter::{cli, filter, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.verbose);
    let log = logging::Logger::new();

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    filter::run_cli(&args, stdin, stdout, &log)?;
    Ok(())
}
