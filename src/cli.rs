//! Command-line interface definition.
use clap::Parser;

/// Filter makefile dependency rules read from stdin.
///
/// Drops absolute-path (system) headers, keeps `.c` sources first in input
/// order, then lists the remaining headers once each, shallowest path first.
#[derive(Parser, Debug)]
#[command(
    name = "depfilter",
    about = "Filter compiler-generated makefile dependency files",
    version = option_env!("DEPFILTER_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")),
    args_override_self = true
)]
pub struct Cli {
    /// Rewrite each target to DEST/<basename of target> (empty: no rewrite)
    #[arg(
        short = 'd',
        long = "dest",
        value_name = "DEST",
        allow_hyphen_values = true
    )]
    pub dest: Option<String>,

    /// Enable verbose diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
