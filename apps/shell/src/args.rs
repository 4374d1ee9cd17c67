//! Command-line interface of the `folio` binary.

use clap::Parser;
use folio::domain::language::LanguageKey;
use folio_logger::{LevelFilter, LogFormat};
use std::path::PathBuf;

/// Boots every enabled feature module and prints the merged route tree.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub(crate) struct Cli {
    /// Configuration file; defaults to `folio.{toml,yaml,json}` in the working directory
    #[arg(short, long, value_name = "PATH")]
    pub(crate) config: Option<PathBuf>,

    /// Language to select after startup (e.g. `fr`, `pt-br`)
    #[arg(short, long, value_name = "KEY")]
    pub(crate) lang: Option<LanguageKey>,

    /// Print the route tree as JSON
    #[arg(long)]
    pub(crate) json: bool,

    /// Log line format: compact, pretty or json
    #[arg(long, value_name = "FORMAT", default_value = "compact")]
    pub(crate) log_format: LogFormat,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,
}

impl Cli {
    pub(crate) const fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
