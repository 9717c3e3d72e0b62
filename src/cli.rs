use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spill")]
#[command(about = "Write standard input verbatim to a file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Destination file, created if absent and truncated if present
    pub path: PathBuf,
}

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    Cli::parse()
}
