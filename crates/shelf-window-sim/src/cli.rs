use std::io::Write;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::range::{RangeArgs, run_range};
use crate::session::{ReplayArgs, run_replay};

#[derive(Debug, Parser)]
#[command(
    name = "shelf-window-sim",
    about = "Compute list windows and replay scripted scroll sessions",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute the window for one scroll offset.
    Range(RangeArgs),

    /// Replay scroll/resize events and print per-frame JSON lines.
    Replay(ReplayArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(cli, &mut out)
}

pub fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Range(args) => run_range(args, out).map(|_| ()),
        Commands::Replay(args) => run_replay(args, out),
    }
}
