use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::open_lineage;
use crate::Cli;

#[derive(Args)]
pub struct RangeArgs {
    /// Print oldest first
    #[arg(long)]
    reverse: bool,

    /// Abbreviate hashes to this many hex digits
    #[arg(long, value_name = "N")]
    abbrev: Option<usize>,

    /// Boundary commit; always listed
    from: String,

    /// Commit whose new history is listed
    to: String,
}

pub fn run(args: &RangeArgs, cli: &Cli) -> Result<i32> {
    let (lineage, _) = open_lineage(cli)?;
    let mut commits = lineage.commit_range_refs(&args.from, &args.to)?;
    if args.reverse {
        commits.reverse();
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for id in &commits {
        match args.abbrev {
            Some(len) => writeln!(out, "{}", id.short(len))?,
            None => writeln!(out, "{id}")?,
        }
    }
    Ok(0)
}
