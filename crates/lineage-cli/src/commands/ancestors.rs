use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::open_lineage;
use crate::Cli;

#[derive(Args)]
pub struct AncestorsArgs {
    /// List every ancestor (sorted by hash) instead of counting them
    #[arg(long)]
    list: bool,

    #[arg(default_value = "HEAD")]
    rev: String,
}

pub fn run(args: &AncestorsArgs, cli: &Cli) -> Result<i32> {
    let (lineage, _) = open_lineage(cli)?;
    let id = lineage.resolve(&args.rev)?;
    let set = lineage.ancestors(&id)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.list {
        for ancestor in set.to_sorted_vec() {
            writeln!(out, "{ancestor}")?;
        }
    } else {
        writeln!(out, "{}", set.len())?;
    }
    Ok(0)
}
