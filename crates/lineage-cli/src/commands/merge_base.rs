use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::open_lineage;
use crate::Cli;

#[derive(Args)]
pub struct MergeBaseArgs {
    /// Check if the first commit is an ancestor of the second (exit 0=yes, 1=no)
    #[arg(long)]
    is_ancestor: bool,

    first: String,

    second: String,
}

pub fn run(args: &MergeBaseArgs, cli: &Cli) -> Result<i32> {
    let (lineage, _) = open_lineage(cli)?;
    let a = lineage.resolve(&args.first)?;
    let b = lineage.resolve(&args.second)?;

    if args.is_ancestor {
        return Ok(if lineage.is_ancestor(&a, &b)? { 0 } else { 1 });
    }

    match lineage.merge_base(&a, &b)? {
        Some(base) => {
            writeln!(io::stdout().lock(), "{base}")?;
            Ok(0)
        }
        // No common ancestor
        None => Ok(1),
    }
}
