use anyhow::Result;
use clap::Args;

use super::open_lineage;
use crate::Cli;

#[derive(Args)]
pub struct IsMergeArgs {
    /// Commit to classify
    #[arg(default_value = "HEAD")]
    rev: String,
}

pub fn run(args: &IsMergeArgs, cli: &Cli) -> Result<i32> {
    let (lineage, _) = open_lineage(cli)?;
    let id = lineage.resolve(&args.rev)?;
    Ok(if lineage.is_merge_commit(&id)? { 0 } else { 1 })
}
