pub mod ahead_behind;
pub mod ancestors;
pub mod is_merge;
pub mod merge_base;
pub mod range;

use anyhow::{Context, Result};
use clap::Subcommand;
use lineage_git::RepoSource;
use lineage_revwalk::Lineage;

use crate::config::Config;
use crate::Cli;

#[derive(Subcommand)]
pub enum Commands {
    /// Count commits a tip is ahead of and behind a base
    AheadBehind(ahead_behind::AheadBehindArgs),
    /// Find a common ancestor of two commits
    MergeBase(merge_base::MergeBaseArgs),
    /// List the commits introduced on <to> since <from>
    Range(range::RangeArgs),
    /// Exit 0 if the commit is a merge, 1 otherwise
    IsMerge(is_merge::IsMergeArgs),
    /// Count or list every commit reachable from a revision
    Ancestors(ancestors::AncestorsArgs),
}

/// Open the repository containing the working directory together with its
/// config, command-line overrides applied last.
pub fn open_lineage(cli: &Cli) -> Result<(Lineage<RepoSource>, Config)> {
    let source = RepoSource::discover(".").context("not a git repository")?;
    let mut config = Config::discover(cli.config.as_deref(), source.root())?;
    if let Some(max) = cli.max_commits {
        config.walk.max_commits = Some(max);
    }
    let lineage = Lineage::with_options(source, config.walk.clone());
    Ok((lineage, config))
}

pub fn run(cli: Cli) -> Result<i32> {
    match &cli.command {
        Commands::AheadBehind(args) => ahead_behind::run(args, &cli),
        Commands::MergeBase(args) => merge_base::run(args, &cli),
        Commands::Range(args) => range::run(args, &cli),
        Commands::IsMerge(args) => is_merge::run(args, &cli),
        Commands::Ancestors(args) => ancestors::run(args, &cli),
    }
}
