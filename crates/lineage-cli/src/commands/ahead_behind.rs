use std::io::{self, Write};

use anyhow::Result;
use clap::Args;

use super::open_lineage;
use crate::Cli;

#[derive(Args)]
pub struct AheadBehindArgs {
    /// Print `ahead<TAB>behind[<TAB>approximate]` instead of prose
    #[arg(long)]
    porcelain: bool,

    /// Branch or commit being measured
    tip: String,

    /// Reference to measure against (defaults to `default_base` from the
    /// config file, then `main`)
    base: Option<String>,
}

pub fn run(args: &AheadBehindArgs, cli: &Cli) -> Result<i32> {
    let (lineage, config) = open_lineage(cli)?;
    let base = args.base.as_deref().unwrap_or_else(|| config.default_base());
    let divergence = lineage.ahead_behind(&args.tip, base)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.porcelain {
        write!(out, "{}\t{}", divergence.ahead, divergence.behind)?;
        if divergence.is_approximate() {
            write!(out, "\tapproximate")?;
        }
        writeln!(out)?;
    } else {
        writeln!(out, "{}: {}", args.tip, divergence)?;
    }
    Ok(0)
}
