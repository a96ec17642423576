//! Ancestor sets and reachability.

use std::ops::ControlFlow;

use lineage_hash::collections::CommitSet;
use lineage_hash::CommitId;
use lineage_source::CommitSource;
use tracing::trace;

use crate::walk::{charge, read_parents, Walk, WalkOutcome};
use crate::{WalkError, WalkOptions};

/// Every commit reachable from `start` through parent links, `start`
/// included.
///
/// Uses an explicit stack rather than recursion, so history depth only costs
/// heap. Each commit is expanded once. On any lookup failure the partial set
/// is dropped and the error names the commit that could not be read.
pub(crate) fn ancestors<S: CommitSource + ?Sized>(
    source: &S,
    start: &CommitId,
    options: &WalkOptions,
) -> Result<CommitSet, WalkError> {
    let mut set = CommitSet::new();
    let mut stack = vec![*start];
    let mut visited = 0usize;

    while let Some(id) = stack.pop() {
        if !set.insert(id) {
            continue;
        }
        charge(options.max_commits, &mut visited)?;
        for parent in read_parents(source, &id)? {
            if !set.contains(&parent) {
                stack.push(parent);
            }
        }
    }

    trace!(start = %start, count = set.len(), "built ancestor set");
    Ok(set)
}

/// Whether `ancestor` is reachable from `descendant`. A commit is its own
/// ancestor.
///
/// Walks from `descendant` and stops at the first sighting, so answering
/// "yes" for a recent ancestor does not read the whole history.
pub(crate) fn is_ancestor<S: CommitSource + ?Sized>(
    source: &S,
    ancestor: &CommitId,
    descendant: &CommitId,
    options: &WalkOptions,
) -> Result<bool, WalkError> {
    if ancestor == descendant {
        return Ok(true);
    }

    let outcome = Walk::new(source, *descendant, options).run(|id| {
        if id == ancestor {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;
    Ok(outcome == WalkOutcome::Stopped)
}
