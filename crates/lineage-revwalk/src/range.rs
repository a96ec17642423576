//! Commit ranges: what `to` has that `from` does not.

use std::ops::ControlFlow;

use lineage_hash::CommitId;
use lineage_source::{CommitSource, SourceError};
use tracing::debug;

use crate::walk::{read_parents, Walk, WalkOutcome};
use crate::{WalkError, WalkOptions};

/// Commits introduced on `to` since `from`, nearest to `to` first.
///
/// Walks breadth-first from `to` and stops at the first sighting of `from`.
/// `from` itself is always the last entry: it is appended after the walk
/// (after checking that the store knows it) because the stop condition never
/// collects it. Every id appears once.
///
/// When `from` is not reachable from `to`, including fully disjoint
/// histories, the result is everything reachable from `to` followed by
/// `from`. It is not a symmetric difference.
pub(crate) fn commit_range<S: CommitSource + ?Sized>(
    source: &S,
    from: &CommitId,
    to: &CommitId,
    options: &WalkOptions,
) -> Result<Vec<CommitId>, WalkError> {
    let mut commits = Vec::new();
    let outcome = Walk::new(source, *to, options).run(|id| {
        if id == from {
            ControlFlow::Break(())
        } else {
            commits.push(*id);
            ControlFlow::Continue(())
        }
    })?;

    read_parents(source, from)?;
    commits.push(*from);

    debug!(
        from = %from,
        to = %to,
        count = commits.len(),
        reached_from = outcome == WalkOutcome::Stopped,
        "extracted commit range"
    );
    Ok(commits)
}

/// [`commit_range`] over reference names. Unlike ahead/behind, a name that
/// does not resolve is a [`WalkError::ReferenceNotFound`]: there is no
/// meaningful empty range to fall back to.
pub(crate) fn commit_range_refs<S: CommitSource + ?Sized>(
    source: &S,
    from_ref: &str,
    to_ref: &str,
    options: &WalkOptions,
) -> Result<Vec<CommitId>, WalkError> {
    let from = resolve(source, from_ref)?;
    let to = resolve(source, to_ref)?;
    commit_range(source, &from, &to, options)
}

fn resolve<S: CommitSource + ?Sized>(source: &S, name: &str) -> Result<CommitId, WalkError> {
    source.resolve_reference(name).map_err(|err| match err {
        SourceError::ReferenceNotFound(name) => WalkError::ReferenceNotFound(name),
        other => WalkError::ResolveFailed {
            name: name.to_string(),
            source: other,
        },
    })
}
