//! Breadth-first traversal over parent links.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use lineage_hash::collections::CommitSet;
use lineage_hash::CommitId;
use lineage_source::CommitSource;

use crate::{WalkError, WalkOptions};

/// How a [`Walk`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WalkOutcome {
    /// The visitor asked to stop.
    Stopped,
    /// Every reachable commit was visited.
    Exhausted,
}

/// Breadth-first walk from one commit towards the roots.
///
/// Each reachable commit is handed to the visitor exactly once, nearest
/// first; parents are queued in recorded order. A commit's parents are only
/// fetched after the visitor has seen it and chosen to continue, so stopping
/// on a commit never reads it from the store.
pub(crate) struct Walk<'s, S: ?Sized> {
    source: &'s S,
    queue: VecDeque<CommitId>,
    seen: CommitSet,
    limit: Option<usize>,
    visited: usize,
}

impl<'s, S: CommitSource + ?Sized> Walk<'s, S> {
    pub fn new(source: &'s S, start: CommitId, options: &WalkOptions) -> Self {
        let mut seen = CommitSet::new();
        seen.insert(start);
        Self {
            source,
            queue: VecDeque::from([start]),
            seen,
            limit: options.max_commits,
            visited: 0,
        }
    }

    /// Number of commits handed to the visitor so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Drive the walk until the visitor breaks or the history is exhausted.
    pub fn run<F>(&mut self, mut visit: F) -> Result<WalkOutcome, WalkError>
    where
        F: FnMut(&CommitId) -> ControlFlow<()>,
    {
        while let Some(id) = self.queue.pop_front() {
            charge(self.limit, &mut self.visited)?;
            if visit(&id).is_break() {
                return Ok(WalkOutcome::Stopped);
            }
            for parent in read_parents(self.source, &id)? {
                if self.seen.insert(parent) {
                    self.queue.push_back(parent);
                }
            }
        }
        Ok(WalkOutcome::Exhausted)
    }
}

/// Parents of `id`, with store failures tagged with the offending commit.
pub(crate) fn read_parents<S: CommitSource + ?Sized>(
    source: &S,
    id: &CommitId,
) -> Result<Vec<CommitId>, WalkError> {
    source
        .parents(id)
        .map_err(|source| WalkError::LookupFailed { oid: *id, source })
}

/// Count one more visited commit against the optional budget.
pub(crate) fn charge(limit: Option<usize>, visited: &mut usize) -> Result<(), WalkError> {
    if let Some(limit) = limit {
        if *visited >= limit {
            return Err(WalkError::LimitExceeded { limit });
        }
    }
    *visited += 1;
    Ok(())
}
