//! Ancestry and divergence analysis over a commit DAG.
//!
//! Given a [`CommitSource`](lineage_source::CommitSource), this crate answers
//! the structural questions a commit-policy tool asks about history: the set
//! of ancestors of a commit, a merge base of two commits, how far a branch is
//! ahead of and behind a reference, which commits a range introduces, and
//! whether a commit is a merge.
//!
//! All traversals are iterative, keep a visited set so that no commit is
//! processed twice within one query, and hold no state between calls. The
//! [`Lineage`] facade bundles a source with [`WalkOptions`] and converts any
//! panic raised during a query into [`WalkError::Panicked`].

mod ancestors;
mod classify;
mod divergence;
mod facade;
mod merge_base;
mod options;
mod range;
mod walk;

pub use classify::is_merge;
pub use divergence::{Divergence, DivergenceBasis};
pub use facade::Lineage;
pub use options::WalkOptions;

use lineage_hash::CommitId;
use lineage_source::SourceError;

/// Errors produced by ancestry queries.
#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    /// The commit store could not produce the parents of `oid`.
    #[error("lookup failed for commit {oid}: {source}")]
    LookupFailed {
        oid: CommitId,
        #[source]
        source: SourceError,
    },

    #[error("reference not found: {0}")]
    ReferenceNotFound(String),

    /// The store failed while resolving a name (not a plain miss).
    #[error("cannot resolve reference '{name}': {source}")]
    ResolveFailed {
        name: String,
        #[source]
        source: SourceError,
    },

    #[error("traversal exceeded the limit of {limit} commits")]
    LimitExceeded { limit: usize },

    #[error("traversal aborted by a panic: {0}")]
    Panicked(String),
}

impl WalkError {
    /// The commit whose lookup failed, if this is a lookup failure.
    pub fn failed_commit(&self) -> Option<&CommitId> {
        match self {
            Self::LookupFailed { oid, .. } => Some(oid),
            _ => None,
        }
    }
}
