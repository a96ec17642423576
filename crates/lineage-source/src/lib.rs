//! Read-only access to a commit graph.
//!
//! The traversal engine never talks to a repository directly. It asks a
//! [`CommitSource`] for the parents of a commit and for the commit a named
//! reference points to. This crate defines that seam, its error type, and
//! [`MemorySource`], a fully in-memory graph used by tests and by callers that
//! already hold the history they want to analyse.

mod error;
mod memory;

pub use error::SourceError;
pub use memory::{GraphBuilder, MemorySource};

use lineage_hash::CommitId;

/// Read-only accessor over a commit store.
///
/// Implementations must be deterministic for the lifetime of a query: asking
/// twice for the parents of the same commit returns the same list.
pub trait CommitSource {
    /// Parent ids of `id`, in recorded order. Roots return an empty list.
    ///
    /// Fails with [`SourceError::NotFound`] when the commit is unknown and
    /// [`SourceError::Corrupt`] or [`SourceError::Backend`] when it cannot be
    /// read.
    fn parents(&self, id: &CommitId) -> Result<Vec<CommitId>, SourceError>;

    /// Resolve a branch, tag or symbolic name (such as `HEAD`) to a commit id.
    ///
    /// Fails with [`SourceError::ReferenceNotFound`] when the name does not
    /// exist.
    fn resolve_reference(&self, name: &str) -> Result<CommitId, SourceError>;
}

impl<S: CommitSource + ?Sized> CommitSource for &S {
    fn parents(&self, id: &CommitId) -> Result<Vec<CommitId>, SourceError> {
        (**self).parents(id)
    }

    fn resolve_reference(&self, name: &str) -> Result<CommitId, SourceError> {
        (**self).resolve_reference(name)
    }
}
