use lineage_hash::CommitId;

/// Failures reported by a [`CommitSource`](crate::CommitSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("commit not found: {0}")]
    NotFound(CommitId),

    #[error("corrupt commit {oid}: {reason}")]
    Corrupt { oid: CommitId, reason: String },

    #[error("reference not found: {0}")]
    ReferenceNotFound(String),

    #[error("commit store error: {0}")]
    Backend(String),
}

impl SourceError {
    /// Whether this is a missing symbolic name rather than a store failure.
    pub fn is_reference_not_found(&self) -> bool {
        matches!(self, Self::ReferenceNotFound(_))
    }
}
