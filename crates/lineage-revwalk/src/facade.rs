//! The public entry point bundling a commit source with walk options.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use lineage_hash::collections::CommitSet;
use lineage_hash::CommitId;
use lineage_source::CommitSource;
use tracing::{error, instrument};

use crate::{ancestors, classify, divergence, merge_base, range};
use crate::{Divergence, WalkError, WalkOptions};

/// Ancestry queries over one commit source.
///
/// Every query is independent: nothing is cached between calls, so the same
/// `Lineage` can serve concurrent callers whenever the source can. A panic
/// raised while answering a query, whether from the source or from malformed
/// graph data, is caught and returned as [`WalkError::Panicked`].
#[derive(Debug, Clone)]
pub struct Lineage<S> {
    source: S,
    options: WalkOptions,
}

impl<S: CommitSource> Lineage<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, WalkOptions::default())
    }

    pub fn with_options(source: S, options: WalkOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Ahead/behind of `tip_ref` against `base_ref`, both reference names.
    /// A missing name yields zero counts rather than an error.
    #[instrument(level = "debug", skip(self))]
    pub fn ahead_behind(&self, tip_ref: &str, base_ref: &str) -> Result<Divergence, WalkError> {
        self.guarded(|| divergence::ahead_behind(&self.source, tip_ref, base_ref, &self.options))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn ahead_behind_ids(
        &self,
        tip: &CommitId,
        base: &CommitId,
    ) -> Result<Divergence, WalkError> {
        self.guarded(|| divergence::ahead_behind_ids(&self.source, tip, base, &self.options))
    }

    /// A common ancestor of `a` and `b`; `None` for disjoint histories.
    #[instrument(level = "debug", skip(self))]
    pub fn merge_base(&self, a: &CommitId, b: &CommitId) -> Result<Option<CommitId>, WalkError> {
        self.guarded(|| merge_base::merge_base(&self.source, a, b, &self.options))
    }

    /// Commits on `to` since `from`, with `from` always last.
    #[instrument(level = "debug", skip(self))]
    pub fn commit_range(&self, from: &CommitId, to: &CommitId) -> Result<Vec<CommitId>, WalkError> {
        self.guarded(|| range::commit_range(&self.source, from, to, &self.options))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn commit_range_refs(
        &self,
        from_ref: &str,
        to_ref: &str,
    ) -> Result<Vec<CommitId>, WalkError> {
        self.guarded(|| range::commit_range_refs(&self.source, from_ref, to_ref, &self.options))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn is_merge_commit(&self, id: &CommitId) -> Result<bool, WalkError> {
        self.guarded(|| classify::is_merge_commit(&self.source, id))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn ancestors(&self, id: &CommitId) -> Result<CommitSet, WalkError> {
        self.guarded(|| ancestors::ancestors(&self.source, id, &self.options))
    }

    #[instrument(level = "debug", skip(self))]
    pub fn is_ancestor(
        &self,
        ancestor: &CommitId,
        descendant: &CommitId,
    ) -> Result<bool, WalkError> {
        self.guarded(|| ancestors::is_ancestor(&self.source, ancestor, descendant, &self.options))
    }

    /// Resolve a reference name through the underlying source.
    pub fn resolve(&self, name: &str) -> Result<CommitId, WalkError> {
        self.guarded(|| {
            self.source.resolve_reference(name).map_err(|err| {
                if err.is_reference_not_found() {
                    WalkError::ReferenceNotFound(name.to_string())
                } else {
                    WalkError::ResolveFailed {
                        name: name.to_string(),
                        source: err,
                    }
                }
            })
        })
    }

    fn guarded<T>(&self, query: impl FnOnce() -> Result<T, WalkError>) -> Result<T, WalkError> {
        panic::catch_unwind(AssertUnwindSafe(query)).unwrap_or_else(|payload| {
            let message = panic_message(payload.as_ref());
            error!(%message, "panic during commit graph traversal");
            Err(WalkError::Panicked(message))
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_source::{GraphBuilder, SourceError};

    struct PanickingSource;

    impl CommitSource for PanickingSource {
        fn parents(&self, _id: &CommitId) -> Result<Vec<CommitId>, SourceError> {
            panic!("parent table is corrupt")
        }

        fn resolve_reference(&self, name: &str) -> Result<CommitId, SourceError> {
            Ok(GraphBuilder::id_for(name))
        }
    }

    #[test]
    fn panics_become_errors() {
        let lineage = Lineage::new(PanickingSource);
        let err = lineage.ahead_behind("feature", "main").unwrap_err();
        match err {
            WalkError::Panicked(message) => assert_eq!(message, "parent table is corrupt"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn options_are_applied() {
        let mut graph = GraphBuilder::new();
        let ids = graph.chain("c", 20, None);
        let lineage = Lineage::with_options(graph.build(), WalkOptions::with_max_commits(5));

        assert!(matches!(
            lineage.ancestors(&ids[19]),
            Err(WalkError::LimitExceeded { limit: 5 })
        ));
        assert_eq!(lineage.ancestors(&ids[3]).unwrap().len(), 4);
    }

    #[test]
    fn resolve_maps_missing_names() {
        let lineage = Lineage::new(GraphBuilder::new().build());
        assert!(matches!(
            lineage.resolve("main"),
            Err(WalkError::ReferenceNotFound(name)) if name == "main"
        ));
    }
}
