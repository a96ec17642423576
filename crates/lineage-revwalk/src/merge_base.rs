//! Merge-base resolution.
//!
//! The ancestor set of `a` is materialized first; then a breadth-first walk
//! from `b` tests each commit against it. The first hit is the merge base.
//! This yields the common ancestor nearest to `b`, which is the lowest common
//! ancestor for ordinary fork/merge topologies. Criss-cross histories can have
//! several minimal common ancestors; only the first one found from `b` is
//! returned, so the result is deterministic but not exhaustive.

use std::ops::ControlFlow;

use lineage_hash::CommitId;
use lineage_source::CommitSource;
use tracing::debug;

use crate::ancestors::ancestors;
use crate::walk::Walk;
use crate::{WalkError, WalkOptions};

/// A commit that is an ancestor of both `a` and `b`, or `None` when the two
/// histories share no commit.
pub(crate) fn merge_base<S: CommitSource + ?Sized>(
    source: &S,
    a: &CommitId,
    b: &CommitId,
    options: &WalkOptions,
) -> Result<Option<CommitId>, WalkError> {
    if a == b {
        return Ok(Some(*a));
    }

    let reachable_from_a = ancestors(source, a, options)?;

    let mut base = None;
    let mut walk = Walk::new(source, *b, options);
    walk.run(|id| {
        if reachable_from_a.contains(id) {
            base = Some(*id);
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;

    match &base {
        Some(found) => debug!(a = %a, b = %b, base = %found, "resolved merge base"),
        None => debug!(a = %a, b = %b, visited = walk.visited(), "no common ancestor"),
    }
    Ok(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_source::GraphBuilder;

    fn options() -> WalkOptions {
        WalkOptions::default()
    }

    #[test]
    fn diamond_resolves_to_fork_point() {
        //   A -> B -> D
        //   A -> C -> D
        let mut graph = GraphBuilder::new();
        let a = graph.commit("A", &[]);
        let b = graph.commit("B", &[a]);
        let c = graph.commit("C", &[a]);
        let d = graph.commit("D", &[b, c]);
        let source = graph.build();

        assert_eq!(merge_base(&source, &b, &c, &options()).unwrap(), Some(a));
        assert_eq!(merge_base(&source, &c, &b, &options()).unwrap(), Some(a));
        assert_eq!(merge_base(&source, &d, &b, &options()).unwrap(), Some(b));
        assert_eq!(merge_base(&source, &b, &d, &options()).unwrap(), Some(b));
    }

    #[test]
    fn linear_history_returns_the_older_commit() {
        let mut graph = GraphBuilder::new();
        let ids = graph.chain("c", 5, None);
        let source = graph.build();

        assert_eq!(
            merge_base(&source, &ids[4], &ids[1], &options()).unwrap(),
            Some(ids[1])
        );
        assert_eq!(
            merge_base(&source, &ids[1], &ids[4], &options()).unwrap(),
            Some(ids[1])
        );
    }

    #[test]
    fn same_commit_is_its_own_base() {
        let mut graph = GraphBuilder::new();
        let root = graph.commit("root", &[]);
        let source = graph.build();
        assert_eq!(merge_base(&source, &root, &root, &options()).unwrap(), Some(root));
    }

    #[test]
    fn disjoint_histories_have_no_base() {
        let mut graph = GraphBuilder::new();
        let left = graph.chain("left", 3, None);
        let right = graph.chain("right", 2, None);
        let source = graph.build();

        assert_eq!(
            merge_base(&source, &left[2], &right[1], &options()).unwrap(),
            None
        );
    }

    #[test]
    fn criss_cross_picks_the_candidate_nearest_b() {
        //      root
        //     /    \
        //    x      y
        //    | \  / |
        //    |  \/  |
        //    |  /\  |
        //    m1    m2      m1 = [x, y], m2 = [y, x]
        let mut graph = GraphBuilder::new();
        let root = graph.commit("root", &[]);
        let x = graph.commit("x", &[root]);
        let y = graph.commit("y", &[root]);
        let m1 = graph.commit("m1", &[x, y]);
        let m2 = graph.commit("m2", &[y, x]);
        let source = graph.build();

        // Both x and y are minimal; the first parent of b wins.
        assert_eq!(merge_base(&source, &m1, &m2, &options()).unwrap(), Some(y));
        assert_eq!(merge_base(&source, &m2, &m1, &options()).unwrap(), Some(x));
    }

    #[test]
    fn lookup_failure_on_the_b_side_propagates() {
        let mut graph = GraphBuilder::new();
        let root = graph.commit("root", &[]);
        let missing = GraphBuilder::id_for("missing");
        let b = graph.commit("b", &[missing]);
        let source = graph.build();

        let err = merge_base(&source, &root, &b, &options()).unwrap_err();
        assert_eq!(err.failed_commit(), Some(&missing));
    }
}
