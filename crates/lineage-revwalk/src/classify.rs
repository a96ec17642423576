use lineage_hash::CommitId;
use lineage_source::CommitSource;

use crate::walk::read_parents;
use crate::WalkError;

/// A commit with more than one parent is a merge.
pub fn is_merge(parents: &[CommitId]) -> bool {
    parents.len() > 1
}

/// Fetch the parents of `id` and classify it.
pub(crate) fn is_merge_commit<S: CommitSource + ?Sized>(
    source: &S,
    id: &CommitId,
) -> Result<bool, WalkError> {
    Ok(is_merge(&read_parents(source, id)?))
}
