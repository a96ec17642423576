use std::collections::HashSet;

use crate::CommitId;

/// Hash set of commit ids.
///
/// Used for visited sets during traversal and as the materialized ancestor
/// set of a commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitSet {
    inner: HashSet<CommitId>,
}

impl CommitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an id. Returns `true` if it was not already present.
    pub fn insert(&mut self, id: CommitId) -> bool {
        self.inner.insert(id)
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.inner.contains(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether every id in `self` is also in `other`.
    pub fn is_subset(&self, other: &CommitSet) -> bool {
        self.inner.is_subset(&other.inner)
    }

    /// Ids present in both sets, in unspecified order.
    pub fn intersection<'a>(&'a self, other: &'a CommitSet) -> impl Iterator<Item = &'a CommitId> {
        self.inner.intersection(&other.inner)
    }

    /// Ids sorted by raw bytes, for stable output.
    pub fn to_sorted_vec(&self) -> Vec<CommitId> {
        let mut ids: Vec<CommitId> = self.inner.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl FromIterator<CommitId> for CommitSet {
    fn from_iter<I: IntoIterator<Item = CommitId>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
