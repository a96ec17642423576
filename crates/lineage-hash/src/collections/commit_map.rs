use std::collections::HashMap;

use crate::CommitId;

/// Hash map keyed by commit id.
#[derive(Debug, Clone)]
pub struct CommitMap<V> {
    inner: HashMap<CommitId, V>,
}

impl<V> CommitMap<V> {
    pub fn new() -> Self {
        Self {
            inner: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: CommitId, value: V) -> Option<V> {
        self.inner.insert(id, value)
    }

    pub fn get(&self, id: &CommitId) -> Option<&V> {
        self.inner.get(id)
    }

    pub fn contains_key(&self, id: &CommitId) -> bool {
        self.inner.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<V> Default for CommitMap<V> {
    fn default() -> Self {
        Self::new()
    }
}
