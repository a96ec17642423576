//! In-memory commit graphs.

use std::collections::HashMap;

use lineage_hash::collections::CommitMap;
use lineage_hash::{hex, CommitId};

use crate::{CommitSource, SourceError};

/// Maximum number of symbolic hops followed when resolving a reference.
const MAX_SYMREF_DEPTH: usize = 5;

/// Reference namespaces tried, in order, after the exact name.
const REF_PREFIXES: &[&str] = &["refs/heads/", "refs/tags/", "refs/remotes/", "refs/"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum RefTarget {
    Direct(CommitId),
    Symbolic(String),
}

/// A commit graph held entirely in memory.
///
/// Commits are stored as an adjacency list from each id to its parent ids.
/// References may point at a commit directly or at another reference by name
/// (as `HEAD` usually does).
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    parents: CommitMap<Vec<CommitId>>,
    refs: HashMap<String, RefTarget>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a commit and its parents. Re-inserting an id replaces its
    /// parent list.
    pub fn insert_commit(&mut self, id: CommitId, parents: Vec<CommitId>) {
        self.parents.insert(id, parents);
    }

    /// Point `name` directly at `id`.
    pub fn set_reference(&mut self, name: impl Into<String>, id: CommitId) {
        self.refs.insert(name.into(), RefTarget::Direct(id));
    }

    /// Point `name` at another reference.
    pub fn set_symbolic_reference(&mut self, name: impl Into<String>, target: impl Into<String>) {
        self.refs.insert(name.into(), RefTarget::Symbolic(target.into()));
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.parents.contains_key(id)
    }

    fn lookup_ref(&self, name: &str) -> Option<&RefTarget> {
        if let Some(target) = self.refs.get(name) {
            return Some(target);
        }
        REF_PREFIXES
            .iter()
            .find_map(|prefix| self.refs.get(&format!("{prefix}{name}")))
    }
}

impl CommitSource for MemorySource {
    fn parents(&self, id: &CommitId) -> Result<Vec<CommitId>, SourceError> {
        self.parents
            .get(id)
            .cloned()
            .ok_or(SourceError::NotFound(*id))
    }

    fn resolve_reference(&self, name: &str) -> Result<CommitId, SourceError> {
        let mut current = name;
        for _ in 0..=MAX_SYMREF_DEPTH {
            match self.lookup_ref(current) {
                Some(RefTarget::Direct(id)) => return Ok(*id),
                Some(RefTarget::Symbolic(target)) => current = target,
                None => break,
            }
        }

        // A full hex id naming a known commit resolves to itself.
        if name.len() == CommitId::HEX_LEN && hex::is_hex(name) {
            if let Ok(id) = CommitId::from_hex(name) {
                if self.contains(&id) {
                    return Ok(id);
                }
            }
        }

        Err(SourceError::ReferenceNotFound(name.to_string()))
    }
}

/// Builds a [`MemorySource`] from human-readable commit names.
///
/// Each commit name is hashed into a stable [`CommitId`], so the same history
/// always produces the same ids. Names must be unique within one builder.
///
/// ```
/// use lineage_source::{CommitSource, GraphBuilder};
///
/// let mut graph = GraphBuilder::new();
/// let root = graph.commit("root", &[]);
/// let tip = graph.commit("tip", &[root]);
/// graph.branch("main", tip);
/// let source = graph.build();
///
/// assert_eq!(source.resolve_reference("main").unwrap(), tip);
/// assert_eq!(source.parents(&tip).unwrap(), vec![root]);
/// ```
#[derive(Debug, Default)]
pub struct GraphBuilder {
    source: MemorySource,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id a commit named `name` receives.
    pub fn id_for(name: &str) -> CommitId {
        CommitId::digest(format!("commit {name}").as_bytes())
    }

    /// Add a commit named `name` with the given parents and return its id.
    pub fn commit(&mut self, name: &str, parents: &[CommitId]) -> CommitId {
        let id = Self::id_for(name);
        self.source.insert_commit(id, parents.to_vec());
        id
    }

    /// Add `len` commits in a line on top of `base` (or from a new root when
    /// `base` is `None`), named `{prefix}-0`, `{prefix}-1`, ... Returns the
    /// ids oldest first.
    pub fn chain(&mut self, prefix: &str, len: usize, base: Option<CommitId>) -> Vec<CommitId> {
        let mut ids = Vec::with_capacity(len);
        let mut parent = base;
        for i in 0..len {
            let parents: Vec<CommitId> = parent.into_iter().collect();
            let id = self.commit(&format!("{prefix}-{i}"), &parents);
            ids.push(id);
            parent = Some(id);
        }
        ids
    }

    /// Create or move `refs/heads/{name}`.
    pub fn branch(&mut self, name: &str, id: CommitId) -> &mut Self {
        self.source.set_reference(format!("refs/heads/{name}"), id);
        self
    }

    /// Create or move `refs/tags/{name}`.
    pub fn tag(&mut self, name: &str, id: CommitId) -> &mut Self {
        self.source.set_reference(format!("refs/tags/{name}"), id);
        self
    }

    /// Point `HEAD` at the branch `name`.
    pub fn head(&mut self, name: &str) -> &mut Self {
        self.source
            .set_symbolic_reference("HEAD", format!("refs/heads/{name}"));
        self
    }

    pub fn build(self) -> MemorySource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_commit_is_not_found() {
        let source = MemorySource::new();
        let id = GraphBuilder::id_for("ghost");
        assert!(matches!(
            source.parents(&id),
            Err(SourceError::NotFound(missing)) if missing == id
        ));
    }

    #[test]
    fn root_has_no_parents() {
        let mut graph = GraphBuilder::new();
        let root = graph.commit("root", &[]);
        let source = graph.build();
        assert!(source.parents(&root).unwrap().is_empty());
    }

    #[test]
    fn parent_order_is_preserved() {
        let mut graph = GraphBuilder::new();
        let a = graph.commit("a", &[]);
        let b = graph.commit("b", &[]);
        let c = graph.commit("c", &[]);
        let m = graph.commit("m", &[c, a, b]);
        let source = graph.build();
        assert_eq!(source.parents(&m).unwrap(), vec![c, a, b]);
    }

    #[test]
    fn resolves_short_branch_and_tag_names() {
        let mut graph = GraphBuilder::new();
        let root = graph.commit("root", &[]);
        let next = graph.commit("next", &[root]);
        graph.branch("main", next).tag("v1", root);
        let source = graph.build();

        assert_eq!(source.resolve_reference("main").unwrap(), next);
        assert_eq!(source.resolve_reference("refs/heads/main").unwrap(), next);
        assert_eq!(source.resolve_reference("v1").unwrap(), root);
    }

    #[test]
    fn head_follows_symbolic_reference() {
        let mut graph = GraphBuilder::new();
        let root = graph.commit("root", &[]);
        graph.branch("main", root).head("main");
        let mut source = graph.build();
        assert_eq!(source.resolve_reference("HEAD").unwrap(), root);

        let next = GraphBuilder::id_for("next");
        source.insert_commit(next, vec![root]);
        source.set_reference("refs/heads/main", next);
        assert_eq!(source.resolve_reference("HEAD").unwrap(), next);
    }

    #[test]
    fn symbolic_loop_is_not_found() {
        let mut source = MemorySource::new();
        source.set_symbolic_reference("a", "b");
        source.set_symbolic_reference("b", "a");
        let err = source.resolve_reference("a").unwrap_err();
        assert!(err.is_reference_not_found());
    }

    #[test]
    fn hex_id_resolves_only_when_known() {
        let mut graph = GraphBuilder::new();
        let root = graph.commit("root", &[]);
        let source = graph.build();

        assert_eq!(source.resolve_reference(&root.to_hex()).unwrap(), root);
        let unknown = GraphBuilder::id_for("elsewhere").to_hex();
        assert!(source.resolve_reference(&unknown).unwrap_err().is_reference_not_found());
    }

    #[test]
    fn missing_name_is_reference_not_found() {
        let source = MemorySource::new();
        match source.resolve_reference("feature/new") {
            Err(SourceError::ReferenceNotFound(name)) => assert_eq!(name, "feature/new"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn chain_links_each_commit_to_previous() {
        let mut graph = GraphBuilder::new();
        let base = graph.commit("base", &[]);
        let ids = graph.chain("c", 3, Some(base));
        assert_eq!(ids[0], GraphBuilder::id_for("c-0"));
        let source = graph.build();
        assert_eq!(source.parents(&ids[0]).unwrap(), vec![base]);
        assert_eq!(source.parents(&ids[2]).unwrap(), vec![ids[1]]);
        assert!(source.contains(&ids[2]));
    }
}
