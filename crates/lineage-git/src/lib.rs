//! A [`CommitSource`] backed by an on-disk git repository.
//!
//! Commit parents are read through libgit2, and reference names accept
//! anything `git rev-parse` does (`HEAD`, `main`, `origin/main`, `v1.2`,
//! `HEAD~3`, full or abbreviated hex ids), always peeled to a commit.

use std::path::Path;

use git2::{ErrorClass, ErrorCode, Oid, Repository};
use lineage_hash::CommitId;
use lineage_source::{CommitSource, SourceError};
use tracing::trace;

/// Read-only commit source over a git repository.
pub struct RepoSource {
    repo: Repository,
}

impl RepoSource {
    /// Find the repository containing `path`, searching parent directories.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, git2::Error> {
        Ok(Self {
            repo: Repository::discover(path)?,
        })
    }

    pub fn from_repository(repo: Repository) -> Self {
        Self { repo }
    }

    /// Root of the work tree, or the git dir for bare repositories.
    pub fn root(&self) -> &Path {
        self.repo.workdir().unwrap_or_else(|| self.repo.path())
    }
}

impl CommitSource for RepoSource {
    fn parents(&self, id: &CommitId) -> Result<Vec<CommitId>, SourceError> {
        let commit = self
            .repo
            .find_commit(to_oid(id)?)
            .map_err(|err| lookup_error(id, err))?;
        let parents = commit
            .parent_ids()
            .map(to_commit_id)
            .collect::<Result<Vec<CommitId>, _>>()?;
        trace!(commit = %id, parents = parents.len(), "read commit parents");
        Ok(parents)
    }

    fn resolve_reference(&self, name: &str) -> Result<CommitId, SourceError> {
        let object = self
            .repo
            .revparse_single(name)
            .map_err(|err| resolve_error(name, err))?;
        let commit = object.peel_to_commit().map_err(|err| {
            SourceError::Backend(format!("'{name}' does not name a commit: {}", err.message()))
        })?;
        to_commit_id(commit.id())
    }
}

/// Convert a libgit2 object id. Ids that are not 20 bytes long are rejected.
pub fn to_commit_id(oid: Oid) -> Result<CommitId, SourceError> {
    CommitId::from_bytes(oid.as_bytes()).map_err(|err| SourceError::Backend(err.to_string()))
}

pub fn to_oid(id: &CommitId) -> Result<Oid, SourceError> {
    Oid::from_bytes(id.as_bytes()).map_err(|err| SourceError::Backend(err.message().to_string()))
}

fn lookup_error(id: &CommitId, err: git2::Error) -> SourceError {
    match (err.code(), err.class()) {
        (ErrorCode::NotFound, _) => SourceError::NotFound(*id),
        (_, ErrorClass::Odb | ErrorClass::Object | ErrorClass::Zlib) => SourceError::Corrupt {
            oid: *id,
            reason: err.message().to_string(),
        },
        _ => SourceError::Backend(err.message().to_string()),
    }
}

fn resolve_error(name: &str, err: git2::Error) -> SourceError {
    match err.code() {
        ErrorCode::NotFound | ErrorCode::UnbornBranch | ErrorCode::InvalidSpec => {
            SourceError::ReferenceNotFound(name.to_string())
        }
        _ => SourceError::Backend(format!("cannot resolve '{name}': {}", err.message())),
    }
}
