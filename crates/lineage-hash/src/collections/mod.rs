//! Collections keyed by `CommitId`.

mod commit_map;
mod commit_set;

pub use commit_map::CommitMap;
pub use commit_set::CommitSet;
