//! Ahead/behind counting between a tip and a reference.

use std::fmt;
use std::ops::ControlFlow;

use lineage_hash::CommitId;
use lineage_source::{CommitSource, SourceError};
use tracing::{debug, warn};

use crate::merge_base::merge_base;
use crate::walk::Walk;
use crate::{WalkError, WalkOptions};

/// What a [`Divergence`] was measured against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DivergenceBasis {
    /// Tip and reference are the same commit.
    Identical,
    /// Counts are relative to this common ancestor.
    MergeBase(CommitId),
    /// The histories share no commit. Each side is counted up to exhaustion,
    /// which over-approximates the true set difference.
    Disjoint,
    /// The named reference does not exist; both counts are zero.
    MissingReference(String),
}

/// Ahead/behind counts of a tip relative to a reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    /// Commits reachable from the tip but not from the reference.
    pub ahead: usize,
    /// Commits reachable from the reference but not from the tip.
    pub behind: usize,
    pub basis: DivergenceBasis,
}

impl Divergence {
    pub fn counts(&self) -> (usize, usize) {
        (self.ahead, self.behind)
    }

    /// Whether the counts came from the no-common-ancestor fallback and
    /// must be presented as approximate.
    pub fn is_approximate(&self) -> bool {
        self.basis == DivergenceBasis::Disjoint
    }

    pub fn merge_base(&self) -> Option<&CommitId> {
        match &self.basis {
            DivergenceBasis::MergeBase(id) => Some(id),
            _ => None,
        }
    }

    fn missing(name: &str) -> Self {
        Self {
            ahead: 0,
            behind: 0,
            basis: DivergenceBasis::MissingReference(name.to_string()),
        }
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ahead, {} behind", self.ahead, self.behind)?;
        match &self.basis {
            DivergenceBasis::Disjoint => f.write_str(" (approximate: no common ancestor)"),
            DivergenceBasis::MissingReference(name) => {
                write!(f, " (reference '{name}' not found)")
            }
            DivergenceBasis::Identical | DivergenceBasis::MergeBase(_) => Ok(()),
        }
    }
}

/// Ahead/behind of the commit named `tip_ref` against `base_ref`.
///
/// A name that does not resolve is not an error: a branch that has never been
/// pushed is an ordinary state, so the result is zero ahead and zero behind
/// with [`DivergenceBasis::MissingReference`]. Store failures while resolving
/// are still reported.
pub(crate) fn ahead_behind<S: CommitSource + ?Sized>(
    source: &S,
    tip_ref: &str,
    base_ref: &str,
    options: &WalkOptions,
) -> Result<Divergence, WalkError> {
    let Some(tip) = resolve_soft(source, tip_ref)? else {
        return Ok(Divergence::missing(tip_ref));
    };
    let Some(base) = resolve_soft(source, base_ref)? else {
        return Ok(Divergence::missing(base_ref));
    };
    ahead_behind_ids(source, &tip, &base, options)
}

/// Ahead/behind of `tip` against `base`.
pub(crate) fn ahead_behind_ids<S: CommitSource + ?Sized>(
    source: &S,
    tip: &CommitId,
    base: &CommitId,
    options: &WalkOptions,
) -> Result<Divergence, WalkError> {
    if tip == base {
        return Ok(Divergence {
            ahead: 0,
            behind: 0,
            basis: DivergenceBasis::Identical,
        });
    }

    let divergence = match merge_base(source, tip, base, options)? {
        Some(common) => Divergence {
            ahead: count_until(source, tip, &common, options)?,
            behind: count_until(source, base, &common, options)?,
            basis: DivergenceBasis::MergeBase(common),
        },
        None => {
            let divergence = Divergence {
                ahead: count_until(source, tip, base, options)?,
                behind: count_until(source, base, tip, options)?,
                basis: DivergenceBasis::Disjoint,
            };
            warn!(
                tip = %tip,
                base = %base,
                ahead = divergence.ahead,
                behind = divergence.behind,
                "no common ancestor; ahead/behind counts are an over-approximation"
            );
            divergence
        }
    };

    debug!(
        tip = %tip,
        base = %base,
        ahead = divergence.ahead,
        behind = divergence.behind,
        "counted divergence"
    );
    Ok(divergence)
}

/// Number of distinct commits met walking from `start` before `stop`.
///
/// The walk ends as soon as `stop` is reached (it is not counted) or the
/// reachable history runs out.
pub(crate) fn count_until<S: CommitSource + ?Sized>(
    source: &S,
    start: &CommitId,
    stop: &CommitId,
    options: &WalkOptions,
) -> Result<usize, WalkError> {
    let mut count = 0usize;
    Walk::new(source, *start, options).run(|id| {
        if id == stop {
            ControlFlow::Break(())
        } else {
            count += 1;
            ControlFlow::Continue(())
        }
    })?;
    Ok(count)
}

fn resolve_soft<S: CommitSource + ?Sized>(
    source: &S,
    name: &str,
) -> Result<Option<CommitId>, WalkError> {
    match source.resolve_reference(name) {
        Ok(id) => Ok(Some(id)),
        Err(SourceError::ReferenceNotFound(_)) => {
            warn!(reference = name, "reference not found; reporting zero divergence");
            Ok(None)
        }
        Err(source) => Err(WalkError::ResolveFailed {
            name: name.to_string(),
            source,
        }),
    }
}
