//! Commit identity for the lineage commit-graph engine.
//!
//! This crate provides the fixed-size `CommitId` type, hex encoding/decoding,
//! and the hash-keyed collections the traversal code builds its visited sets
//! and ancestor sets from.

mod error;
pub mod hex;
mod id;
pub mod collections;

pub use error::HashError;
pub use id::CommitId;
