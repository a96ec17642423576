use std::fmt;
use std::str::FromStr;

use sha1::{Digest, Sha1};

use crate::{hex, HashError};

/// Identity of a commit: a fixed-size opaque 20-byte hash.
///
/// Ids are compared, ordered and hashed by their raw bytes. The graph
/// algorithms never interpret the content beyond equality.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommitId([u8; 20]);

impl CommitId {
    /// Length of the raw hash in bytes.
    pub const LEN: usize = 20;
    /// Length of the hex rendering.
    pub const HEX_LEN: usize = 40;

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Create an id from a raw byte slice of exactly [`CommitId::LEN`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, HashError> {
        let arr: [u8; 20] = bytes.try_into().map_err(|_| HashError::InvalidHashLength {
            expected: Self::LEN,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Parse a full 40-character hex id (case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, HashError> {
        let mut bytes = [0u8; 20];
        hex::decode_into(s, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// SHA-1 of arbitrary content, used to mint stable ids for synthetic
    /// histories.
    pub fn digest(content: &[u8]) -> Self {
        let out = Sha1::digest(content);
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&out);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// First `len` hex characters, clamped to the full length.
    pub fn short(&self, len: usize) -> String {
        let mut hex = self.to_hex();
        hex.truncate(len.min(Self::HEX_LEN));
        hex
    }
}

impl fmt::Display for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for CommitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitId({})", self.short(8))
    }
}

impl FromStr for CommitId {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
