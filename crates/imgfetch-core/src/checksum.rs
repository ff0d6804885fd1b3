//! Content digests for duplicate detection.
//!
//! Every accepted body is hashed with SHA-256 (lowercase hex). A run keeps
//! the digests of bodies it has already saved in [`SeenDigests`].

use sha2::{Digest, Sha256};
use std::collections::HashSet;

/// SHA-256 of `bytes` as 64 lowercase hex characters.
pub fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// Digests of content already accepted during one run.
#[derive(Debug, Default)]
pub struct SeenDigests {
    digests: HashSet<String>,
}

impl SeenDigests {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if identical content was seen before. First sightings
    /// are remembered; duplicates leave the set unchanged.
    pub fn is_duplicate(&mut self, bytes: &[u8]) -> bool {
        let digest = sha256_hex(bytes);
        if self.digests.contains(&digest) {
            tracing::debug!(%digest, "duplicate content");
            return true;
        }
        self.digests.insert(digest);
        false
    }

    pub fn contains_digest(&self, digest: &str) -> bool {
        self.digests.contains(digest)
    }

    pub fn len(&self) -> usize {
        self.digests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digests.is_empty()
    }
}
