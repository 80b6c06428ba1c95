//! Checksums for catalog fingerprints

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// SHA256 checksum, hex encoded
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum(String);

impl Checksum {
    pub fn from_bytes(data: &[u8]) -> Self {
        let hash = Sha256::digest(data);
        Self(format!("{:x}", hash))
    }

    /// Checksum of the compact JSON rendering of `value`
    pub fn of_json<T: Serialize + ?Sized>(value: &T) -> crate::Result<Self> {
        let canonical = serde_json::to_vec(value)?;
        Ok(Self::from_bytes(&canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First `len` hex digits, for display
    pub fn short(&self, len: usize) -> &str {
        &self.0[..len.min(self.0.len())]
    }

    /// Compare against a checksum received from elsewhere, ignoring case
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other.trim())
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Checksum {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checksum_consistency() {
        let a = Checksum::of_json(&["Filter", "SortBy"]).unwrap();
        let b = Checksum::of_json(&["Filter", "SortBy"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn test_checksum_different_content() {
        let a = Checksum::of_json(&["Filter"]).unwrap();
        let b = Checksum::of_json(&["SortBy"]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_matches_ignores_case() {
        let c = Checksum::from_bytes(b"fes");
        assert!(c.matches(&c.as_str().to_uppercase()));
        assert_eq!(c.short(8).len(), 8);
    }
}
