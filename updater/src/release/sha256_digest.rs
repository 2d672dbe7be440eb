//! SHA-256 digest newtype for PKGBUILD checksums.
//!
//! GitHub reports asset digests as `sha256:<hex>`. The hex part is kept
//! exactly as published, letter case included, once it is known to be 64
//! hex digits long.

use std::fmt;
use thiserror::Error;

/// Prefix GitHub puts in front of SHA-256 asset digests.
pub const SHA256_PREFIX: &str = "sha256:";

/// Number of hex digits in a SHA-256 digest.
const DIGEST_HEX_LEN: usize = 64;

/// Why a string is not a hex-encoded SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigestFormatError {
    /// A character outside `0-9`, `a-f`, `A-F`.
    #[error("'{0}' is not a hex digit")]
    NotHex(char),

    /// All hex digits, but the wrong count.
    #[error("{0} hex digits where SHA-256 needs {DIGEST_HEX_LEN}")]
    WrongLength(usize),
}

/// A hex-encoded SHA-256 digest, stored as published.
///
/// # Examples
///
/// ```
/// use pkgbuild_updater::release::sha256_digest::Sha256Digest;
///
/// let hex = "A".repeat(64);
/// let digest: Sha256Digest = hex.as_str().try_into().unwrap();
/// assert_eq!(digest.as_str(), hex);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sha256Digest(String);

impl Sha256Digest {
    /// Return the hex part of a GitHub `sha256:<hex>` digest field.
    ///
    /// Returns `None` when the field does not carry the `sha256:` prefix.
    #[must_use]
    pub fn strip_prefix(field: &str) -> Option<&str> {
        field.strip_prefix(SHA256_PREFIX)
    }

    /// Return the digest as a hex string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Sha256Digest {
    type Error = DigestFormatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        check_hex_digest(value)?;
        Ok(Self(value.to_owned()))
    }
}

impl AsRef<str> for Sha256Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Accept exactly 64 ASCII hex digits of either case.
fn check_hex_digest(value: &str) -> Result<(), DigestFormatError> {
    if let Some(bad) = value.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(DigestFormatError::NotHex(bad));
    }
    match value.len() {
        DIGEST_HEX_LEN => Ok(()),
        len => Err(DigestFormatError::WrongLength(len)),
    }
}
