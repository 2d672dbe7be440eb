//! Error types for release retrieval and artefact extraction.
//!
//! Fetch failures and malformed-release failures are kept apart so the
//! operator can tell a network problem from an upstream publishing problem.

use super::arch::Architecture;
use super::sha256_digest::DigestFormatError;
use thiserror::Error;

/// Errors arising while retrieving or decoding the release payload.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP request failed or timed out.
    #[error("request to {url} failed: {reason}")]
    Http {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The release endpoint returned HTTP 404.
    #[error("no release found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The response body was not a valid release payload.
    #[error("release response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors arising from a release that lacks the data the PKGBUILD needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// The release has no tag name, or it is empty.
    #[error("release tag not found in API response")]
    MissingTag,

    /// The release carries no assets.
    #[error("no assets found in release")]
    NoAssets,

    /// No asset matched the architecture's Linux archive suffix.
    #[error("Linux {arch} artefact not found in release")]
    ArtefactNotFound {
        /// The architecture whose archive is missing.
        arch: Architecture,
    },

    /// The x86_64 asset name does not embed a `MAJOR.MINOR.PATCH` version.
    #[error("could not extract version from asset name: {name}")]
    VersionNotFound {
        /// The offending asset name.
        name: String,
    },

    /// The asset has no digest, or the digest is not SHA-256.
    #[error("SHA-256 digest not found for asset: {name}")]
    MissingDigest {
        /// The asset lacking a usable digest.
        name: String,
    },

    /// The asset's SHA-256 digest is not 64 hex digits.
    #[error("malformed SHA-256 digest for asset {name}: {reason}")]
    InvalidDigest {
        /// The asset carrying the malformed digest.
        name: String,
        /// What is wrong with the hex part.
        #[source]
        reason: DigestFormatError,
    },
}

/// Result type alias using [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;
