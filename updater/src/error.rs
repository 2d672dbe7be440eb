//! Error type for an update run.
//!
//! Each stage of the pipeline has its own error enum; this module wraps them
//! together with the file I/O failures that can occur around them, so the
//! binary has a single type to report.

use crate::pkgbuild::error::PkgbuildError;
use crate::release::error::{ExtractError, FetchError};
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can abort an update run.
#[derive(Debug, Error)]
pub enum UpdaterError {
    /// The input PKGBUILD could not be read.
    #[error("failed to read PKGBUILD from {path}: {source}")]
    ReadInput {
        /// Path that was read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The updated PKGBUILD could not be written.
    #[error("failed to write PKGBUILD to {path}: {source}")]
    WriteOutput {
        /// Path that was written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Progress output could not be written to stdout.
    #[error("failed to write progress output: {source}")]
    WriteFailed {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The latest release could not be retrieved or decoded.
    #[error("failed to fetch latest release: {0}")]
    Fetch(#[from] FetchError),

    /// The release lacks the data the PKGBUILD needs.
    #[error("unusable release: {0}")]
    Extract(#[from] ExtractError),

    /// The PKGBUILD lacks a field the updater rewrites.
    #[error("{0}")]
    Pkgbuild(#[from] PkgbuildError),
}

/// Result type alias using [`UpdaterError`].
pub type Result<T> = std::result::Result<T, UpdaterError>;
