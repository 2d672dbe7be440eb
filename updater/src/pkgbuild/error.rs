//! Error types for PKGBUILD substitution.

use super::field::PkgbuildField;
use thiserror::Error;

/// Errors arising from a PKGBUILD that lacks an owned field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PkgbuildError {
    /// No line matched the field's assignment pattern.
    #[error("{0} not found in PKGBUILD")]
    FieldNotFound(PkgbuildField),
}

/// Result type alias using [`PkgbuildError`].
pub type Result<T> = std::result::Result<T, PkgbuildError>;
