//! Release metadata retrieval and artefact extraction.
//!
//! The GitHub "latest release" payload is fetched through a
//! [`source::ReleaseSource`], decoded into [`model::Release`], and reduced to
//! the values the PKGBUILD needs by [`extract::extract_release_info`].
//!
//! # Sub-modules
//!
//! - [`arch`] — Supported Linux architectures and their asset suffixes.
//! - [`error`] — Fetch and extraction error types.
//! - [`extract`] — Release-to-[`extract::ReleaseInfo`] reduction.
//! - [`model`] — Serde model of the GitHub release payload.
//! - [`sha256_digest`] — SHA-256 digest newtype (`Sha256Digest`).
//! - [`source`] — Release source trait and HTTP implementation.
//! - [`version`] — Package version newtype (`PackageVersion`).

pub mod arch;
pub mod error;
pub mod extract;
pub mod model;
pub mod sha256_digest;
pub mod source;
pub mod version;
