//! PKGBUILD field patterns and text substitution.
//!
//! The PKGBUILD is treated as plain text: each of the five fields the updater
//! owns is located by a line-anchored pattern and rewritten in place, leaving
//! every other line byte-for-byte intact.
//!
//! Checksum arrays must fit on one line between a single pair of
//! parentheses; multi-line arrays are not recognised.
//!
//! # Sub-modules
//!
//! - [`error`] — Missing-field error type.
//! - [`field`] — The owned fields and their line patterns (`PkgbuildField`).
//! - [`update`] — Field substitution and read-back.

pub mod error;
pub mod field;
pub mod update;
