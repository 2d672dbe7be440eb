//! Keyguard PKGBUILD updater library.
//!
//! This crate keeps the `keyguard-bin` PKGBUILD in step with the latest
//! upstream release of `AChep/keyguard-app`. It is used by the
//! `keyguard-pkgbuild-update` binary and can be driven programmatically with
//! an injected [`release::source::ReleaseSource`] for testing.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Top-level error type for an update run
//! - [`logging`] - Diagnostic log subscriber set-up for the binary
//! - [`output`] - Progress and summary text shown to the operator
//! - [`pipeline`] - Read, fetch, extract, update, and write orchestration
//! - [`pkgbuild`] - PKGBUILD field patterns and text substitution
//! - [`release`] - Release metadata retrieval and artefact extraction

pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod pkgbuild;
pub mod release;
