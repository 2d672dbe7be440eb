//! Operator-facing progress text.
//!
//! Progress goes to stdout; diagnostics go through `log` and errors to
//! stderr, so the lines here stay stable for anyone scraping them. A stdout
//! that cannot be written to fails the run.

use crate::error::{Result, UpdaterError};
use crate::release::arch::Architecture;
use crate::release::extract::ReleaseInfo;
use std::io::Write;

/// Format the extracted release values, one indented line each.
///
/// # Example
///
/// ```
/// use pkgbuild_updater::output::release_summary;
/// use pkgbuild_updater::release::extract::ReleaseInfo;
/// use pkgbuild_updater::release::sha256_digest::Sha256Digest;
/// use pkgbuild_updater::release::version::PackageVersion;
///
/// let hash = "0".repeat(64);
/// let info = ReleaseInfo::new(
///     PackageVersion::from_asset_name("Keyguard-2.3.3-linux-x86_64.tar.gz").unwrap(),
///     "r1".to_owned(),
///     Sha256Digest::try_from(hash.as_str()).unwrap(),
///     Sha256Digest::try_from(hash.as_str()).unwrap(),
/// );
/// let summary = release_summary(&info);
/// assert!(summary.starts_with("  Version: 2.3.3\n  Release tag: r1\n"));
/// ```
#[must_use]
pub fn release_summary(info: &ReleaseInfo) -> String {
    let mut lines = vec![
        format!("  Version: {}", info.version()),
        format!("  Release tag: {}", info.release_tag()),
    ];
    lines.extend(
        Architecture::ALL
            .into_iter()
            .map(|arch| format!("  SHA256 ({arch}): {}", info.sha256(arch))),
    );
    lines.join("\n")
}

/// Message printed once the output file has been written.
pub const DONE_MESSAGE: &str = "Done!";

/// Write one progress line.
///
/// # Errors
///
/// Returns [`UpdaterError::WriteFailed`] if the writer rejects the line.
pub fn write_line(out: &mut dyn Write, message: impl std::fmt::Display) -> Result<()> {
    writeln!(out, "{message}").map_err(|source| UpdaterError::WriteFailed { source })
}
