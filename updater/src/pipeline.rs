//! Update pipeline orchestration.
//!
//! Reads the PKGBUILD, fetches and reduces the latest release, rewrites the
//! owned fields, and writes the result. The first failure aborts the run;
//! nothing is written unless every earlier stage succeeded.

use crate::cli::Cli;
use crate::error::{Result, UpdaterError};
use crate::output::{DONE_MESSAGE, release_summary, write_line};
use crate::pkgbuild::update::update_pkgbuild;
use crate::release::extract::extract_release_info;
use crate::release::source::{ReleaseSource, fetch_latest_release};
use log::debug;
use std::io::Write;

/// Run one update from `args.input` to `args.output`.
///
/// Progress lines are written to `stdout`. The release is obtained from
/// `source`, which is [`crate::release::source::GitHubReleaseSource`] in
/// production.
///
/// # Errors
///
/// Returns an [`UpdaterError`] if the input cannot be read, the release
/// cannot be fetched or lacks required data, the PKGBUILD lacks an owned
/// field, the output cannot be written, or `stdout` rejects a progress line.
pub fn run_update(args: &Cli, source: &dyn ReleaseSource, stdout: &mut dyn Write) -> Result<()> {
    write_line(stdout, format!("Reading PKGBUILD from: {}", args.input))?;
    let content =
        std::fs::read_to_string(&args.input).map_err(|source| UpdaterError::ReadInput {
            path: args.input.clone(),
            source,
        })?;

    write_line(stdout, "Fetching latest release from GitHub...")?;
    let release = fetch_latest_release(source)?;
    let info = extract_release_info(&release)?;
    write_line(stdout, release_summary(&info))?;

    write_line(stdout, "Updating PKGBUILD...")?;
    let updated = update_pkgbuild(&content, &info)?;

    write_line(stdout, format!("Writing updated PKGBUILD to: {}", args.output))?;
    if args.is_in_place() {
        debug!("overwriting {} in place", args.output);
    }
    std::fs::write(&args.output, updated).map_err(|source| UpdaterError::WriteOutput {
        path: args.output.clone(),
        source,
    })?;

    write_line(stdout, DONE_MESSAGE)?;
    Ok(())
}
