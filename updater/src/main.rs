//! Keyguard PKGBUILD updater CLI entrypoint.
//!
//! This binary rewrites the version, release tag, and checksum fields of the
//! keyguard-bin PKGBUILD to match the latest upstream GitHub release.

use clap::Parser;
use pkgbuild_updater::cli::Cli;
use pkgbuild_updater::error::Result;
use pkgbuild_updater::logging;
use pkgbuild_updater::pipeline::run_update;
use pkgbuild_updater::release::source::GitHubReleaseSource;
use std::io::Write;

fn main() {
    let cli = Cli::parse();
    logging::init();
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run_update(&cli, &GitHubReleaseSource, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn exit_code_for_run_result(result: Result<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_stderr_line(stderr, format!("error: {err}"));
            1
        }
    }
}

fn write_stderr_line(stderr: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(stderr, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkgbuild_updater::error::UpdaterError;
    use pkgbuild_updater::pkgbuild::error::PkgbuildError;
    use pkgbuild_updater::pkgbuild::field::PkgbuildField;

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_for_run_result_prints_error_and_returns_one() {
        let err = UpdaterError::from(PkgbuildError::FieldNotFound(PkgbuildField::ReleaseTag));

        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Err(err), &mut stderr);
        assert_eq!(exit_code, 1);

        let stderr_text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert_eq!(stderr_text, "error: _releaseTag not found in PKGBUILD\n");
    }
}
