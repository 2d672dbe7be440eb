//! CLI argument definitions for the PKGBUILD updater.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use camino::Utf8PathBuf;
use clap::Parser;

/// Update the keyguard-bin PKGBUILD with the latest Keyguard release.
#[derive(Parser, Debug, Clone)]
#[command(name = "keyguard-pkgbuild-update")]
#[command(version, about)]
#[command(long_about = concat!(
    "Update the keyguard-bin PKGBUILD with the latest Keyguard release from GitHub.\n\n",
    "Fetches the latest release of AChep/keyguard-app, reads the SHA-256 digests ",
    "of the Linux x86_64 and aarch64 archives, and rewrites pkgver, pkgrel, ",
    "_releaseTag, sha256sums_x86_64, and sha256sums_aarch64. pkgrel is reset to 1 ",
    "only when the version changes. All other lines are left untouched.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Create an updated copy:\n",
    "    $ keyguard-pkgbuild-update PKGBUILD PKGBUILD.new\n\n",
    "  Update in place:\n",
    "    $ keyguard-pkgbuild-update PKGBUILD PKGBUILD\n\n",
    "Set RUST_LOG=debug to see diagnostic output on stderr.",
))]
pub struct Cli {
    /// Path to the input PKGBUILD file.
    #[arg(value_name = "INPUT")]
    pub input: Utf8PathBuf,

    /// Path to save the updated PKGBUILD file (may equal INPUT).
    #[arg(value_name = "OUTPUT")]
    pub output: Utf8PathBuf,
}

impl Cli {
    /// Whether the output path overwrites the input file.
    #[must_use]
    pub fn is_in_place(&self) -> bool {
        self.input == self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_parses_input_and_output() {
        let cli = Cli::parse_from(["keyguard-pkgbuild-update", "PKGBUILD", "PKGBUILD.new"]);
        assert_eq!(cli.input, Utf8PathBuf::from("PKGBUILD"));
        assert_eq!(cli.output, Utf8PathBuf::from("PKGBUILD.new"));
        assert!(!cli.is_in_place());
    }

    #[test]
    fn cli_detects_in_place_update() {
        let cli = Cli::parse_from(["keyguard-pkgbuild-update", "PKGBUILD", "PKGBUILD"]);
        assert!(cli.is_in_place());
    }

    #[rstest]
    #[case::no_args(&["keyguard-pkgbuild-update"])]
    #[case::input_only(&["keyguard-pkgbuild-update", "PKGBUILD"])]
    #[case::extra_arg(&["keyguard-pkgbuild-update", "a", "b", "c"])]
    #[case::unknown_flag(&["keyguard-pkgbuild-update", "--force", "a", "b"])]
    fn cli_rejects_wrong_arity_and_flags(#[case] args: &[&str]) {
        let result = Cli::try_parse_from(args);
        assert!(result.is_err());
    }
}
