//! Package version newtype.
//!
//! The upstream release tag is not a semantic version, so the version that
//! ends up in `pkgver` is read from the Linux archive name instead, e.g.
//! `Keyguard-2.3.3-linux-x86_64.tar.gz` yields `2.3.3`.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

#[expect(
    clippy::expect_used,
    reason = "pattern is a string literal covered by unit tests"
)]
static ASSET_VERSION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Keyguard-(\d+\.\d+\.\d+)-linux").expect("version pattern should compile")
});

/// A `MAJOR.MINOR.PATCH` package version.
///
/// # Examples
///
/// ```
/// use pkgbuild_updater::release::version::PackageVersion;
///
/// let version = PackageVersion::from_asset_name("Keyguard-2.3.3-linux-x86_64.tar.gz");
/// assert_eq!(version.map(|v| v.to_string()), Some("2.3.3".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageVersion(String);

impl PackageVersion {
    /// Read the version embedded in a Linux archive name.
    #[must_use]
    pub fn from_asset_name(name: &str) -> Option<Self> {
        ASSET_VERSION_RE
            .captures(name)
            .and_then(|caps| caps.get(1))
            .map(|m| Self(m.as_str().to_owned()))
    }

    /// Return the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PackageVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::x86_64("Keyguard-2.3.3-linux-x86_64.tar.gz", "2.3.3")]
    #[case::aarch64("Keyguard-10.0.12-linux-aarch64.tar.gz", "10.0.12")]
    #[case::prefixed_path("builds/Keyguard-1.0.0-linux-x86_64.tar.gz", "1.0.0")]
    fn reads_version_from_asset_name(#[case] name: &str, #[case] expected: &str) {
        let version = PackageVersion::from_asset_name(name).expect("version present");
        assert_eq!(version.as_str(), expected);
    }

    #[rstest]
    #[case::lowercase_prefix("keyguard-2.3.3-linux-x86_64.tar.gz")]
    #[case::two_components("Keyguard-2.3-linux-x86_64.tar.gz")]
    #[case::no_version("Keyguard-linux-x86_64.tar.gz")]
    #[case::other_os("Keyguard-2.3.3-macos-x86_64.dmg")]
    fn rejects_names_without_version(#[case] name: &str) {
        assert!(PackageVersion::from_asset_name(name).is_none());
    }
}
