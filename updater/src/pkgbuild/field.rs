//! The PKGBUILD fields owned by the updater.

use crate::release::arch::Architecture;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Compile a multi-line, CRLF-aware assignment pattern for `key`.
///
/// Scalar fields capture everything after `=`; array fields capture the
/// text between the outer parentheses.
#[expect(
    clippy::expect_used,
    reason = "keys are fixed identifiers covered by unit tests"
)]
fn assignment_pattern(key: &str, array: bool) -> Regex {
    let pattern = if array {
        format!(r"(?mR)^{}=\((.+)\)$", regex::escape(key))
    } else {
        format!(r"(?mR)^{}=(.+)$", regex::escape(key))
    };
    Regex::new(&pattern).expect("assignment pattern should compile")
}

static PKGVER_RE: Lazy<Regex> = Lazy::new(|| assignment_pattern("pkgver", false));
static PKGREL_RE: Lazy<Regex> = Lazy::new(|| assignment_pattern("pkgrel", false));
static RELEASE_TAG_RE: Lazy<Regex> = Lazy::new(|| assignment_pattern("_releaseTag", false));
static SHA256SUMS_X86_64_RE: Lazy<Regex> =
    Lazy::new(|| assignment_pattern("sha256sums_x86_64", true));
static SHA256SUMS_AARCH64_RE: Lazy<Regex> =
    Lazy::new(|| assignment_pattern("sha256sums_aarch64", true));

/// A PKGBUILD assignment rewritten by the updater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PkgbuildField {
    /// `pkgver=<version>`.
    Pkgver,
    /// `pkgrel=<revision>`.
    Pkgrel,
    /// `_releaseTag='<tag>'`.
    ReleaseTag,
    /// `sha256sums_x86_64=('<hash>')`.
    Sha256SumsX86_64,
    /// `sha256sums_aarch64=('<hash>')`.
    Sha256SumsAarch64,
}

impl PkgbuildField {
    /// The checksum array for `arch`.
    #[must_use]
    pub const fn checksums_for(arch: Architecture) -> Self {
        match arch {
            Architecture::X86_64 => Self::Sha256SumsX86_64,
            Architecture::Aarch64 => Self::Sha256SumsAarch64,
        }
    }

    /// Variable name as it appears in the PKGBUILD.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Pkgver => "pkgver",
            Self::Pkgrel => "pkgrel",
            Self::ReleaseTag => "_releaseTag",
            Self::Sha256SumsX86_64 => "sha256sums_x86_64",
            Self::Sha256SumsAarch64 => "sha256sums_aarch64",
        }
    }

    /// Line pattern locating the assignment; group 1 captures its value.
    #[must_use]
    pub fn pattern(self) -> &'static Regex {
        match self {
            Self::Pkgver => Lazy::force(&PKGVER_RE),
            Self::Pkgrel => Lazy::force(&PKGREL_RE),
            Self::ReleaseTag => Lazy::force(&RELEASE_TAG_RE),
            Self::Sha256SumsX86_64 => Lazy::force(&SHA256SUMS_X86_64_RE),
            Self::Sha256SumsAarch64 => Lazy::force(&SHA256SUMS_AARCH64_RE),
        }
    }

    /// Render a full assignment line carrying `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgbuild_updater::pkgbuild::field::PkgbuildField;
    ///
    /// assert_eq!(PkgbuildField::Pkgver.render("2.3.3"), "pkgver=2.3.3");
    /// assert_eq!(PkgbuildField::ReleaseTag.render("r1"), "_releaseTag='r1'");
    /// assert_eq!(
    ///     PkgbuildField::Sha256SumsAarch64.render("abc"),
    ///     "sha256sums_aarch64=('abc')"
    /// );
    /// ```
    #[must_use]
    pub fn render(self, value: &str) -> String {
        let key = self.key();
        match self {
            Self::Pkgver | Self::Pkgrel => format!("{key}={value}"),
            Self::ReleaseTag => format!("{key}='{value}'"),
            Self::Sha256SumsX86_64 | Self::Sha256SumsAarch64 => format!("{key}=('{value}')"),
        }
    }

    /// Return the text captured after `=` exactly as written, quotes and
    /// trailing whitespace included.
    #[must_use]
    pub fn read_raw(self, content: &str) -> Option<&str> {
        Some(self.pattern().captures(content)?.get(1)?.as_str())
    }

    /// Read the field's current value from `content`, without quoting.
    #[must_use]
    pub fn read(self, content: &str) -> Option<&str> {
        self.read_raw(content).map(|raw| unquote(raw.trim()))
    }
}

impl fmt::Display for PkgbuildField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Strip one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    ['\'', '"']
        .into_iter()
        .find_map(|q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
        .unwrap_or(value)
}
