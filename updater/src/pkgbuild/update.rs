//! Field substitution and read-back.

use super::error::{PkgbuildError, Result};
use super::field::PkgbuildField;
use crate::release::arch::Architecture;
use crate::release::extract::ReleaseInfo;
use log::{debug, trace};
use regex::NoExpand;

/// Revision that `pkgrel` restarts from when the version changes.
const INITIAL_PKGREL: &str = "1";

/// Current values of the five owned fields, unquoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkgbuildFields {
    /// `pkgver` value.
    pub pkgver: String,
    /// `pkgrel` value.
    pub pkgrel: String,
    /// `_releaseTag` value without quotes.
    pub release_tag: String,
    /// Single `sha256sums_x86_64` entry without quotes.
    pub sha256_x86_64: String,
    /// Single `sha256sums_aarch64` entry without quotes.
    pub sha256_aarch64: String,
}

/// Rewrite the PKGBUILD fields to describe the release in `info`.
///
/// `pkgrel` is reset to 1 only when the new version differs from the
/// current `pkgver` text as written (plain string comparison, so a quoted or
/// padded `pkgver` counts as different); otherwise the line is left
/// untouched. All other lines are preserved verbatim.
///
/// # Errors
///
/// Returns [`PkgbuildError::FieldNotFound`] for the first owned field that
/// has no matching line. `pkgrel` is only required when the version changes.
///
/// # Examples
///
/// ```
/// use pkgbuild_updater::pkgbuild::update::update_pkgbuild;
/// use pkgbuild_updater::release::extract::ReleaseInfo;
/// use pkgbuild_updater::release::sha256_digest::Sha256Digest;
/// use pkgbuild_updater::release::version::PackageVersion;
///
/// let hash = "b".repeat(64);
/// let info = ReleaseInfo::new(
///     PackageVersion::from_asset_name("Keyguard-1.0.1-linux-x86_64.tar.gz").unwrap(),
///     "r2".to_owned(),
///     Sha256Digest::try_from(hash.as_str()).unwrap(),
///     Sha256Digest::try_from(hash.as_str()).unwrap(),
/// );
/// let pkgbuild = "pkgver=1.0.0\npkgrel=5\n_releaseTag='r1'\n\
///                 sha256sums_x86_64=('a')\nsha256sums_aarch64=('b')\n";
/// let updated = update_pkgbuild(pkgbuild, &info).unwrap();
/// assert!(updated.starts_with("pkgver=1.0.1\npkgrel=1\n"));
/// ```
pub fn update_pkgbuild(content: &str, info: &ReleaseInfo) -> Result<String> {
    let current_version = PkgbuildField::Pkgver
        .read_raw(content)
        .ok_or(PkgbuildError::FieldNotFound(PkgbuildField::Pkgver))?
        .to_owned();
    let new_version = info.version().as_str();

    let mut updated = replace_field(content, PkgbuildField::Pkgver, new_version)?;

    if current_version == new_version {
        debug!("version {new_version} unchanged; keeping pkgrel");
    } else {
        debug!("version {current_version} -> {new_version}; resetting pkgrel");
        updated = replace_field(&updated, PkgbuildField::Pkgrel, INITIAL_PKGREL)?;
    }

    updated = replace_field(&updated, PkgbuildField::ReleaseTag, info.release_tag())?;

    for arch in Architecture::ALL {
        updated = replace_field(
            &updated,
            PkgbuildField::checksums_for(arch),
            info.sha256(arch).as_str(),
        )?;
    }

    Ok(updated)
}

/// Read the five owned fields through the same patterns the updater uses.
///
/// # Errors
///
/// Returns [`PkgbuildError::FieldNotFound`] for the first field that has no
/// matching line.
pub fn read_fields(content: &str) -> Result<PkgbuildFields> {
    let read = |field: PkgbuildField| {
        field
            .read(content)
            .map(str::to_owned)
            .ok_or(PkgbuildError::FieldNotFound(field))
    };
    Ok(PkgbuildFields {
        pkgver: read(PkgbuildField::Pkgver)?,
        pkgrel: read(PkgbuildField::Pkgrel)?,
        release_tag: read(PkgbuildField::ReleaseTag)?,
        sha256_x86_64: read(PkgbuildField::Sha256SumsX86_64)?,
        sha256_aarch64: read(PkgbuildField::Sha256SumsAarch64)?,
    })
}

/// Replace every assignment line of `field` with one carrying `value`.
fn replace_field(content: &str, field: PkgbuildField, value: &str) -> Result<String> {
    let pattern = field.pattern();
    let count = pattern.find_iter(content).count();
    if count == 0 {
        return Err(PkgbuildError::FieldNotFound(field));
    }
    trace!("rewriting {count} {field} line(s)");
    let line = field.render(value);
    Ok(pattern.replace_all(content, NoExpand(&line)).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::sha256_digest::Sha256Digest;
    use crate::release::version::PackageVersion;
    use rstest::{fixture, rstest};

    const HASH_X86: &str = "abc1230000000000000000000000000000000000000000000000000000000000";
    const HASH_ARM: &str = "def4560000000000000000000000000000000000000000000000000000000000";

    const PKGBUILD: &str = "\
# Maintainer: Example <maint@example.test>
pkgname=keyguard-bin
pkgver=2.3.2
pkgrel=3
_releaseTag='v2.3.2'
pkgdesc='Alternative client for the Bitwarden platform'
arch=('x86_64' 'aarch64')
source_x86_64=(\"https://github.com/AChep/keyguard-app/releases/download/${_releaseTag}/Keyguard-${pkgver}-linux-x86_64.tar.gz\")
source_aarch64=(\"https://github.com/AChep/keyguard-app/releases/download/${_releaseTag}/Keyguard-${pkgver}-linux-aarch64.tar.gz\")
sha256sums_x86_64=('old1')
sha256sums_aarch64=('old2')

package() {
  install -Dm755 keyguard \"$pkgdir/usr/bin/keyguard\"
}
";

    fn info(version: &str, tag: &str) -> ReleaseInfo {
        ReleaseInfo::new(
            PackageVersion::from_asset_name(&format!("Keyguard-{version}-linux-x86_64.tar.gz"))
                .expect("test version"),
            tag.to_owned(),
            Sha256Digest::try_from(HASH_X86).expect("test digest"),
            Sha256Digest::try_from(HASH_ARM).expect("test digest"),
        )
    }

    #[fixture]
    fn new_release() -> ReleaseInfo {
        info("2.3.3", "v2.3.3")
    }

    #[rstest]
    fn rewrites_owned_fields_and_preserves_the_rest(new_release: ReleaseInfo) {
        let updated = update_pkgbuild(PKGBUILD, &new_release).expect("update succeeds");
        let expected = PKGBUILD
            .replace("pkgver=2.3.2", "pkgver=2.3.3")
            .replace("pkgrel=3", "pkgrel=1")
            .replace("_releaseTag='v2.3.2'", "_releaseTag='v2.3.3'")
            .replace("('old1')", &format!("('{HASH_X86}')"))
            .replace("('old2')", &format!("('{HASH_ARM}')"));
        assert_eq!(updated, expected);
    }

    #[rstest]
    #[case::same_version("1.0.0", "5")]
    #[case::new_version("1.0.1", "1")]
    fn pkgrel_resets_only_on_version_change(#[case] version: &str, #[case] expected: &str) {
        let content = PKGBUILD
            .replace("pkgver=2.3.2", "pkgver=1.0.0")
            .replace("pkgrel=3", "pkgrel=5");
        let updated = update_pkgbuild(&content, &info(version, "r1")).expect("update succeeds");
        assert_eq!(PkgbuildField::Pkgrel.read(&updated), Some(expected));
    }

    #[rstest]
    #[case::single_quoted("pkgver='2.3.3'")]
    #[case::double_quoted("pkgver=\"2.3.3\"")]
    #[case::trailing_space("pkgver=2.3.3 ")]
    fn pkgver_is_compared_as_written(#[case] pkgver_line: &str) {
        let content = PKGBUILD
            .replace("pkgver=2.3.2", pkgver_line)
            .replace("pkgrel=3", "pkgrel=5");
        let updated = update_pkgbuild(&content, &info("2.3.3", "v2.3.3")).expect("update");
        assert!(updated.contains("\npkgver=2.3.3\npkgrel=1\n"));
    }

    #[rstest]
    fn unchanged_version_leaves_pkgrel_line_verbatim() {
        let content = PKGBUILD
            .replace("pkgver=2.3.2", "pkgver=2.3.3")
            .replace("pkgrel=3", "pkgrel=4 # rebuild");
        let updated = update_pkgbuild(&content, &info("2.3.3", "v2.3.3")).expect("update");
        assert!(updated.contains("\npkgrel=4 # rebuild\n"));
    }

    #[rstest]
    fn update_is_idempotent(new_release: ReleaseInfo) {
        let once = update_pkgbuild(PKGBUILD, &new_release).expect("first update");
        let twice = update_pkgbuild(&once, &new_release).expect("second update");
        assert_eq!(once, twice);
    }

    #[rstest]
    fn updated_fields_read_back(new_release: ReleaseInfo) {
        let updated = update_pkgbuild(PKGBUILD, &new_release).expect("update succeeds");
        let fields = read_fields(&updated).expect("all fields present");
        assert_eq!(
            fields,
            PkgbuildFields {
                pkgver: "2.3.3".to_owned(),
                pkgrel: "1".to_owned(),
                release_tag: "v2.3.3".to_owned(),
                sha256_x86_64: HASH_X86.to_owned(),
                sha256_aarch64: HASH_ARM.to_owned(),
            }
        );
    }

    #[rstest]
    #[case::pkgver("pkgver=2.3.2\n", PkgbuildField::Pkgver)]
    #[case::pkgrel("pkgrel=3\n", PkgbuildField::Pkgrel)]
    #[case::release_tag("_releaseTag='v2.3.2'\n", PkgbuildField::ReleaseTag)]
    #[case::x86_64("sha256sums_x86_64=('old1')\n", PkgbuildField::Sha256SumsX86_64)]
    #[case::aarch64("sha256sums_aarch64=('old2')\n", PkgbuildField::Sha256SumsAarch64)]
    fn missing_field_is_reported(
        new_release: ReleaseInfo,
        #[case] line: &str,
        #[case] field: PkgbuildField,
    ) {
        let content = PKGBUILD.replace(line, "");
        assert_eq!(
            update_pkgbuild(&content, &new_release),
            Err(PkgbuildError::FieldNotFound(field))
        );
    }

    #[test]
    fn missing_pkgrel_is_tolerated_when_version_is_unchanged() {
        let content = PKGBUILD.replace("pkgrel=3\n", "");
        let updated = update_pkgbuild(&content, &info("2.3.2", "v2.3.2")).expect("update");
        assert!(PkgbuildField::Pkgrel.read(&updated).is_none());
    }

    #[test]
    fn dollar_signs_in_values_are_inserted_literally() {
        let updated = update_pkgbuild(PKGBUILD, &info("2.3.3", "$1${pkgver}")).expect("update");
        assert!(updated.contains("\n_releaseTag='$1${pkgver}'\n"));
    }

    #[test]
    fn crlf_line_endings_are_preserved() {
        let content = PKGBUILD.replace('\n', "\r\n");
        let updated = update_pkgbuild(&content, &info("2.3.3", "v2.3.3")).expect("update");
        assert!(updated.contains("\r\npkgver=2.3.3\r\npkgrel=1\r\n"));
        assert!(!updated.contains("\n\n"));
    }
}
