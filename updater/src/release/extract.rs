//! Reduction of a release payload to the values the PKGBUILD needs.

use super::arch::Architecture;
use super::error::{ExtractError, Result};
use super::model::{Asset, Release};
use super::sha256_digest::Sha256Digest;
use super::version::PackageVersion;
use log::{debug, warn};

/// Version, tag, and per-architecture checksums of a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInfo {
    version: PackageVersion,
    release_tag: String,
    sha256_x86_64: Sha256Digest,
    sha256_aarch64: Sha256Digest,
}

impl ReleaseInfo {
    /// Assemble release information from already-validated parts.
    #[must_use]
    pub const fn new(
        version: PackageVersion,
        release_tag: String,
        sha256_x86_64: Sha256Digest,
        sha256_aarch64: Sha256Digest,
    ) -> Self {
        Self {
            version,
            release_tag,
            sha256_x86_64,
            sha256_aarch64,
        }
    }

    /// The upstream `MAJOR.MINOR.PATCH` version.
    #[must_use]
    pub const fn version(&self) -> &PackageVersion {
        &self.version
    }

    /// The git tag the release was published under.
    #[must_use]
    pub fn release_tag(&self) -> &str {
        &self.release_tag
    }

    /// Checksum of the Linux archive for `arch`.
    #[must_use]
    pub const fn sha256(&self, arch: Architecture) -> &Sha256Digest {
        match arch {
            Architecture::X86_64 => &self.sha256_x86_64,
            Architecture::Aarch64 => &self.sha256_aarch64,
        }
    }
}

/// The Linux archives found in a release, one slot per architecture.
#[derive(Default)]
struct LinuxAssets<'a> {
    x86_64: Option<&'a Asset>,
    aarch64: Option<&'a Asset>,
}

impl<'a> LinuxAssets<'a> {
    /// Classify assets by suffix in a single pass. A later match for the
    /// same architecture replaces an earlier one.
    fn scan(assets: &'a [Asset]) -> Self {
        let mut found = Self::default();
        for asset in assets {
            let Some(arch) = Architecture::from_asset_name(&asset.name) else {
                continue;
            };
            let slot = found.slot_mut(arch);
            if let Some(previous) = slot.replace(asset) {
                warn!(
                    "multiple {arch} archives in release; using {} over {}",
                    asset.name, previous.name
                );
            }
        }
        found
    }

    fn slot_mut(&mut self, arch: Architecture) -> &mut Option<&'a Asset> {
        match arch {
            Architecture::X86_64 => &mut self.x86_64,
            Architecture::Aarch64 => &mut self.aarch64,
        }
    }

    fn require(&self, arch: Architecture) -> Result<&'a Asset> {
        let slot = match arch {
            Architecture::X86_64 => self.x86_64,
            Architecture::Aarch64 => self.aarch64,
        };
        slot.ok_or(ExtractError::ArtefactNotFound { arch })
    }
}

/// Extract the version, release tag, and Linux archive checksums.
///
/// # Errors
///
/// Returns an [`ExtractError`] if the tag is missing, the release has no
/// assets, either Linux archive is absent, the version cannot be read from
/// the x86_64 archive name, or a digest is missing or not 64 hex digits.
///
/// # Examples
///
/// ```
/// use pkgbuild_updater::release::arch::Architecture;
/// use pkgbuild_updater::release::extract::extract_release_info;
/// use pkgbuild_updater::release::model::{Asset, Release};
///
/// let hash = "a".repeat(64);
/// let release = Release {
///     tag_name: Some("r20250101".to_owned()),
///     assets: vec![
///         Asset {
///             name: "Keyguard-1.2.3-linux-x86_64.tar.gz".to_owned(),
///             digest: Some(format!("sha256:{hash}")),
///         },
///         Asset {
///             name: "Keyguard-1.2.3-linux-aarch64.tar.gz".to_owned(),
///             digest: Some(format!("sha256:{hash}")),
///         },
///     ],
/// };
/// let info = extract_release_info(&release).expect("complete release");
/// assert_eq!(info.version().as_str(), "1.2.3");
/// assert_eq!(info.sha256(Architecture::Aarch64).as_str(), hash);
/// ```
pub fn extract_release_info(release: &Release) -> Result<ReleaseInfo> {
    let release_tag = release
        .tag_name
        .as_deref()
        .filter(|tag| !tag.is_empty())
        .ok_or(ExtractError::MissingTag)?;

    if release.assets.is_empty() {
        return Err(ExtractError::NoAssets);
    }

    let linux = LinuxAssets::scan(&release.assets);
    let x86_64 = linux.require(Architecture::X86_64)?;
    let aarch64 = linux.require(Architecture::Aarch64)?;

    let version = PackageVersion::from_asset_name(&x86_64.name).ok_or_else(|| {
        ExtractError::VersionNotFound {
            name: x86_64.name.clone(),
        }
    })?;

    let info = ReleaseInfo::new(
        version,
        release_tag.to_owned(),
        asset_sha256(x86_64)?,
        asset_sha256(aarch64)?,
    );
    debug!(
        "release {} provides version {}",
        info.release_tag(),
        info.version()
    );
    Ok(info)
}

/// Read and validate the SHA-256 digest of `asset`.
fn asset_sha256(asset: &Asset) -> Result<Sha256Digest> {
    let hex = asset
        .digest
        .as_deref()
        .and_then(Sha256Digest::strip_prefix)
        .ok_or_else(|| ExtractError::MissingDigest {
            name: asset.name.clone(),
        })?;
    Sha256Digest::try_from(hex).map_err(|reason| ExtractError::InvalidDigest {
        name: asset.name.clone(),
        reason,
    })
}
