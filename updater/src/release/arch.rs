//! Linux architectures published by the upstream release.

use std::fmt;

/// A Linux architecture for which the PKGBUILD carries a checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    /// 64-bit x86.
    X86_64,
    /// 64-bit ARM.
    Aarch64,
}

impl Architecture {
    /// Every architecture the PKGBUILD supports, in PKGBUILD order.
    pub const ALL: [Self; 2] = [Self::X86_64, Self::Aarch64];

    /// The architecture name as used in asset names and PKGBUILD keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X86_64 => "x86_64",
            Self::Aarch64 => "aarch64",
        }
    }

    /// Suffix identifying this architecture's Linux archive among the
    /// release assets.
    ///
    /// # Examples
    ///
    /// ```
    /// use pkgbuild_updater::release::arch::Architecture;
    ///
    /// assert_eq!(Architecture::Aarch64.asset_suffix(), "-linux-aarch64.tar.gz");
    /// ```
    #[must_use]
    pub const fn asset_suffix(self) -> &'static str {
        match self {
            Self::X86_64 => "-linux-x86_64.tar.gz",
            Self::Aarch64 => "-linux-aarch64.tar.gz",
        }
    }

    /// Classify an asset name by its suffix.
    #[must_use]
    pub fn from_asset_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|arch| name.ends_with(arch.asset_suffix()))
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
