//! Serde model of the GitHub "latest release" payload.
//!
//! Only the fields the PKGBUILD needs are modelled; everything else in the
//! response is ignored. Absent fields decode to empty values so that the
//! extractor, not the decoder, reports what is missing.

use serde::Deserialize;

/// A published release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Release {
    /// Git tag the release was cut from, for example `r20250101`.
    #[serde(default)]
    pub tag_name: Option<String>,

    /// Downloadable files attached to the release.
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Asset {
    /// File name of the asset.
    #[serde(default)]
    pub name: String,

    /// Content digest in `<algorithm>:<hex>` form, when GitHub provides one.
    #[serde(default)]
    pub digest: Option<String>,
}
