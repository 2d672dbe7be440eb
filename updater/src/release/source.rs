//! Release metadata retrieval from the GitHub REST API.
//!
//! Provides a trait-based abstraction over the single "latest release"
//! request so the pipeline can be exercised without network access.

use super::error::FetchError;
use super::model::Release;
use log::debug;
use std::sync::OnceLock;
use std::time::Duration;

/// Endpoint returning the most recent non-prerelease release of
/// `AChep/keyguard-app`.
pub const RELEASES_API: &str = "https://api.github.com/repos/AChep/keyguard-app/releases/latest";

/// Media type pinning the v3 REST representation.
const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";

/// GitHub rejects API requests without a user agent.
const USER_AGENT: &str = concat!("keyguard-pkgbuild-update/", env!("CARGO_PKG_VERSION"));

/// Network timeout for the release metadata request.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for retrieving the raw latest-release payload.
///
/// # Examples
///
/// ```
/// use pkgbuild_updater::release::source::{GitHubReleaseSource, RELEASES_API};
///
/// let source = GitHubReleaseSource;
/// assert!(RELEASES_API.ends_with("/releases/latest"));
/// // Use source.latest_release_json() in production
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait ReleaseSource {
    /// Return the JSON body describing the latest release.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, times out, or returns a
    /// non-success status.
    fn latest_release_json(&self) -> Result<String, FetchError>;
}

/// HTTP-based release source using `ureq`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHubReleaseSource;

impl ReleaseSource for GitHubReleaseSource {
    fn latest_release_json(&self) -> Result<String, FetchError> {
        debug!("requesting {RELEASES_API}");
        let response = http_agent()
            .get(RELEASES_API)
            .header("Accept", ACCEPT_HEADER)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| map_ureq_error(RELEASES_API, &e))?;
        response
            .into_body()
            .read_to_string()
            .map_err(|e| FetchError::Http {
                url: RELEASES_API.to_owned(),
                reason: e.to_string(),
            })
    }
}

/// Fetch and decode the latest release from `source`.
///
/// # Errors
///
/// Returns [`FetchError`] if retrieval fails or the body is not a valid
/// release payload.
pub fn fetch_latest_release(source: &dyn ReleaseSource) -> Result<Release, FetchError> {
    let body = source.latest_release_json()?;
    let release: Release = serde_json::from_str(&body)?;
    debug!(
        "decoded release {:?} with {} asset(s)",
        release.tag_name,
        release.assets.len()
    );
    Ok(release)
}

/// Shared `ureq` agent with request timeout configuration.
fn http_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(FETCH_TIMEOUT))
            .build();
        ureq::Agent::new_with_config(config)
    })
}

/// Map a ureq error to a [`FetchError`].
fn map_ureq_error(url: &str, err: &ureq::Error) -> FetchError {
    match err {
        ureq::Error::StatusCode(404) => FetchError::NotFound {
            url: url.to_owned(),
        },
        other => FetchError::Http {
            url: url.to_owned(),
            reason: other.to_string(),
        },
    }
}
