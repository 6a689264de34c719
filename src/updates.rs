//! Release check against the crate registry.

use crate::config::UpdateCheckConfig;
use crate::core::PackageInfo;
use anyhow::{Context, Result};
use semver::Version;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::{debug, instrument};

/// Exit code when the check itself could not be completed.
pub const CHECK_FAILED_EXIT_CODE: i32 = 2;

#[derive(Debug, Deserialize)]
struct CrateResponse {
    #[serde(rename = "crate")]
    krate: CrateInfo,
}

#[derive(Debug, Deserialize)]
struct CrateInfo {
    max_stable_version: Option<String>,
    max_version: String,
}

/// How the running build compares to the latest published release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    UpToDate { current: Version },
    Outdated { current: Version, latest: Version },
}

impl UpdateStatus {
    /// Compares the running version against the latest release.
    pub fn compare(current: Version, latest: Version) -> Self {
        if latest > current {
            UpdateStatus::Outdated { current, latest }
        } else {
            UpdateStatus::UpToDate { current }
        }
    }

    /// 0 when current, 1 when a newer release exists.
    pub fn exit_code(&self) -> i32 {
        match self {
            UpdateStatus::UpToDate { .. } => 0,
            UpdateStatus::Outdated { .. } => 1,
        }
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = PackageInfo::current().name;
        match self {
            UpdateStatus::UpToDate { current } => write!(f, "{} {} is up to date", name, current),
            UpdateStatus::Outdated { current, latest } => write!(
                f,
                "{} {} is out of date (latest: {})",
                name, current, latest
            ),
        }
    }
}

/// Asks the registry for the newest release of `package`.
#[instrument(skip(config), fields(registry = %config.registry_url))]
pub fn check(config: &UpdateCheckConfig, package: &PackageInfo) -> Result<UpdateStatus> {
    let current = Version::parse(package.version)
        .with_context(|| format!("invalid running version {}", package.version))?;

    let url = format!(
        "{}/api/v1/crates/{}",
        config.registry_url.trim_end_matches('/'),
        package.name
    );
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(format!("{}/{}", package.name, package.version))
        .build()
        .context("building HTTP client")?;

    debug!(%url, "Requesting latest release");
    let response: CrateResponse = client
        .get(&url)
        .send()
        .with_context(|| format!("request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("registry rejected request to {}", url))?
        .json()
        .context("decoding registry response")?;

    let latest = response
        .krate
        .max_stable_version
        .unwrap_or(response.krate.max_version);
    let latest = Version::parse(&latest)
        .with_context(|| format!("registry returned invalid version {}", latest))?;

    Ok(UpdateStatus::compare(current, latest))
}
