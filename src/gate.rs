//! Compare the local package version with the one on the registry.

use std::path::Path;

use semver::Version;
use tracing::info;

use crate::config::Config;
use crate::error::{PubverError, Result};
use crate::git::Repository;
use crate::manifest::Manifest;
use crate::registry::{HttpClient, PackageRegistry};
use crate::resolver::resolve;
use crate::ui::Reporter;

/// Local must not be older than published.
///
/// Being ahead (an unpublished bump) passes just like being equal.
pub fn check_not_behind(local: &Version, published: &Version) -> Result<bool> {
    if local < published {
        return Err(PubverError::BehindPublished {
            local: local.clone(),
            published: published.clone(),
        });
    }
    Ok(true)
}

/// Resolve the local version and check it against the registry.
///
/// Resolver errors propagate unchanged and are raised before the single
/// registry request is made.
pub fn is_latest_published<R, C>(
    dir: &Path,
    config: &Config,
    repo: &R,
    registry: &PackageRegistry<C>,
    reporter: &dyn Reporter,
) -> Result<bool>
where
    R: Repository + ?Sized,
    C: HttpClient,
{
    let local = resolve(dir, config, repo)?;
    let package = Manifest::load(config.files.manifest_path(dir))?.name()?;
    reporter.status(&format!("Local version of {} is {}", package, local));

    let published = registry.latest_version(&package)?.version;
    reporter.status(&format!("Published version of {} is {}", package, published));

    let result = check_not_behind(&local, &published)?;
    if local > published {
        info!("{} {} is not published yet", package, local);
    }
    Ok(result)
}
