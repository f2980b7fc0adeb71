//! Git tag access
//!
//! This module provides a trait-based abstraction over the few git reads
//! pubver needs, with a real implementation and a mock for tests.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! Code that needs the latest release tag should depend on the [Repository]
//! trait and call [latest_version_tag].

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use semver::Version;
use tracing::debug;

use crate::domain::TagPattern;
use crate::error::Result;

/// Read-only tag history of a repository
pub trait Repository {
    /// Tag names grouped by the commit they point at.
    ///
    /// Groups are ordered newest commit first, walking history back from
    /// HEAD. Commits without tags are omitted. An empty repository (no HEAD)
    /// yields an empty list.
    fn tag_history(&self) -> Result<Vec<Vec<String>>>;
}

/// A tag name together with the version it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTag {
    pub name: String,
    pub version: Version,
}

/// Find the most recent tag that follows `pattern`.
///
/// The newest commit with at least one matching tag wins; if that commit has
/// several, the highest parsable version is taken. Matching tags that do not
/// parse are skipped unless none of that commit's matching tags parse, in
/// which case the first failure is returned.
pub fn latest_version_tag<R: Repository + ?Sized>(
    repo: &R,
    pattern: &TagPattern,
) -> Result<Option<VersionTag>> {
    for group in repo.tag_history()? {
        let mut best: Option<VersionTag> = None;
        let mut first_error = None;

        for name in group {
            let version = match pattern.extract(&name) {
                Ok(Some(version)) => version,
                Ok(None) => {
                    debug!("Ignoring tag '{}' not matching the tag pattern", name);
                    continue;
                }
                Err(e) => {
                    debug!("Ignoring tag '{}': {}", name, e);
                    first_error.get_or_insert(e);
                    continue;
                }
            };
            if best.as_ref().map_or(true, |b| version > b.version) {
                best = Some(VersionTag { name, version });
            }
        }

        if let Some(tag) = best {
            debug!("Latest version tag is '{}'", tag.name);
            return Ok(Some(tag));
        }
        if let Some(e) = first_error {
            return Err(e);
        }
    }

    Ok(None)
}
