//! Resolve one canonical package version from manifest, changelog and git tag.

use std::path::Path;

use semver::Version;
use tracing::debug;

use crate::changelog::read_changelog_version;
use crate::config::{Config, FilesConfig};
use crate::domain::{TagPattern, VersionSet};
use crate::error::{PubverError, Result};
use crate::git::{latest_version_tag, Git2Repository, Repository};
use crate::manifest::read_manifest_version;

/// Version declared by the manifest's `version:` field
pub fn manifest_version(dir: &Path, files: &FilesConfig) -> Result<Version> {
    read_manifest_version(files.manifest_path(dir))
}

/// Version of the changelog's topmost version heading
pub fn changelog_version(dir: &Path, files: &FilesConfig) -> Result<Version> {
    read_changelog_version(files.changelog_path(dir))
}

/// Version carried by the most recent release tag
pub fn tag_version<R: Repository + ?Sized>(
    dir: &Path,
    repo: &R,
    pattern: &TagPattern,
) -> Result<Version> {
    latest_version_tag(repo, pattern)?
        .map(|tag| tag.version)
        .ok_or_else(|| PubverError::NoVersionTag {
            path: dir.to_path_buf(),
        })
}

/// Read all three version sources of the package in `dir`
pub fn collect_versions<R: Repository + ?Sized>(
    dir: &Path,
    config: &Config,
    repo: &R,
) -> Result<VersionSet> {
    let manifest = manifest_version(dir, &config.files)?;
    let changelog = changelog_version(dir, &config.files)?;
    let tag = tag_version(dir, repo, &config.tags.tag_pattern()?)?;

    debug!(
        "Versions in {}: manifest={}, changelog={}, tag={}",
        dir.display(),
        manifest,
        changelog,
        tag
    );
    Ok(VersionSet::new(manifest, changelog, tag))
}

/// The package version all three sources agree on
pub fn resolve<R: Repository + ?Sized>(dir: &Path, config: &Config, repo: &R) -> Result<Version> {
    collect_versions(dir, config, repo)?.into_common()
}

/// Open the git repository in `dir` and resolve against it
pub fn resolve_dir(dir: &Path, config: &Config) -> Result<Version> {
    let repo = Git2Repository::open(dir)?;
    resolve(dir, config, &repo)
}
