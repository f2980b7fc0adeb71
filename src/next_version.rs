//! Compute and persist the next release version.

use std::path::Path;

use semver::Version;

use crate::changelog::prepend_heading;
use crate::config::Config;
use crate::domain::VersionIncrement;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::registry::{HttpClient, PackageRegistry};
use crate::ui::{format_version_change, Reporter};

/// Next version after `published`; pure, no I/O
pub fn next_version(published: &Version, increment: VersionIncrement) -> Version {
    increment.apply(published)
}

/// Knobs of [prepare_next_version]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrepareOptions {
    /// Compute and report, but leave every file untouched
    pub dry_run: bool,
    /// Also add a heading for the new version to the changelog
    pub update_changelog: bool,
}

/// Bump the published version and write it into the manifest.
///
/// The manifest, its `name:`/`version:` fields and the tag pattern are
/// validated before the registry is contacted, so a broken package directory
/// never costs a network round-trip or leaves a half-written release.
pub fn prepare_next_version<C: HttpClient>(
    dir: &Path,
    increment: VersionIncrement,
    config: &Config,
    registry: &PackageRegistry<C>,
    reporter: &dyn Reporter,
    options: PrepareOptions,
) -> Result<Version> {
    let mut manifest = Manifest::load(config.files.manifest_path(dir))?;
    manifest.version()?;
    let package = manifest.name()?;
    let tag_pattern = config.tags.tag_pattern()?;

    let published = registry.latest_version(&package)?.version;
    let next = next_version(&published, increment);
    reporter.status(&format_version_change(&published, &next));

    if options.dry_run {
        reporter.status(&format!(
            "Dry run: {} not modified",
            manifest.path().display()
        ));
        return Ok(next);
    }

    manifest.set_version(&next)?;
    manifest.save()?;
    reporter.success(&format!(
        "Updated {} to {} ({} bump)",
        manifest.path().display(),
        next,
        increment
    ));

    if options.update_changelog {
        let changelog = config.files.changelog_path(dir);
        if prepend_heading(&changelog, &next)? {
            reporter.success(&format!("Added {} heading to {}", next, changelog.display()));
        }
    }

    let tag = tag_pattern.format(&next);
    reporter.status(&format!("Tag the release as {} once it is committed", tag));

    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PubverError;
    use crate::registry::{HttpResponse, MockHttpClient};
    use crate::ui::{Level, MemoryReporter};
    use std::fs;
    use tempfile::TempDir;

    const URL: &str = "http://registry.test";

    fn registry_with(version: &str) -> MockHttpClient {
        MockHttpClient::new().with_response(
            format!("{}/api/packages/demo", URL),
            HttpResponse::new(
                200,
                format!(r#"{{"name": "demo", "latest": {{"version": "{}"}}}}"#, version),
            ),
        )
    }

    #[test]
    fn test_next_version_table() {
        let published = Version::new(1, 2, 3);
        assert_eq!(
            next_version(&published, VersionIncrement::Patch),
            Version::new(1, 2, 4)
        );
        assert_eq!(
            next_version(&published, VersionIncrement::Minor),
            Version::new(1, 3, 0)
        );
        assert_eq!(
            next_version(&published, VersionIncrement::Major),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_prepare_writes_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("pubspec.yaml");
        fs::write(&manifest, "name: demo\nversion: 1.2.3\nhomepage: x\n").unwrap();
        let client = registry_with("1.2.3");
        let registry = PackageRegistry::new(&client, URL);
        let reporter = MemoryReporter::new();

        let next = prepare_next_version(
            dir.path(),
            VersionIncrement::Minor,
            &Config::default(),
            &registry,
            &reporter,
            PrepareOptions::default(),
        )
        .unwrap();

        assert_eq!(next, Version::new(1, 3, 0));
        let written = fs::read_to_string(&manifest).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines, vec!["name: demo", "version: 1.3.0", "homepage: x"]);
        assert_eq!(reporter.messages(Level::Success).len(), 1);
    }

    #[test]
    fn test_prepare_dry_run_leaves_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("pubspec.yaml");
        fs::write(&manifest, "name: demo\nversion: 1.2.3\n").unwrap();
        let client = registry_with("1.2.3");
        let registry = PackageRegistry::new(&client, URL);

        let next = prepare_next_version(
            dir.path(),
            VersionIncrement::Major,
            &Config::default(),
            &registry,
            &MemoryReporter::new(),
            PrepareOptions {
                dry_run: true,
                update_changelog: true,
            },
        )
        .unwrap();

        assert_eq!(next, Version::new(2, 0, 0));
        assert_eq!(
            fs::read_to_string(&manifest).unwrap(),
            "name: demo\nversion: 1.2.3\n"
        );
        assert!(!dir.path().join("CHANGELOG.md").exists());
    }

    #[test]
    fn test_prepare_updates_changelog() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), "name: demo\nversion: 1.2.3\n").unwrap();
        fs::write(dir.path().join("CHANGELOG.md"), "## 1.2.3\n").unwrap();
        let client = registry_with("1.2.3");
        let registry = PackageRegistry::new(&client, URL);

        prepare_next_version(
            dir.path(),
            VersionIncrement::Patch,
            &Config::default(),
            &registry,
            &MemoryReporter::new(),
            PrepareOptions {
                dry_run: false,
                update_changelog: true,
            },
        )
        .unwrap();

        let changelog = fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap();
        assert!(changelog.starts_with("## 1.2.4\n"));
    }

    #[test]
    fn test_prepare_missing_manifest_makes_no_request() {
        let dir = TempDir::new().unwrap();
        let client = registry_with("1.2.3");
        let registry = PackageRegistry::new(&client, URL);

        let result = prepare_next_version(
            dir.path(),
            VersionIncrement::Patch,
            &Config::default(),
            &registry,
            &MemoryReporter::new(),
            PrepareOptions::default(),
        );

        assert!(matches!(result, Err(PubverError::ManifestNotFound { .. })));
        assert_eq!(client.request_count(), 0);
    }

    #[test]
    fn test_prepare_missing_version_field_makes_no_request() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("pubspec.yaml"), "name: demo\n").unwrap();
        let client = registry_with("1.2.3");
        let registry = PackageRegistry::new(&client, URL);

        let result = prepare_next_version(
            dir.path(),
            VersionIncrement::Patch,
            &Config::default(),
            &registry,
            &MemoryReporter::new(),
            PrepareOptions::default(),
        );

        assert!(matches!(
            result,
            Err(PubverError::ManifestFieldMissing { .. })
        ));
        assert_eq!(client.request_count(), 0);
    }

    #[test]
    fn test_prepare_invalid_tag_pattern_leaves_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = dir.path().join("pubspec.yaml");
        fs::write(&manifest, "name: demo\nversion: 1.0.0\n").unwrap();
        let client = registry_with("1.0.0");
        let registry = PackageRegistry::new(&client, URL);
        let mut config = Config::default();
        config.tags.pattern = "release".to_string();

        let result = prepare_next_version(
            dir.path(),
            VersionIncrement::Patch,
            &config,
            &registry,
            &MemoryReporter::new(),
            PrepareOptions::default(),
        );

        assert!(matches!(result, Err(PubverError::Config(_))));
        assert_eq!(
            fs::read_to_string(&manifest).unwrap(),
            "name: demo\nversion: 1.0.0\n"
        );
        assert_eq!(client.request_count(), 0);
    }
}
