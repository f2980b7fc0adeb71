//! Shared fixtures for pubver integration tests

#![allow(dead_code)]

use git2::Repository;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Package directory contents; `None` leaves the file out
pub struct Fixture<'a> {
    pub name: &'a str,
    pub manifest_version: Option<&'a str>,
    pub changelog_version: Option<&'a str>,
    pub tag: Option<&'a str>,
}

impl<'a> Fixture<'a> {
    /// A package whose three sources all declare `version`
    pub fn consistent(version: &'a str, tag: &'a str) -> Self {
        Fixture {
            name: "my_package",
            manifest_version: Some(version),
            changelog_version: Some(version),
            tag: Some(tag),
        }
    }
}

pub fn manifest_text(name: &str, version: &str) -> String {
    format!(
        "name: {}\ndescription: Test package\nversion: {}\n\nenvironment:\n  sdk: '>=3.0.0 <4.0.0'\n",
        name, version
    )
}

/// Create a git repository holding the fixture files in one commit
pub fn setup_package_repo(fixture: &Fixture) -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = Repository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    if let Some(version) = fixture.manifest_version {
        fs::write(
            temp_dir.path().join("pubspec.yaml"),
            manifest_text(fixture.name, version),
        )
        .expect("Could not write manifest");
    }
    if let Some(version) = fixture.changelog_version {
        fs::write(
            temp_dir.path().join("CHANGELOG.md"),
            format!("# Changelog\n\n## {}\n\n- Release\n", version),
        )
        .expect("Could not write changelog");
    }
    fs::write(temp_dir.path().join("README.md"), "readme\n").expect("Could not write readme");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_all(["*"].iter(), git2::IndexAddOption::DEFAULT, None)
        .expect("Could not add files to index");
    index.write().expect("Could not write index");
    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let sig = repo.signature().expect("Could not get sig");
    let commit_id = repo
        .commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])
        .expect("Could not create commit");

    if let Some(tag) = fixture.tag {
        repo.tag_lightweight(tag, &repo.find_object(commit_id, None).unwrap(), false)
            .expect("Could not create tag");
    }

    temp_dir
}

pub fn registry_body(name: &str, version: &str) -> String {
    format!(
        r#"{{"name": "{}", "latest": {{"version": "{}", "pubspec": {{"name": "{}", "version": "{}"}}}}, "versions": []}}"#,
        name, version, name, version
    )
}

pub fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).expect("Could not read file")
}
