use semver::Version;

use crate::error::{PubverError, Result};

/// The three independently declared versions of one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionSet {
    pub manifest: Version,
    pub changelog: Version,
    pub tag: Version,
}

impl VersionSet {
    pub fn new(manifest: Version, changelog: Version, tag: Version) -> Self {
        VersionSet {
            manifest,
            changelog,
            tag,
        }
    }

    /// All three members are equal by value (build metadata included)
    pub fn is_consistent(&self) -> bool {
        self.manifest == self.changelog && self.changelog == self.tag
    }

    /// Consume the set, returning the shared version or a mismatch error
    /// carrying all three values.
    pub fn into_common(self) -> Result<Version> {
        if self.is_consistent() {
            Ok(self.manifest)
        } else {
            Err(PubverError::InconsistentVersions {
                manifest: self.manifest,
                changelog: self.changelog,
                tag: self.tag,
            })
        }
    }
}
