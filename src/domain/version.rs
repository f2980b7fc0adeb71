use std::fmt;

use semver::{BuildMetadata, Prerelease, Version};

use crate::error::{PubverError, Result};

/// Parse a version from a manifest field, changelog heading or tag remainder.
///
/// Surrounding whitespace and a single leading `v`/`V` are ignored
/// (e.g., "v1.2.3" -> 1.2.3). Pre-release and build metadata are kept.
pub fn parse_version(input: &str) -> Result<Version> {
    let trimmed = input.trim();
    let clean = trimmed
        .strip_prefix('v')
        .or_else(|| trimmed.strip_prefix('V'))
        .unwrap_or(trimmed);

    Version::parse(clean).map_err(|e| PubverError::invalid_version(input.trim(), e))
}

/// Which component a release bump advances
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VersionIncrement {
    Patch,
    Minor,
    Major,
}

impl VersionIncrement {
    /// Bump `version` according to this increment.
    ///
    /// Lower components reset to zero; pre-release and build metadata are
    /// always dropped.
    pub fn apply(self, version: &Version) -> Version {
        let (major, minor, patch) = match self {
            VersionIncrement::Major => (version.major + 1, 0, 0),
            VersionIncrement::Minor => (version.major, version.minor + 1, 0),
            VersionIncrement::Patch => (version.major, version.minor, version.patch + 1),
        };

        Version {
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
            build: BuildMetadata::EMPTY,
        }
    }
}

impl fmt::Display for VersionIncrement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionIncrement::Patch => "patch",
            VersionIncrement::Minor => "minor",
            VersionIncrement::Major => "major",
        };
        f.write_str(name)
    }
}
