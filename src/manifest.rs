//! Package manifest (`pubspec.yaml`-style) access.
//!
//! Only two top-level fields matter here, `name:` and `version:`. The file is
//! otherwise treated as opaque lines so that rewriting the version never
//! touches anything else.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use semver::Version;
use tracing::debug;

use crate::domain::parse_version;
use crate::error::{PubverError, Result};

pub const VERSION_FIELD: &str = "version";
pub const NAME_FIELD: &str = "name";

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

fn field_regex() -> &'static Regex {
    static FIELD: OnceLock<Regex> = OnceLock::new();
    // Top-level keys only; indented keys belong to nested mappings
    FIELD.get_or_init(|| Regex::new(r"^([A-Za-z_][\w-]*):\s*(.*?)\s*$").unwrap())
}

/// In-memory view of a manifest file
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Manifest {
    /// Read a manifest, failing with `ManifestNotFound` if the file is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(PubverError::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }

        debug!("Reading manifest {}", path.display());
        let content = fs::read_to_string(path)?;
        Ok(Self::from_content(path, &content))
    }

    /// Build a manifest from already-read text
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        let trailing_newline = content.ends_with('\n');
        let body = content.strip_suffix('\n').unwrap_or(content);
        let lines = if content.is_empty() {
            Vec::new()
        } else {
            body.split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
                .collect()
        };

        Manifest {
            path: path.into(),
            lines,
            trailing_newline,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn field_line(&self, field: &str) -> Option<(usize, &str)> {
        self.lines.iter().enumerate().find_map(|(index, line)| {
            let captures = field_regex().captures(line)?;
            if &captures[1] == field {
                captures.get(2).map(|value| (index, value.as_str()))
            } else {
                None
            }
        })
    }

    fn field_value(&self, field: &str) -> Result<&str> {
        self.field_line(field)
            .map(|(_, value)| value.trim_matches(&['"', '\''][..]))
            .filter(|value| !value.is_empty())
            .ok_or_else(|| PubverError::field_missing(&self.path, field))
    }

    /// The declared package version
    pub fn version(&self) -> Result<Version> {
        parse_version(self.field_value(VERSION_FIELD)?)
    }

    /// The declared package name
    pub fn name(&self) -> Result<String> {
        self.field_value(NAME_FIELD).map(str::to_string)
    }

    /// Replace the `version:` line, leaving every other line untouched
    pub fn set_version(&mut self, version: &Version) -> Result<()> {
        let (index, _) = self
            .field_line(VERSION_FIELD)
            .ok_or_else(|| PubverError::field_missing(&self.path, VERSION_FIELD))?;
        self.lines[index] = format!("{}: {}", VERSION_FIELD, version);
        Ok(())
    }

    /// Render the manifest with the platform line terminator
    pub fn render(&self) -> String {
        let mut out = self.lines.join(LINE_ENDING);
        if self.trailing_newline {
            out.push_str(LINE_ENDING);
        }
        out
    }

    pub fn save(&self) -> Result<()> {
        debug!("Writing manifest {}", self.path.display());
        fs::write(&self.path, self.render())?;
        Ok(())
    }
}

/// Read the `version:` field of the manifest at `path`
pub fn read_manifest_version(path: impl AsRef<Path>) -> Result<Version> {
    Manifest::load(path)?.version()
}

/// Rewrite the `version:` line of the manifest at `path` in place
pub fn write_manifest_version(path: impl AsRef<Path>, version: &Version) -> Result<()> {
    let mut manifest = Manifest::load(path)?;
    manifest.set_version(version)?;
    manifest.save()
}
