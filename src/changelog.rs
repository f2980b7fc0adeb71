//! Changelog version headings.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use semver::Version;
use tracing::debug;

use crate::domain::parse_version;
use crate::error::{PubverError, Result};

/// Matches `## 1.2.3`, `# v1.2.3`, `## [1.2.3] - 2024-01-01` and similar.
fn heading_regex() -> &'static Regex {
    static HEADING: OnceLock<Regex> = OnceLock::new();
    HEADING.get_or_init(|| {
        Regex::new(r"^#{1,6}\s+\[?([vV]?\d+\.\d+\.\d+(?:[-+][0-9A-Za-z.\-+]*)?)\]?(?:\s|$)")
            .unwrap()
    })
}

/// Version of the topmost recognized heading in changelog text
pub fn latest_heading_version(content: &str) -> Option<Result<Version>> {
    content
        .lines()
        .find_map(|line| heading_regex().captures(line.trim_end()))
        .map(|captures| parse_version(&captures[1]))
}

/// Read the changelog at `path` and return its latest version
pub fn read_changelog_version(path: impl AsRef<Path>) -> Result<Version> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PubverError::ChangelogNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!("Reading changelog {}", path.display());
    let content = fs::read_to_string(path)?;
    latest_heading_version(&content).unwrap_or_else(|| {
        Err(PubverError::ChangelogHeadingMissing {
            path: path.to_path_buf(),
        })
    })
}

/// Insert a `## <version>` heading above the current latest entry.
///
/// Returns `false` without touching the file when the changelog already
/// starts with that version. A missing changelog is created.
pub fn prepend_heading(path: impl AsRef<Path>, version: &Version) -> Result<bool> {
    let path = path.as_ref();
    let content = if path.is_file() {
        fs::read_to_string(path)?
    } else {
        String::new()
    };

    if let Some(Ok(latest)) = latest_heading_version(&content) {
        if &latest == version {
            return Ok(false);
        }
    }

    let entry = format!("## {}\n\n- TBD\n\n", version);
    let updated = match content.lines().position(|l| heading_regex().is_match(l)) {
        Some(index) => {
            let mut lines: Vec<&str> = content.lines().collect();
            let tail = lines.split_off(index);
            let mut out = String::new();
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(&entry);
            out.push_str(&tail.join("\n"));
            if content.ends_with('\n') {
                out.push('\n');
            }
            out
        }
        None => format!("{}{}", entry, content),
    };

    debug!("Adding changelog heading {} to {}", version, path.display());
    fs::write(path, updated)?;
    Ok(true)
}
