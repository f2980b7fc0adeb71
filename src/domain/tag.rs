use regex::Regex;
use semver::Version;

use crate::domain::version::parse_version;
use crate::error::{PubverError, Result};

const PLACEHOLDER: &str = "{version}";

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Compile a tag pattern; it must contain exactly one `{version}` placeholder
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches(PLACEHOLDER).count() != 1 {
            return Err(PubverError::config(format!(
                "Tag pattern '{}' must contain one {} placeholder",
                pattern, PLACEHOLDER
            )));
        }

        // Escape everything, then let the placeholder capture the version text
        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"(\S+)");
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| PubverError::config(format!("Invalid tag pattern: {}", e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        self.pattern.replace(PLACEHOLDER, &version.to_string())
    }

    /// Extract the version from a tag name.
    ///
    /// Returns `Ok(None)` for tags that do not follow the pattern and an error
    /// for tags that follow it but carry an unparsable version.
    pub fn extract(&self, tag: &str) -> Result<Option<Version>> {
        match self.matcher.captures(tag).and_then(|c| c.get(1)) {
            Some(m) => parse_version(m.as_str()).map(Some),
            None => Ok(None),
        }
    }
}
