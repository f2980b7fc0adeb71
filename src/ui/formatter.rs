//! Pure formatting functions for UI output.
//!
//! Nothing here prints; the [Reporter](super::Reporter) implementations decide
//! where the formatted lines go.

use console::style;
use semver::Version;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format a success message with a green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a status message with a yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format the proposed version change.
///
/// Shows "From: old -> To: new" with the old version in red and the new one
/// in green.
///
/// # Arguments
/// * `old` - Currently published version
/// * `new` - The version being written to the manifest
pub fn format_version_change(old: &Version, new: &Version) -> String {
    format!(
        "{}\n  From: {}\n  To:   {}",
        style("Proposed Version Change:").bold(),
        style(old).red(),
        style(new).green()
    )
}
