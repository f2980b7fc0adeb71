//! Domain logic - pure version rules independent of files, git and network

pub mod tag;
pub mod version;
pub mod version_set;

pub use tag::TagPattern;
pub use version::{parse_version, VersionIncrement};
pub use version_set::VersionSet;

pub use semver::Version;
