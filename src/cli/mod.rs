//! Command-line surface
//!
//! This module holds the clap definitions; [orchestration] turns a parsed
//! command into calls on the resolver, gate and next-version modules.

pub mod orchestration;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::VersionIncrement;

#[derive(Parser, Debug)]
#[command(
    name = "pubver",
    version,
    about = "Check and bump package versions before publishing"
)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Registry base URL (overrides config)")]
    pub registry_url: Option<String>,

    #[arg(short, long, global = true, help = "Show debug logs")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Verify manifest, changelog and latest git tag declare the same version
    CheckVersion(InputArgs),

    /// Verify the local version is not behind the published one
    IsLatestPublished(InputArgs),

    /// Write the next version, computed from the published one, to the manifest
    PrepareNextVersion(PrepareArgs),
}

impl Command {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::CheckVersion(_) => "check-version",
            Command::IsLatestPublished(_) => "is-latest-published",
            Command::PrepareNextVersion(_) => "prepare-next-version",
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct InputArgs {
    #[arg(
        short,
        long,
        default_value = ".",
        value_parser = existing_dir,
        help = "Package directory"
    )]
    pub input: PathBuf,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PrepareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(long, value_enum, help = "Version component to bump")]
    pub version_increment: VersionIncrement,

    #[arg(long, help = "Preview the new version without writing files")]
    pub dry_run: bool,

    #[arg(long, help = "Also add a heading for the new version to the changelog")]
    pub update_changelog: bool,
}

/// Argument validator: the path must name an existing directory
pub fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else if path.exists() {
        Err(format!("'{}' is not a directory", value))
    } else {
        Err(format!("directory '{}' does not exist", value))
    }
}
