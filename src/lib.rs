pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod gate;
pub mod git;
pub mod manifest;
pub mod next_version;
pub mod registry;
pub mod resolver;
pub mod ui;

pub use error::{PubverError, Result};
