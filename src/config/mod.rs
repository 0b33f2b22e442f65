// src/config/mod.rs
mod io;
pub mod types;

pub use self::types::{Config, JobConfig, LinkFlipToml};

use std::num::NonZeroUsize;
use std::path::Path;

use crate::error::{LinkFlipError, Result};
use crate::exec::LocalExecutor;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "linkflip.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `explicit`, or `linkflip.toml` if it exists, or defaults.
    ///
    /// # Errors
    /// Returns `Config` if an explicit file is missing or any file is malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        io::load(explicit)
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    /// Returns `Config` on malformed TOML, unknown keys, or negative numbers.
    pub fn parse_toml(content: &str) -> Result<Self> {
        io::parse(content)
    }

    /// Top-K capacity.
    ///
    /// # Errors
    /// Returns `Config` if `n` is zero.
    pub fn top_n(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.job.n)
            .ok_or_else(|| LinkFlipError::Config("N must be at least 1".to_string()))
    }

    /// Path of the league file.
    ///
    /// # Errors
    /// Returns `Config` if no league file is configured.
    pub fn league_path(&self) -> Result<&Path> {
        self.job
            .league
            .as_deref()
            .ok_or_else(|| LinkFlipError::Config("no league file configured".to_string()))
    }

    #[must_use]
    pub fn executor(&self) -> LocalExecutor {
        LocalExecutor::new(self.job.partitions)
    }
}
