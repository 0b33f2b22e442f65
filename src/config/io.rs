// src/config/io.rs
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::types::{Config, LinkFlipToml};
use super::CONFIG_FILE;
use crate::error::{LinkFlipError, Result};

/// Reads the explicit config file, or `linkflip.toml` in the working
/// directory when present.
pub(super) fn load(explicit: Option<&Path>) -> Result<Config> {
    let (path, required) = match explicit {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            tracing::debug!("no {CONFIG_FILE} found, using defaults");
            return Ok(Config::default());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LinkFlipError::Config(format!(
                "config file {} not found",
                path.display()
            )));
        }
        Err(e) => return Err(LinkFlipError::io(e, path)),
    };

    let mut config = parse(&content).map_err(|e| match e {
        LinkFlipError::Config(msg) => LinkFlipError::Config(format!("{}: {msg}", path.display())),
        other => other,
    })?;
    tracing::debug!(path = %path.display(), "loaded configuration");
    config.source = Some(path);
    Ok(config)
}

pub(super) fn parse(content: &str) -> Result<Config> {
    let parsed: LinkFlipToml = toml::from_str(content)?;
    Ok(Config {
        job: parsed.job,
        ..Config::default()
    })
}
