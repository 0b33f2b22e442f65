// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

use crate::types::PageId;

#[derive(Debug, Error)]
pub enum LinkFlipError {
    #[error("parse error at {}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("league page {0} does not appear in the link graph")]
    MissingLeaguePage(PageId),

    #[error("rank list holds {len} entries after eviction, capacity is {capacity}")]
    CapacityExceeded { capacity: usize, len: usize },

    #[error("inbound count for page {0} overflowed")]
    CountOverflow(PageId),

    #[error("I/O error: {source} (path: {})", .path.display())]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },
}

impl LinkFlipError {
    /// Wraps an I/O error with the path that produced it.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// True for errors caused by user-supplied configuration.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_) | Self::MissingLeaguePage(_))
    }

    /// True for malformed input data.
    #[must_use]
    pub fn is_input(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::CountOverflow(_))
    }

    /// True for broken internal invariants.
    #[must_use]
    pub fn is_defect(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

pub type Result<T> = std::result::Result<T, LinkFlipError>;

// Allow `?` on std::io::Error by converting to LinkFlipError::Io with unknown path.
impl From<std::io::Error> for LinkFlipError {
    fn from(source: std::io::Error) -> Self {
        LinkFlipError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Keep the offending path from directory walks
impl From<walkdir::Error> for LinkFlipError {
    fn from(e: walkdir::Error) -> Self {
        let path = e.path().map(PathBuf::from).unwrap_or_default();
        LinkFlipError::Io {
            source: e.into(),
            path,
        }
    }
}

impl From<toml::de::Error> for LinkFlipError {
    fn from(e: toml::de::Error) -> Self {
        LinkFlipError::Config(e.to_string())
    }
}
