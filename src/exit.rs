// src/exit.rs
//! Standardized process exit codes for `linkflip`.
//!
//! Provides a stable contract for scripts and schedulers chaining runs.

use std::process::Termination;

use crate::error::LinkFlipError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum LinkFlipExit {
    /// Pipeline completed and its output was written.
    Success = 0,
    /// Generic error (I/O, unexpected failure).
    Error = 1,
    /// Input data was malformed (bad adjacency line, count overflow).
    InvalidInput = 2,
    /// Configuration rejected (bad N, missing league file or page).
    ConfigError = 3,
    /// Internal invariant broken (rank list over capacity).
    InternalDefect = 4,
}

impl LinkFlipExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit status for a failed run.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LinkFlipError>() {
            Some(e) if e.is_input() => Self::InvalidInput,
            Some(e) if e.is_config() => Self::ConfigError,
            Some(e) if e.is_defect() => Self::InternalDefect,
            _ => Self::Error,
        }
    }
}

impl Termination for LinkFlipExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

