// src/pipeline/orphans.rs
use std::path::PathBuf;

use super::{load_input, Runner};
use crate::error::Result;
use crate::flip::{LinkFlipCounter, OrphanFilter};
use crate::types::PageId;

impl Runner {
    /// Pages with no inbound links, ascending by id. Single stage.
    ///
    /// # Errors
    /// Returns error if input cannot be read or a line fails to parse.
    pub fn orphans(&mut self, inputs: &[PathBuf]) -> Result<Vec<PageId>> {
        let lines = load_input(inputs)?;
        self.stage("orphans", lines.len(), |exec| {
            exec.run_keyed(&LinkFlipCounter::new(OrphanFilter), &lines)
        })
    }
}
