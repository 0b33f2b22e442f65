// src/pipeline/league.rs
use std::path::PathBuf;

use super::Runner;
use crate::error::Result;
use crate::select::{LeagueRankAssigner, LeagueSet};
use crate::types::RankedPage;

impl Runner {
    /// Ranks league members by inbound count: count, persist, then rank.
    ///
    /// # Errors
    /// Returns `MissingLeaguePage` if a member never appears in the input.
    pub fn league(&mut self, inputs: &[PathBuf], league: LeagueSet) -> Result<Vec<RankedPage>> {
        if league.is_empty() {
            tracing::warn!("league set is empty, nothing to rank");
        }
        let assigner = LeagueRankAssigner::new(league);
        let counts = self.count_to_disk(inputs)?;
        self.stage("league", counts.len(), |exec| {
            exec.run_partitioned(&assigner, &counts)
        })
    }
}
