// src/types.rs
use serde::Serialize;

use crate::pair::Pair;

/// Identifier of a page in the link graph.
pub type PageId = u64;

/// Number of inbound links. `u64` is assumed wide enough for any input this
/// tool is pointed at; summation still checks for overflow.
pub type LinkCount = u64;

/// Ordering key shared by the selectors: count first, page id on ties.
pub type CountKey = Pair<LinkCount, PageId>;

/// One line of adjacency input: a page and its outbound links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyRecord {
    pub source: PageId,
    /// Outbound targets in input order. Duplicates are kept.
    pub targets: Vec<PageId>,
}

/// A page together with the number of links pointing at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountedPage {
    pub page: PageId,
    pub inbound: LinkCount,
}

impl CountedPage {
    #[must_use]
    pub const fn new(page: PageId, inbound: LinkCount) -> Self {
        Self { page, inbound }
    }

    #[must_use]
    pub const fn key(&self) -> CountKey {
        Pair::new(self.inbound, self.page)
    }
}

impl From<CountKey> for CountedPage {
    fn from(key: CountKey) -> Self {
        let (inbound, page) = key.into_inner();
        Self { page, inbound }
    }
}

/// A league member with its rank among the league.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedPage {
    pub page: PageId,
    /// Number of league members with a strictly greater count.
    pub rank: usize,
    pub count: LinkCount,
}

/// Timing and volume of one pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageSummary {
    pub stage: &'static str,
    pub records_in: usize,
    pub records_out: usize,
    pub duration_ms: u128,
}

/// Aggregated results from a full pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub pipeline: String,
    pub partitions: usize,
    pub stages: Vec<StageSummary>,
    pub output_records: usize,
}

impl RunSummary {
    #[must_use]
    pub fn new(pipeline: &str, partitions: usize) -> Self {
        Self {
            pipeline: pipeline.to_string(),
            partitions,
            ..Self::default()
        }
    }

    pub fn record(&mut self, stage: StageSummary) {
        self.output_records = stage.records_out;
        self.stages.push(stage);
    }

    /// Total wall time across stages.
    #[must_use]
    pub fn duration_ms(&self) -> u128 {
        self.stages.iter().map(|s| s.duration_ms).sum()
    }
}
