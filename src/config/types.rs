use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The `[job]` table of `linkflip.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfig {
    /// Capacity of the top-K selector.
    #[serde(default = "default_n")]
    pub n: usize,
    /// Newline-delimited list of league page ids.
    #[serde(default)]
    pub league: Option<PathBuf>,
    /// Worker partitions. 0 means one per rayon thread.
    #[serde(default)]
    pub partitions: usize,
    /// Where two-stage pipelines keep intermediate counts.
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            n: default_n(),
            league: None,
            partitions: 0,
            work_dir: default_work_dir(),
        }
    }
}

const fn default_n() -> usize { 10 }
fn default_work_dir() -> PathBuf { PathBuf::from(".linkflip") }

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct LinkFlipToml {
    #[serde(default)]
    pub job: JobConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub job: JobConfig,
    pub json: bool,
    /// The file the settings were read from, if any.
    pub source: Option<PathBuf>,
}
