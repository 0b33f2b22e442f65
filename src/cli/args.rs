use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "linkflip",
    version,
    about = "Inbound-link aggregation over web adjacency lists"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: ./linkflip.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Number of worker partitions (0 = one per thread)
    #[arg(long, global = true)]
    pub partitions: Option<usize>,
    /// Directory for intermediate stage output
    #[arg(long, global = true, value_name = "DIR")]
    pub work_dir: Option<PathBuf>,
    /// Print a JSON run summary to stderr
    #[arg(long, global = true)]
    pub json: bool,
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List pages that nothing links to
    Orphans {
        /// Adjacency files or directories of part files
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List the N most-linked pages
    Top {
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,
        /// How many pages to keep (default 10)
        #[arg(short = 'n', long = "top")]
        n: Option<usize>,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Rank a fixed set of pages against each other
    League {
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,
        /// Newline-delimited league page ids
        #[arg(long, value_name = "FILE")]
        league: Option<PathBuf>,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Write inbound counts in the intermediate format
    Count {
        #[arg(required = true, value_name = "INPUT")]
        inputs: Vec<PathBuf>,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Top-K over count records or earlier top-N output
    Select {
        #[arg(required = true, value_name = "COUNTS")]
        inputs: Vec<PathBuf>,
        #[arg(short = 'n', long = "top")]
        n: Option<usize>,
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}
