// src/cli/handlers.rs
use crate::cli::args::GlobalArgs;
use crate::config::Config;
use crate::exit::LinkFlipExit;
use crate::pipeline::Runner;
use crate::select::LeagueSet;
use crate::store::{self, format};
use crate::types::RunSummary;
use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Loads the config file and applies global flag overrides.
///
/// # Errors
/// Returns error if the config file is missing or malformed.
pub fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = Config::load(global.config.as_deref())?;
    if let Some(partitions) = global.partitions {
        config.job.partitions = partitions;
    }
    if let Some(dir) = &global.work_dir {
        config.job.work_dir.clone_from(dir);
    }
    config.json = global.json;
    Ok(config)
}

fn runner(pipeline: &str, config: &Config) -> Runner {
    Runner::new(pipeline, config.executor(), config.job.work_dir.clone())
}

/// Handles the orphans command.
///
/// # Errors
/// Returns error if reading, parsing or writing fails.
pub fn handle_orphans(
    config: Config,
    inputs: &[PathBuf],
    output: Option<&Path>,
) -> Result<LinkFlipExit> {
    let mut runner = runner("orphans", &config);
    let orphans = runner.orphans(inputs)?;
    store::emit(output, |w| format::write_orphans(w, &orphans))?;
    finish(&config, &runner.into_summary(), output)
}

/// Handles the top command.
///
/// # Errors
/// Returns error if `n` is zero or any stage fails.
pub fn handle_top(
    mut config: Config,
    inputs: &[PathBuf],
    n: Option<usize>,
    output: Option<&Path>,
) -> Result<LinkFlipExit> {
    if let Some(n) = n {
        config.job.n = n;
    }
    let n = config.top_n()?;
    let mut runner = runner("top", &config);
    let top = runner.top(inputs, n)?;
    store::emit(output, |w| format::write_top(w, &top))?;
    finish(&config, &runner.into_summary(), output)
}

/// Handles the league command.
///
/// # Errors
/// Returns error if the league file is missing, a member is absent from the
/// graph, or any stage fails.
pub fn handle_league(
    mut config: Config,
    inputs: &[PathBuf],
    league: Option<PathBuf>,
    output: Option<&Path>,
) -> Result<LinkFlipExit> {
    if league.is_some() {
        config.job.league = league;
    }
    let league = LeagueSet::load(config.league_path()?)?;
    tracing::info!(members = league.len(), "loaded league");

    let mut runner = runner("league", &config);
    let ranked = runner.league(inputs, league)?;
    store::emit(output, |w| format::write_ranks(w, &ranked))?;
    finish(&config, &runner.into_summary(), output)
}

/// Handles the count command.
///
/// # Errors
/// Returns error if reading, parsing or writing fails.
pub fn handle_count(
    config: Config,
    inputs: &[PathBuf],
    output: Option<&Path>,
) -> Result<LinkFlipExit> {
    let mut runner = runner("count", &config);
    let counts = runner.count(inputs)?;
    store::emit(output, |w| format::write_counts(w, &counts))?;
    finish(&config, &runner.into_summary(), output)
}

/// Handles the select command.
///
/// # Errors
/// Returns error if `n` is zero or a record fails to parse.
pub fn handle_select(
    mut config: Config,
    inputs: &[PathBuf],
    n: Option<usize>,
    output: Option<&Path>,
) -> Result<LinkFlipExit> {
    if let Some(n) = n {
        config.job.n = n;
    }
    let n = config.top_n()?;
    let mut runner = runner("select", &config);
    let top = runner.select(inputs, n)?;
    store::emit(output, |w| format::write_top(w, &top))?;
    finish(&config, &runner.into_summary(), output)
}

fn finish(config: &Config, summary: &RunSummary, output: Option<&Path>) -> Result<LinkFlipExit> {
    if config.json {
        eprintln!("{}", serde_json::to_string_pretty(summary)?);
    }
    if let Some(path) = output {
        eprintln!(
            "{}",
            format!(
                "[OK] {} records written to {} in {}ms",
                summary.output_records,
                path.display(),
                summary.duration_ms()
            )
            .green()
        );
    }
    Ok(LinkFlipExit::Success)
}
