//! Command dispatch logic extracted from binary to reduce main function size.

use super::args::{Cli, Commands};
use super::handlers;
use crate::exit::LinkFlipExit;
use anyhow::Result;

/// Executes the parsed command.
///
/// # Errors
/// Returns error if the command handler fails.
pub fn execute(cli: Cli) -> Result<LinkFlipExit> {
    let config = handlers::load_config(&cli.global)?;

    match cli.command {
        Commands::Orphans { inputs, output } => {
            handlers::handle_orphans(config, &inputs, output.as_deref())
        }
        Commands::Top { inputs, n, output } => {
            handlers::handle_top(config, &inputs, n, output.as_deref())
        }
        Commands::League {
            inputs,
            league,
            output,
        } => handlers::handle_league(config, &inputs, league, output.as_deref()),
        Commands::Count { inputs, output } => {
            handlers::handle_count(config, &inputs, output.as_deref())
        }
        Commands::Select { inputs, n, output } => {
            handlers::handle_select(config, &inputs, n, output.as_deref())
        }
    }
}
