use clap::Parser;
use colored::Colorize;
use linkflip_core::cli::{self, Cli};
use linkflip_core::exit::LinkFlipExit;
use linkflip_core::logging;

fn main() -> LinkFlipExit {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    match cli::dispatch::execute(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            LinkFlipExit::for_error(&e)
        }
    }
}
