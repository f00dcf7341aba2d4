//! CLI module graph.

pub mod check;
pub mod command;
pub mod games;
pub mod output;
pub mod roster;
pub mod watch;

use std::path::Path;

use crate::application::Tracker;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_tracker;
use crate::infrastructure::config::settings::Config;

pub use command::{CheckCommand, Cli, Commands};

/// Dispatch a parsed command line.
///
/// # Errors
///
/// Returns the first configuration or query error the command hits.
pub async fn run(cli: Cli) -> Result<()> {
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    match cli.command {
        Commands::Roster(args) => {
            let tracker = open(&args.config.config, cli.verbose)?;
            roster::execute(&tracker, args.sort, args.asc).await
        }
        Commands::Games(args) => {
            let tracker = open(&args.config, cli.verbose)?;
            games::execute(&tracker).await
        }
        Commands::Player(args) => {
            let tracker = open(&args.config.config, cli.verbose)?;
            games::execute_player(&tracker, &args.identity).await
        }
        Commands::Watch(args) => {
            let tracker = open(&args.config.config, cli.verbose)?;
            watch::execute(&tracker, args.interval, args.iterations).await
        }
        Commands::Check(CheckCommand::Config(args)) => check::execute_config(&args.config),
    }
}

/// Load config, start logging and wire up a tracker.
fn open(path: &Path, verbose: u8) -> Result<Tracker> {
    let mut config = Config::load(path)?;
    match verbose {
        0 => {}
        1 => config.logging.level = "debug".into(),
        _ => config.logging.level = "trace".into(),
    }
    config.init_logging();
    build_tracker(&config)
}
