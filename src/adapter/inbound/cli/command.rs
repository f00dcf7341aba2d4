//! Command-line interface definitions.
//!
//! Defines the CLI structure for the lesschess application using `clap`:
//! the ranked roster, the roster-vs-roster games board, a single player's
//! games, a polling watch mode and configuration checks.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::projection::RosterSort;

/// Leaderboard and live games for a roster of chess.com players
#[derive(Parser, Debug)]
#[command(name = "lesschess")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the lesschess CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the roster ranked by rating
    Roster(RosterArgs),

    /// Show in-progress games between roster members
    Games(ConfigPathArg),

    /// Show every in-progress game of one roster member
    Player(PlayerArgs),

    /// Refresh the roster and games views on a timer
    Watch(WatchArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),
}

/// Subcommands for `lesschess check`.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,
}

/// Arguments for the `roster` subcommand.
#[derive(Parser, Debug)]
pub struct RosterArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Sort column: rating, best, wins, losses, draws or name.
    #[arg(short, long, default_value = "rating")]
    pub sort: RosterSort,

    /// Sort ascending instead of descending.
    #[arg(long)]
    pub asc: bool,
}

/// Arguments for the `player` subcommand.
#[derive(Parser, Debug)]
pub struct PlayerArgs {
    /// Roster member to show, matched case-insensitively.
    pub identity: String,

    #[command(flatten)]
    pub config: ConfigPathArg,
}

/// Arguments for the `watch` subcommand.
#[derive(Parser, Debug)]
pub struct WatchArgs {
    #[command(flatten)]
    pub config: ConfigPathArg,

    /// Seconds between refreshes.
    #[arg(short, long, default_value = "30")]
    pub interval: u64,

    /// Stop after this many refreshes (runs until interrupted by default).
    #[arg(long)]
    pub iterations: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "lesschess");
    }

    #[test]
    fn test_parse_roster_defaults() {
        let cli = Cli::try_parse_from(["lesschess", "roster"]).unwrap();
        let Commands::Roster(args) = cli.command else {
            panic!("expected roster command");
        };
        assert_eq!(args.sort, RosterSort::Rating);
        assert!(!args.asc);
        assert_eq!(args.config.config, PathBuf::from("config.toml"));
    }

    #[test]
    fn test_parse_roster_sort_alias() {
        let cli = Cli::try_parse_from(["lesschess", "roster", "--sort", "pb", "--asc"]).unwrap();
        let Commands::Roster(args) = cli.command else {
            panic!("expected roster command");
        };
        assert_eq!(args.sort, RosterSort::Best);
        assert!(args.asc);
    }

    #[test]
    fn test_parse_roster_rejects_unknown_sort() {
        assert!(Cli::try_parse_from(["lesschess", "roster", "--sort", "elo"]).is_err());
    }

    #[test]
    fn test_parse_player_requires_identity() {
        assert!(Cli::try_parse_from(["lesschess", "player"]).is_err());
        let cli = Cli::try_parse_from(["lesschess", "player", "Alice", "-c", "x.toml"]).unwrap();
        let Commands::Player(args) = cli.command else {
            panic!("expected player command");
        };
        assert_eq!(args.identity, "Alice");
        assert_eq!(args.config.config, PathBuf::from("x.toml"));
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["lesschess", "games", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_watch_interval() {
        let cli = Cli::try_parse_from(["lesschess", "watch", "--interval", "5"]).unwrap();
        let Commands::Watch(args) = cli.command else {
            panic!("expected watch command");
        };
        assert_eq!(args.interval, 5);
        assert_eq!(args.iterations, None);
    }

    #[test]
    fn test_parse_check_config() {
        let cli = Cli::try_parse_from(["lesschess", "check", "config"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Check(CheckCommand::Config(_))
        ));
    }
}
