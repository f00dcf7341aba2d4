//! Configuration check command handler.

use std::path::Path;

use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::config::settings::{Config, ROSTER_ENV};

/// Validate a configuration file without touching the network.
pub fn execute_config<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let path = config_path.as_ref();
    let config = Config::load(path)?;
    let roster = config.roster()?;

    output::section("Configuration Check");
    output::field("Config", path.display());
    output::success("Configuration file is valid");

    output::section("Summary");
    let handles: Vec<&str> = roster.iter().map(|id| id.as_str()).collect();
    output::field("Roster", handles.join(", "));
    output::field("Time class", config.time_class);
    output::field("API", &config.api.base_url);
    output::field("Cache TTL", format!("{}s", config.cache.ttl_secs));

    if std::env::var_os(ROSTER_ENV).is_some() {
        output::note(&format!("roster overridden by {ROSTER_ENV}"));
    }

    output::success("Configuration check complete");
    Ok(())
}
