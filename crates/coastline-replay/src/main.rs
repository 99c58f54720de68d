//! Replay tool for exported Coastline activity logs.
//!
//! Reads a JSON array of log entries as exported from the realtime store,
//! replays it against the configured catalog and prints a JSON report of
//! every sector board, station budget and score breakdown.
//!
//! # Usage
//!
//! ```text
//! coastline-replay <log.json> [round]
//! ```
//!
//! Configuration is read from `$COASTLINE_CONFIG`, else from
//! `coastline-config.yaml` in the working directory, else defaults apply.
//! Logs go to stderr so stdout stays valid JSON.

mod error;
mod report;

use std::path::{Path, PathBuf};

use anyhow::Context;
use coastline_core::{GameConfig, GameRules, LoggingConfig};
use coastline_types::{ActivityLogEntry, Round};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ReplayError;
use crate::report::{Report, latest_round};

/// Environment variable naming the config file.
const CONFIG_PATH_ENV: &str = "COASTLINE_CONFIG";

/// Config file looked up in the working directory.
const DEFAULT_CONFIG_PATH: &str = "coastline-config.yaml";

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    log_path: PathBuf,
    round: Option<Round>,
}

fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    init_logging(&config.logging);
    info!(
        game = config.game.name,
        total_rounds = config.game.total_rounds,
        "coastline-replay starting"
    );

    let args = parse_args(std::env::args().skip(1))?;
    let log = read_log(&args.log_path)?;
    let round = args.round.unwrap_or_else(|| latest_round(&log));
    info!(entries = log.len(), round, "Activity log loaded");

    let rules = GameRules::from_config(&config).map_err(ReplayError::from)?;
    let report = Report::build(&config.game.name, &rules, &log, round);
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");
    Ok(())
}

/// Initialize structured logging. `RUST_LOG` takes precedence over the
/// configured level.
fn init_logging(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Load the game configuration.
fn load_config() -> Result<GameConfig, ReplayError> {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return Ok(GameConfig::from_file(Path::new(&path))?);
    }
    let config_path = Path::new(DEFAULT_CONFIG_PATH);
    if config_path.exists() {
        Ok(GameConfig::from_file(config_path)?)
    } else {
        Ok(GameConfig::default())
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, ReplayError> {
    let log_path = args.next().map(PathBuf::from).ok_or_else(|| ReplayError::Usage {
        message: String::from("missing log file"),
    })?;
    let round = args.next().map(|value| parse_round(&value)).transpose()?;
    if let Some(extra) = args.next() {
        return Err(ReplayError::Usage {
            message: format!("unexpected argument '{extra}'"),
        });
    }
    Ok(Args { log_path, round })
}

fn parse_round(value: &str) -> Result<Round, ReplayError> {
    value
        .trim()
        .parse::<Round>()
        .ok()
        .filter(|round| *round >= 1)
        .ok_or_else(|| ReplayError::InvalidRound {
            value: value.to_owned(),
        })
}

fn read_log(path: &Path) -> anyhow::Result<Vec<ActivityLogEntry>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read log file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse log file {}", path.display()))
}
