use std::path::Path;

use tracing::info;

use crate::cli::commands::{Cli, Commands};
use crate::io::{config_io, logging};
use crate::model::Config;

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Some(Commands::Stop) => Ok(()),
        None | Some(Commands::Start) => cmd_start(&cli),
    }
}

/// Resolve config and `--db`, start logging, then hand over to the TUI
fn cmd_start(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = resolve_config(cli, &cwd)?;

    start_logging(&config);
    info!(
        db = %config.store.path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "starting todo-today"
    );

    crate::tui::run(&config)
}

/// Start file logging. A log file that cannot be opened is reported on
/// stderr and the session runs without logs. Returns whether logging is on.
fn start_logging(config: &Config) -> bool {
    let log_file = config.log_file();
    match logging::init(&log_file, &config.log.level) {
        Ok(()) => true,
        Err(e) => {
            eprintln!(
                "warning: cannot open log file {}: {}",
                log_file.display(),
                e
            );
            false
        }
    }
}

/// Load the config file and apply command-line overrides
pub fn resolve_config(cli: &Cli, cwd: &Path) -> Result<Config, config_io::ConfigError> {
    let mut config = config_io::load_config(cli.config.as_deref(), cwd)?;
    if let Some(db) = &cli.db {
        config.store.path = db.clone();
    }
    Ok(config)
}
