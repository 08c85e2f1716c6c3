use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "todo-today",
    about = concat!("todo-today v", env!("CARGO_PKG_VERSION"), " - one day at a time"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Database file (overrides [store] path)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file (default: ./todo-today.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Open today's list (same as no subcommand)
    Start,
    /// Exit immediately
    Stop,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_start() {
        let cli = Cli::try_parse_from(["todo-today"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.db, None);
    }

    #[test]
    fn global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["todo-today", "start", "--db", "/tmp/t.db", "--config", "c.toml"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Start));
        assert_eq!(cli.db, Some(PathBuf::from("/tmp/t.db")));
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["todo-today", "list"]).is_err());
    }
}
