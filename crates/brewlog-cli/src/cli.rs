use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "brewlog")]
#[command(about = "brewlog - keep track of your coffee brewings, purchases and cuppings")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to the interactive journal)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// SQLite database file (overrides config file and BREWLOG_DB)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Config file path (defaults to ~/.config/brewlog/config.toml)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Set log level (off, error, warn, info, debug, trace)
    /// If not specified, uses RUST_LOG, then the config file, then 'off'
    #[arg(short = 'l', long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable verbose logging (shortcut for --log-level=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print record totals without prompting
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,

    /// Write an example config file
    Init {
        /// Where to write the file (defaults to the standard location)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the default config file location
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_starts_the_journal() {
        let cli = Cli::try_parse_from(["brewlog", "--db", "coffee.db"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.db, Some(PathBuf::from("coffee.db")));
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::try_parse_from(["brewlog", "stats", "-l", "debug"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Stats)));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn config_init_takes_path_and_force() {
        let cli =
            Cli::try_parse_from(["brewlog", "config", "init", "--path", "x.toml", "--force"])
                .unwrap();
        match cli.command {
            Some(Commands::Config(ConfigCommands::Init { path, force })) => {
                assert_eq!(path, Some(PathBuf::from("x.toml")));
                assert!(force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
