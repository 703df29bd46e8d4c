use anyhow::Result;
use brewlog_cli::cli::{Cli, Commands, ConfigCommands};
use brewlog_cli::{commands, logging};
use brewlog_config::BrewlogConfig;
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // init and path never read the config file
    let config = match &cli.command {
        Some(Commands::Config(ConfigCommands::Init { .. } | ConfigCommands::Path)) => {
            BrewlogConfig::default()
        }
        _ => BrewlogConfig::load(cli.config.clone(), cli.db.clone())?,
    };

    logging::init(logging::resolve(
        cli.log_level,
        cli.verbose,
        std::env::var("RUST_LOG").ok(),
        config.logging.level.as_deref(),
    ));
    debug!(?config, "Loaded configuration");

    match cli.command {
        Some(Commands::Config(cmd)) => commands::config::execute(cmd, &config)?,
        Some(Commands::Stats) => commands::stats::execute(&config)?,
        None => commands::journal::execute(&config)?,
    }

    Ok(())
}
