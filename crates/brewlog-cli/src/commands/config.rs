use anyhow::{Context, Result};
use brewlog_config::BrewlogConfig;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::ConfigCommands;

/// Execute config subcommand
pub fn execute(cmd: ConfigCommands, config: &BrewlogConfig) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config),
        ConfigCommands::Init { path, force } => init(path, force),
        ConfigCommands::Path => path(),
    }
}

/// Write the example config file
fn init(path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = path
        .or_else(|| BrewlogConfig::default_config_path().ok())
        .context("Could not determine config file path")?;

    if config_path.exists() && !force {
        println!(
            "{} Config file already exists at: {}",
            "Error:".red().bold(),
            config_path.display()
        );
        println!("Use {} to overwrite", "--force".yellow());
        return Ok(());
    }

    BrewlogConfig::create_example(&config_path)?;

    println!(
        "{} Created config file at: {}",
        "Success:".green().bold(),
        config_path.display()
    );
    println!(
        "\n{}",
        "Default values will be used until you customize the config.".dimmed()
    );
    Ok(())
}

/// Show the effective configuration (all precedence applied)
fn show(config: &BrewlogConfig) -> Result<()> {
    println!("{}", config.display_as_toml()?);
    Ok(())
}

fn path() -> Result<()> {
    let path = BrewlogConfig::default_config_path()?;
    println!("{}", path.display());
    Ok(())
}
