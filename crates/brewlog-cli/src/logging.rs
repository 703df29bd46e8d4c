//! Tracing subscriber setup
//!
//! Logs go to stderr so prompts and tables on stdout stay readable.

use crate::cli::LogLevel;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Where the effective filter came from, highest precedence first
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterSource {
    Flag(LevelFilter),
    Verbose,
    RustLog(String),
    Config(String),
    Off,
}

pub fn resolve(
    log_level: Option<LogLevel>,
    verbose: bool,
    rust_log: Option<String>,
    config_level: Option<&str>,
) -> FilterSource {
    if let Some(level) = log_level {
        return FilterSource::Flag(level.into());
    }
    if verbose {
        return FilterSource::Verbose;
    }
    if let Some(directives) = rust_log.filter(|s| !s.trim().is_empty()) {
        return FilterSource::RustLog(directives);
    }
    match config_level {
        Some(level) if !level.trim().is_empty() => FilterSource::Config(level.to_string()),
        _ => FilterSource::Off,
    }
}

impl FilterSource {
    pub fn into_filter(self) -> EnvFilter {
        match self {
            Self::Flag(level) => EnvFilter::default().add_directive(level.into()),
            Self::Verbose => EnvFilter::new("debug"),
            Self::RustLog(directives) | Self::Config(directives) => {
                EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"))
            }
            Self::Off => EnvFilter::new("off"),
        }
    }
}

/// Install the global subscriber; call once from `main`
pub fn init(source: FilterSource) {
    tracing_subscriber::fmt()
        .with_env_filter(source.into_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
