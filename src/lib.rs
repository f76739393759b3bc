pub mod cli;
pub mod core;
pub mod store;

use crate::cli::{OutputFormat, Report, priority::Method};
use crate::core::config::AppConfig;
use crate::store::load_repository;
use anyhow::Result;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    List,
    Alerts,
    Recommend,
    Avalanche,
    Snowball,
    Summary,
    Menu,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub config_path: Option<String>,
    /// Reference day for due-date calculations. Defaults to the local date.
    pub today: Option<NaiveDate>,
    pub format: OutputFormat,
}

/// Where the loaded loans came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Sample,
}

/// Loads the configuration from `config_path`, or from the default location.
/// Falls back to the sample loans when no path is given and no default file exists.
pub fn load_config(config_path: Option<&str>) -> Result<(AppConfig, ConfigSource)> {
    if let Some(path) = config_path {
        return Ok((AppConfig::load_from_path(path)?, ConfigSource::File));
    }

    let default_path = AppConfig::default_config_path()?;
    if default_path.exists() {
        Ok((AppConfig::load()?, ConfigSource::File))
    } else {
        info!(
            "No configuration at {}, using sample loans",
            default_path.display()
        );
        Ok((crate::core::sample::sample_config(), ConfigSource::Sample))
    }
}

pub fn run_command(command: AppCommand, options: &RunOptions) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_command_with(command, options, stdin.lock(), &mut stdout)
}

/// Runs a command against explicit input and output streams.
pub fn run_command_with<R: BufRead>(
    command: AppCommand,
    options: &RunOptions,
    input: R,
    out: &mut dyn Write,
) -> Result<()> {
    let (config, source) = load_config(options.config_path.as_deref())?;
    let today = options.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(?command, %today, "Running command");

    let mut repo = load_repository(&config, today)?;

    if command == AppCommand::Menu {
        return cli::menu::Menu::new(input, out, &mut repo, today, config.thresholds)
            .with_sample_notice(source == ConfigSource::Sample)
            .run();
    }

    let report = Report {
        repo: &repo,
        today,
        thresholds: config.thresholds,
        format: options.format,
    };
    match command {
        AppCommand::List => cli::loans::run(&report, out),
        AppCommand::Alerts => cli::alerts::run(&report, out),
        AppCommand::Recommend => cli::strategy::run(&report, out),
        AppCommand::Avalanche => cli::priority::run(Method::Avalanche, &report, out),
        AppCommand::Snowball => cli::priority::run(Method::Snowball, &report, out),
        AppCommand::Summary => cli::summary::run(&report, out),
        AppCommand::Menu => unreachable!("Menu command is handled above"),
    }
}
