use anyhow::Result;
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand};
use debtplan::cli::OutputFormat;
use debtplan::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Reference date for due-date calculations (YYYY-MM-DD), defaults to today
    #[arg(short, long, global = true)]
    today: Option<NaiveDate>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for debtplan::AppCommand {
    fn from(cmd: Commands) -> debtplan::AppCommand {
        match cmd {
            Commands::List => debtplan::AppCommand::List,
            Commands::Alerts => debtplan::AppCommand::Alerts,
            Commands::Recommend => debtplan::AppCommand::Recommend,
            Commands::Avalanche => debtplan::AppCommand::Avalanche,
            Commands::Snowball => debtplan::AppCommand::Snowball,
            Commands::Summary => debtplan::AppCommand::Summary,
            Commands::Menu => debtplan::AppCommand::Menu,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// List all loans
    List,
    /// Show loans due within three days or overdue
    Alerts,
    /// Recommend a payoff strategy
    Recommend,
    /// Show unpaid loans by highest interest rate first
    Avalanche,
    /// Show unpaid loans by smallest balance first
    Snowball,
    /// Display totals across all loans
    Summary,
    /// Start the interactive menu
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let options = debtplan::RunOptions {
        config_path: cli.config_path,
        today: cli.today,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    let result = match cli.command {
        Some(Commands::Setup) => debtplan::cli::setup::setup(),
        Some(cmd) => debtplan::run_command(cmd.into(), &options),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
