use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use budget_ledger::cli::{connect_remote, handle_config, handle_summary, handle_track, Commands};
use budget_ledger::config::{LedgerPaths, Settings};
use budget_ledger::remote::{RemoteStore, SheetLayout};
use budget_ledger::services::Ledger;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track a monthly income and categorized expenses",
    long_about = "Records a monthly income and a list of categorized expenses, \
                  keeps them in a spreadsheet and a local JSON file, and prints \
                  what is left of the month's budget."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Local JSON ledger file (defaults to budget.json in the config directory)
    #[arg(short, long, global = true, env = "BUDGET_LEDGER_FILE")]
    file: Option<PathBuf>,

    /// Use an in-memory worksheet instead of the remote spreadsheet
    #[arg(long, global = true)]
    offline: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "budget_ledger=warn,budget=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let file = cli.file.clone().unwrap_or_else(|| paths.ledger_file());

    match cli.command.unwrap_or(Commands::Track) {
        Commands::Track => {
            let mut ledger = build_ledger(&settings, cli.offline)?;
            handle_track(&mut ledger, &settings, &file)?;
        }
        Commands::Summary => {
            let mut ledger = build_ledger(&settings, cli.offline)?;
            handle_summary(&mut ledger, &settings, &file)?;
        }
        Commands::Config => handle_config(&paths, &settings, &file),
    }

    Ok(())
}

/// Build a ledger over the configured remote store
fn build_ledger(settings: &Settings, offline: bool) -> Result<Ledger<Box<dyn RemoteStore>>> {
    let layout = SheetLayout::from_income_cell(&settings.income_cell)?;
    let remote = connect_remote(settings, offline)?;
    Ok(Ledger::new(remote, layout))
}
