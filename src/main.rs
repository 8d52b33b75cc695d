use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use outlay::cli::{handle_add_command, handle_report_command, sample_store, AddArgs, ReportArgs};

#[derive(Parser)]
#[command(
    name = "outlay",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Outlay tracks dated, categorized expenses and reports them \
                  filtered by category and date range, sorted by date, amount, \
                  or category, with a running total."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the expense report
    Report(ReportArgs),

    /// Validate and record a new expense, then show the refreshed report
    Add(AddArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let today = Local::now().date_naive();
    let mut store = sample_store(today);

    match cli.command {
        Commands::Report(args) => handle_report_command(&store, args, today)?,
        Commands::Add(args) => handle_add_command(&mut store, args, today)?,
    }

    Ok(())
}
