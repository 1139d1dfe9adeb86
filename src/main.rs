// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

mod config;

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use pocket_ledger::{Category, EntryDraft, EntryType, Ledger};

fn main() -> Result<()> {
    let args = config::load();
    setup_logging(&args)?;

    let ledger = if args.demo {
        demo_ledger()
    } else {
        Ledger::new()
    };
    tracing::info!(entries = ledger.len(), version = pocket_ledger::VERSION, "starting");

    run_ui_mode(ledger)
}

fn setup_logging(args: &config::Args) -> Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)
        .with_context(|| format!("could not open log file {}", args.log_file.display()))?;

    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log filter: {}", args.log_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .init();

    Ok(())
}

fn demo_ledger() -> Ledger {
    let today = pocket_ledger::today();
    let mut ledger = Ledger::new();

    let samples = [
        (EntryType::Income, 1000.0, Category::Salary, "Monthly salary"),
        (EntryType::Expense, 250.0, Category::Rent, "Room share"),
        (EntryType::Expense, 50.0, Category::Food, "Groceries"),
    ];
    for (entry_type, amount, category, description) in samples {
        ledger.add(EntryDraft {
            entry_type,
            amount,
            category,
            date: today,
            description: description.to_string(),
        });
    }

    ledger
}

#[cfg(feature = "tui")]
fn run_ui_mode(ledger: Ledger) -> Result<()> {
    let mut app = ui::App::new(ledger);
    ui::run_ui(&mut app)?;
    tracing::info!(entries = app.ledger.len(), "ui closed");
    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(ledger: Ledger) -> Result<()> {
    let summary = ledger.summary();
    println!("Income:   {}", pocket_ledger::format_amount(summary.income));
    println!("Expenses: {}", pocket_ledger::format_amount(summary.expenses));
    println!("Balance:  {}", pocket_ledger::format_amount(summary.balance));
    eprintln!("TUI mode not available, rebuild with: cargo build --features tui");
    Ok(())
}
