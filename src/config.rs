use clap::Parser;
use std::path::PathBuf;

const DEFAULT_LOG_FILE: &str = "pocket-ledger.log";

#[derive(Debug, Clone, Parser)]
#[command(name = "pocket-ledger", version, about = "Track income and expenses in the terminal")]
pub struct Args {
    /// Start with a few sample entries
    #[arg(long)]
    pub demo: bool,

    /// Where log output goes (the terminal belongs to the UI)
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log filter, e.g. `info` or `pocket_ledger=debug`
    #[arg(long, env = "POCKET_LEDGER_LOG", default_value = "info")]
    pub log_level: String,
}

pub fn load() -> Args {
    Args::parse()
}
