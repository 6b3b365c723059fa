//! prune-backups - decide which timestamped backups to delete

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

mod cmd;
mod settings;
mod util;

/// Grandfather-father-son retention for timestamped backups
#[derive(Parser)]
#[command(name = "prune-backups")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every bucket placement
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work out which backups to prune and write them to a file
    Plan(PlanArgs),
    /// Show configuration file location or an example file
    Config {
        /// Print the default config file path
        #[arg(long)]
        path: bool,
        /// Print an example config file
        #[arg(long)]
        example: bool,
    },
}

/// Arguments for `prune-backups plan`
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Backup names separated by newlines
    #[arg(long)]
    pub input_file: PathBuf,

    /// Timestamp format of the backup names (e.g. "backup-%Y-%m-%d.tar.gz")
    #[arg(long)]
    pub file_format: Option<String>,

    /// Where to write the names to prune
    #[arg(long, default_value = "to_prune.txt")]
    pub output_file: PathBuf,

    /// Number of backups to keep at the daily interval (default: 7)
    #[arg(long, allow_negative_numbers = true)]
    pub keep_daily: Option<i64>,

    /// Number of backups to keep at the weekly interval (default: 4)
    #[arg(long, allow_negative_numbers = true)]
    pub keep_weekly: Option<i64>,

    /// Number of backups to keep at the monthly interval (default: 6)
    #[arg(long, allow_negative_numbers = true)]
    pub keep_monthly: Option<i64>,

    /// Number of backups to keep at the yearly interval (default: 2)
    #[arg(long, allow_negative_numbers = true)]
    pub keep_yearly: Option<i64>,

    /// Reference date instead of the current time (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS)
    #[arg(long)]
    pub now: Option<String>,

    /// Config file (default: <config dir>/prune-backups/config.toml if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List kept backups and the bucket holding each
    #[arg(long)]
    pub show_kept: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Plan(args) => cmd::plan::run(args).await,
        Commands::Config { path, example } => cmd::config::run(path, example).await,
    }
}
