//! Configuration inspection command

use crate::settings;
use anyhow::{Context, Result};
use owo_colors::OwoColorize;

pub async fn run(path: bool, example: bool) -> Result<()> {
    if example {
        print!("{}", settings::example_config());
        return Ok(());
    }

    let config_path = settings::default_config_path()
        .context("Could not determine config file path")?;

    if path {
        println!("{}", config_path.display());
        return Ok(());
    }

    // No flag: show where settings come from and what they resolve to
    let loaded = settings::load(None).await?;

    println!("{}", "Configuration".bold());
    println!("{}: {}", "Location".dimmed(), config_path.display().dimmed());
    if !tokio::fs::try_exists(&config_path).await.unwrap_or(false) {
        println!("{}", "File does not exist; built-in defaults apply.".yellow());
    }
    println!();

    println!(
        "  {} = {}",
        "file_format".cyan(),
        loaded.file_format.as_deref().unwrap_or("(unset)")
    );
    println!("  {} = {}", "keep_daily".cyan(), loaded.retention.keep_daily);
    println!("  {} = {}", "keep_weekly".cyan(), loaded.retention.keep_weekly);
    println!("  {} = {}", "keep_monthly".cyan(), loaded.retention.keep_monthly);
    println!("  {} = {}", "keep_yearly".cyan(), loaded.retention.keep_yearly);

    Ok(())
}
