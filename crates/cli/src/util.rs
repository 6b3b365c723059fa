//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::path::Path;

/// Formats accepted by `--now`
const ANCHOR_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a `--now` value
///
/// Supports:
/// - Date: "2024-01-02" (midnight)
/// - Date and time: "2024-01-02T13:45:00", "2024-01-02 13:45:00", "2024-01-02T13:45"
pub fn parse_anchor(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    for format in ANCHOR_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(ts);
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .with_context(|| format!("Invalid --now value '{}': expected YYYY-MM-DD[THH:MM:SS]", raw))
}

/// Split file contents into backup names, trimming lines and skipping blanks
pub fn parse_identifiers(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read backup names from a newline-delimited file
pub async fn read_identifiers(path: &Path) -> Result<Vec<String>> {
    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        anyhow::bail!("Couldn't find input file '{}'", path.display());
    }

    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    Ok(parse_identifiers(&contents))
}

/// Write one name per line
pub async fn write_prune_list(path: &Path, names: &[String]) -> Result<()> {
    let mut contents = String::with_capacity(names.iter().map(|n| n.len() + 1).sum());
    for name in names {
        contents.push_str(name);
        contents.push('\n');
    }

    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write prune list: {}", path.display()))
}
