//! Invalid input handling

use crate::common::BackupListing;
use crate::prune;
use anyhow::Result;

#[test]
fn test_missing_input_file() -> Result<()> {
    let listing = BackupListing::new()?;

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", "does-not-exist.txt",
        "--file-format", "%Y-%m-%d"
    )
    .assert_failure()?;

    assert_eq!(result.exit_code, 1);
    assert!(result.contains_stderr("Couldn't find input file 'does-not-exist.txt'"));
    assert!(!listing.path().join("to_prune.txt").exists());
    Ok(())
}

#[test]
fn test_negative_keep_count_is_rejected() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_names(&["2024-01-01".to_string()])?;

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", input.to_str().unwrap(),
        "--file-format", "%Y-%m-%d",
        "--keep-weekly=-1"
    )
    .assert_failure()?;

    assert!(result.contains_stderr("keep count for the weekly tier must not be negative, got -1"));
    assert!(!listing.path().join("to_prune.txt").exists());
    Ok(())
}

#[test]
fn test_missing_format() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_names(&["2024-01-01".to_string()])?;

    let result = prune!(listing.path(), "plan", "--input-file", input.to_str().unwrap())
        .assert_failure()?;

    assert!(result.contains_stderr("No timestamp format given"));
    Ok(())
}

#[test]
fn test_invalid_now() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_names(&["2024-01-01".to_string()])?;

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", input.to_str().unwrap(),
        "--file-format", "%Y-%m-%d",
        "--now", "last tuesday"
    )
    .assert_failure()?;

    assert!(result.contains_stderr("Invalid --now value"));
    Ok(())
}

#[test]
fn test_missing_explicit_config_file() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_names(&["2024-01-01".to_string()])?;

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", input.to_str().unwrap(),
        "--file-format", "%Y-%m-%d",
        "--config", "missing.toml"
    )
    .assert_failure()?;

    assert!(result.contains_stderr("Failed to read config file"));
    Ok(())
}
