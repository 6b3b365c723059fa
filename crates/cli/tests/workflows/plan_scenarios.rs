//! Prune planning scenarios run through the binary

use crate::common::{day, nightly_names, BackupListing};
use crate::prune;
use anyhow::Result;

#[test]
fn test_single_daily_slot_prunes_older_backup() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_names(&["2024-01-01".to_string(), "2024-01-02".to_string()])?;
    let input = input.to_str().unwrap();

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", input,
        "--file-format", "%Y-%m-%d",
        "--keep-daily", "1",
        "--keep-weekly", "0",
        "--keep-monthly", "0",
        "--keep-yearly", "0",
        "--now", "2024-01-02"
    )
    .assert_success()?;

    assert_eq!(result.parse_prune_count(), Some(1));
    assert_eq!(listing.read_lines("to_prune.txt")?, vec!["2024-01-01"]);
    Ok(())
}

#[test]
fn test_empty_listing_writes_empty_prune_list() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_file("backups.txt", "\n\n")?;

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", input.to_str().unwrap(),
        "--file-format", "%Y-%m-%d",
        "--output-file", "out.txt"
    )
    .assert_success()?;

    assert!(result.contains_stdout("Prune list written to out.txt. 0 files to prune."));
    assert!(listing.read_lines("out.txt")?.is_empty());
    Ok(())
}

#[test]
fn test_backup_outside_all_tiers_is_pruned() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_names(&["backup-1998-03-04.tar".to_string()])?;

    prune!(
        listing.path(),
        "plan",
        "--input-file", input.to_str().unwrap(),
        "--file-format", "backup-%Y-%m-%d.tar",
        "--now", "2024-06-01"
    )
    .assert_success()?;

    assert_eq!(listing.read_lines("to_prune.txt")?, vec!["backup-1998-03-04.tar"]);
    Ok(())
}

#[test]
fn test_unparseable_names_are_left_out() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_names(&[
        "2024-05-30".to_string(),
        "README".to_string(),
        "2024-05-31".to_string(),
        "latest".to_string(),
    ])?;

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", input.to_str().unwrap(),
        "--file-format", "%Y-%m-%d",
        "--keep-daily", "0",
        "--keep-weekly", "0",
        "--keep-monthly", "0",
        "--keep-yearly", "0",
        "--now", "2024-06-01"
    )
    .assert_success()?;

    // Nothing is kept, but unparsed names are never scheduled for deletion
    assert_eq!(listing.read_lines("to_prune.txt")?, vec!["2024-05-30", "2024-05-31"]);
    assert!(result.contains_stdout("Unparsed:"));
    assert!(result.contains_stderr("README"));
    Ok(())
}

#[test]
fn test_default_retention_over_nightly_history() -> Result<()> {
    let listing = BackupListing::new()?;
    let format = "nightly-%Y-%m-%d.tar.zst";
    let names = nightly_names(day(2024, 6, 1), 1000, format);
    let input = listing.write_names(&names)?;

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", input.to_str().unwrap(),
        "--file-format", format,
        "--now", "2024-06-01T04:00:00",
        "--show-kept"
    )
    .assert_success()?;

    // 7 daily + 3 weekly + 5 monthly + 1 yearly slots are filled
    assert_eq!(result.parse_prune_count(), Some(1000 - 16));

    let pruned = listing.read_lines("to_prune.txt")?;
    assert_eq!(pruned.len(), 1000 - 16);
    assert!(!pruned.contains(&"nightly-2024-06-01.tar.zst".to_string()));
    assert!(!pruned.contains(&"nightly-2023-06-02.tar.zst".to_string()));
    assert!(pruned.contains(&"nightly-2023-06-01.tar.zst".to_string()));

    // Prune list is ordered oldest first
    assert_eq!(pruned.first().map(String::as_str), Some("nightly-2021-09-06.tar.zst"));

    assert!(result.contains_stdout("Kept backups"));
    assert!(result.contains_stdout("nightly-2024-06-01.tar.zst"));
    Ok(())
}

#[test]
fn test_repeated_runs_write_same_list() -> Result<()> {
    let listing = BackupListing::new()?;
    let format = "%Y-%m-%d";
    let names = nightly_names(day(2024, 3, 15), 200, format);
    let input = listing.write_names(&names)?;
    let input = input.to_str().unwrap();

    for output in ["first.txt", "second.txt"] {
        prune!(
            listing.path(),
            "plan",
            "--input-file", input,
            "--file-format", format,
            "--output-file", output,
            "--now", "2024-03-15"
        )
        .assert_success()?;
    }

    assert_eq!(listing.read_lines("first.txt")?, listing.read_lines("second.txt")?);
    Ok(())
}

#[test]
fn test_summary_shows_bucket_coverage() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_names(&["2024-01-09".to_string()])?;

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", input.to_str().unwrap(),
        "--file-format", "%Y-%m-%d",
        "--keep-daily", "3",
        "--keep-weekly", "0",
        "--keep-monthly", "0",
        "--keep-yearly", "0",
        "--now", "2024-01-10"
    )
    .assert_success()?;

    assert!(result.contains_stdout("Coverage:"));
    assert!(result.contains_stdout("2024-01-08 00:00:00 -> 2024-01-11 00:00:00"));
    Ok(())
}

#[test]
fn test_monthly_archive_names_without_day() -> Result<()> {
    let listing = BackupListing::new()?;
    let input = listing.write_names(&[
        "archive-2024-03.tar".to_string(),
        "archive-2024-04.tar".to_string(),
        "archive-2024-05.tar".to_string(),
    ])?;

    let result = prune!(
        listing.path(),
        "plan",
        "--input-file", input.to_str().unwrap(),
        "--file-format", "archive-%Y-%m.tar",
        "--keep-daily", "0",
        "--keep-weekly", "0",
        "--keep-monthly", "3",
        "--keep-yearly", "0",
        "--now", "2024-05-20"
    )
    .assert_success()?;

    assert!(!result.contains_stdout("Unparsed:"));
    assert_eq!(result.parse_prune_count(), Some(1));
    assert_eq!(listing.read_lines("to_prune.txt")?, vec!["archive-2024-03.tar"]);
    Ok(())
}
