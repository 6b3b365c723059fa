//! Backup names and the timestamps embedded in them

use crate::{Result, RetentionError};
use chrono::format::{ParseResult, Parsed, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A backup name paired with its parsed timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupEntry {
    pub name: String,
    pub timestamp: NaiveDateTime,
}

impl BackupEntry {
    pub fn new(name: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }

    /// Parse the timestamp out of `name` using a strftime-style format
    pub fn parse(name: impl Into<String>, format: &str) -> Result<Self> {
        let name = name.into();
        let timestamp = parse_timestamp(&name, format)?;
        Ok(Self { name, timestamp })
    }
}

/// Extract a timestamp from a backup name
///
/// The whole name must match `format`. Fields the format leaves out default
/// to the start of their range: month and day to 1, hour, minute and second
/// to 0. So `backup-%Y-%m` reads `backup-2024-05` as 2024-05-01 00:00:00.
pub fn parse_timestamp(name: &str, format: &str) -> Result<NaiveDateTime> {
    let source = match NaiveDateTime::parse_from_str(name, format) {
        Ok(timestamp) => return Ok(timestamp),
        Err(e) => e,
    };

    if let Ok(timestamp) = parse_with_defaults(name, format) {
        return Ok(timestamp);
    }

    // Ordinal and week-based dates conflict with the month/day defaults
    NaiveDate::parse_from_str(name, format)
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| RetentionError::InvalidTimestamp {
            name: name.to_string(),
            format: format.to_string(),
            source,
        })
}

fn parse_with_defaults(name: &str, format: &str) -> ParseResult<NaiveDateTime> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, name, StrftimeItems::new(format))?;

    // Setters leave fields that were already parsed untouched
    let _ = parsed.set_month(1);
    let _ = parsed.set_day(1);
    let _ = parsed.set_hour(0);
    let _ = parsed.set_minute(0);
    let _ = parsed.set_second(0);

    Ok(parsed.to_naive_date()?.and_time(parsed.to_naive_time()?))
}

/// Result of parsing a batch of backup names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBackups {
    /// Names that matched the format, in input order
    pub entries: Vec<BackupEntry>,
    /// Names that did not match the format, in input order
    pub unparsed: Vec<String>,
}

/// Parse every name, setting aside the ones that don't match `format`
pub fn parse_backups<I, S>(names: I, format: &str) -> ParsedBackups
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = ParsedBackups::default();

    for name in names {
        let name = name.into();
        match parse_timestamp(&name, format) {
            Ok(timestamp) => parsed.entries.push(BackupEntry { name, timestamp }),
            Err(e) => {
                tracing::debug!("Skipping backup: {}", e);
                parsed.unparsed.push(name);
            }
        }
    }

    parsed
}
