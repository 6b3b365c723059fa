//! Bucket granularities

use chrono::TimeDelta;
use std::fmt;

/// Width of a retention bucket
///
/// Variant order is tier priority: daily buckets are scanned before weekly,
/// weekly before monthly, monthly before yearly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// All granularities in scan priority order
    pub const PRIORITY: [Granularity; 4] = [
        Granularity::Day,
        Granularity::Week,
        Granularity::Month,
        Granularity::Year,
    ];

    /// Bucket length in days
    ///
    /// Months are always 30 days and years always 365. Existing prune lists
    /// depend on these exact widths.
    pub const fn days(self) -> i64 {
        match self {
            Granularity::Day => 1,
            Granularity::Week => 7,
            Granularity::Month => 30,
            Granularity::Year => 365,
        }
    }

    /// Bucket length as a duration
    pub fn length(self) -> TimeDelta {
        TimeDelta::days(self.days())
    }

    /// Short lowercase name ("day", "week", ...)
    pub const fn as_str(self) -> &'static str {
        match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
            Granularity::Year => "year",
        }
    }

    /// Adjective used for the tier ("daily", "weekly", ...)
    pub const fn tier_name(self) -> &'static str {
        match self {
            Granularity::Day => "daily",
            Granularity::Week => "weekly",
            Granularity::Month => "monthly",
            Granularity::Year => "yearly",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tier_name())
    }
}
