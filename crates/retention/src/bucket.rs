//! Single retention slots

use crate::Granularity;
use chrono::NaiveDateTime;
use std::fmt;

/// A time range that can hold one backup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBucket {
    granularity: Granularity,
    start: NaiveDateTime,
    end: NaiveDateTime,
    occupant: Option<String>,
}

impl TimeBucket {
    /// Create an empty bucket covering `start..=start + granularity`
    ///
    /// Returns `None` if the end of the bucket is not representable.
    pub fn starting_at(granularity: Granularity, start: NaiveDateTime) -> Option<Self> {
        let end = start.checked_add_signed(granularity.length())?;
        Some(Self {
            granularity,
            start,
            end,
            occupant: None,
        })
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Check whether a timestamp falls inside the bucket
    ///
    /// Both ends are inclusive, so a timestamp on the boundary between two
    /// adjacent buckets is contained by both.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp <= self.end
    }

    pub fn is_full(&self) -> bool {
        self.occupant.is_some()
    }

    /// Place a backup in the bucket
    ///
    /// The first claim wins: a full bucket keeps its occupant and `false`
    /// is returned.
    pub fn claim(&mut self, name: impl Into<String>) -> bool {
        if self.is_full() {
            return false;
        }
        self.occupant = Some(name.into());
        true
    }

    /// Name of the backup held by this bucket, if any
    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }

    /// Remove and return the occupant, leaving the bucket empty
    pub fn take(&mut self) -> Option<String> {
        self.occupant.take()
    }
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<{}: {} -> {}>",
            self.granularity.as_str(),
            self.start,
            self.end
        )
    }
}
