//! Rows of contiguous buckets walking back from the anchor

use crate::{Granularity, TimeBucket};
use chrono::{NaiveDateTime, NaiveTime, TimeDelta};
use tracing::warn;

/// Truncate `now` to midnight
///
/// Every tier of one run is anchored at the same instant.
pub fn anchor_for(now: NaiveDateTime) -> NaiveDateTime {
    now.date().and_time(NaiveTime::MIN)
}

/// Ordered buckets of one granularity, most recent first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSeries {
    granularity: Granularity,
    buckets: Vec<TimeBucket>,
}

impl BucketSeries {
    /// Generate `count` buckets going back in time from midnight of `now`
    ///
    /// Bucket `i` starts at `anchor - i * length` and ends one length later,
    /// so bucket 0 begins at the anchor and each following bucket ends where
    /// the previous one starts.
    pub fn generate(granularity: Granularity, count: u32, now: NaiveDateTime) -> Self {
        let anchor = anchor_for(now);
        let mut buckets = Vec::with_capacity(count as usize);

        for i in 0..i64::from(count) {
            let bucket = TimeDelta::try_days(granularity.days() * i)
                .and_then(|offset| anchor.checked_sub_signed(offset))
                .and_then(|start| TimeBucket::starting_at(granularity, start));

            match bucket {
                Some(bucket) => buckets.push(bucket),
                None => {
                    warn!(
                        "{} series stops at {} buckets: boundaries out of range",
                        granularity, i
                    );
                    break;
                }
            }
        }

        Self {
            granularity,
            buckets,
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn buckets(&self) -> &[TimeBucket] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeBucket> {
        self.buckets.iter()
    }

    /// Start of the oldest bucket
    pub fn oldest_start(&self) -> Option<NaiveDateTime> {
        self.buckets.last().map(TimeBucket::start)
    }

    /// End of the most recent bucket
    pub fn newest_end(&self) -> Option<NaiveDateTime> {
        self.buckets.first().map(TimeBucket::end)
    }

    pub fn into_buckets(self) -> Vec<TimeBucket> {
        self.buckets
    }
}

impl<'a> IntoIterator for &'a BucketSeries {
    type Item = &'a TimeBucket;
    type IntoIter = std::slice::Iter<'a, TimeBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
