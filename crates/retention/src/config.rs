//! Retention counts per tier

use crate::{Granularity, Result, RetentionError};
use serde::{Deserialize, Serialize};

/// Number of buckets to keep in each tier
///
/// A count of zero disables that tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    pub keep_daily: u32,
    pub keep_weekly: u32,
    pub keep_monthly: u32,
    pub keep_yearly: u32,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            keep_daily: 7,
            keep_weekly: 4,
            keep_monthly: 6,
            keep_yearly: 2,
        }
    }
}

impl RetentionConfig {
    /// Upper bound on buckets per tier (100k yearly buckets is ~100k years)
    pub const MAX_BUCKETS_PER_TIER: u32 = 100_000;

    pub fn new(keep_daily: u32, keep_weekly: u32, keep_monthly: u32, keep_yearly: u32) -> Self {
        Self {
            keep_daily,
            keep_weekly,
            keep_monthly,
            keep_yearly,
        }
    }

    /// Configuration that keeps nothing
    pub fn none() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Build from signed counts, rejecting negative or oversized values
    pub fn from_signed(
        keep_daily: i64,
        keep_weekly: i64,
        keep_monthly: i64,
        keep_yearly: i64,
    ) -> Result<Self> {
        let config = Self::new(
            checked_count(Granularity::Day, keep_daily)?,
            checked_count(Granularity::Week, keep_weekly)?,
            checked_count(Granularity::Month, keep_monthly)?,
            checked_count(Granularity::Year, keep_yearly)?,
        );
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for tier in Granularity::PRIORITY {
            let count = self.count_for(tier);
            if count > Self::MAX_BUCKETS_PER_TIER {
                return Err(RetentionError::TooManyBuckets {
                    tier,
                    count: u64::from(count),
                    max: Self::MAX_BUCKETS_PER_TIER,
                });
            }
        }
        Ok(())
    }

    pub fn count_for(&self, granularity: Granularity) -> u32 {
        match granularity {
            Granularity::Day => self.keep_daily,
            Granularity::Week => self.keep_weekly,
            Granularity::Month => self.keep_monthly,
            Granularity::Year => self.keep_yearly,
        }
    }

    /// Copy of this configuration with one tier's count replaced
    pub fn with_count(mut self, granularity: Granularity, count: u32) -> Self {
        match granularity {
            Granularity::Day => self.keep_daily = count,
            Granularity::Week => self.keep_weekly = count,
            Granularity::Month => self.keep_monthly = count,
            Granularity::Year => self.keep_yearly = count,
        }
        self
    }

    /// Total number of buckets across all tiers
    pub fn total_buckets(&self) -> u64 {
        Granularity::PRIORITY
            .iter()
            .map(|&tier| u64::from(self.count_for(tier)))
            .sum()
    }
}

fn checked_count(tier: Granularity, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(RetentionError::NegativeCount { tier, value });
    }
    u32::try_from(value).map_err(|_| RetentionError::TooManyBuckets {
        tier,
        count: value as u64,
        max: RetentionConfig::MAX_BUCKETS_PER_TIER,
    })
}
