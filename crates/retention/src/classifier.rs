//! Keep/prune classification over bucket tiers
//!
//! Backups are placed oldest first. Each one goes into the first bucket, in
//! tier priority order (daily, weekly, monthly, yearly), that is still empty
//! and whose range contains its timestamp. Buckets are never reassigned, so
//! when two backups compete for a slot the older one keeps it. Backups that
//! fit nowhere are pruned.

use crate::{BackupEntry, BucketSeries, Granularity, RetentionConfig, TimeBucket};
use chrono::NaiveDateTime;
use tracing::{debug, info};

/// A backup that claimed a bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Retained {
    pub name: String,
    pub timestamp: NaiveDateTime,
    /// Tier of the bucket that holds it
    pub granularity: Granularity,
    /// Position of the bucket within its tier (0 = most recent)
    pub bucket_index: usize,
}

/// Outcome of one classification run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    /// Backups kept, oldest first
    pub kept: Vec<Retained>,
    /// Backups to delete, oldest first
    pub pruned: Vec<String>,
}

impl Classification {
    pub fn kept_names(&self) -> impl Iterator<Item = &str> {
        self.kept.iter().map(|r| r.name.as_str())
    }
}

#[derive(Debug, Clone)]
struct Slot {
    index: usize,
    bucket: TimeBucket,
}

/// Assigns backups to retention buckets
///
/// A classifier owns a fresh set of empty buckets and is consumed by
/// [`RetentionClassifier::classify`].
#[derive(Debug, Clone)]
pub struct RetentionClassifier {
    slots: Vec<Slot>,
}

impl RetentionClassifier {
    /// Build from bucket series of any granularities
    ///
    /// Series are laid out in tier priority order regardless of the order
    /// they are passed in.
    pub fn new(series: impl IntoIterator<Item = BucketSeries>) -> Self {
        let mut series: Vec<_> = series.into_iter().collect();
        series.sort_by_key(BucketSeries::granularity);

        let slots = series
            .into_iter()
            .flat_map(|s| {
                s.into_buckets()
                    .into_iter()
                    .enumerate()
                    .map(|(index, bucket)| Slot { index, bucket })
            })
            .collect();

        Self { slots }
    }

    /// Build the four tiers described by `config`, anchored at midnight of `now`
    pub fn from_config(config: &RetentionConfig, now: NaiveDateTime) -> Self {
        Self::new(
            Granularity::PRIORITY
                .iter()
                .map(|&tier| BucketSeries::generate(tier, config.count_for(tier), now)),
        )
    }

    /// Total number of buckets across tiers
    pub fn bucket_count(&self) -> usize {
        self.slots.len()
    }

    /// Buckets in scan order
    pub fn buckets(&self) -> impl Iterator<Item = &TimeBucket> {
        self.slots.iter().map(|slot| &slot.bucket)
    }

    /// Place each backup and return what is kept and what is pruned
    pub fn classify(mut self, mut entries: Vec<BackupEntry>) -> Classification {
        // Stable: equal timestamps keep their input order
        entries.sort_by_key(|entry| entry.timestamp);

        let mut result = Classification::default();

        for entry in entries {
            let slot = self
                .slots
                .iter_mut()
                .find(|slot| !slot.bucket.is_full() && slot.bucket.contains(entry.timestamp));

            match slot {
                Some(slot) => {
                    slot.bucket.claim(entry.name.as_str());
                    debug!(
                        "Keeping {} in {} bucket {} {}",
                        entry.name,
                        slot.bucket.granularity(),
                        slot.index,
                        slot.bucket
                    );
                    result.kept.push(Retained {
                        name: entry.name,
                        timestamp: entry.timestamp,
                        granularity: slot.bucket.granularity(),
                        bucket_index: slot.index,
                    });
                }
                None => {
                    debug!("Pruning {} ({}): no free bucket", entry.name, entry.timestamp);
                    result.pruned.push(entry.name);
                }
            }
        }

        info!(
            "Classified {} backups over {} buckets: {} kept, {} to prune",
            result.kept.len() + result.pruned.len(),
            self.slots.len(),
            result.kept.len(),
            result.pruned.len()
        );

        result
    }
}
