//! One-call prune planning from raw backup names

use crate::{
    anchor_for, parse_backups, BucketSeries, Granularity, Result, Retained, RetentionClassifier,
    RetentionConfig,
};
use chrono::NaiveDateTime;
use tracing::warn;

/// Full result of planning a prune run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunePlan {
    /// Midnight from which all buckets were derived
    pub anchor: NaiveDateTime,
    pub config: RetentionConfig,
    /// Earliest bucket start and latest bucket end across all tiers, `None`
    /// when every count is zero
    pub coverage: Option<(NaiveDateTime, NaiveDateTime)>,
    /// Backups that claimed a bucket, oldest first
    pub kept: Vec<Retained>,
    /// Backups to delete, oldest first
    pub pruned: Vec<String>,
    /// Names whose timestamp could not be parsed; neither kept nor pruned
    pub unparsed: Vec<String>,
}

impl PrunePlan {
    /// Number of names that took part in classification
    pub fn classified(&self) -> usize {
        self.kept.len() + self.pruned.len()
    }

    /// Kept backups held by buckets of one tier
    pub fn kept_in(&self, granularity: Granularity) -> impl Iterator<Item = &Retained> {
        self.kept.iter().filter(move |r| r.granularity == granularity)
    }
}

/// Decide which of `names` to prune
///
/// Names are parsed with `format`; those that don't match are reported in
/// [`PrunePlan::unparsed`] and left out of the decision. Buckets are
/// anchored at midnight of `now`.
pub fn plan_prune<I, S>(
    names: I,
    format: &str,
    config: &RetentionConfig,
    now: NaiveDateTime,
) -> Result<PrunePlan>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    config.validate()?;

    let parsed = parse_backups(names, format);
    if !parsed.unparsed.is_empty() {
        warn!(
            "{} backup names do not match format '{}' and were skipped",
            parsed.unparsed.len(),
            format
        );
    }

    let series: Vec<BucketSeries> = Granularity::PRIORITY
        .iter()
        .map(|&tier| BucketSeries::generate(tier, config.count_for(tier), now))
        .collect();
    let coverage = coverage_of(&series);

    let classification = RetentionClassifier::new(series).classify(parsed.entries);

    Ok(PrunePlan {
        anchor: anchor_for(now),
        config: *config,
        coverage,
        kept: classification.kept,
        pruned: classification.pruned,
        unparsed: parsed.unparsed,
    })
}

fn coverage_of(series: &[BucketSeries]) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let oldest = series.iter().filter_map(BucketSeries::oldest_start).min()?;
    let newest = series.iter().filter_map(BucketSeries::newest_end).max()?;
    Some((oldest, newest))
}
