//! Grandfather-father-son retention for timestamped backups
//!
//! This crate provides:
//! - Granularities with fixed, calendar-naive day lengths
//! - Time buckets and bucket series anchored at midnight of "now"
//! - The classifier that decides which backups to keep and which to prune
//! - Timestamp extraction from backup names
//! - A one-call planner tying it all together

pub mod backup;
pub mod bucket;
pub mod classifier;
pub mod config;
pub mod error;
pub mod granularity;
pub mod plan;
pub mod series;

// Re-exports
pub use backup::{parse_backups, parse_timestamp, BackupEntry, ParsedBackups};
pub use bucket::TimeBucket;
pub use classifier::{Classification, Retained, RetentionClassifier};
pub use config::RetentionConfig;
pub use error::{Result, RetentionError};
pub use granularity::Granularity;
pub use plan::{plan_prune, PrunePlan};
pub use series::{anchor_for, BucketSeries};
