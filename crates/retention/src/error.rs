//! Error types for retention planning

use crate::Granularity;
use thiserror::Error;

/// Errors raised while configuring retention or parsing backup names
#[derive(Debug, Error)]
pub enum RetentionError {
    /// A keep count was below zero.
    #[error("keep count for the {tier} tier must not be negative, got {value}")]
    NegativeCount {
        /// Tier the count belongs to
        tier: Granularity,
        /// Value that was supplied
        value: i64,
    },

    /// A keep count would push bucket boundaries out of the representable range.
    #[error("keep count for the {tier} tier is {count}, maximum is {max}")]
    TooManyBuckets {
        /// Tier the count belongs to
        tier: Granularity,
        /// Value that was supplied
        count: u64,
        /// Largest accepted value
        max: u32,
    },

    /// A backup name did not match the timestamp format.
    #[error("'{name}' does not match timestamp format '{format}': {source}")]
    InvalidTimestamp {
        name: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type for retention operations
pub type Result<T> = std::result::Result<T, RetentionError>;
