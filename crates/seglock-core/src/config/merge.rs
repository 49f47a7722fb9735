//! Configuration merging logic (Immutable pattern)
//!
//! Later configs override earlier ones (defaults → global → explicit → env).
//! A field left at its default value in the overriding config keeps the
//! earlier value.

use super::{
    defaults::{
        DEFAULT_LOG_LEVEL, DEFAULT_MAX_LOCK_FLAGS, DEFAULT_MAX_SEGMENTS,
        DEFAULT_MAX_SEGMENT_LENGTH, DEFAULT_MIN_SEGMENTS, DEFAULT_MIN_SEGMENT_LENGTH,
    },
    types::{Config, LockLimits, LoggingConfig},
};

fn pick<T: PartialEq>(base: T, other: T, default: &T) -> T {
    if &other == default {
        base
    } else {
        other
    }
}

impl Config {
    /// Merge another config into this one (other takes precedence)
    pub fn merge(self, other: Self) -> Self {
        Self {
            limits: self.limits.merge(other.limits),
            logging: self.logging.merge(other.logging),
        }
    }
}

impl LockLimits {
    fn merge(self, other: Self) -> Self {
        Self {
            min_segments: pick(self.min_segments, other.min_segments, &DEFAULT_MIN_SEGMENTS),
            max_segments: pick(self.max_segments, other.max_segments, &DEFAULT_MAX_SEGMENTS),
            min_segment_length: pick(
                self.min_segment_length,
                other.min_segment_length,
                &DEFAULT_MIN_SEGMENT_LENGTH,
            ),
            max_segment_length: pick(
                self.max_segment_length,
                other.max_segment_length,
                &DEFAULT_MAX_SEGMENT_LENGTH,
            ),
            max_lock_flags: pick(
                self.max_lock_flags,
                other.max_lock_flags,
                &DEFAULT_MAX_LOCK_FLAGS,
            ),
        }
    }
}

impl LoggingConfig {
    fn merge(self, other: Self) -> Self {
        Self {
            level: pick(self.level, other.level, &DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}
