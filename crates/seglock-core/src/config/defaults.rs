//! Default configuration values

use super::types::{Config, LockLimits, LoggingConfig};

pub(crate) const DEFAULT_MIN_SEGMENTS: usize = 2;
pub(crate) const DEFAULT_MAX_SEGMENTS: usize = 6;
pub(crate) const DEFAULT_MIN_SEGMENT_LENGTH: u32 = 1;
pub(crate) const DEFAULT_MAX_SEGMENT_LENGTH: u32 = 4;
pub(crate) const DEFAULT_MAX_LOCK_FLAGS: usize = 1;
pub(crate) const DEFAULT_LOG_LEVEL: &str = "info";

#[allow(clippy::derivable_impls)]
impl Default for Config {
    fn default() -> Self {
        Self {
            limits: LockLimits::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LockLimits {
    fn default() -> Self {
        Self {
            min_segments: DEFAULT_MIN_SEGMENTS,
            max_segments: DEFAULT_MAX_SEGMENTS,
            min_segment_length: DEFAULT_MIN_SEGMENT_LENGTH,
            max_segment_length: DEFAULT_MAX_SEGMENT_LENGTH,
            max_lock_flags: DEFAULT_MAX_LOCK_FLAGS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
