//! Configuration validation

use super::{
    defaults::{
        DEFAULT_MAX_LOCK_FLAGS, DEFAULT_MAX_SEGMENTS, DEFAULT_MAX_SEGMENT_LENGTH,
        DEFAULT_MIN_SEGMENTS, DEFAULT_MIN_SEGMENT_LENGTH,
    },
    types::{Config, LockLimits},
};
use crate::{Error, Result};

impl Config {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any values are out of range or invalid
    pub fn validate(&self) -> Result<()> {
        self.limits.validate()?;

        if self.logging.level.trim().is_empty() {
            return Err(Error::invalid_config("logging.level cannot be empty"));
        }

        Ok(())
    }
}

impl LockLimits {
    /// Validate the request bounds
    ///
    /// Config may narrow the protocol bounds (2 to 6 segments, lengths 1 to
    /// 4 bytes, exactly one `LockSame`/`LockAll` per request) but never
    /// widen them.
    ///
    /// # Errors
    ///
    /// Returns error if a bound lies outside the protocol bounds or a range
    /// is empty
    pub fn validate(&self) -> Result<()> {
        if self.min_segments < DEFAULT_MIN_SEGMENTS {
            return Err(Error::invalid_config(format!(
                "limits.min_segments ({}) must be at least {DEFAULT_MIN_SEGMENTS}",
                self.min_segments
            )));
        }
        if self.max_segments > DEFAULT_MAX_SEGMENTS {
            return Err(Error::invalid_config(format!(
                "limits.max_segments ({}) must be at most {DEFAULT_MAX_SEGMENTS}",
                self.max_segments
            )));
        }
        if self.min_segments > self.max_segments {
            return Err(Error::invalid_config(format!(
                "limits.min_segments ({}) exceeds limits.max_segments ({})",
                self.min_segments, self.max_segments
            )));
        }
        if self.min_segment_length < DEFAULT_MIN_SEGMENT_LENGTH {
            return Err(Error::invalid_config(format!(
                "limits.min_segment_length must be at least {DEFAULT_MIN_SEGMENT_LENGTH}"
            )));
        }
        if self.max_segment_length > DEFAULT_MAX_SEGMENT_LENGTH {
            return Err(Error::invalid_config(format!(
                "limits.max_segment_length ({}) must be at most {DEFAULT_MAX_SEGMENT_LENGTH}",
                self.max_segment_length
            )));
        }
        if self.min_segment_length > self.max_segment_length {
            return Err(Error::invalid_config(format!(
                "limits.min_segment_length ({}) exceeds limits.max_segment_length ({})",
                self.min_segment_length, self.max_segment_length
            )));
        }
        if self.max_lock_flags != DEFAULT_MAX_LOCK_FLAGS {
            return Err(Error::invalid_config(format!(
                "limits.max_lock_flags ({}) must be {DEFAULT_MAX_LOCK_FLAGS}",
                self.max_lock_flags
            )));
        }
        Ok(())
    }
}
