//! Structural validation of incoming lock records.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::{
    config::LockLimits,
    request::{LockFlag, LockRecord, LockRequest, LockType, Segment},
};

/// Why a lock record was refused.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ValidationError {
    #[error("acquire request carries no lock records")]
    EmptyBatch,

    #[error("unknown lock type '{lock_type}'")]
    UnknownLockType { lock_type: String },

    #[error("{count} segments given, expected between {min} and {max}")]
    SegmentCount { count: usize, min: usize, max: usize },

    #[error("segment {index}: unknown lock flag '{flag}'")]
    UnknownLockFlag { index: usize, flag: String },

    #[error("segment {index}: length {length} outside {min}..={max}")]
    SegmentLength {
        index: usize,
        length: u32,
        min: u32,
        max: u32,
    },

    #[error("segment {index}: more than {max} segments use LockSame or LockAll")]
    TooManyLockFlags { index: usize, max: usize },
}

/// Checks lock records against [`LockLimits`] and produces typed requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestValidator {
    limits: LockLimits,
}

impl RequestValidator {
    #[must_use]
    pub const fn new(limits: LockLimits) -> Self {
        Self { limits }
    }

    #[must_use]
    pub const fn limits(&self) -> &LockLimits {
        &self.limits
    }

    /// Validate one record.
    ///
    /// Checks run in order: lock type, segment count, then for each segment
    /// its flag, its length and the running count of widening flags. The
    /// first failing check is reported.
    pub fn validate(&self, record: &LockRecord) -> Result<LockRequest, ValidationError> {
        let lock_type = LockType::from_str(&record.lock_type)
            .map_err(|_| ValidationError::UnknownLockType {
                lock_type: record.lock_type.clone(),
            })?;

        let count = record.segments.len();
        if count < self.limits.min_segments || count > self.limits.max_segments {
            return Err(ValidationError::SegmentCount {
                count,
                min: self.limits.min_segments,
                max: self.limits.max_segments,
            });
        }

        let mut widening = 0usize;
        let mut segments = Vec::with_capacity(count);
        for (index, raw) in record.segments.iter().enumerate() {
            let flag =
                LockFlag::from_str(&raw.lock_flag).map_err(|_| ValidationError::UnknownLockFlag {
                    index,
                    flag: raw.lock_flag.clone(),
                })?;

            let length = raw.segment_length;
            let in_range = (self.limits.min_segment_length..=self.limits.max_segment_length)
                .contains(&length);
            let length = u8::try_from(length)
                .ok()
                .filter(|_| in_range)
                .ok_or(ValidationError::SegmentLength {
                    index,
                    length,
                    min: self.limits.min_segment_length,
                    max: self.limits.max_segment_length,
                })?;

            if flag.is_widening() {
                widening += 1;
                if widening > self.limits.max_lock_flags {
                    return Err(ValidationError::TooManyLockFlags {
                        index,
                        max: self.limits.max_lock_flags,
                    });
                }
            }

            segments.push(Segment::new(flag, length));
        }

        Ok(LockRequest {
            session_id: record.session_id.clone(),
            console_id: record.console_id.clone(),
            lock_type,
            resource_id: record.resource_id,
            segments,
        })
    }

    /// Validate every record of a batch; the first invalid record fails
    /// the whole batch.
    pub fn validate_batch(&self, records: &[LockRecord]) -> Result<Vec<LockRequest>, ValidationError> {
        if records.is_empty() {
            return Err(ValidationError::EmptyBatch);
        }
        records.iter().map(|record| self.validate(record)).collect()
    }
}
