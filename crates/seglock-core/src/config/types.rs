//! Configuration type definitions
//!
//! Pure data holders; defaults live in `defaults`, behavior in `load`,
//! `merge` and `validate`.

use serde::{Deserialize, Serialize};

/// Root configuration structure
///
/// Loaded from defaults → global file → explicit file → env vars
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub limits: LockLimits,
    pub logging: LoggingConfig,
}

/// Structural bounds a lock request must satisfy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LockLimits {
    pub min_segments: usize,
    pub max_segments: usize,
    pub min_segment_length: u32,
    pub max_segment_length: u32,
    /// Segments per request allowed to carry `LockSame` or `LockAll`.
    pub max_lock_flags: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}
