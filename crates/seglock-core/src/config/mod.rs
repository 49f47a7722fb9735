//! Configuration loading and management
//!
//! # Example Config
//!
//! ```toml
//! [limits]
//! min_segments = 2
//! max_segments = 6
//! min_segment_length = 1
//! max_segment_length = 4
//! max_lock_flags = 1
//!
//! [logging]
//! level = "debug"
//! ```
//!
//! Limits may narrow the bounds shown above but not widen them.

mod defaults;
mod load;
mod merge;
mod types;
mod validate;

#[cfg(test)]
mod tests_loading;
#[cfg(test)]
mod tests_validation;

pub use load::{global_config_path, load_config, load_toml_file};
pub use types::{Config, LockLimits, LoggingConfig};
