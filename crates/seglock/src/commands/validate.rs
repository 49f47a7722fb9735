//! `seglock validate`: check lock records without acquiring anything

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::ArgMatches;
use seglock_core::{Config, LockRecord, RequestValidator, ValidationError};
use serde::Serialize;

/// Verdict for one record of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub index: usize,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ValidationError>,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.reason {
            None => write!(f, "record {}: ok", self.index),
            Some(reason) => write!(f, "record {}: invalid: {reason}", self.index),
        }
    }
}

/// Validate every record independently.
///
/// An empty batch yields a single failing verdict, since acquire rejects
/// it the same way.
pub fn check(validator: &RequestValidator, records: &[LockRecord]) -> Vec<Verdict> {
    if records.is_empty() {
        return vec![Verdict {
            index: 0,
            valid: false,
            reason: Some(ValidationError::EmptyBatch),
        }];
    }

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let reason = validator.validate(record).err();
            Verdict {
                index,
                valid: reason.is_none(),
                reason,
            }
        })
        .collect()
}

pub async fn run(config: &Config, sub_m: &ArgMatches) -> Result<ExitCode> {
    let path = sub_m
        .get_one::<PathBuf>("file")
        .ok_or_else(|| anyhow::anyhow!("File path is required"))?;
    let json = sub_m.get_flag("json");

    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let records: Vec<LockRecord> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of lock records", path.display()))?;

    let verdicts = check(&RequestValidator::new(config.limits), &records);
    for verdict in &verdicts {
        if json {
            println!("{}", serde_json::to_string(verdict)?);
        } else {
            println!("{verdict}");
        }
    }

    let invalid = verdicts.iter().filter(|verdict| !verdict.valid).count();
    tracing::info!(records = records.len(), invalid, "Validation finished");

    if invalid == 0 {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

#[cfg(test)]
mod tests {
    use seglock_core::{LockLimits, SegmentRecord};

    use super::*;

    fn record(lock_type: &str, segments: &[(&str, u32)]) -> LockRecord {
        LockRecord {
            session_id: "s1".to_string(),
            console_id: "hmc-1".to_string(),
            lock_type: lock_type.to_string(),
            resource_id: 0xBEEF,
            segments: segments
                .iter()
                .map(|&(flag, length)| SegmentRecord {
                    lock_flag: flag.to_string(),
                    segment_length: length,
                })
                .collect(),
        }
    }

    #[test]
    fn test_each_record_gets_a_verdict() {
        let records = vec![
            record("Write", &[("DontLock", 1), ("LockSame", 2)]),
            record("Exclusive", &[("DontLock", 1), ("DontLock", 2)]),
            record("Read", &[("DontLock", 5), ("DontLock", 2)]),
        ];
        let verdicts = check(&RequestValidator::default(), &records);

        assert_eq!(verdicts.len(), 3);
        assert!(verdicts[0].valid);
        assert!(matches!(
            &verdicts[1].reason,
            Some(ValidationError::UnknownLockType { lock_type }) if lock_type == "Exclusive"
        ));
        assert!(matches!(
            verdicts[2].reason,
            Some(ValidationError::SegmentLength { index: 0, length: 5, .. })
        ));
    }

    #[test]
    fn test_empty_batch_is_one_failure() {
        let verdicts = check(&RequestValidator::default(), &[]);
        assert_eq!(verdicts.len(), 1);
        assert_eq!(verdicts[0].reason, Some(ValidationError::EmptyBatch));
    }

    #[test]
    fn test_configured_limits_apply() {
        let limits = LockLimits {
            max_segments: 2,
            ..LockLimits::default()
        };
        let three = record("Read", &[("DontLock", 1); 3]);
        let verdicts = check(&RequestValidator::new(limits), &[three]);
        assert!(matches!(
            verdicts[0].reason,
            Some(ValidationError::SegmentCount { count: 3, max: 2, .. })
        ));
    }

    #[test]
    fn test_verdict_json_omits_reason_when_valid() -> Result<()> {
        let verdicts = check(
            &RequestValidator::default(),
            &[record("Write", &[("DontLock", 1), ("DontLock", 1)])],
        );
        let value = serde_json::to_value(&verdicts[0])?;
        assert_eq!(value, serde_json::json!({ "index": 0, "valid": true }));
        Ok(())
    }
}
