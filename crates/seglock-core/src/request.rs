//! Lock request types.
//!
//! A [`LockRecord`] is a request exactly as the routing layer decoded it from
//! JSON: lock type and flags are still free-form strings and segment lengths
//! are unchecked. [`crate::validate::RequestValidator`] turns a record into a
//! typed [`LockRequest`], which is what the conflict detector and the lock
//! table work with.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::identifiers::Identity;

/// Kind of lock requested on a resource.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum LockType {
    Read,
    Write,
}

/// Matching rule attached to one segment of a resource id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
pub enum LockFlag {
    /// Conflict with the peer segment whenever the lengths match.
    LockSame,
    /// Conflict with the peer segment unconditionally.
    LockAll,
    /// Compare the resource id bytes covered by the segment.
    DontLock,
}

impl LockFlag {
    /// `LockSame` and `LockAll` widen the lock beyond the literal bytes.
    #[must_use]
    pub const fn is_widening(self) -> bool {
        matches!(self, Self::LockSame | Self::LockAll)
    }
}

/// One positional segment of a validated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    #[serde(rename = "lockFlag")]
    pub flag: LockFlag,
    #[serde(rename = "segmentLength")]
    pub length: u8,
}

impl Segment {
    #[must_use]
    pub const fn new(flag: LockFlag, length: u8) -> Self {
        Self { flag, length }
    }
}

/// A structurally valid lock request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockRequest {
    pub session_id: String,
    pub console_id: String,
    pub lock_type: LockType,
    pub resource_id: u64,
    pub segments: Vec<Segment>,
}

impl LockRequest {
    /// Byte `index` of the resource id in little-endian order.
    ///
    /// Returns `None` past the eighth byte.
    #[must_use]
    pub fn resource_byte(&self, index: usize) -> Option<u8> {
        self.resource_id.to_le_bytes().get(index).copied()
    }

    #[must_use]
    pub fn is_owned_by(&self, identity: &Identity) -> bool {
        self.session_id == identity.session_id && self.console_id == identity.console_id
    }

    #[must_use]
    pub fn identity(&self) -> Identity {
        Identity::new(self.session_id.clone(), self.console_id.clone())
    }
}

/// A segment as received on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentRecord {
    pub lock_flag: String,
    pub segment_length: u32,
}

/// A lock request as received on the wire, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockRecord {
    pub session_id: String,
    pub console_id: String,
    pub lock_type: String,
    pub resource_id: u64,
    pub segments: Vec<SegmentRecord>,
}

impl From<Segment> for SegmentRecord {
    fn from(segment: Segment) -> Self {
        Self {
            lock_flag: segment.flag.to_string(),
            segment_length: u32::from(segment.length),
        }
    }
}

impl From<LockRequest> for LockRecord {
    fn from(request: LockRequest) -> Self {
        Self {
            session_id: request.session_id,
            console_id: request.console_id,
            lock_type: request.lock_type.to_string(),
            resource_id: request.resource_id,
            segments: request.segments.into_iter().map(SegmentRecord::from).collect(),
        }
    }
}
