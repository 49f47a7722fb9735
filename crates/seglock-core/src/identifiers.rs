//! Identifier newtypes shared across the lock manager.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one granted lock batch.
///
/// Issued by [`crate::allocator::TransactionIdAllocator`], strictly increasing
/// and never reused for the lifetime of a manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(u32);

impl TransactionId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The (session, console) pair that owns a lock batch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub session_id: String,
    pub console_id: String,
}

impl Identity {
    pub fn new(session_id: impl Into<String>, console_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            console_id: console_id.into(),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session '{}' on console '{}'", self.session_id, self.console_id)
    }
}
