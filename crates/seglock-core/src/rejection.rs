//! Typed rejections returned by acquire and release.
//!
//! Every rejection leaves the lock table untouched. They serialize with an
//! `"error"` tag so the routing layer can hand them back to the console as-is.

use serde::Serialize;
use thiserror::Error;

use crate::{identifiers::TransactionId, request::LockRequest, validate::ValidationError};

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum AcquireError {
    /// A record failed structural validation.
    #[error("invalid lock request: {reason}")]
    InvalidRequest {
        #[source]
        reason: ValidationError,
    },

    /// Two records of the same batch conflict with each other.
    #[error("lock request conflicts with itself")]
    SelfConflict,

    /// A record conflicts with a lock that is already held.
    #[error("lock request conflicts with transaction {held_by}")]
    TableConflict {
        held_by: TransactionId,
        conflicting_request: LockRequest,
    },

    /// Every transaction id has been issued.
    #[error("no transaction ids left to allocate")]
    TransactionIdsExhausted,
}

impl From<ValidationError> for AcquireError {
    fn from(reason: ValidationError) -> Self {
        Self::InvalidRequest { reason }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ReleaseError {
    /// The id was never granted or has already been released.
    #[error("transaction {transaction_id} is not held")]
    InvalidTransactionId { transaction_id: TransactionId },

    /// The transaction belongs to another session or console.
    #[error("transaction {transaction_id} is owned by session '{}' on console '{}'", owner_request.session_id, owner_request.console_id)]
    NotOwner {
        transaction_id: TransactionId,
        owner_request: LockRequest,
    },
}
