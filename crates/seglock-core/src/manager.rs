//! The lock manager: acquire and release over one lock table.
//!
//! `LockManager` is plain single-owner state; `&mut self` on acquire and
//! release is what makes each operation atomic. Share it between request
//! handlers through [`crate::service::LockService`].

use crate::{
    allocator::TransactionIdAllocator,
    config::{Config, LockLimits},
    conflict::{conflicts, self_conflicts},
    identifiers::{Identity, TransactionId},
    ownership::first_not_owned,
    rejection::{AcquireError, ReleaseError},
    request::{LockRecord, LockRequest},
    table::LockTable,
    validate::RequestValidator,
};

#[derive(Debug, Clone, Default)]
pub struct LockManager {
    validator: RequestValidator,
    table: LockTable,
    allocator: TransactionIdAllocator,
}

impl LockManager {
    /// Create a lock manager with the default request limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_limits(limits: LockLimits) -> Self {
        Self {
            validator: RequestValidator::new(limits),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_limits(config.limits)
    }

    /// Replace the id allocator; used to resume numbering or to exercise
    /// exhaustion.
    #[must_use]
    pub fn with_allocator(mut self, allocator: TransactionIdAllocator) -> Self {
        self.allocator = allocator;
        self
    }

    #[must_use]
    pub const fn table(&self) -> &LockTable {
        &self.table
    }

    /// Acquire every lock in `records` under one new transaction id.
    ///
    /// The batch is granted whole or not at all. Rejection order: the first
    /// invalid record, then any conflict inside the batch, then the first
    /// conflict with a held lock (scanning held transactions in ascending id
    /// order and each batch in its own order).
    pub fn acquire(&mut self, records: &[LockRecord]) -> Result<TransactionId, AcquireError> {
        let batch = self.validator.validate_batch(records).map_err(|reason| {
            tracing::debug!(%reason, "Not a valid lock record");
            AcquireError::from(reason)
        })?;

        if self_conflicts(&batch) {
            tracing::debug!("Lock request conflicts within itself");
            return Err(AcquireError::SelfConflict);
        }

        if self.table.is_empty() {
            tracing::debug!("Lock table is empty, granting without conflict scan");
        } else if let Some((held_by, existing)) = self.find_table_conflict(&batch) {
            tracing::debug!(transaction_id = %held_by, "Lock request conflicts with held lock");
            return Err(AcquireError::TableConflict {
                held_by,
                conflicting_request: existing.clone(),
            });
        }

        let id = self.allocator.next_id().ok_or_else(|| {
            tracing::warn!("Transaction id space exhausted, refusing lock request");
            AcquireError::TransactionIdsExhausted
        })?;

        tracing::info!(transaction_id = %id, records = batch.len(), "Granted locks");
        self.table.insert(id, batch);
        Ok(id)
    }

    fn find_table_conflict(&self, batch: &[LockRequest]) -> Option<(TransactionId, &LockRequest)> {
        batch.iter().find_map(|incoming| {
            self.table.iter().find_map(|(id, held)| {
                held.iter()
                    .find(|existing| conflicts(incoming, existing))
                    .map(|existing| (id, existing))
            })
        })
    }

    /// Release the named transactions on behalf of `identity`.
    ///
    /// Nothing is released unless every id is held and owned by `identity`.
    pub fn release(
        &mut self,
        ids: &[TransactionId],
        identity: &Identity,
    ) -> Result<(), ReleaseError> {
        if let Some(&missing) = ids.iter().find(|&&id| !self.table.contains(id)) {
            tracing::debug!(transaction_id = %missing, "Release names a transaction that is not held");
            return Err(ReleaseError::InvalidTransactionId {
                transaction_id: missing,
            });
        }

        if let Some((id, owner)) = first_not_owned(&self.table, ids, identity) {
            tracing::debug!(
                transaction_id = %id,
                requester = %identity,
                owner = %owner.identity(),
                "Lock is not owned by the requester"
            );
            return Err(ReleaseError::NotOwner {
                transaction_id: id,
                owner_request: owner.clone(),
            });
        }

        for &id in ids {
            if self.table.remove(id) {
                tracing::info!(transaction_id = %id, "Released locks");
            }
        }
        Ok(())
    }

    /// Every held batch whose owning session is one of `session_ids`,
    /// in ascending transaction id order.
    pub fn lock_list<S: AsRef<str>>(
        &self,
        session_ids: &[S],
    ) -> Vec<(TransactionId, Vec<LockRequest>)> {
        self.table
            .iter()
            .filter(|(_, batch)| {
                batch.first().is_some_and(|owner| {
                    session_ids
                        .iter()
                        .any(|session| session.as_ref() == owner.session_id)
                })
            })
            .map(|(id, batch)| (id, batch.to_vec()))
            .collect()
    }

    /// Ids of every transaction owned by `session_id`, for release-by-session.
    pub fn transactions_owned_by(&self, session_id: &str) -> Vec<TransactionId> {
        self.lock_list(&[session_id])
            .into_iter()
            .map(|(id, _)| id)
            .collect()
    }
}
