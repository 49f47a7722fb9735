//! Shared handle to a lock manager for concurrent request handlers.
//!
//! All operations serialize on one mutex held for the whole operation, from
//! validation to table mutation, so no caller ever observes a partially
//! applied batch. The manager never awaits while the guard is held.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::Config,
    identifiers::{Identity, TransactionId},
    manager::LockManager,
    rejection::{AcquireError, ReleaseError},
    request::{LockRecord, LockRequest},
};

/// Cloneable handle; every clone arbitrates against the same lock table.
#[derive(Debug, Clone, Default)]
pub struct LockService {
    inner: Arc<Mutex<LockManager>>,
}

impl LockService {
    #[must_use]
    pub fn new(manager: LockManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(LockManager::from_config(config))
    }

    pub async fn acquire(&self, records: &[LockRecord]) -> Result<TransactionId, AcquireError> {
        self.inner.lock().await.acquire(records)
    }

    pub async fn release(
        &self,
        ids: &[TransactionId],
        identity: &Identity,
    ) -> Result<(), ReleaseError> {
        self.inner.lock().await.release(ids, identity)
    }

    /// Release every transaction owned by `identity`'s session.
    ///
    /// Resolution and release happen under one guard, so a concurrent
    /// acquire by the same session cannot slip in between.
    pub async fn release_session(&self, identity: &Identity) -> Result<Vec<TransactionId>, ReleaseError> {
        let mut manager = self.inner.lock().await;
        let ids = manager.transactions_owned_by(&identity.session_id);
        manager.release(&ids, identity)?;
        Ok(ids)
    }

    pub async fn lock_list(&self, session_ids: &[String]) -> Vec<(TransactionId, Vec<LockRequest>)> {
        self.inner.lock().await.lock_list(session_ids)
    }

    pub async fn transactions_owned_by(&self, session_id: &str) -> Vec<TransactionId> {
        self.inner.lock().await.transactions_owned_by(session_id)
    }

    /// Number of transactions currently held.
    pub async fn held_transactions(&self) -> usize {
        self.inner.lock().await.table().len()
    }
}
