//! The lock table: every granted batch, keyed by its transaction id.
//!
//! Iteration is in ascending transaction id order, which is the order in
//! which the manager scans for conflicts. Batch order is preserved since
//! conflict checks compare requests position by position.

use std::collections::BTreeMap;

use crate::{identifiers::TransactionId, request::LockRequest};

#[derive(Debug, Clone, Default)]
pub struct LockTable {
    entries: BTreeMap<TransactionId, Vec<LockRequest>>,
}

impl LockTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a granted batch under a freshly allocated id.
    pub fn insert(&mut self, id: TransactionId, batch: Vec<LockRequest>) {
        self.entries.insert(id, batch);
    }

    #[must_use]
    pub fn get(&self, id: TransactionId) -> Option<&[LockRequest]> {
        self.entries.get(&id).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, id: TransactionId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Drop the batch held under `id`; `false` if there was none.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        self.entries.remove(&id).is_some()
    }

    /// The request that identifies who owns a batch.
    #[must_use]
    pub fn owner_record(&self, id: TransactionId) -> Option<&LockRequest> {
        self.entries.get(&id).and_then(|batch| batch.first())
    }

    pub fn iter(&self) -> impl Iterator<Item = (TransactionId, &[LockRequest])> {
        self.entries.iter().map(|(id, batch)| (*id, batch.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
