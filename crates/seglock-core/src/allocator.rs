//! Transaction id allocation.

use crate::identifiers::TransactionId;

/// Issues transaction ids 1, 2, 3, … for the lifetime of a manager.
///
/// Ids are never reused. The counter does not wrap: once `u32::MAX` has
/// been issued, [`TransactionIdAllocator::next_id`] returns `None`.
#[derive(Debug, Clone, Default)]
pub struct TransactionIdAllocator {
    last: u32,
}

impl TransactionIdAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Start after `last`, as if `last` ids had already been issued.
    #[must_use]
    pub const fn starting_after(last: u32) -> Self {
        Self { last }
    }

    pub fn next_id(&mut self) -> Option<TransactionId> {
        self.last = self.last.checked_add(1)?;
        Some(TransactionId::new(self.last))
    }

    /// The most recently issued id, if any.
    #[must_use]
    pub const fn last_issued(&self) -> Option<TransactionId> {
        if self.last == 0 {
            None
        } else {
            Some(TransactionId::new(self.last))
        }
    }
}
