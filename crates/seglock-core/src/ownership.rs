//! Ownership checks for release requests.

use crate::{
    identifiers::{Identity, TransactionId},
    request::LockRequest,
    table::LockTable,
};

/// First transaction in `ids` that `identity` does not own, with the record
/// that names the actual owner.
///
/// A batch is owned by the session and console of its first record; every
/// record of a batch is submitted by the same caller, so the rest are not
/// inspected. Ids absent from the table are skipped; the caller checks
/// existence first.
#[must_use]
pub fn first_not_owned<'t>(
    table: &'t LockTable,
    ids: &[TransactionId],
    identity: &Identity,
) -> Option<(TransactionId, &'t LockRequest)> {
    ids.iter().find_map(|&id| {
        table
            .owner_record(id)
            .filter(|owner| !owner.is_owned_by(identity))
            .map(|owner| (id, owner))
    })
}

/// Whether `identity` owns every transaction in `ids`.
#[must_use]
pub fn owns_all(table: &LockTable, ids: &[TransactionId], identity: &Identity) -> bool {
    first_not_owned(table, ids, identity).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{LockFlag, LockType, Segment};

    fn request(session: &str, console: &str) -> LockRequest {
        LockRequest {
            session_id: session.to_string(),
            console_id: console.to_string(),
            lock_type: LockType::Write,
            resource_id: 0,
            segments: vec![Segment::new(LockFlag::DontLock, 1); 2],
        }
    }

    fn table() -> LockTable {
        let mut table = LockTable::new();
        table.insert(TransactionId::new(1), vec![request("s1", "hmc-a")]);
        table.insert(TransactionId::new(2), vec![request("s2", "hmc-a")]);
        table
    }

    #[test]
    fn test_owner_owns_own_transactions() {
        let table = table();
        let ids = [TransactionId::new(1)];
        assert!(owns_all(&table, &ids, &Identity::new("s1", "hmc-a")));
    }

    #[test]
    fn test_both_session_and_console_must_match() {
        let table = table();
        let ids = [TransactionId::new(1)];
        assert!(!owns_all(&table, &ids, &Identity::new("s1", "hmc-b")));
        assert!(!owns_all(&table, &ids, &Identity::new("s2", "hmc-a")));
    }

    #[test]
    fn test_reports_first_foreign_transaction() {
        let table = table();
        let ids = [TransactionId::new(1), TransactionId::new(2)];
        let found = first_not_owned(&table, &ids, &Identity::new("s1", "hmc-a"));
        assert_eq!(
            found.map(|(id, owner)| (id.get(), owner.session_id.as_str())),
            Some((2, "s2"))
        );
    }

    #[test]
    fn test_only_first_record_decides_ownership() {
        let mut table = LockTable::new();
        table.insert(
            TransactionId::new(9),
            vec![request("s1", "hmc-a"), request("other", "hmc-z")],
        );
        let ids = [TransactionId::new(9)];
        assert!(owns_all(&table, &ids, &Identity::new("s1", "hmc-a")));
    }
}
