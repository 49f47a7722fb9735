//! Conflict detection between lock requests.
//!
//! Two requests are compared segment by segment **by position**: the first
//! segment of one request against the first segment of the other, and so on.
//! The first position that decides the outcome ends the comparison:
//!
//! ```text
//!  either flag LockAll                     -> conflict
//!  either flag LockSame, equal lengths     -> conflict
//!  lengths differ                          -> no conflict
//!  bytes 0..length of the resource ids     -> differ: no conflict
//! ```
//!
//! A pair whose shared positions all match byte for byte addresses the same
//! resource and conflicts. Read locks never conflict with each other.
//!
//! Every segment compares bytes starting at offset 0 of the resource id; the
//! offset does not advance with the lengths of earlier segments.

use itertools::Itertools;

use crate::request::{LockFlag, LockRequest, LockType, Segment};

/// Outcome of comparing one aligned pair of segments.
enum Position {
    Conflict,
    Disjoint,
    Undecided,
}

fn compare_position(a: &LockRequest, b: &LockRequest, sa: Segment, sb: Segment) -> Position {
    if sa.flag == LockFlag::LockAll || sb.flag == LockFlag::LockAll {
        tracing::trace!("segment locks every resource under this level");
        return Position::Conflict;
    }

    if (sa.flag == LockFlag::LockSame || sb.flag == LockFlag::LockSame) && sa.length == sb.length {
        return Position::Conflict;
    }

    if sa.length != sb.length {
        tracing::trace!(left = sa.length, right = sb.length, "segment lengths differ");
        return Position::Disjoint;
    }

    let same_bytes = (0..usize::from(sa.length)).all(|j| a.resource_byte(j) == b.resource_byte(j));
    if same_bytes {
        Position::Undecided
    } else {
        Position::Disjoint
    }
}

/// Whether `a` and `b` cannot be held at the same time.
#[must_use]
pub fn conflicts(a: &LockRequest, b: &LockRequest) -> bool {
    if a.lock_type == LockType::Read && b.lock_type == LockType::Read {
        return false;
    }

    for (&sa, &sb) in a.segments.iter().zip(&b.segments) {
        match compare_position(a, b, sa, sb) {
            Position::Conflict => return true,
            Position::Disjoint => return false,
            Position::Undecided => {}
        }
    }
    tracing::trace!(
        left = a.resource_id,
        right = b.resource_id,
        positions = a.segments.len().min(b.segments.len()),
        "every shared segment matched, same resource"
    );
    true
}

/// Whether any two requests of one batch conflict with each other.
#[must_use]
pub fn self_conflicts(batch: &[LockRequest]) -> bool {
    if batch.len() <= 1 {
        return false;
    }
    batch
        .iter()
        .tuple_combinations()
        .any(|(a, b)| conflicts(a, b))
}
