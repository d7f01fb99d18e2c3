//! Equality chain construction.
//!
//! The synthesized predicate is the logical AND, in selector order, of the
//! per-member checks, with short-circuit evaluation: the first unequal
//! member aborts the rest. The chain assumes both operands are live
//! instances of the containing type — reference-identity and null-instance
//! shortcuts for the type itself belong to whatever convenience wrapper
//! sits above the engine, not here.

use smallvec::SmallVec;

use crate::synth::EqualsFn;

/// Per-member equality check, erased over the containing type.
pub(crate) type MemberEqFn<T> = Box<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Folds the per-member checks into one equality predicate.
///
/// No members means the predicate is constantly `true` (the neutral
/// element of conjunction).
pub(crate) fn compose<T: 'static>(checks: Vec<MemberEqFn<T>>) -> EqualsFn<T> {
    let checks: SmallVec<[MemberEqFn<T>; 4]> = SmallVec::from_vec(checks);
    Box::new(move |a: &T, b: &T| checks.iter().all(|check| check(a, b)))
}
