//! Hash chain construction.
//!
//! Member hashes combine in selector order with the recurrence
//! `acc' = acc * HASH_MULTIPLIER ^ member_hash`, seeded with [`HASH_SEED`].
//! The chain is order-sensitive on purpose: equality is only defined
//! relative to one fixed selector order, so the hash may be too. All
//! arithmetic wraps; overflow never faults.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use smallvec::SmallVec;

use crate::synth::HashFn;

/// Seed of the hash chain. An empty member set hashes to exactly this.
pub const HASH_SEED: i32 = 29;

/// Multiplier of the hash chain. Odd, spreads bits across the 32-bit
/// space, cheap to compute. Nothing stronger is guaranteed; the value is
/// kept for behavioral compatibility.
pub const HASH_MULTIPLIER: i32 = 486_187_739;

/// One step of the hash chain.
#[inline]
#[must_use]
pub fn combine(acc: i32, member_hash: i32) -> i32 {
    acc.wrapping_mul(HASH_MULTIPLIER) ^ member_hash
}

/// Deterministic 32-bit hash of one value through its `Hash` impl.
///
/// `FxHasher` starts from a fixed state, so the result is stable across
/// processes and runs — required for the reproducibility invariant of
/// synthesized pairs.
#[inline]
#[must_use]
#[expect(clippy::cast_possible_truncation, reason = "deliberate 64-to-32 fold")]
pub fn hash32<V: Hash + ?Sized>(value: &V) -> i32 {
    let mut hasher = FxHasher::default();
    value.hash(&mut hasher);
    let wide = hasher.finish();
    ((wide >> 32) as u32 ^ wide as u32) as i32
}

/// Per-member hash contribution, erased over the containing type.
pub(crate) type MemberHashFn<T> = Box<dyn Fn(&T) -> i32 + Send + Sync>;

/// Folds the per-member contributions into one hash function.
///
/// Contributions are combined in the order given, which is selector order
/// by the time the engine calls this. No members means the function is
/// constantly [`HASH_SEED`].
pub(crate) fn compose<T: 'static>(contributions: Vec<MemberHashFn<T>>) -> HashFn<T> {
    let contributions: SmallVec<[MemberHashFn<T>; 4]> = SmallVec::from_vec(contributions);
    Box::new(move |value: &T| {
        contributions
            .iter()
            .fold(HASH_SEED, |acc, contribution| {
                combine(acc, contribution(value))
            })
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{combine, compose, hash32, MemberHashFn, HASH_MULTIPLIER, HASH_SEED};

    #[test]
    fn empty_chain_is_the_seed() {
        let hash = compose::<u8>(vec![]);
        assert_eq!(hash(&0), HASH_SEED);
        assert_eq!(hash(&255), HASH_SEED);
    }

    #[test]
    fn single_member_chain_is_one_combine_step() {
        let contribution: MemberHashFn<i32> = Box::new(|v| *v);
        let hash = compose(vec![contribution]);
        assert_eq!(hash(&7), HASH_SEED.wrapping_mul(HASH_MULTIPLIER) ^ 7);
    }

    #[test]
    fn chain_is_order_sensitive() {
        let a: MemberHashFn<()> = Box::new(|_: &()| 1);
        let b: MemberHashFn<()> = Box::new(|_: &()| 2);
        let ab = compose(vec![a, b]);

        let a: MemberHashFn<()> = Box::new(|_: &()| 1);
        let b: MemberHashFn<()> = Box::new(|_: &()| 2);
        let ba = compose(vec![b, a]);

        assert_ne!(ab(&()), ba(&()));
    }

    #[test]
    #[expect(clippy::cast_possible_truncation, reason = "reference computation")]
    fn combine_wraps_instead_of_overflowing() {
        // Saturated accumulator times the multiplier overflows i32; the
        // chain must wrap with two's-complement semantics, never fault.
        // Reference result computed in wide arithmetic.
        let wide = i64::from(i32::MAX) * i64::from(HASH_MULTIPLIER);
        assert_eq!(combine(i32::MAX, i32::MIN), wide as i32 ^ i32::MIN);
    }

    #[test]
    fn hash32_is_deterministic() {
        assert_eq!(hash32("value"), hash32("value"));
        assert_eq!(hash32(&42_u64), hash32(&42_u64));
    }
}
