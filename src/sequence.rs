//! Elementwise sequence comparison.
//!
//! One comparer exists per element type — [`SequenceComparer::DEFAULT`] is
//! an associated constant of the generic instantiation, so ownership sits
//! in the type system rather than a runtime registry. Elements classify
//! recursively through [`MemberValue`], which is what makes sequences of
//! sequences work.

use std::marker::PhantomData;
use std::ptr;

use crate::classify::MemberValue;
use crate::hashing::{combine, HASH_SEED};

/// Ordered structural equality and order-sensitive hashing over slices of
/// `E`.
///
/// Both operations take `Option<&[E]>` so the null short-circuit is part
/// of the comparer's own contract: two nulls are equal, null never equals
/// a sequence, and null hashes to `0`.
pub struct SequenceComparer<E> {
    _elem: PhantomData<fn() -> E>,
}

impl<E: MemberValue> SequenceComparer<E> {
    /// The comparer for element type `E`. Stateless; there is nothing to
    /// construct at runtime.
    pub const DEFAULT: Self = Self { _elem: PhantomData };

    /// Ordered structural equality.
    ///
    /// Short-circuits on length mismatch and on the first unequal element.
    /// Two views of the same sequence instance (same pointer, same length)
    /// are equal without any element comparison.
    #[must_use]
    pub fn equals(&self, a: Option<&[E]>, b: Option<&[E]>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                if ptr::eq(a, b) {
                    return true;
                }
                a.len() == b.len()
                    && a.iter().zip(b).all(|(x, y)| x.member_eq(y))
            }
            _ => false,
        }
    }

    /// Order-sensitive structural hash.
    ///
    /// Folds each element's hash through the same seed/multiply/XOR
    /// recurrence the member chain uses, in iteration order — consistent
    /// with element-order-sensitive equality. An empty sequence hashes to
    /// the seed; null hashes to `0`.
    #[must_use]
    pub fn hash(&self, a: Option<&[E]>) -> i32 {
        match a {
            None => 0,
            Some(elems) => elems
                .iter()
                .fold(HASH_SEED, |acc, elem| combine(acc, elem.member_hash())),
        }
    }
}
