//! Member classification: the four comparison strategies.
//!
//! A member type opts into synthesis by implementing [`MemberValue`]. The
//! associated [`CLASS`](MemberValue::CLASS) constant records which strategy
//! trait resolution picked, so the decision is made once per member when
//! the descriptor is built, never per call.
//!
//! The impl table is closed-world: primitives and the standard containers
//! are covered here, user value types register through [`plain_value!`]
//! (no equality operator of their own) or [`operator_value!`] (fieldless
//! enums and other operator-equipped values). `Option<M>` wraps any member
//! type and performs the null short-circuit BEFORE the inner strategy runs,
//! for every strategy.

use std::rc::Rc;
use std::sync::Arc;

use crate::hashing::{combine, hash32, HASH_SEED};
use crate::sequence::SequenceComparer;
use crate::MemberClass;

/// Structural equality and hashing for one member type.
///
/// The two methods must uphold the contract
/// `a.member_eq(&b) ⇒ a.member_hash() == b.member_hash()`. Every impl in
/// this crate does; a hand-written impl that breaks it poisons the
/// synthesized pair for any type that includes the member.
pub trait MemberValue {
    /// Strategy this type classifies under.
    const CLASS: MemberClass;

    /// Deep member-wise equality.
    fn member_eq(&self, other: &Self) -> bool;

    /// 32-bit structural hash, consistent with
    /// [`member_eq`](Self::member_eq). Must never panic.
    fn member_hash(&self) -> i32;
}

/// Registers operator-equipped value types: comparison is direct `==` on
/// the unboxed value, hashing goes through the type's `Hash` impl.
///
/// Intended for fieldless enums and newtypes that derive `PartialEq` and
/// `Hash` and whose `==` is the comparison callers mean.
#[macro_export]
macro_rules! operator_value {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::MemberValue for $ty {
            const CLASS: $crate::MemberClass = $crate::MemberClass::Operator;

            fn member_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn member_hash(&self) -> i32 {
                $crate::hash32(self)
            }
        }
    )*};
}

/// Registers plain value types: structs with `PartialEq`/`Hash` impls but
/// no equality operator story of their own.
///
/// The generated impl dispatches statically to the type's own impls. The
/// value is never erased to a trait object or moved to the heap on the way
/// to the comparison, so a type whose erased path is deliberately
/// unreachable still compares correctly.
#[macro_export]
macro_rules! plain_value {
    ($($ty:ty),* $(,)?) => {$(
        impl $crate::MemberValue for $ty {
            const CLASS: $crate::MemberClass = $crate::MemberClass::PlainValue;

            fn member_eq(&self, other: &Self) -> bool {
                self == other
            }

            fn member_hash(&self) -> i32 {
                $crate::hash32(self)
            }
        }
    )*};
}

// Operator strategy: primitives

operator_value!(i8, i16, i32, i64, i128, isize);
operator_value!(u8, u16, u32, u64, u128, usize);
operator_value!(bool, char, ());

// Floats compare with operator semantics (`NaN != NaN`) and hash by bit
// pattern. `f32`/`f64` have no `Hash` impl, so the macro does not apply.

impl MemberValue for f32 {
    const CLASS: MemberClass = MemberClass::Operator;

    fn member_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn member_hash(&self) -> i32 {
        hash32(&self.to_bits())
    }
}

impl MemberValue for f64 {
    const CLASS: MemberClass = MemberClass::Operator;

    fn member_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn member_hash(&self) -> i32 {
        hash32(&self.to_bits())
    }
}

// Null propagation: Option<M>
//
// The short-circuit runs before any strategy logic: None equals only None,
// and None contributes the fixed sentinel 0 to the hash chain. The class
// is the inner type's class — wrapping in Option does not reclassify.

impl<M: MemberValue> MemberValue for Option<M> {
    const CLASS: MemberClass = M::CLASS;

    fn member_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.member_eq(b),
            _ => false,
        }
    }

    fn member_hash(&self) -> i32 {
        match self {
            None => 0,
            Some(v) => v.member_hash(),
        }
    }
}

// PlainValue strategy: tuples
//
// Tuples are anonymous value types without an operator story of their own:
// component-wise equality, and the same seed/multiply/XOR recurrence over
// component hashes that named member chains use.

macro_rules! tuple_value {
    ($(($($name:ident : $idx:tt),+)),* $(,)?) => {$(
        impl<$($name: MemberValue),+> MemberValue for ($($name,)+) {
            const CLASS: MemberClass = MemberClass::PlainValue;

            fn member_eq(&self, other: &Self) -> bool {
                $(self.$idx.member_eq(&other.$idx))&&+
            }

            fn member_hash(&self) -> i32 {
                let mut acc = HASH_SEED;
                $(acc = combine(acc, self.$idx.member_hash());)+
                acc
            }
        }
    )*};
}

tuple_value!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
);

// Sequence strategy: slice-shaped containers
//
// Both operations delegate to the per-element-type comparer singleton.
// Element types classify recursively, so sequences of sequences work by
// instantiation.

impl<E: MemberValue> MemberValue for Vec<E> {
    const CLASS: MemberClass = MemberClass::Sequence;

    fn member_eq(&self, other: &Self) -> bool {
        SequenceComparer::<E>::DEFAULT.equals(Some(self), Some(other))
    }

    fn member_hash(&self) -> i32 {
        SequenceComparer::<E>::DEFAULT.hash(Some(self))
    }
}

impl<E: MemberValue> MemberValue for Box<[E]> {
    const CLASS: MemberClass = MemberClass::Sequence;

    fn member_eq(&self, other: &Self) -> bool {
        SequenceComparer::<E>::DEFAULT.equals(Some(self), Some(other))
    }

    fn member_hash(&self) -> i32 {
        SequenceComparer::<E>::DEFAULT.hash(Some(self))
    }
}

impl<E: MemberValue> MemberValue for &'static [E] {
    const CLASS: MemberClass = MemberClass::Sequence;

    fn member_eq(&self, other: &Self) -> bool {
        SequenceComparer::<E>::DEFAULT.equals(Some(*self), Some(*other))
    }

    fn member_hash(&self) -> i32 {
        SequenceComparer::<E>::DEFAULT.hash(Some(*self))
    }
}

impl<E: MemberValue, const N: usize> MemberValue for [E; N] {
    const CLASS: MemberClass = MemberClass::Sequence;

    fn member_eq(&self, other: &Self) -> bool {
        SequenceComparer::<E>::DEFAULT.equals(Some(self.as_slice()), Some(other.as_slice()))
    }

    fn member_hash(&self) -> i32 {
        SequenceComparer::<E>::DEFAULT.hash(Some(self.as_slice()))
    }
}

// Reference strategy
//
// Strings are atomic reference values despite being iterable: two strings
// with the same bytes are equal, there is no element-wise path. Shared
// pointers take an identity fast path before comparing pointees.

impl MemberValue for String {
    const CLASS: MemberClass = MemberClass::Reference;

    fn member_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn member_hash(&self) -> i32 {
        hash32(self)
    }
}

impl MemberValue for &'static str {
    const CLASS: MemberClass = MemberClass::Reference;

    fn member_eq(&self, other: &Self) -> bool {
        self == other
    }

    fn member_hash(&self) -> i32 {
        hash32(self)
    }
}

impl<M: MemberValue> MemberValue for Arc<M> {
    const CLASS: MemberClass = MemberClass::Reference;

    fn member_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other) || (**self).member_eq(other)
    }

    fn member_hash(&self) -> i32 {
        (**self).member_hash()
    }
}

impl<M: MemberValue> MemberValue for Rc<M> {
    const CLASS: MemberClass = MemberClass::Reference;

    fn member_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other) || (**self).member_eq(other)
    }

    fn member_hash(&self) -> i32 {
        (**self).member_hash()
    }
}

impl<M: MemberValue> MemberValue for Box<M> {
    const CLASS: MemberClass = MemberClass::Reference;

    fn member_eq(&self, other: &Self) -> bool {
        (**self).member_eq(other)
    }

    fn member_hash(&self) -> i32 {
        (**self).member_hash()
    }
}
