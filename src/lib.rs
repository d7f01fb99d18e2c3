//! Structural equality and hash synthesis for value-object types.
//!
//! This crate provides:
//!
//! - **Member classification** ([`MemberClass`], [`MemberValue`]) — every
//!   member type is classified once, at synthesis time, as
//!   [`Operator`](MemberClass::Operator) (direct `==` on the value),
//!   [`PlainValue`](MemberClass::PlainValue) (the type's own
//!   `PartialEq`/`Hash` through static dispatch, no erasure),
//!   [`Sequence`](MemberClass::Sequence) (element-wise comparison), or
//!   [`Reference`](MemberClass::Reference) (identity fast path, then
//!   pointee equality).
//!
//! - **Member descriptors** ([`Member`], [`MemberKind`],
//!   [`TypeDescriptor`]) — a name for diagnostics, a field/property kind,
//!   and a read-only accessor into the containing type.
//!
//! - **Function synthesis** ([`synthesize`], [`FunctionPair`]) — folds the
//!   selected members into one `equals(&T, &T) -> bool` and one
//!   `hash(&T) -> i32`, composed once and invocable any number of times,
//!   with the contract `equals(a, b) ⇒ hash(a) == hash(b)`.
//!
//! # Design
//!
//! Synthesis is a pure, stateless step: the engine enumerates the members
//! the caller's selectors return, classifies each by trait resolution, and
//! composes the per-member comparers into two standalone closures. Nothing
//! is cached inside the crate — callers are expected to memoize the
//! returned [`FunctionPair`] per type (a `OnceLock` in a static is enough).
//!
//! `None` members short-circuit before any strategy logic runs: `None`
//! equals only `None`, and contributes `0` to the hash chain. Sequence
//! members are compared element-wise in order and hashed with the same
//! order-sensitive seed/multiply/XOR recurrence as the outer member chain,
//! so permuting elements (or members) changes the hash.
//!
//! # Crate Dependencies
//!
//! `rustc-hash` supplies the deterministic member-level hasher, `smallvec`
//! keeps small member lists inline in the composed closures, `thiserror`
//! derives the synthesis error type, and `tracing` carries debug events.
//! No I/O, no global state.

mod classify;
mod equality;
mod errors;
pub mod hashing;
mod member;
mod sequence;
mod synth;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests;

pub use classify::MemberValue;
pub use errors::{SelectorError, SynthesisError};
pub use hashing::{hash32, HASH_MULTIPLIER, HASH_SEED};
pub use member::{Member, MemberKind, TypeDescriptor};
pub use sequence::SequenceComparer;
pub use synth::{synthesize, EqualsFn, FunctionPair, HashFn};

/// Comparison strategy for one member, chosen once at synthesis time.
///
/// The strategy is an associated constant of [`MemberValue`], so the
/// decision is made by trait resolution when the [`Member`] descriptor is
/// constructed — never per call. The variant a member landed on is
/// observable through [`Member::class`] for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberClass {
    /// Primitive or operator-equipped value: compared with `==` directly
    /// on the unboxed value.
    ///
    /// Examples: the integer primitives, `bool`, `char`, `f32`/`f64`,
    /// `()`, fieldless enums registered via [`operator_value!`].
    Operator,

    /// Value type without an equality operator of its own: compared and
    /// hashed through its `PartialEq`/`Hash` impls with static dispatch.
    /// The value is never erased to a trait object or moved to the heap
    /// on the way to the comparison.
    ///
    /// Examples: user structs registered via [`plain_value!`], tuples of
    /// member values.
    PlainValue,

    /// Ordered, iterable member: both operations delegate to the
    /// [`SequenceComparer`] for the element type. Text strings are NOT
    /// sequences — they compare as atomic [`Reference`](Self::Reference)
    /// values.
    ///
    /// Examples: `Vec<E>`, `Box<[E]>`, `[E; N]`.
    Sequence,

    /// Shared or owning pointer, or a string: identity fast path where
    /// one exists, then structural equality of the pointee.
    ///
    /// Examples: `String`, `&str`, `Arc<M>`, `Rc<M>`, `Box<M>`.
    Reference,
}
