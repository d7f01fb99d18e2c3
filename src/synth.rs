//! The function synthesis engine.
//!
//! `synthesize` enumerates the caller's members once, feeds the ordered
//! list to the equality and hash chain builders independently, and returns
//! the two composed functions as a unit. The engine is stateless: it
//! caches nothing, retains no reference to the result, and has no
//! observable side effect beyond the returned pair — per-type memoization
//! is caller policy. Calling it concurrently is safe; repeated synthesis
//! with the same selector output yields behaviorally identical pairs.

use rustc_hash::FxHashSet;

use crate::equality::{self, MemberEqFn};
use crate::errors::{SelectorError, SynthesisError};
use crate::hashing::{self, MemberHashFn};
use crate::member::{Member, MemberKind, TypeDescriptor};

/// Synthesized equality predicate: `Send + Sync`, pure in its arguments,
/// never panics for any live instance of `T`.
pub type EqualsFn<T> = Box<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Synthesized hash function, compatible with the paired [`EqualsFn`].
pub type HashFn<T> = Box<dyn Fn(&T) -> i32 + Send + Sync>;

/// The synthesized function pair, owned by the caller.
///
/// Upholds `(equals)(a, b) ⇒ (hash)(a) == (hash)(b)` as long as every
/// member's [`MemberValue`](crate::MemberValue) impl upholds its own
/// contract. Both closures are closed over the member comparers and
/// nothing else — no external mutable state, safe to invoke concurrently.
pub struct FunctionPair<T> {
    pub equals: EqualsFn<T>,
    pub hash: HashFn<T>,
}

/// Synthesizes the equality/hash pair for `T` from two member selectors.
///
/// The included members are `field_selector(T) ++ property_selector(T)`,
/// in selector output order, fields before properties (an explicit
/// tie-break). Order affects the hash chain, not equality correctness, so
/// selectors must be order-stable for hashes to reproduce across calls.
///
/// # Errors
///
/// Fails fast on configuration errors — a selector that cannot produce a
/// usable member list, or two members sharing a name. No partial pair is
/// ever returned; once this function succeeds, the returned closures have
/// no error path.
pub fn synthesize<T, F, P>(
    field_selector: F,
    property_selector: P,
) -> Result<FunctionPair<T>, SynthesisError>
where
    T: 'static,
    F: FnOnce(&TypeDescriptor<T>) -> Result<Vec<Member<T>>, SelectorError>,
    P: FnOnce(&TypeDescriptor<T>) -> Result<Vec<Member<T>>, SelectorError>,
{
    let descriptor = TypeDescriptor::new();

    let mut members = run_selector(&descriptor, MemberKind::Field, field_selector)?;
    members.extend(run_selector(&descriptor, MemberKind::Property, property_selector)?);

    let mut seen = FxHashSet::default();
    for member in &members {
        if !seen.insert(member.name()) {
            return Err(SynthesisError::DuplicateMember {
                type_name: descriptor.name(),
                name: member.name(),
            });
        }
        tracing::debug!(
            target_type = descriptor.name(),
            member = member.name(),
            kind = %member.kind(),
            class = ?member.class(),
            "including member"
        );
    }

    let member_count = members.len();
    let mut checks: Vec<MemberEqFn<T>> = Vec::with_capacity(member_count);
    let mut contributions: Vec<MemberHashFn<T>> = Vec::with_capacity(member_count);
    for member in members {
        let (eq, hash) = member.into_comparers();
        checks.push(eq);
        contributions.push(hash);
    }

    tracing::debug!(
        target_type = descriptor.name(),
        members = member_count,
        "synthesized function pair"
    );

    Ok(FunctionPair {
        equals: equality::compose(checks),
        hash: hashing::compose(contributions),
    })
}

fn run_selector<T, S>(
    descriptor: &TypeDescriptor<T>,
    kind: MemberKind,
    selector: S,
) -> Result<Vec<Member<T>>, SynthesisError>
where
    S: FnOnce(&TypeDescriptor<T>) -> Result<Vec<Member<T>>, SelectorError>,
{
    selector(descriptor).map_err(|source| SynthesisError::Selector {
        type_name: descriptor.name(),
        kind,
        source,
    })
}
