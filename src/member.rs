//! Member descriptors and the type handle selectors receive.
//!
//! A [`Member`] carries a name (diagnostics only), whether it came from
//! the field or the property selector, the [`MemberClass`] trait
//! resolution picked for its type, and two erased closures built from a
//! read-only accessor. Everything strategy-specific is decided here, when
//! the descriptor is constructed — the synthesis engine only concatenates
//! and composes.

use std::any;
use std::fmt;
use std::marker::PhantomData;

use crate::classify::MemberValue;
use crate::equality::MemberEqFn;
use crate::hashing::MemberHashFn;
use crate::MemberClass;

/// Handle for the target type, passed to member selectors.
///
/// Exists so selectors have something to hang diagnostics on; the type
/// itself is fixed by the generic parameter.
pub struct TypeDescriptor<T> {
    name: &'static str,
    _target: PhantomData<fn() -> T>,
}

impl<T> TypeDescriptor<T> {
    pub(crate) fn new() -> Self {
        Self {
            name: any::type_name::<T>(),
            _target: PhantomData,
        }
    }

    /// The target type's name, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Which selector a member came from.
///
/// Fields sort before properties in the synthesized chains — an explicit
/// tie-break the engine documents and tests rely on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Field,
    Property,
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberKind::Field => f.write_str("field"),
            MemberKind::Property => f.write_str("property"),
        }
    }
}

/// One included member of `T`.
///
/// Built from a borrowing accessor `Fn(&T) -> &M` where `M` implements
/// [`MemberValue`]. The accessor is read-only; descriptors carry no
/// mutation capability.
pub struct Member<T> {
    name: &'static str,
    kind: MemberKind,
    class: MemberClass,
    eq: MemberEqFn<T>,
    hash: MemberHashFn<T>,
}

impl<T> Member<T> {
    /// Descriptor for a stored field.
    pub fn field<M, F>(name: &'static str, accessor: F) -> Self
    where
        M: MemberValue,
        F: Fn(&T) -> &M + Clone + Send + Sync + 'static,
    {
        Self::with_kind(name, MemberKind::Field, accessor)
    }

    /// Descriptor for a computed property exposed through a borrowing
    /// getter.
    pub fn property<M, F>(name: &'static str, accessor: F) -> Self
    where
        M: MemberValue,
        F: Fn(&T) -> &M + Clone + Send + Sync + 'static,
    {
        Self::with_kind(name, MemberKind::Property, accessor)
    }

    fn with_kind<M, F>(name: &'static str, kind: MemberKind, accessor: F) -> Self
    where
        M: MemberValue,
        F: Fn(&T) -> &M + Clone + Send + Sync + 'static,
    {
        let eq_accessor = accessor.clone();
        Self {
            name,
            kind,
            class: M::CLASS,
            eq: Box::new(move |a: &T, b: &T| eq_accessor(a).member_eq(eq_accessor(b))),
            hash: Box::new(move |value: &T| accessor(value).member_hash()),
        }
    }

    /// Member name, for diagnostics only.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Which selector this member belongs to.
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// The strategy trait resolution picked for the member's type.
    #[must_use]
    pub fn class(&self) -> MemberClass {
        self.class
    }

    /// Splits the descriptor into its two comparer closures, consuming it.
    pub(crate) fn into_comparers(self) -> (MemberEqFn<T>, MemberHashFn<T>) {
        (self.eq, self.hash)
    }
}

impl<T> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("class", &self.class)
            .finish_non_exhaustive()
    }
}
