//! Synthesis error taxonomy.
//!
//! Everything here is a configuration error: the member selectors handed
//! the engine something it cannot act on. Configuration errors abort
//! synthesis entirely — no partial or degraded function pair is ever
//! returned. Once synthesis succeeds, the returned functions have no
//! error path at all: a null member is a defined short-circuit, not a
//! fault, and hash overflow wraps.

use thiserror::Error;

use crate::member::MemberKind;

/// Reason a member selector could not produce a usable member list.
///
/// Selector authors construct this; the engine wraps it with the target
/// type's name and which selector failed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct SelectorError {
    reason: String,
}

impl SelectorError {
    /// A selector failure with the given reason.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Hard failure during function synthesis.
#[derive(Debug, Error)]
pub enum SynthesisError {
    /// A member selector failed for the target type.
    #[error("{kind} selector failed for `{type_name}`: {source}")]
    Selector {
        type_name: &'static str,
        kind: MemberKind,
        #[source]
        source: SelectorError,
    },

    /// Two included members share a name. Diagnostics would be ambiguous,
    /// so the configuration is rejected up front.
    #[error("duplicate member name `{name}` on `{type_name}`")]
    DuplicateMember {
        type_name: &'static str,
        name: &'static str,
    },
}
