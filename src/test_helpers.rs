//! Shared fixtures for crate tests.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::member::Member;
use crate::plain_value;
use crate::synth::{synthesize, FunctionPair};

/// Two-member scenario type: one operator member, one reference member.
pub(crate) struct Tagged {
    pub a: i32,
    pub b: String,
}

pub(crate) fn tagged(a: i32, b: &str) -> Tagged {
    Tagged {
        a,
        b: String::from(b),
    }
}

/// Pair over both members of [`Tagged`], fields only.
pub(crate) fn tagged_pair() -> FunctionPair<Tagged> {
    synthesize(
        |_| {
            Ok(vec![
                Member::field("a", |t: &Tagged| &t.a),
                Member::field("b", |t: &Tagged| &t.b),
            ])
        },
        |_| Ok(vec![]),
    )
    .expect("fixture synthesis cannot fail")
}

pub(crate) static COUNTED_EQ_CALLS: AtomicUsize = AtomicUsize::new(0);
pub(crate) static COUNTED_HASH_CALLS: AtomicUsize = AtomicUsize::new(0);

/// Plain value type whose own `PartialEq`/`Hash` impls count their
/// invocations, to prove the synthesized functions dispatch statically to
/// the member type's impls instead of an erased fallback.
pub(crate) struct Counted(pub i32);

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        COUNTED_EQ_CALLS.fetch_add(1, Ordering::Relaxed);
        self.0 == other.0
    }
}

impl Hash for Counted {
    fn hash<H: Hasher>(&self, state: &mut H) {
        COUNTED_HASH_CALLS.fetch_add(1, Ordering::Relaxed);
        self.0.hash(state);
    }
}

plain_value!(Counted);
