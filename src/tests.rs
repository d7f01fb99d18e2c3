//! Cross-module tests: synthesized pairs exercised end to end.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use crate::hashing::combine;
use crate::test_helpers::{
    tagged, tagged_pair, Counted, COUNTED_EQ_CALLS, COUNTED_HASH_CALLS,
};
use crate::{synthesize, FunctionPair, Member, HASH_SEED};

struct Order {
    id: u64,
    notes: Option<String>,
    quantities: Vec<i32>,
}

fn order_pair() -> FunctionPair<Order> {
    synthesize(
        |_| {
            Ok(vec![
                Member::field("id", |o: &Order| &o.id),
                Member::field("notes", |o: &Order| &o.notes),
                Member::field("quantities", |o: &Order| &o.quantities),
            ])
        },
        |_| Ok(vec![]),
    )
    .expect("fixture synthesis cannot fail")
}

fn order(id: u64, notes: Option<&str>, quantities: &[i32]) -> Order {
    Order {
        id,
        notes: notes.map(String::from),
        quantities: quantities.to_vec(),
    }
}

// === Null propagation through a member graph ===

#[test]
fn none_members_compare_equal_and_never_panic() {
    let pair = order_pair();
    let x = order(1, None, &[]);
    let y = order(1, None, &[]);
    let z = order(1, Some("gift wrap"), &[]);

    assert!((pair.equals)(&x, &y));
    assert_eq!((pair.hash)(&x), (pair.hash)(&y));
    assert!(!(pair.equals)(&x, &z));
    assert!(!(pair.equals)(&z, &x));
}

#[test]
fn none_member_contributes_zero_to_the_chain() {
    let pair = synthesize::<Order, _, _>(
        |_| Ok(vec![Member::field("notes", |o: &Order| &o.notes)]),
        |_| Ok(vec![]),
    )
    .unwrap();

    let x = order(1, None, &[]);
    assert_eq!((pair.hash)(&x), combine(HASH_SEED, 0));
}

// === Sequence members ===

#[test]
fn sequence_members_are_order_sensitive() {
    let pair = order_pair();
    let x = order(1, None, &[1, 2, 3]);
    let y = order(1, None, &[3, 2, 1]);

    assert!(!(pair.equals)(&x, &y));
}

#[test]
fn distinct_but_identical_sequences_are_equal() {
    let pair = order_pair();
    let x = order(1, None, &[1, 2, 3]);
    let y = order(1, None, &[1, 2, 3]);

    assert!((pair.equals)(&x, &y));
    assert_eq!((pair.hash)(&x), (pair.hash)(&y));
}

#[test]
fn nested_sequence_members_compare_recursively() {
    struct Grid {
        rows: Vec<Vec<i32>>,
    }

    let pair = synthesize::<Grid, _, _>(
        |_| Ok(vec![Member::field("rows", |g: &Grid| &g.rows)]),
        |_| Ok(vec![]),
    )
    .unwrap();

    let a = Grid { rows: vec![vec![1, 2], vec![3]] };
    let b = Grid { rows: vec![vec![1, 2], vec![3]] };
    let c = Grid { rows: vec![vec![1, 2], vec![4]] };

    assert!((pair.equals)(&a, &b));
    assert_eq!((pair.hash)(&a), (pair.hash)(&b));
    assert!(!(pair.equals)(&a, &c));
}

// === Plain values dispatch to their own impls ===

#[test]
fn plain_value_members_reach_the_types_own_impls() {
    use std::sync::atomic::Ordering;

    struct Holder {
        c: Counted,
    }

    let pair = synthesize::<Holder, _, _>(
        |_| Ok(vec![Member::field("c", |h: &Holder| &h.c)]),
        |_| Ok(vec![]),
    )
    .unwrap();

    let x = Holder { c: Counted(7) };
    let y = Holder { c: Counted(7) };

    let eq_before = COUNTED_EQ_CALLS.load(Ordering::Relaxed);
    let hash_before = COUNTED_HASH_CALLS.load(Ordering::Relaxed);

    assert!((pair.equals)(&x, &y));
    assert_eq!((pair.hash)(&x), (pair.hash)(&y));

    assert!(COUNTED_EQ_CALLS.load(Ordering::Relaxed) > eq_before);
    assert!(COUNTED_HASH_CALLS.load(Ordering::Relaxed) > hash_before);
}

// === Concurrency surface ===

#[test]
fn synthesized_pairs_are_send_and_sync() {
    fn assert_send_sync<S: Send + Sync>(_: &S) {}
    let pair = tagged_pair();
    assert_send_sync(&pair.equals);
    assert_send_sync(&pair.hash);
}

#[test]
fn pairs_can_be_memoized_in_static_storage() {
    use std::sync::OnceLock;

    // The intended caller pattern: at-most-once synthesis per type,
    // published through a static slot.
    static PAIR: OnceLock<FunctionPair<crate::test_helpers::Tagged>> = OnceLock::new();
    let pair = PAIR.get_or_init(tagged_pair);

    let x = tagged(3, "x");
    let y = tagged(3, "x");
    assert!((pair.equals)(&x, &y));
    assert_eq!((pair.hash)(&x), (pair.hash)(&y));
}

// === Properties ===

proptest! {
    #[test]
    fn reflexivity(a in any::<i32>(), b in ".*") {
        let pair = tagged_pair();
        let x = tagged(a, &b);
        prop_assert!((pair.equals)(&x, &x));
    }

    #[test]
    fn symmetry_and_hash_contract(
        a1 in any::<i32>(),
        b1 in ".*",
        a2 in any::<i32>(),
        b2 in ".*",
    ) {
        let pair = tagged_pair();
        let x = tagged(a1, &b1);
        let y = tagged(a2, &b2);

        prop_assert_eq!((pair.equals)(&x, &y), (pair.equals)(&y, &x));
        if (pair.equals)(&x, &y) {
            prop_assert_eq!((pair.hash)(&x), (pair.hash)(&y));
        }
    }

    #[test]
    fn memberwise_equal_inputs_are_equal_with_equal_hashes(a in any::<i32>(), b in ".*") {
        let pair = tagged_pair();
        let x = tagged(a, &b);
        let y = tagged(a, &b);

        prop_assert!((pair.equals)(&x, &y));
        prop_assert_eq!((pair.hash)(&x), (pair.hash)(&y));
    }

    #[test]
    fn sequence_equality_implies_equal_hashes(
        xs in proptest::collection::vec(any::<i32>(), 0..16),
        ys in proptest::collection::vec(any::<i32>(), 0..16),
    ) {
        let cmp = crate::SequenceComparer::<i32>::DEFAULT;
        if cmp.equals(Some(&xs), Some(&ys)) {
            prop_assert_eq!(cmp.hash(Some(&xs)), cmp.hash(Some(&ys)));
        }
    }
}
