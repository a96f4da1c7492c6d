//! Property-based tests for the deduplication invariants:
//! - Deduplication is idempotent
//! - Output is never longer than the input
//! - Output is a subsequence of the input (order preserved)
//! - Only the first occurrence of each distinct value survives
//! - The generic hashed path agrees with the dynamic path on scalars

use distinct::{dedup, dedup_hashed, Value};
use proptest::prelude::*;

/// Generate an arbitrary scalar `Value`, biased toward collisions so that
/// deduplication actually triggers.
fn scalar_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-5_i64..5).prop_map(Value::from),
        "[ab]{0,2}".prop_map(Value::from),
    ]
}

/// Generate a `Value` of depth at most 3, mixing scalars, arrays, and objects.
fn any_value() -> impl Strategy<Value = Value> {
    scalar_value().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::btree_map("[xyz]", inner, 0..4).prop_map(Value::Object),
        ]
    })
}

fn value_sequences() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::vec(any_value(), 0..32)
}

/// True if `candidate` lists some subset of `sequence`'s elements in the same
/// relative order.
fn is_subsequence(candidate: &[Value], sequence: &[Value]) -> bool {
    let mut remaining = sequence.iter();
    candidate
        .iter()
        .all(|wanted| remaining.any(|present| present == wanted))
}

proptest! {
    #[test]
    fn prop_dedup_is_idempotent(values in value_sequences()) {
        let once = dedup(&values);
        prop_assert_eq!(dedup(&once), once.clone());
    }

    #[test]
    fn prop_output_never_longer_than_input(values in value_sequences()) {
        prop_assert!(dedup(&values).len() <= values.len());
    }

    #[test]
    fn prop_output_is_ordered_subsequence_of_input(values in value_sequences()) {
        let output = dedup(&values);
        prop_assert!(is_subsequence(&output, &values));
    }

    #[test]
    fn prop_output_has_no_duplicate_pairs(values in value_sequences()) {
        let output = dedup(&values);
        for (i, a) in output.iter().enumerate() {
            for b in &output[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn prop_first_occurrence_is_kept(values in value_sequences()) {
        let output = dedup(&values);
        for kept in &output {
            let first_position = values
                .iter()
                .position(|value| value == kept)
                .expect("Output value missing from input");

            // Every element before the first occurrence must differ from it,
            // otherwise an earlier duplicate was dropped ahead of the kept one.
            prop_assert!(values[..first_position].iter().all(|value| value != kept));
        }
    }

    #[test]
    fn prop_input_is_unchanged(values in value_sequences()) {
        let snapshot = values.clone();
        let _ = dedup(&values);
        prop_assert_eq!(values, snapshot);
    }

    #[test]
    fn prop_hashed_path_agrees_with_dynamic_path_on_integers(
        items in proptest::collection::vec(-10_i64..10, 0..64)
    ) {
        let values: Vec<Value> = items.iter().copied().map(Value::from).collect();
        let expected: Vec<Value> = dedup_hashed(&items).into_iter().map(Value::from).collect();

        prop_assert_eq!(dedup(&values), expected);
    }
}
