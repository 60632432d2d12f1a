//! Property-based tests for the pure helpers

#[cfg(test)]
mod tests {
    use crate::core::predicates::{all_equal, compact, not_empty, Emptiness, Truthy};
    use crate::core::records::{assoc_trans, rename_prop};
    use crate::core::reduce::seedless_reduce;
    use proptest::prelude::*;
    use serde_json::{json, Value};
    use std::collections::BTreeMap;

    fn json_scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-5i64..5).prop_map(|n| json!(n)),
            "[a-c]{0,2}".prop_map(Value::String),
            prop::collection::vec(0i64..3, 0..2).prop_map(|v| json!(v)),
            Just(json!({})),
        ]
    }

    // Property test: compact keeps exactly the truthy, non-empty elements in order
    proptest! {
        #[test]
        fn test_compact_is_an_order_preserving_filter(
            items in prop::collection::vec(json_scalar(), 0..20),
        ) {
            let compacted = compact(&items);
            let expected: Vec<Value> = items
                .iter()
                .filter(|v| v.is_truthy() && !v.is_empty_value())
                .cloned()
                .collect();

            prop_assert_eq!(&compacted, &expected);
            prop_assert!(compacted.iter().all(|v| not_empty(v) && v.is_truthy()));
            prop_assert!(compacted.len() <= items.len());
        }
    }

    // Property test: all_equal agrees with a manual scan
    proptest! {
        #[test]
        fn test_all_equal_matches_manual_scan(
            target in 0u8..3,
            items in prop::collection::vec(0u8..3, 0..10),
        ) {
            let manual = items.iter().filter(|&&x| x != target).count() == 0;
            prop_assert_eq!(all_equal(&target, &items), manual);
        }
    }

    // Property test: seedless_reduce matches a seeded sum for non-empty input
    proptest! {
        #[test]
        fn test_seedless_reduce_matches_sum(
            items in prop::collection::vec(-1000i64..1000, 0..50),
        ) {
            let result = seedless_reduce(|a, b| a + b, items.clone());
            if items.is_empty() {
                prop_assert!(result.is_err());
            } else {
                prop_assert_eq!(result.unwrap(), items.iter().sum::<i64>());
            }
        }
    }

    // Property test: record transforms never touch their input
    proptest! {
        #[test]
        fn test_record_transforms_preserve_input(
            entries in prop::collection::btree_map("[a-d]", 0i32..100, 0..6),
            old_key in "[a-d]",
            new_key in "[e-f]",
        ) {
            let record: BTreeMap<String, i32> = entries;
            let snapshot = record.clone();

            let renamed = rename_prop(old_key.clone(), new_key.clone(), &record);
            let assoc = assoc_trans(new_key.clone(), |r: &BTreeMap<String, i32>| r.len() as i32, &record);

            prop_assert_eq!(&record, &snapshot);
            prop_assert_eq!(assoc.get(&new_key), Some(&(record.len() as i32)));

            match record.get(&old_key) {
                Some(value) => {
                    prop_assert_eq!(renamed.get(&new_key), Some(value));
                    prop_assert!(!renamed.contains_key(&old_key));
                    prop_assert_eq!(renamed.len(), record.len());
                }
                None => prop_assert_eq!(&renamed, &record),
            }
        }
    }
}
