//! Deep merge of configuration layers

use crate::value::{Map, Value};
use indexmap::map::Entry;

/// Merge `overlay` into `base` in place.
///
/// Nested mappings present on both sides are merged key by key; any other
/// pairing (scalar, sequence, or a mapping against a non-mapping) is
/// replaced outright by the overlay value. Keys only in `base` are kept.
/// Replaced keys keep their position; new keys are appended in overlay order.
pub fn deep_merge(base: &mut Map, overlay: Map) {
    for (key, value) in overlay {
        match base.entry(key) {
            Entry::Occupied(slot) => match (slot.into_mut(), value) {
                (Value::Map(existing), Value::Map(incoming)) => deep_merge(existing, incoming),
                (current, value) => *current = value,
            },
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
}

/// Non-destructive variant of [`deep_merge`].
pub fn merged(base: &Map, overlay: &Map) -> Map {
    let mut result = base.clone();
    deep_merge(&mut result, overlay.clone());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn map(src: &str) -> Map {
        let raw: serde_yaml::Value = serde_yaml::from_str(src).expect("yaml");
        match Value::from_yaml(raw).expect("convert") {
            Value::Map(map) => map,
            other => panic!("expected mapping, got {other:?}"),
        }
    }

    #[test]
    fn test_merge_concrete_scenario() {
        let mut base = map("db: {host: localhost, port: 5432}\n");
        deep_merge(&mut base, map("db: {port: 6543}\ndebug: true\n"));
        assert_eq!(base, map("db: {host: localhost, port: 6543}\ndebug: true\n"));
    }

    #[test]
    fn test_sequences_are_replaced_not_merged() {
        let mut base = map("hosts: [a, b, c]\n");
        deep_merge(&mut base, map("hosts: [z]\n"));
        assert_eq!(base["hosts"], Value::Seq(vec![Value::from("z")]));
    }

    #[test]
    fn test_scalar_replaces_mapping_and_back() {
        let mut base = map("db: {host: localhost}\nlevel: 3\n");
        deep_merge(&mut base, map("db: disabled\nlevel: {name: high}\n"));
        assert_eq!(base["db"], Value::from("disabled"));
        assert_eq!(base, map("db: disabled\nlevel: {name: high}\n"));
    }

    #[test]
    fn test_null_overlay_replaces_value() {
        let mut base = map("timeout: 30\n");
        deep_merge(&mut base, map("timeout: ~\n"));
        assert!(base["timeout"].is_null());
    }

    #[test]
    fn test_key_order_replaced_in_place_new_appended() {
        let mut base = map("a: 1\nb: 2\nc: 3\n");
        deep_merge(&mut base, map("d: 4\nb: 20\n"));
        let keys: Vec<&str> = base.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
        assert_eq!(base["b"], Value::Int(20));
    }

    #[test]
    fn test_merged_leaves_inputs_untouched() {
        let base = map("a: {b: 1}\n");
        let overlay = map("a: {c: 2}\n");
        let result = merged(&base, &overlay);
        assert_eq!(result, map("a: {b: 1, c: 2}\n"));
        assert_eq!(base, map("a: {b: 1}\n"));
    }

    fn arb_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            "[a-z]{0,6}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Seq),
                prop::collection::vec(("[a-d]", inner), 0..4)
                    .prop_map(|pairs| Value::Map(pairs.into_iter().collect())),
            ]
        })
    }

    fn arb_map() -> impl Strategy<Value = Map> {
        prop::collection::vec(("[a-d]", arb_value()), 0..5)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_overlay_wins_or_recurses(base in arb_map(), overlay in arb_map()) {
            let result = merged(&base, &overlay);
            for (key, value) in &overlay {
                match (base.get(key), value) {
                    (Some(Value::Map(b)), Value::Map(o)) => {
                        prop_assert_eq!(&result[key], &Value::Map(merged(b, o)));
                    }
                    _ => {
                        prop_assert_eq!(&result[key], value);
                    }
                }
            }
        }

        #[test]
        fn prop_base_only_keys_survive(base in arb_map(), overlay in arb_map()) {
            let result = merged(&base, &overlay);
            for (key, value) in &base {
                if !overlay.contains_key(key) {
                    prop_assert_eq!(&result[key], value);
                }
            }
            prop_assert!(result.len() >= base.len().max(overlay.len()));
        }

        #[test]
        fn prop_remerge_is_idempotent(base in arb_map(), overlay in arb_map()) {
            let once = merged(&base, &overlay);
            let twice = merged(&once, &overlay);
            prop_assert_eq!(once, twice);
        }
    }
}
