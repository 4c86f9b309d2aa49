//! Leaf stringification and key normalization.

use crate::value::{Map, Value};

/// Returns a copy of `value` with every scalar leaf replaced by its text form.
///
/// Maps keep their keys and order, sequences keep their length. `Null` leaves
/// stay `Null`.
pub fn stringify_values(value: &Value) -> Value {
    match value {
        Value::Map(map) => Value::Map(stringify_map(map)),
        Value::Seq(items) => Value::Seq(items.iter().map(stringify_values).collect()),
        Value::Null => Value::Null,
        Value::Str(s) => Value::Str(s.clone()),
        scalar => Value::Str(scalar.to_string()),
    }
}

/// [`stringify_values`] for a bare map.
pub fn stringify_map(map: &Map) -> Map {
    map.iter()
        .map(|(key, value)| (key.clone(), stringify_values(value)))
        .collect()
}

/// Returns a copy of `value` whose maps are re-ordered by key at every level.
pub fn normalize(value: &Value) -> Value {
    match value {
        Value::Map(map) => {
            let mut sorted: Map = map
                .iter()
                .map(|(key, value)| (key.clone(), normalize(value)))
                .collect();
            sorted.sort_keys();
            Value::Map(sorted)
        }
        Value::Seq(items) => Value::Seq(items.iter().map(normalize).collect()),
        scalar => scalar.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, map, seq};

    #[test]
    fn stringifies_every_scalar_leaf() {
        let value = map! {
            "id" => 42,
            "ratio" => 0.5,
            "active" => true,
            "name" => "Bob",
            "tags" => seq![1, map! { "deep" => false }],
        };

        let expected = map! {
            "id" => "42",
            "ratio" => "0.5",
            "active" => "true",
            "name" => "Bob",
            "tags" => seq!["1", map! { "deep" => "false" }],
        };
        assert_eq!(stringify_values(&value), expected);
    }

    #[test]
    fn null_leaves_are_preserved() {
        let value = map! { "missing" => Value::Null };
        assert_eq!(stringify_values(&value), map! { "missing" => Value::Null });
    }

    #[test]
    fn stringify_keeps_key_order() {
        let value = map! { "b" => 1, "a" => 2 };
        let out = stringify_values(&value);
        let keys: Vec<_> = out.as_map().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("b"), Key::from("a")]);
    }

    #[test]
    fn normalize_sorts_nested_keys() {
        let value = map! { "b" => map! { "y" => 1, "x" => 2 }, "a" => seq![map! { 2 => 0, 1 => 0 }] };
        let out = normalize(&value);

        let top: Vec<_> = out.as_map().unwrap().keys().cloned().collect();
        assert_eq!(top, vec![Key::from("a"), Key::from("b")]);

        let inner: Vec<_> = out.get("b").unwrap().as_map().unwrap().keys().cloned().collect();
        assert_eq!(inner, vec![Key::from("x"), Key::from("y")]);

        let in_seq: Vec<_> = out.get("a").unwrap().as_seq().unwrap()[0]
            .as_map()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(in_seq, vec![Key::from(1), Key::from(2)]);
    }
}
