//! Key search across nested maps and sequences.

use crate::{
    path::Path,
    value::{Key, Map, Value},
};

/// Returns the path of every occurrence of `key`, depth-first in map order.
///
/// A map holding `key` is reported before anything nested below it.
pub fn find_key_paths(value: &Value, key: &Key) -> Vec<Path> {
    let mut found = Vec::new();
    collect_key_paths(value, key, &mut Path::new(), &mut found);
    found
}

fn collect_key_paths(value: &Value, key: &Key, current: &mut Path, found: &mut Vec<Path>) {
    match value {
        Value::Map(map) => {
            if map.contains_key(key) {
                found.push(current.child(key));
            }
            for (child_key, child) in map {
                current.push(child_key);
                collect_key_paths(child, key, current, found);
                current.pop();
            }
        }
        Value::Seq(items) => {
            for (index, item) in items.iter().enumerate() {
                current.push(index);
                collect_key_paths(item, key, current, found);
                current.pop();
            }
        }
        _ => {}
    }
}

/// Returns `true` if `key` occurs in any map nested within `value`.
pub fn contains_key_nested(value: &Value, key: &Key) -> bool {
    match value {
        Value::Map(map) => {
            map.contains_key(key) || map.values().any(|child| contains_key_nested(child, key))
        }
        Value::Seq(items) => items.iter().any(|item| contains_key_nested(item, key)),
        _ => false,
    }
}

/// Returns `true` if at least one value of `map` is non-empty.
///
/// See [`Value::is_empty`].
pub fn has_non_empty_value(map: &Map) -> bool {
    map.values().any(|value| !value.is_empty())
}
