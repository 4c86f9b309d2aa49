//! Recursive masking and transformation of values by key name.
//!
//! A [`Traversal`] walks maps and sequences at any depth. Whenever a map key is
//! in the [`TargetKeys`] set, the value under it is handed to a [`ValueMapper`]
//! and replaced with the result. The walk never descends into a replaced value,
//! and everything outside target keys is left exactly as it was.
//!
//! - **Mask mode** ([`Mask`], [`mask_values`]): replace with a fixed marker.
//! - **Transform mode** ([`FnMapper`], [`transform_values`]): replace with the
//!   result of a caller-supplied function.
//!
//! Map keys are never rewritten.

use std::collections::HashSet;

use crate::value::{Key, Value};

/// Marker written over masked values.
pub const MASK_MARKER: &str = "X";

/// Key names that commonly hold personal data.
pub const PII_KEYS: [&str; 4] = ["dob", "ssn", "driver_license_no", "business_tax_id"];

// =============================================================================
// TargetKeys
// =============================================================================

/// The set of key names whose values get replaced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetKeys(HashSet<Key>);

impl TargetKeys {
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        keys.into_iter().collect()
    }

    /// The [`PII_KEYS`] set.
    pub fn pii() -> Self {
        Self::new(PII_KEYS)
    }

    pub fn insert(&mut self, key: impl Into<Key>) -> bool {
        self.0.insert(key.into())
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<Key>> FromIterator<K> for TargetKeys {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// =============================================================================
// ValueMapper - what happens to a matched value
// =============================================================================

/// Produces the replacement for a value found under a target key.
pub trait ValueMapper {
    /// Returns the replacement for `value`, which was found under `key`.
    fn map_value(&self, key: &Key, value: Value) -> Value;
}

impl<M: ValueMapper + ?Sized> ValueMapper for &M {
    fn map_value(&self, key: &Key, value: Value) -> Value {
        (**self).map_value(key, value)
    }
}

/// Replaces every matched value with a fixed marker.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    marker: Value,
}

impl Mask {
    /// A mask writing [`MASK_MARKER`].
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<Value>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn marker(&self) -> &Value {
        &self.marker
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self {
            marker: Value::from(MASK_MARKER),
        }
    }
}

impl ValueMapper for Mask {
    fn map_value(&self, _key: &Key, _value: Value) -> Value {
        self.marker.clone()
    }
}

/// Adapts a `Fn(Value) -> Value` closure into a [`ValueMapper`].
#[derive(Clone, Copy, Debug)]
pub struct FnMapper<F>(pub F);

impl<F> ValueMapper for FnMapper<F>
where
    F: Fn(Value) -> Value,
{
    fn map_value(&self, _key: &Key, value: Value) -> Value {
        (self.0)(value)
    }
}

// =============================================================================
// Traversal
// =============================================================================

/// Walks nested maps and sequences, replacing values under target keys.
#[derive(Clone, Copy, Debug)]
pub struct Traversal<'a> {
    targets: &'a TargetKeys,
    keep_empty: bool,
}

impl<'a> Traversal<'a> {
    pub fn new(targets: &'a TargetKeys) -> Self {
        Self {
            targets,
            keep_empty: false,
        }
    }

    /// Leaves empty values under target keys untouched.
    ///
    /// See [`Value::is_empty`].
    #[must_use]
    pub fn keep_empty(mut self, keep_empty: bool) -> Self {
        self.keep_empty = keep_empty;
        self
    }

    /// Returns a rewritten copy of `value`.
    pub fn apply<M: ValueMapper>(&self, value: &Value, mapper: &M) -> Value {
        let mut out = value.clone();
        self.apply_in_place(&mut out, mapper);
        out
    }

    /// Rewrites `value` in place.
    pub fn apply_in_place<M: ValueMapper>(&self, value: &mut Value, mapper: &M) {
        match value {
            Value::Map(map) => {
                for (key, child) in map.iter_mut() {
                    if self.is_target(key, child) {
                        let original = std::mem::take(child);
                        *child = mapper.map_value(key, original);
                    } else {
                        self.apply_in_place(child, mapper);
                    }
                }
            }
            Value::Seq(items) => {
                for item in items {
                    self.apply_in_place(item, mapper);
                }
            }
            _ => {}
        }
    }

    fn is_target(&self, key: &Key, value: &Value) -> bool {
        self.targets.contains(key) && !(self.keep_empty && value.is_empty())
    }
}

// =============================================================================
// Entry points
// =============================================================================

/// Returns a copy of `value` with every value under a target key replaced by
/// [`MASK_MARKER`].
///
/// # Example
///
/// ```rust
/// use dictwalk::{TargetKeys, map, mask_values};
///
/// let data = map! { "user" => map! { "password" => "secret", "name" => "Bob" } };
/// let masked = mask_values(&data, &TargetKeys::new(["password"]));
/// assert_eq!(masked, map! { "user" => map! { "password" => "X", "name" => "Bob" } });
/// ```
pub fn mask_values(value: &Value, targets: &TargetKeys) -> Value {
    Traversal::new(targets).apply(value, &Mask::new())
}

/// In-place form of [`mask_values`].
pub fn mask_values_in_place(value: &mut Value, targets: &TargetKeys) {
    Traversal::new(targets).apply_in_place(value, &Mask::new());
}

/// Returns a copy of `value` with every value under a target key replaced by
/// `f(value)`.
pub fn transform_values<F>(value: &Value, targets: &TargetKeys, f: F) -> Value
where
    F: Fn(Value) -> Value,
{
    Traversal::new(targets).apply(value, &FnMapper(f))
}

/// In-place form of [`transform_values`].
pub fn transform_values_in_place<F>(value: &mut Value, targets: &TargetKeys, f: F)
where
    F: Fn(Value) -> Value,
{
    Traversal::new(targets).apply_in_place(value, &FnMapper(f));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{map, seq};

    fn upper(value: Value) -> Value {
        match value {
            Value::Str(s) => Value::Str(s.to_uppercase()),
            other => other,
        }
    }

    #[test]
    fn masks_nested_key_and_keeps_siblings() {
        let data = map! { "user" => map! { "password" => "secret", "name" => "Bob" } };
        let masked = mask_values(&data, &TargetKeys::new(["password"]));
        assert_eq!(
            masked,
            map! { "user" => map! { "password" => "X", "name" => "Bob" } }
        );
    }

    #[test]
    fn masks_inside_sequences() {
        let data = map! {
            "application" => map! {
                "applicants" => seq![
                    map! { "name" => "Meow Mix", "ssn" => "12312453" },
                    map! { "name" => "Meow Mix", "ssn" => "12312453" },
                ],
            },
        };
        let masked = mask_values(&data, &TargetKeys::pii());
        assert_eq!(
            masked,
            map! {
                "application" => map! {
                    "applicants" => seq![
                        map! { "name" => "Meow Mix", "ssn" => "X" },
                        map! { "name" => "Meow Mix", "ssn" => "X" },
                    ],
                },
            }
        );
    }

    #[test]
    fn masking_replaces_whole_subtrees() {
        let data = map! { "secret" => map! { "secret" => "inner", "other" => 1 } };
        let masked = mask_values(&data, &TargetKeys::new(["secret"]));
        assert_eq!(masked, map! { "secret" => "X" });
    }

    #[test]
    fn masks_regardless_of_value_type() {
        let data = map! { "dob" => Value::Null, "ssn" => 0, "business_tax_id" => seq![] };
        let masked = mask_values(&data, &TargetKeys::pii());
        assert_eq!(
            masked,
            map! { "dob" => "X", "ssn" => "X", "business_tax_id" => "X" }
        );
    }

    #[test]
    fn keep_empty_skips_blank_values() {
        let data = map! { "dob" => "", "ssn" => "123" };
        let targets = TargetKeys::pii();
        let masked = Traversal::new(&targets)
            .keep_empty(true)
            .apply(&data, &Mask::new());
        assert_eq!(masked, map! { "dob" => "", "ssn" => "X" });
    }

    #[test]
    fn custom_marker() {
        let data = map! { "ssn" => "123" };
        let targets = TargetKeys::pii();
        let masked = Traversal::new(&targets).apply(&data, &Mask::new().with_marker("***"));
        assert_eq!(masked, map! { "ssn" => "***" });
    }

    #[test]
    fn transform_applies_function_once_per_match() {
        let data = map! { "a" => map! { "token" => "xyz" } };
        let out = transform_values(&data, &TargetKeys::new(["token"]), upper);
        assert_eq!(out, map! { "a" => map! { "token" => "XYZ" } });
    }

    #[test]
    fn transform_does_not_recurse_into_result() {
        let calls = Cell::new(0);
        let data = map! { "link" => map! { "link" => "inner" }, "other" => map! { "link" => "b" } };
        let out = transform_values(&data, &TargetKeys::new(["link"]), |value| {
            calls.set(calls.get() + 1);
            value
        });
        assert_eq!(out, data);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn untouched_without_matches() {
        let data = map! { "a" => seq![1, seq![map! { "b" => "c" }]], "d" => 2.5 };
        assert_eq!(mask_values(&data, &TargetKeys::new(["zzz"])), data);
    }

    #[test]
    fn in_place_variants_mutate_input() {
        let mut data = map! { "list" => seq![map! { "token" => "abc" }] };
        transform_values_in_place(&mut data, &TargetKeys::new(["token"]), upper);
        assert_eq!(data, map! { "list" => seq![map! { "token" => "ABC" }] });

        mask_values_in_place(&mut data, &TargetKeys::new(["token"]));
        assert_eq!(data, map! { "list" => seq![map! { "token" => "X" }] });
    }

    #[test]
    fn scalar_root_is_returned_unchanged() {
        assert_eq!(
            mask_values(&Value::from("ssn"), &TargetKeys::pii()),
            Value::from("ssn")
        );
    }

    #[test]
    fn mapper_receives_matched_key() {
        struct KeyEcho;

        impl ValueMapper for KeyEcho {
            fn map_value(&self, key: &Key, _value: Value) -> Value {
                Value::from(key.to_string())
            }
        }

        let data = map! { "dob" => "1990-01-01", "nested" => seq![map! { "ssn" => 1 }] };
        let targets = TargetKeys::pii();
        let out = Traversal::new(&targets).apply(&data, &KeyEcho);
        assert_eq!(out, map! { "dob" => "dob", "nested" => seq![map! { "ssn" => "ssn" }] });
    }
}
