//! Key whitelisting.
//!
//! A [`Whitelist`] keeps the values of allowed keys and either redacts or drops
//! everything else. Only top-level keys are considered unless the
//! [`AllowList`] carries nested entries, in which case the same filtering is
//! applied to the maps found under those keys.

use indexmap::IndexMap;

use crate::value::{Key, Map, Value};

/// Default placeholder for redacted whitelist entries.
pub const REDACTED_PLACEHOLDER: &str = "REDACTED";

/// Keys allowed through a [`Whitelist`], optionally with nested allow-lists.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowList {
    entries: IndexMap<Key, Option<AllowList>>,
}

impl AllowList {
    /// Creates a flat allow-list.
    pub fn new<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        keys.into_iter().collect()
    }

    /// Allows `key` with its value kept as-is.
    #[must_use]
    pub fn allow(mut self, key: impl Into<Key>) -> Self {
        self.entries.insert(key.into(), None);
        self
    }

    /// Allows `key` and filters the map(s) under it with `child`.
    #[must_use]
    pub fn nested(mut self, key: impl Into<Key>, child: AllowList) -> Self {
        self.entries.insert(key.into(), Some(child));
        self
    }

    pub fn contains(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// The nested allow-list registered for `key`, if any.
    pub fn child(&self, key: &Key) -> Option<&AllowList> {
        self.entries.get(key).and_then(Option::as_ref)
    }

    pub fn is_nested(&self) -> bool {
        self.entries.values().any(Option::is_some)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Key>> FromIterator<K> for AllowList {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|key| (key.into(), None)).collect(),
        }
    }
}

/// What happens to keys missing from the allow-list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disallowed {
    /// Replace the value with the marker.
    #[default]
    Redact,
    /// Remove the entry.
    Drop,
}

/// Filters map keys against an [`AllowList`].
#[derive(Clone, Debug)]
pub struct Whitelist {
    allow: AllowList,
    disallowed: Disallowed,
    marker: Value,
    keep_empty: bool,
}

impl Whitelist {
    /// Redacts disallowed keys with [`REDACTED_PLACEHOLDER`].
    pub fn new(allow: AllowList) -> Self {
        Self {
            allow,
            disallowed: Disallowed::Redact,
            marker: Value::from(REDACTED_PLACEHOLDER),
            keep_empty: false,
        }
    }

    #[must_use]
    pub fn disallowed(mut self, disallowed: Disallowed) -> Self {
        self.disallowed = disallowed;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<Value>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Leaves disallowed entries with empty values untouched.
    #[must_use]
    pub fn keep_empty(mut self, keep_empty: bool) -> Self {
        self.keep_empty = keep_empty;
        self
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow
    }

    /// Returns a filtered copy of `map`.
    pub fn apply(&self, map: &Map) -> Map {
        let mut filtered = map.clone();
        self.apply_in_place(&mut filtered);
        filtered
    }

    /// Filters `map` in place. Key order is preserved.
    pub fn apply_in_place(&self, map: &mut Map) {
        self.filter(map, &self.allow);
    }

    fn filter(&self, map: &mut Map, allow: &AllowList) {
        map.retain(|key, value| {
            if let Some(entry) = allow.entries.get(key) {
                if let Some(child) = entry {
                    self.descend(value, child);
                }
                return true;
            }
            if self.keep_empty && value.is_empty() {
                return true;
            }
            match self.disallowed {
                Disallowed::Redact => {
                    *value = self.marker.clone();
                    true
                }
                Disallowed::Drop => false,
            }
        });
    }

    fn descend(&self, value: &mut Value, allow: &AllowList) {
        match value {
            Value::Map(map) => self.filter(map, allow),
            Value::Seq(items) => {
                for item in items {
                    self.descend(item, allow);
                }
            }
            _ => {}
        }
    }
}

/// Redacts every top-level key of `map` not listed in `keys`.
///
/// # Example
///
/// ```rust
/// use dictwalk::{Key, Value, map, whitelist};
///
/// let data = map! { "name" => "Bob", "ssn" => "123-45-6789" };
/// let shown = whitelist(data.as_map().unwrap(), ["name"]);
/// assert_eq!(shown[&Key::from("ssn")], Value::from("REDACTED"));
/// ```
pub fn whitelist<I, K>(map: &Map, keys: I) -> Map
where
    I: IntoIterator<Item = K>,
    K: Into<Key>,
{
    Whitelist::new(AllowList::new(keys)).apply(map)
}
