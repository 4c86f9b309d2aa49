//! Path-based lookup with default fallback.
//!
//! A [`Path`] is a sequence of [`Key`]s describing a descent through nested maps
//! and sequences. Lookups never fail: a missing step yields the caller's default.

use std::fmt;

use crate::value::{Key, Value, parse_int_segment};

/// Characters that separate segments in a textual path.
pub const PATH_DELIMITERS: [char; 4] = [',', '.', '[', ']'];

/// An ordered sequence of keys.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Key>);

impl Path {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses a textual path such as `"one[1].three"`.
    ///
    /// Segments are split on [`PATH_DELIMITERS`]; empty segments are dropped.
    /// Segments written as a canonical integer (`"7"`, `"-3"`) become integer
    /// keys. Anything else, including `"007"` and `"-0"`, stays a string key.
    pub fn parse(text: &str) -> Self {
        text.split(|c: char| PATH_DELIMITERS.contains(&c))
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                parse_int_segment(segment).map_or_else(|| Key::from(segment), Key::Int)
            })
            .collect()
    }

    pub fn push(&mut self, key: impl Into<Key>) {
        self.0.push(key.into());
    }

    pub fn pop(&mut self) -> Option<Key> {
        self.0.pop()
    }

    /// Returns a copy of this path extended by `key`.
    #[must_use]
    pub fn child(&self, key: impl Into<Key>) -> Self {
        let mut path = self.clone();
        path.push(key);
        path
    }

    pub fn segments(&self) -> &[Key] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.0.iter()
    }
}

impl fmt::Display for Path {
    /// Renders string segments joined by `.` and integer segments as `[n]`.
    ///
    /// String segments are written verbatim, so the output only parses back to
    /// the same path when no string segment contains one of [`PATH_DELIMITERS`]
    /// or is itself a canonical integer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            match key {
                Key::Int(n) => write!(f, "[{n}]")?,
                Key::Str(s) if i == 0 => f.write_str(s)?,
                Key::Str(s) => write!(f, ".{s}")?,
            }
        }
        Ok(())
    }
}

impl From<&str> for Path {
    fn from(value: &str) -> Self {
        Path::parse(value)
    }
}

impl From<String> for Path {
    fn from(value: String) -> Self {
        Path::parse(&value)
    }
}

impl From<&Path> for Path {
    fn from(value: &Path) -> Self {
        value.clone()
    }
}

impl From<Vec<Key>> for Path {
    fn from(value: Vec<Key>) -> Self {
        Self(value)
    }
}

impl<K: Into<Key>, const N: usize> From<[K; N]> for Path {
    fn from(value: [K; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: Into<Key>> FromIterator<K> for Path {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn step<'a>(current: &'a Value, key: &Key) -> Option<&'a Value> {
    match current {
        Value::Map(map) => map
            .get(key)
            .or_else(|| key.alternate().and_then(|alt| map.get(&alt))),
        Value::Seq(items) => key.as_index().and_then(|index| items.get(index)),
        _ => None,
    }
}

/// Resolves `path` against `value`, returning `None` at the first missing step.
///
/// Maps are indexed by key (an integer key also matches its decimal string form
/// and vice versa); sequences are indexed by non-negative integer keys. Any other
/// value, including `Null`, ends the descent.
pub fn get_path_ref(value: &Value, path: impl Into<Path>) -> Option<&Value> {
    let path = path.into();
    path.iter().try_fold(value, step)
}

/// Resolves `path` against `value`, returning `default` when any step is missing.
///
/// # Example
///
/// ```rust
/// use dictwalk::{Value, get_path, map, seq};
///
/// let data = map! { "one" => seq!["two", map! { "three" => seq![4, 5] }] };
/// assert_eq!(get_path(&data, "one[1].three[0]", Value::Null), Value::from(4));
/// assert_eq!(get_path(&data, "one.four", Value::from("n/a")), Value::from("n/a"));
/// ```
pub fn get_path(value: &Value, path: impl Into<Path>, default: Value) -> Value {
    get_path_ref(value, path).cloned().unwrap_or(default)
}
