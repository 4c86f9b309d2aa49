//! Dynamic value model for nested key-value data.
//!
//! - [`Key`]: a map key, either a string or an integer
//! - [`Value`]: a scalar, a sequence, or a nested [`Map`]
//! - [`Map`]: an insertion-ordered map from [`Key`] to [`Value`]
//!
//! Iteration order of a [`Map`] is the order in which keys were first inserted.
//! Equality between maps ignores order.

use std::fmt;

use indexmap::IndexMap;

/// Insertion-ordered mapping used at every nesting level.
pub type Map = IndexMap<Key, Value>;

// =============================================================================
// Key
// =============================================================================

/// A map key.
///
/// Integer keys order before string keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    /// Returns the sequence index this key denotes, if any.
    ///
    /// Non-negative integers and strings holding a canonical non-negative
    /// integer are indices.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Int(n) => usize::try_from(*n).ok(),
            Key::Str(s) => parse_int_segment(s).and_then(|n| usize::try_from(n).ok()),
        }
    }

    /// The same key in its other representation: `1` for `"1"` and vice versa.
    pub(crate) fn alternate(&self) -> Option<Key> {
        match self {
            Key::Int(n) => Some(Key::Str(n.to_string())),
            Key::Str(s) => parse_int_segment(s).map(Key::Int),
        }
    }
}

/// Parses `segment` as an integer only when it is the number's canonical
/// decimal form, so `"007"`, `"-0"` and `"+1"` stay strings.
pub(crate) fn parse_int_segment(segment: &str) -> Option<i64> {
    let n: i64 = segment.parse().ok()?;
    (n.to_string() == segment).then_some(n)
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Str(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Str(value)
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::Str(value.clone())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

// =============================================================================
// Value
// =============================================================================

/// A dynamically typed value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(Map),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for values that carry nothing worth showing.
    ///
    /// `Null`, `false`, zero, the empty string, and empty containers are empty.
    #[allow(clippy::float_cmp)]
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(x) => *x == 0.0,
            Value::Str(s) => s.is_empty(),
            Value::Seq(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
        }
    }

    pub fn is_scalar(&self) -> bool {
        !matches!(self, Value::Seq(_) | Value::Map(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn into_map(self) -> Option<Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a direct child of a map value.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.as_map()?.get(&key.into())
    }

    /// Short name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Seq(_) => "seq",
            Value::Map(_) => "map",
        }
    }
}

fn fmt_nested(value: &Value, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value {
        Value::Str(s) => write!(f, "{s:?}"),
        other => fmt::Display::fmt(other, f),
    }
}

impl fmt::Display for Value {
    /// Strings render bare at the top level and quoted inside containers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => f.write_str(s),
            Value::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt_nested(item, f)?;
                }
                f.write_str("]")
            }
            Value::Map(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match key {
                        Key::Str(s) => write!(f, "{s:?}: ")?,
                        Key::Int(n) => write!(f, "{n}: ")?,
                    }
                    fmt_nested(item, f)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Seq(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Builds a [`Value::Map`] from `key => value` pairs.
///
/// ```rust
/// use dictwalk::{Value, map};
///
/// let user = map! { "name" => "Bob", "address" => map! { "zip" => 12345 } };
/// assert_eq!(user.get("name"), Some(&Value::from("Bob")));
/// ```
#[macro_export]
macro_rules! map {
    () => {
        $crate::Value::Map($crate::Map::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::Map::new();
        $( map.insert($crate::Key::from($key), $crate::Value::from($value)); )+
        $crate::Value::Map(map)
    }};
}

/// Builds a [`Value::Seq`] from heterogeneous items.
#[macro_export]
macro_rules! seq {
    ($($item:expr),* $(,)?) => {
        $crate::Value::Seq(vec![$($crate::Value::from($item)),*])
    };
}
