//! Attribute-style access over a map.
//!
//! [`AttrMap`] exposes string keys as named attributes: reading a missing
//! attribute is an error ([`DictError::NotFound`]) rather than a silent default.
//! Nested maps are reached through [`AttrRef`], so attribute chains work through
//! any number of levels:
//!
//! ```rust
//! use dictwalk::{AttrMap, Value, map};
//!
//! let user = AttrMap::new(map! { "address" => map! { "city" => "Paris" } }.into_map().unwrap());
//! let city = user.attr("address")?.attr("city")?.value();
//! assert_eq!(city, &Value::from("Paris"));
//! assert_eq!(user.get_dotted("address.city")?, &Value::from("Paris"));
//! # Ok::<(), dictwalk::DictError>(())
//! ```
//!
//! For fixed sets of attributes, `#[derive(Attributes)]` generates one accessor
//! method per attribute on a newtype around [`AttrMap`].

use crate::{
    error::DictError,
    value::{Key, Map, Value},
};

/// A map whose string keys are read and written as attributes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttrMap {
    inner: Map,
}

impl AttrMap {
    pub fn new(inner: Map) -> Self {
        Self { inner }
    }

    /// Reads attribute `name`.
    pub fn get_attr(&self, name: &str) -> Result<&Value, DictError> {
        self.inner
            .get(&Key::from(name))
            .ok_or_else(|| DictError::not_found(name))
    }

    /// Mutable access to attribute `name`.
    pub fn get_attr_mut(&mut self, name: &str) -> Result<&mut Value, DictError> {
        self.inner
            .get_mut(&Key::from(name))
            .ok_or_else(|| DictError::not_found(name))
    }

    /// Writes attribute `name`, returning the previous value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        self.inner.insert(Key::from(name), value.into())
    }

    /// Removes attribute `name`, failing if it is absent.
    pub fn remove_attr(&mut self, name: &str) -> Result<Value, DictError> {
        self.inner
            .shift_remove(&Key::from(name))
            .ok_or_else(|| DictError::not_found(name))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.inner.contains_key(&Key::from(name))
    }

    /// Reads attribute `name` as a chainable [`AttrRef`].
    pub fn attr(&self, name: &str) -> Result<AttrRef<'_>, DictError> {
        self.get_attr(name).map(AttrRef)
    }

    /// Follows a `.`-separated attribute chain such as `"address.city"`.
    pub fn get_dotted(&self, dotted: &str) -> Result<&Value, DictError> {
        let mut names = dotted.split('.');
        let first = names.next().unwrap_or_default();
        names
            .try_fold(self.attr(first)?, |current, name| current.attr(name))
            .map(AttrRef::value)
    }

    pub fn as_map(&self) -> &Map {
        &self.inner
    }

    pub fn into_inner(self) -> Map {
        self.inner
    }
}

impl From<Map> for AttrMap {
    fn from(inner: Map) -> Self {
        Self::new(inner)
    }
}

impl PartialEq<Map> for AttrMap {
    fn eq(&self, other: &Map) -> bool {
        self.inner == *other
    }
}

/// A borrowed value reached through attribute access.
///
/// Map values can be descended further with [`AttrRef::attr`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttrRef<'a>(&'a Value);

impl<'a> AttrRef<'a> {
    /// Reads attribute `name` of the wrapped map.
    pub fn attr(self, name: &str) -> Result<AttrRef<'a>, DictError> {
        match self.0 {
            Value::Map(map) => map
                .get(&Key::from(name))
                .map(AttrRef)
                .ok_or_else(|| DictError::not_found(name)),
            other => Err(DictError::NotAMap {
                key: Key::from(name),
                found: other.type_name(),
            }),
        }
    }

    pub fn value(self) -> &'a Value {
        self.0
    }
}

impl PartialEq<Value> for AttrRef<'_> {
    fn eq(&self, other: &Value) -> bool {
        self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map;

    fn user() -> AttrMap {
        AttrMap::new(
            map! {
                "x" => 1,
                "address" => map! { "city" => "Paris", "geo" => map! { "lat" => 48.85 } },
            }
            .into_map()
            .unwrap(),
        )
    }

    #[test]
    fn reads_present_attribute() {
        assert_eq!(user().get_attr("x"), Ok(&Value::from(1)));
    }

    #[test]
    fn missing_attribute_is_not_found() {
        let err = user().get_attr("y").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "key `y` not found");
    }

    #[test]
    fn set_then_read() {
        let mut user = user();
        assert_eq!(user.set_attr("y", "new"), None);
        assert_eq!(user.set_attr("x", 2), Some(Value::from(1)));
        assert_eq!(user.get_attr("y"), Ok(&Value::from("new")));
        assert_eq!(user.get_attr("x"), Ok(&Value::from(2)));
    }

    #[test]
    fn mutable_access_writes_through() {
        let mut user = user();
        *user.get_attr_mut("x").unwrap() = Value::from(10);
        assert_eq!(user.get_attr("x"), Ok(&Value::from(10)));
        assert!(user.get_attr_mut("nope").is_err());
    }

    #[test]
    fn remove_attribute() {
        let mut user = user();
        assert_eq!(user.remove_attr("x"), Ok(Value::from(1)));
        assert!(!user.has_attr("x"));
        assert!(user.remove_attr("x").unwrap_err().is_not_found());
    }

    #[test]
    fn chains_through_nested_maps() {
        let user = user();
        let lat = user.attr("address").unwrap().attr("geo").unwrap().attr("lat").unwrap();
        assert_eq!(lat, Value::from(48.85));
        assert_eq!(user.get_dotted("address.geo.lat"), Ok(&Value::from(48.85)));
    }

    #[test]
    fn chain_through_scalar_is_not_a_map() {
        let user = user();
        assert_eq!(
            user.get_dotted("x.y"),
            Err(DictError::NotAMap {
                key: Key::from("y"),
                found: "int",
            })
        );
    }

    #[test]
    fn chain_reports_first_missing_link() {
        assert_eq!(
            user().get_dotted("address.zip.code"),
            Err(DictError::NotFound {
                key: Key::from("zip")
            })
        );
        assert!(user().get_dotted("").unwrap_err().is_not_found());
    }

    #[test]
    fn compares_equal_to_plain_map() {
        let map = map! { "x" => 1 }.into_map().unwrap();
        assert_eq!(AttrMap::from(map.clone()), map);
    }
}
