//! Temporary key assignment.

use std::ops::{Deref, DerefMut};

use crate::value::{Key, Map, Value};

/// Guard returned by [`push_keys`].
///
/// Dereferences to the map. When dropped, every pushed key gets its previous
/// value back, or is removed if it was absent before the push.
#[derive(Debug)]
pub struct PushedKeys<'a> {
    map: &'a mut Map,
    backup: Vec<(Key, Option<Value>)>,
}

/// Assigns `entries` into `map` until the returned guard is dropped.
///
/// # Example
///
/// ```rust
/// use dictwalk::{Key, Map, Value, push_keys};
///
/// let mut map = Map::new();
/// map.insert(Key::from("env"), Value::from("prod"));
/// {
///     let pushed = push_keys(&mut map, [("env", "test"), ("debug", "1")]);
///     assert_eq!(pushed[&Key::from("env")], Value::from("test"));
/// }
/// assert_eq!(map[&Key::from("env")], Value::from("prod"));
/// assert!(!map.contains_key(&Key::from("debug")));
/// ```
pub fn push_keys<I, K, V>(map: &mut Map, entries: I) -> PushedKeys<'_>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Key>,
    V: Into<Value>,
{
    let mut backup = Vec::new();
    for (key, value) in entries {
        let key = key.into();
        let previous = map.insert(key.clone(), value.into());
        backup.push((key, previous));
    }
    PushedKeys { map, backup }
}

impl Deref for PushedKeys<'_> {
    type Target = Map;

    fn deref(&self) -> &Map {
        &*self.map
    }
}

impl DerefMut for PushedKeys<'_> {
    fn deref_mut(&mut self) -> &mut Map {
        &mut *self.map
    }
}

impl Drop for PushedKeys<'_> {
    fn drop(&mut self) {
        // Reverse order so a key pushed twice ends at its original value.
        while let Some((key, previous)) = self.backup.pop() {
            match previous {
                Some(value) => {
                    self.map.insert(key, value);
                }
                None => {
                    self.map.shift_remove(&key);
                }
            }
        }
    }
}
