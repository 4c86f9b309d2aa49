//! A map that records how it is used.
//!
//! [`LoggedMap`] owns a [`Map`] and keeps two logs scoped to the instance:
//! - the **access log**: every read through [`LoggedMap::get`],
//!   [`LoggedMap::get_or`], or [`LoggedMap::index`]
//! - the **mutation log**: every [`LoggedMap::insert`] and [`LoggedMap::remove`]
//!
//! Each entry carries the key, the rendered value, and the caller's source
//! location. Containment checks, length, and iteration delegate to the inner
//! map without being logged.
//!
//! With the `tracing` feature, each entry is also emitted as a `DEBUG` event.

use std::{
    cell::{Ref, RefCell},
    panic::Location,
};

use crate::{
    error::DictError,
    value::{Key, Map, Value},
};

/// The kind of operation an [`Access`] records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AccessOp {
    /// `get` or `get_or`: a read that tolerates a missing key.
    Get,
    /// `index`: a read that fails on a missing key.
    Index,
    Insert,
    Remove,
}

/// One recorded read or write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Access {
    pub op: AccessOp,
    pub key: Key,
    /// The value read or written, rendered with `Display`. `None` on a miss.
    pub value: Option<String>,
    /// Where the call came from.
    pub location: &'static Location<'static>,
}

impl Access {
    fn record(
        op: AccessOp,
        key: Key,
        value: Option<&Value>,
        location: &'static Location<'static>,
    ) -> Self {
        let access = Self {
            op,
            key,
            value: value.map(ToString::to_string),
            location,
        };
        #[cfg(feature = "tracing")]
        crate::tracing::emit_access(&access);
        access
    }
}

/// A [`Map`] wrapper that logs reads and writes.
#[derive(Debug, Default)]
pub struct LoggedMap {
    inner: Map,
    accesses: RefCell<Vec<Access>>,
    mutations: Vec<Access>,
}

impl LoggedMap {
    pub fn new(inner: Map) -> Self {
        Self {
            inner,
            accesses: RefCell::default(),
            mutations: Vec::new(),
        }
    }

    /// Reads `key`, logging the access whether or not it is present.
    #[track_caller]
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        let key = key.into();
        let value = self.inner.get(&key);
        self.log_access(AccessOp::Get, key, value, Location::caller());
        value
    }

    /// Reads `key`, falling back to `default`.
    #[track_caller]
    pub fn get_or<'a>(&'a self, key: impl Into<Key>, default: &'a Value) -> &'a Value {
        let key = key.into();
        let value = self.inner.get(&key).unwrap_or(default);
        self.log_access(AccessOp::Get, key, Some(value), Location::caller());
        value
    }

    /// Reads `key`, failing with [`DictError::NotFound`] when absent.
    #[track_caller]
    pub fn index(&self, key: impl Into<Key>) -> Result<&Value, DictError> {
        let key = key.into();
        let value = self.inner.get(&key);
        self.log_access(AccessOp::Index, key.clone(), value, Location::caller());
        value.ok_or(DictError::NotFound { key })
    }

    /// Writes `value` under `key`, returning the previous value.
    #[track_caller]
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        self.mutations.push(Access::record(
            AccessOp::Insert,
            key.clone(),
            Some(&value),
            Location::caller(),
        ));
        self.inner.insert(key, value)
    }

    /// Removes `key`, keeping the order of the remaining entries.
    #[track_caller]
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        let removed = self.inner.shift_remove(&key);
        self.mutations.push(Access::record(
            AccessOp::Remove,
            key,
            removed.as_ref(),
            Location::caller(),
        ));
        removed
    }

    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.inner.contains_key(&key.into())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.inner.iter()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.inner.keys()
    }

    /// The wrapped map, without logging.
    pub fn inner(&self) -> &Map {
        &self.inner
    }

    /// Reads recorded so far, oldest first.
    pub fn accesses(&self) -> Ref<'_, [Access]> {
        Ref::map(self.accesses.borrow(), Vec::as_slice)
    }

    /// Writes and removals recorded so far, oldest first.
    pub fn mutations(&self) -> &[Access] {
        &self.mutations
    }

    /// Keys read so far, in first-read order, without duplicates.
    pub fn accessed_keys(&self) -> Vec<Key> {
        unique_keys(&self.accesses.borrow())
    }

    /// Keys written or removed so far, in first-write order, without duplicates.
    pub fn mutated_keys(&self) -> Vec<Key> {
        unique_keys(&self.mutations)
    }

    pub fn clear_logs(&mut self) {
        self.accesses.get_mut().clear();
        self.mutations.clear();
    }

    /// Unwraps the map, discarding the logs.
    pub fn into_inner(self) -> Map {
        self.inner
    }

    fn log_access(
        &self,
        op: AccessOp,
        key: Key,
        value: Option<&Value>,
        location: &'static Location<'static>,
    ) {
        self.accesses
            .borrow_mut()
            .push(Access::record(op, key, value, location));
    }
}

impl From<Map> for LoggedMap {
    fn from(inner: Map) -> Self {
        Self::new(inner)
    }
}

fn unique_keys(log: &[Access]) -> Vec<Key> {
    let mut keys: Vec<Key> = Vec::new();
    for access in log {
        if !keys.contains(&access.key) {
            keys.push(access.key.clone());
        }
    }
    keys
}
