//! String-keyed maps as sequences, and sequences of pairs as maps.
//!
//! [`ObjectMap`] enumerates its entries in insertion order. Overwriting an
//! existing key keeps the key's original position.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let totals = group_by(vec![("a", 1), ("b", 2), ("a", 3)], |x, y| x + y);
//! assert_eq!(totals.get("a"), Some(&4));
//! assert_eq!(object::values(&totals).to_array(), vec![4, 2]);
//! ```

use std::{borrow::Borrow, fmt, slice};

use ahash::AHashMap;
use tracing::debug;

use crate::{Cursor, Sequence, Step, for_each};

/// Insertion-ordered map from `String` keys to `T`.
#[derive(Clone)]
pub struct ObjectMap<T> {
    entries: Vec<(String, T)>,
    index: AHashMap<String, usize>,
}

impl<T> ObjectMap<T> {
    /// An empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: AHashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: AHashMap::with_capacity(capacity),
        }
    }

    /// Insert or overwrite `key`, returning the previous value.
    ///
    /// A new key is appended to the enumeration order; an existing key keeps
    /// its position.
    pub fn insert(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => Some(std::mem::replace(&mut self.entries[slot].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        String: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut T>
    where
        String: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&slot| &mut self.entries[slot].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        String: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Remove `key`. Later entries keep their relative order.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        String: Borrow<Q>,
        Q: std::hash::Hash + Eq + ?Sized,
    {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        Some(value)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T> Default for ObjectMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ObjectMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Maps are equal when they hold the same keys with equal values, in any order.
impl<T: PartialEq> PartialEq for ObjectMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(k, v)| other.get(k).is_some_and(|w| v == w))
    }
}

impl<T: Eq> Eq for ObjectMap<T> {}

impl<K: Into<String>, T> FromIterator<(K, T)> for ObjectMap<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, T> Extend<(K, T)> for ObjectMap<T> {
    fn extend<I: IntoIterator<Item = (K, T)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<T> IntoIterator for ObjectMap<T> {
    type Item = (String, T);
    type IntoIter = std::vec::IntoIter<(String, T)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Sequence over the values of an [`ObjectMap`]. See [`values`].
pub struct Values<'a, T>(&'a ObjectMap<T>);

/// Sequence over the `(key, value)` pairs of an [`ObjectMap`]. See [`entries`].
pub struct Entries<'a, T>(&'a ObjectMap<T>);

impl<T> Clone for Values<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Values<'_, T> {}

impl<T> Clone for Entries<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entries<'_, T> {}

/// Lazily yield clones of the values of `map`, in enumeration order.
pub fn values<T: Clone>(map: &ObjectMap<T>) -> Values<'_, T> {
    Values(map)
}

/// Lazily yield `(key, value)` pairs of `map`, in enumeration order.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let map: ObjectMap<u8> = [("x", 1), ("y", 2)].into_iter().collect();
/// let labels = object::entries(&map).map(|(k, v), _| format!("{k}={v}"));
/// assert_eq!(labels.to_array(), vec!["x=1", "y=2"]);
/// ```
pub fn entries<T: Clone>(map: &ObjectMap<T>) -> Entries<'_, T> {
    Entries(map)
}

pub struct ValuesCursor<'a, T>(slice::Iter<'a, (String, T)>);

pub struct EntriesCursor<'a, T>(slice::Iter<'a, (String, T)>);

impl<'a, T: Clone> Sequence for Values<'a, T> {
    type Item = T;
    type Cursor = ValuesCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        ValuesCursor(self.0.entries.iter())
    }
}

impl<T: Clone> Cursor for ValuesCursor<'_, T> {
    type Item = T;

    fn next(&mut self) -> Step<T> {
        self.0.next().map(|(_, v)| v.clone()).into()
    }
}

impl<'a, T: Clone> Sequence for Entries<'a, T> {
    type Item = (&'a str, T);
    type Cursor = EntriesCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        EntriesCursor(self.0.entries.iter())
    }
}

impl<'a, T: Clone> Cursor for EntriesCursor<'a, T> {
    type Item = (&'a str, T);

    fn next(&mut self) -> Step<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v.clone())).into()
    }
}

/// Build a map from a sequence of `(key, value)` pairs.
///
/// The first value seen for a key is stored as is; every later value `v` for
/// that key replaces the stored `acc` with `reduce(acc, v)`. Keys are
/// enumerated in first-seen order.
pub fn group_by<S, K, V, F>(input: S, mut reduce: F) -> ObjectMap<V>
where
    S: Sequence<Item = (K, V)>,
    K: Into<String>,
    F: FnMut(V, V) -> V,
{
    let mut slots: Vec<(String, Option<V>)> = Vec::new();
    let mut index: AHashMap<String, usize> = AHashMap::new();

    for_each(input, |(key, value), _| {
        let key = key.into();
        match index.get(&key) {
            Some(&slot) => {
                let held = &mut slots[slot].1;
                *held = held.take().map(|acc| reduce(acc, value));
            }
            None => {
                index.insert(key.clone(), slots.len());
                slots.push((key, Some(value)));
            }
        }
    });

    debug!(keys = slots.len(), "group_by collected keys");
    // every slot is refilled before the closure returns
    let entries = slots
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect();
    ObjectMap { entries, index }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for ObjectMap<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ObjectMapVisitor<T>(std::marker::PhantomData<fn() -> T>);

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::de::Visitor<'de> for ObjectMapVisitor<T> {
    type Value = ObjectMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map with string keys")
    }

    fn visit_map<A>(self, mut access: A) -> Result<ObjectMap<T>, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = ObjectMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((k, v)) = access.next_entry::<String, T>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for ObjectMap<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ObjectMapVisitor(std::marker::PhantomData))
    }
}
