//! Ordered map type for property sets.
//!
//! This module provides [`PropertyMap`], a wrapper around [`IndexMap`] that
//! keeps insertion order. A property set is written in the order its
//! entries were inserted unless key sorting is requested, so the map used to
//! build one has to remember that order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jprops::{PropertyMap, Value};
//!
//! let mut map = PropertyMap::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to values.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::{PropertyMap, Value};
///
/// let mut map = PropertyMap::new();
/// map.insert("zebra".to_string(), Value::from(1));
/// map.insert("apple".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["zebra", "apple"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyMap(IndexMap<String, Value>);

impl PropertyMap {
    #[must_use]
    pub fn new() -> Self {
        PropertyMap(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PropertyMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// Re-inserting an existing key replaces its value but keeps its
    /// original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jprops::{PropertyMap, Value};
    ///
    /// let mut map = PropertyMap::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for PropertyMap {
    fn from(map: HashMap<String, Value>) -> Self {
        PropertyMap(map.into_iter().collect())
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        PropertyMap(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinsert_keeps_position() {
        let mut map: PropertyMap = [("a", 1), ("b", 2)].into_iter().collect();
        map.insert("a".to_string(), Value::from(3));

        let entries: Vec<_> = map.into_iter().collect();
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), Value::Integer(3)),
                ("b".to_string(), Value::Integer(2)),
            ]
        );
    }

    #[test]
    fn test_from_hash_map() {
        let mut source = HashMap::new();
        source.insert("only".to_string(), Value::from("one"));
        let map = PropertyMap::from(source);
        assert_eq!(map.get("only"), Some(&Value::from("one")));
    }
}
