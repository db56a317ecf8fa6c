//! Input normalization.
//!
//! Turns whatever the caller holds (a sequence of pairs, a map, or a
//! [`Value`] produced from a `Serialize` type) into the ordered list of
//! string [`Entry`]s the encoder writes, one per line.
//!
//! - Sequences keep their order; duplicate keys are kept as separate entries.
//! - Maps follow their own iteration order (insertion order for
//!   [`PropertyMap`] and `IndexMap`, unspecified for `HashMap`).
//! - With `sort_keys`, entries are stably sorted by key, so duplicates keep
//!   their relative order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jprops::normalize::{normalize, Entry};
//!
//! let entries = normalize(vec![("zebra", "apple"), ("key", "value")], true).unwrap();
//! assert_eq!(entries, vec![Entry::new("key", "value"), Entry::new("zebra", "apple")]);
//! ```

use crate::{Error, Result, Value};

/// One key/value pair, written as one line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Entry {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}

/// Normalizes key/value pairs, stringifying every value.
///
/// # Errors
///
/// Returns [`Error::UnsupportedValueType`] if any value is a list or map.
/// Nothing is returned for the other entries in that case.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::normalize::normalize;
/// use serde_jprops::Value;
///
/// let entries = normalize(vec![("port", Value::from(8080)), ("debug", Value::from(true))], false)
///     .unwrap();
/// assert_eq!(entries[0].value(), "8080");
/// assert_eq!(entries[1].value(), "true");
/// ```
pub fn normalize<I, K, V>(items: I, sort_keys: bool) -> Result<Vec<Entry>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    let mut entries = items
        .into_iter()
        .map(|(key, value)| Ok(Entry::new(key, value.into().stringify()?)))
        .collect::<Result<Vec<_>>>()?;
    if sort_keys {
        sort_entries(&mut entries);
    }
    Ok(entries)
}

/// Normalizes a top-level [`Value`].
///
/// A [`Value::Map`] contributes its entries in insertion order. A
/// [`Value::Array`] must hold `[key, value]` pairs.
///
/// # Errors
///
/// - [`Error::InvalidKeyType`] if a pair's key is not a string.
/// - [`Error::InvalidInput`] if the value is neither a map nor a sequence of pairs.
/// - [`Error::UnsupportedValueType`] if a property value is a list or map.
pub fn normalize_value(value: Value, sort_keys: bool) -> Result<Vec<Entry>> {
    match value {
        Value::Map(map) => normalize(map, sort_keys),
        Value::Array(items) => {
            let pairs = items
                .into_iter()
                .map(into_pair)
                .collect::<Result<Vec<_>>>()?;
            normalize(pairs, sort_keys)
        }
        other => Err(Error::invalid_input(&format!(
            "expected a map or a sequence of key/value pairs, found {}",
            other.kind()
        ))),
    }
}

fn into_pair(item: Value) -> Result<(String, Value)> {
    let pair = match item {
        Value::Array(pair) => pair,
        other => {
            return Err(Error::invalid_input(&format!(
                "expected a key/value pair, found {}",
                other.kind()
            )))
        }
    };
    let mut parts = pair.into_iter();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Value::String(key)), Some(value), None) => Ok((key, value)),
        (Some(key), Some(_), None) => Err(Error::invalid_key_type(key.kind())),
        _ => Err(Error::invalid_input(
            "key/value pairs must have exactly two elements",
        )),
    }
}

fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.key.cmp(&b.key));
}
