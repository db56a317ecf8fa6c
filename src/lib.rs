//! # serde_jprops
//!
//! A Serde-compatible writer for the Java `.properties` format, producing the
//! same text a `java.util.Properties.store()` call would.
//!
//! ## What does it write?
//!
//! ```text
//! #Optional comment lines
//! #Mon Sep 12 14:00:54 EDT 2016
//! key=value
//! two\ words=\ leading space kept
//! snowman=\u2603
//! ```
//!
//! - Keys and values are escaped so any Unicode string reads back unchanged
//! - Output is pure ASCII: everything else becomes a lowercase `\uXXXX` escape,
//!   with code points above U+FFFF split into surrogate pairs
//! - Comments are prefixed with `#` line by line, then the timestamp comment,
//!   then one line per entry
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_jprops::{to_string_with_options, PropertiesOptions};
//!
//! #[derive(Serialize)]
//! struct Database {
//!     url: String,
//!     pool_size: u32,
//!     read_only: bool,
//! }
//!
//! let db = Database {
//!     url: "jdbc:postgresql://localhost/app".to_string(),
//!     pool_size: 8,
//!     read_only: false,
//! };
//!
//! let options = PropertiesOptions::new().without_timestamp();
//! let text = to_string_with_options(&db, options).unwrap();
//! assert_eq!(
//!     text,
//!     "url=jdbc\\:postgresql\\://localhost/app\npool_size=8\nread_only=false\n"
//! );
//! ```
//!
//! ### Pairs, maps and sorting
//!
//! Sequences of pairs keep their order (duplicates included); maps follow
//! their own iteration order. [`PropertiesOptions::with_sort_keys`] sorts by key.
//!
//! ```rust
//! use serde_jprops::{to_string_with_options, PropertiesOptions};
//!
//! let pairs = vec![("zebra", "apple"), ("key", "value")];
//! let options = PropertiesOptions::new().without_timestamp().with_sort_keys(true);
//! assert_eq!(to_string_with_options(&pairs, options).unwrap(), "key=value\nzebra=apple\n");
//! ```
//!
//! ## Value conversion
//!
//! Strings are written as they are, integers, floats, booleans and `None` as
//! their JSON text, [`Decimal`]s and big integers as exact decimal digits.
//! Lists and nested maps cannot be a single property value and fail with
//! [`Error::UnsupportedValueType`]; non-string keys fail with
//! [`Error::InvalidKeyType`].
//!
//! ## Modules
//!
//! - [`normalize`]: turning pairs, maps and [`Value`]s into ordered string entries
//! - [`encode`]: writing entries, comments and the timestamp
//! - [`escape`]: the per-character escaping table
//! - [`timestamp`]: timestamp comments, zones and clocks

pub mod encode;
pub mod error;
pub mod escape;
pub mod map;
pub mod normalize;
pub mod options;
pub mod ser;
pub mod timestamp;
pub mod value;

pub use error::{Error, Result};
pub use map::PropertyMap;
pub use normalize::Entry;
pub use options::{CommentEscaping, PropertiesOptions, Separator};
pub use ser::ValueSerializer;
pub use timestamp::{Clock, FixedClock, SystemClock, Timestamp, Zone};
pub use value::{Decimal, Value};

use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to `.properties` text with default options.
///
/// The default options include a timestamp comment for the current time; use
/// [`to_string_with_options`] to omit or fix it.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::to_string;
/// use std::collections::BTreeMap;
///
/// let mut data = BTreeMap::new();
/// data.insert("key", "value");
///
/// let text = to_string(&data).unwrap();
/// assert!(text.starts_with('#'));
/// assert!(text.ends_with("\nkey=value\n"));
/// ```
///
/// # Errors
///
/// Returns an error if a value is a list or map, a key is not a string, or
/// the input is not a map or sequence of pairs.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, PropertiesOptions::default())
}

/// Serialize any `T: Serialize` to `.properties` text with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::{to_string_with_options, PropertiesOptions, Separator};
///
/// let options = PropertiesOptions::new()
///     .with_separator(Separator::Tab)
///     .without_timestamp();
/// let text = to_string_with_options(&[("key", "value")], options).unwrap();
/// assert_eq!(text, "key\tvalue\n");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be normalized into property entries,
/// or if the timestamp cannot be represented.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: PropertiesOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let entries = normalize::normalize_value(to_value(value)?, options.sort_keys)?;
    encode::encode(&entries, &options)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_jprops::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(matches!(value, Value::Map(_)));
/// ```
///
/// # Errors
///
/// Returns an error if a map key is not a string or the type uses enum
/// variants with data.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer with default options.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[("key", "value")]).unwrap();
/// assert!(buffer.ends_with(b"key=value\n"));
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, PropertiesOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// The whole input is normalized before the first line is written, so
/// value errors never leave partial output behind. Lines already written
/// before a writer failure stay written.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: PropertiesOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let entries = normalize::normalize_value(to_value(value)?, options.sort_keys)?;
    encode::encode_to_writer(&entries, &options, writer)
}
