//! Error types for `.properties` serialization.
//!
//! Every failure is raised before any text is produced, with one exception:
//! when writing to an [`io::Write`](std::io::Write) sink, lines already
//! written before a sink failure stay written.
//!
//! ## Error Categories
//!
//! - **Value shape**: a list or map reached a place where a single property value is required
//! - **Key type**: a map key or pair key was not a string
//! - **Input shape**: the top-level value is neither a map nor a sequence of pairs
//! - **Timestamps**: a Unix timestamp outside the representable range
//! - **I/O**: the output sink failed; the original [`std::io::Error`] is kept as the source
//!
//! ## Examples
//!
//! ```rust
//! use serde_jprops::{to_string, Error};
//! use std::collections::BTreeMap;
//!
//! let mut data = BTreeMap::new();
//! data.insert("ports", vec![80, 443]);
//!
//! let err = to_string(&data).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedValueType(_)));
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// Represents all possible errors that can occur while producing `.properties` text.
#[derive(Debug, Error)]
pub enum Error {
    /// A list or map was supplied where a single property value is required.
    #[error("Unsupported value type: {0}")]
    UnsupportedValueType(String),

    /// A key was not string-typed.
    #[error("Invalid key type: expected string, found {0}")]
    InvalidKeyType(String),

    /// The top-level input is not a property set.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Malformed decimal literal.
    #[error("Invalid decimal literal: {0:?}")]
    InvalidDecimal(String),

    /// Unix timestamp outside the range chrono can represent.
    #[error("Timestamp out of range: {0} seconds since the epoch")]
    TimestampOutOfRange(i64),

    /// The output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Custom error raised through serde.
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported value type error naming the offending kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jprops::Error;
    ///
    /// let err = Error::unsupported_value_type("list");
    /// assert!(err.to_string().contains("list"));
    /// ```
    pub fn unsupported_value_type(kind: &str) -> Self {
        Error::UnsupportedValueType(kind.to_string())
    }

    /// Creates an invalid key type error naming the kind that was found.
    pub fn invalid_key_type(found: &str) -> Self {
        Error::InvalidKeyType(found.to_string())
    }

    /// Creates an invalid input error.
    pub fn invalid_input(msg: &str) -> Self {
        Error::InvalidInput(msg.to_string())
    }

    /// Creates an invalid decimal error carrying the rejected literal.
    pub fn invalid_decimal(literal: &str) -> Self {
        Error::InvalidDecimal(literal.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jprops::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
