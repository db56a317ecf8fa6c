//! Configuration options for `.properties` serialization.
//!
//! This module provides types to customize the output:
//!
//! - [`PropertiesOptions`]: Main configuration struct
//! - [`Separator`]: What goes between a key and its value
//! - [`CommentEscaping`]: Which characters of a comment are `\uXXXX` escaped
//!
//! ## Examples
//!
//! ```rust
//! use serde_jprops::{to_string_with_options, PropertiesOptions, Separator};
//! use std::collections::BTreeMap;
//!
//! let mut data = BTreeMap::new();
//! data.insert("key", "value");
//!
//! let options = PropertiesOptions::new()
//!     .with_separator(Separator::Colon)
//!     .with_comments("Generated")
//!     .without_timestamp();
//! let text = to_string_with_options(&data, options).unwrap();
//! assert_eq!(text, "#Generated\nkey:value\n");
//! ```

use crate::timestamp::{Clock, SystemClock, Timestamp, Zone};
use std::fmt;
use std::sync::Arc;

/// Separator written between an escaped key and its escaped value.
///
/// The separator itself is never escaped.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::Separator;
///
/// assert_eq!(Separator::Equals.as_str(), "=");
/// assert_eq!(Separator::Colon.as_str(), ":");
/// assert_eq!(Separator::Tab.as_str(), "\t");
/// assert_eq!(Separator::Custom(" = ".to_string()).as_str(), " = ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Equals,
    Colon,
    Space,
    Tab,
    Custom(String),
}

impl Separator {
    /// Returns the string representation of this separator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Separator::Equals => "=",
            Separator::Colon => ":",
            Separator::Space => " ",
            Separator::Tab => "\t",
            Separator::Custom(s) => s,
        }
    }
}

impl From<&str> for Separator {
    fn from(s: &str) -> Self {
        match s {
            "=" => Separator::Equals,
            ":" => Separator::Colon,
            " " => Separator::Space,
            "\t" => Separator::Tab,
            other => Separator::Custom(other.to_string()),
        }
    }
}

/// Which comment characters are written as `\uXXXX` escapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CommentEscaping {
    /// Everything outside printable ASCII is escaped. The whole output stays ASCII.
    #[default]
    Ascii,
    /// Only characters above U+00FF are escaped, as `Properties.store(Writer, ..)` does.
    /// Latin-1 characters and control characters pass through raw.
    Latin1,
}

/// Configuration options for `.properties` serialization.
///
/// The default writes a timestamp comment for the current time in the
/// process's local zone, uses `=` as separator and keeps input order.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::{PropertiesOptions, Separator, Timestamp};
///
/// let options = PropertiesOptions::new()
///     .with_separator(Separator::Tab)
///     .with_sort_keys(true)
///     .with_timestamp(Timestamp::Unix(1_473_703_254));
/// assert!(options.sort_keys);
/// ```
#[derive(Clone)]
pub struct PropertiesOptions {
    pub comments: Option<String>,
    pub timestamp: Timestamp,
    pub separator: Separator,
    pub sort_keys: bool,
    /// Zone used for `Now`, `Unix` and `Naive` timestamps. `None` means the process's local zone.
    pub time_zone: Option<Zone>,
    pub comment_escaping: CommentEscaping,
    clock: Arc<dyn Clock>,
}

impl Default for PropertiesOptions {
    fn default() -> Self {
        PropertiesOptions {
            comments: None,
            timestamp: Timestamp::Now,
            separator: Separator::default(),
            sort_keys: false,
            time_zone: None,
            comment_escaping: CommentEscaping::default(),
            clock: Arc::new(SystemClock),
        }
    }
}

impl fmt::Debug for PropertiesOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertiesOptions")
            .field("comments", &self.comments)
            .field("timestamp", &self.timestamp)
            .field("separator", &self.separator)
            .field("sort_keys", &self.sort_keys)
            .field("time_zone", &self.time_zone)
            .field("comment_escaping", &self.comment_escaping)
            .field("clock", &self.clock)
            .finish()
    }
}

impl PropertiesOptions {
    /// Creates default options (timestamp now, `=` separator, input order).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jprops::{PropertiesOptions, Separator, Timestamp};
    ///
    /// let options = PropertiesOptions::new();
    /// assert_eq!(options.separator, Separator::Equals);
    /// assert_eq!(options.timestamp, Timestamp::Now);
    /// assert!(!options.sort_keys);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment block written before the timestamp.
    ///
    /// Each line gains a leading `#` unless it already starts with `#` or `!`.
    #[must_use]
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Sets the timestamp comment.
    ///
    /// Accepts anything convertible to [`Timestamp`]: `false` omits the line,
    /// an `i64` is read as Unix seconds, chrono date-times are used directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_jprops::{PropertiesOptions, Timestamp};
    ///
    /// let options = PropertiesOptions::new().with_timestamp(false);
    /// assert_eq!(options.timestamp, Timestamp::Omit);
    /// ```
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Suppresses the timestamp comment.
    #[must_use]
    pub fn without_timestamp(self) -> Self {
        self.with_timestamp(Timestamp::Omit)
    }

    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<Separator>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Sorts entries by key before writing. Entries with equal keys keep their input order.
    #[must_use]
    pub fn with_sort_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }

    /// Renders `Now`, `Unix` and `Naive` timestamps in `zone` instead of the local zone.
    #[must_use]
    pub fn with_time_zone(mut self, zone: Zone) -> Self {
        self.time_zone = Some(zone);
        self
    }

    /// Replaces the clock read for [`Timestamp::Now`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use serde_jprops::{to_string_with_options, FixedClock, PropertiesOptions, Zone};
    ///
    /// let instant = Utc.with_ymd_and_hms(2016, 9, 12, 18, 0, 54).unwrap();
    /// let options = PropertiesOptions::new()
    ///     .with_clock(FixedClock(instant))
    ///     .with_time_zone(Zone::Named(chrono_tz::UTC));
    /// let text = to_string_with_options(&[("key", "value")], options).unwrap();
    /// assert_eq!(text, "#Mon Sep 12 18:00:54 UTC 2016\nkey=value\n");
    /// ```
    #[must_use]
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    #[must_use]
    pub fn with_comment_escaping(mut self, escaping: CommentEscaping) -> Self {
        self.comment_escaping = escaping;
        self
    }

    pub(crate) fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_from_str() {
        assert_eq!(Separator::from("="), Separator::Equals);
        assert_eq!(Separator::from(":"), Separator::Colon);
        assert_eq!(Separator::from("\t"), Separator::Tab);
        assert_eq!(Separator::from(" "), Separator::Space);
        assert_eq!(Separator::from(" : "), Separator::Custom(" : ".to_string()));
    }

    #[test]
    fn test_builder_chain() {
        let options = PropertiesOptions::new()
            .with_comments("hello")
            .with_separator(":")
            .with_comment_escaping(CommentEscaping::Latin1)
            .without_timestamp();

        assert_eq!(options.comments.as_deref(), Some("hello"));
        assert_eq!(options.separator, Separator::Colon);
        assert_eq!(options.comment_escaping, CommentEscaping::Latin1);
        assert_eq!(options.timestamp, Timestamp::Omit);
    }

    #[test]
    fn test_debug_includes_clock() {
        let debug = format!("{:?}", PropertiesOptions::new());
        assert!(debug.contains("SystemClock"));
    }
}
