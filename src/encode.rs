//! Property-text encoding.
//!
//! Writes normalized [`Entry`]s as `.properties` text:
//!
//! ```text
//! #<comment line>          zero or more
//! #<timestamp>             unless the timestamp is omitted
//! <key><separator><value>  one per entry
//! ```
//!
//! Every line ends with a single `\n`, whatever the platform.
//!
//! ## Examples
//!
//! ```rust
//! use serde_jprops::encode::encode;
//! use serde_jprops::normalize::Entry;
//! use serde_jprops::PropertiesOptions;
//!
//! let entries = vec![Entry::new("two words", " value")];
//! let options = PropertiesOptions::new().with_comments("Generated").without_timestamp();
//! let text = encode(&entries, &options).unwrap();
//! assert_eq!(text, "#Generated\ntwo\\ words=\\ value\n");
//! ```

use crate::escape::{escape_comment, push_key, push_value, to_comment};
use crate::normalize::Entry;
use crate::timestamp::format_timestamp;
use crate::{Error, PropertiesOptions, Result};
use std::io;

/// Encodes `entries` to a string.
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] if the timestamp cannot be represented.
pub fn encode(entries: &[Entry], options: &PropertiesOptions) -> Result<String> {
    let mut output = String::with_capacity(64 + entries.len() * 32);
    emit(entries, options, |line| {
        output.push_str(line);
        Ok(())
    })?;
    Ok(output)
}

/// Encodes `entries` line by line into `writer`.
///
/// A write failure stops encoding immediately; lines written before it stay
/// written.
///
/// # Errors
///
/// Returns [`Error::Io`] carrying the writer's error, or
/// [`Error::TimestampOutOfRange`] before anything is written.
pub fn encode_to_writer<W>(entries: &[Entry], options: &PropertiesOptions, mut writer: W) -> Result<()>
where
    W: io::Write,
{
    emit(entries, options, |line| {
        writer.write_all(line.as_bytes()).map_err(Error::from)
    })?;
    writer.flush()?;
    Ok(())
}

#[tracing::instrument(skip_all, fields(entries = entries.len()))]
fn emit<F>(entries: &[Entry], options: &PropertiesOptions, mut sink: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    // Read the clock before anything reaches the sink.
    let timestamp = format_timestamp(
        &options.timestamp,
        options.time_zone.as_ref(),
        options.clock(),
    )?;

    if let Some(comments) = options.comments.as_deref() {
        let block = to_comment(comments, options.comment_escaping);
        if !block.is_empty() {
            sink(&block)?;
        }
    }

    if let Some(timestamp) = timestamp {
        let line = format!(
            "#{}\n",
            escape_comment(&timestamp, options.comment_escaping)
        );
        sink(&line)?;
    }

    let separator = options.separator.as_str();
    let mut line = String::with_capacity(64);
    for entry in entries {
        line.clear();
        push_key(&mut line, entry.key());
        line.push_str(separator);
        push_value(&mut line, entry.value());
        line.push('\n');
        tracing::trace!(key = entry.key(), len = line.len(), "Encoded entry");
        sink(&line)?;
    }

    tracing::debug!(separator, "Encoded property set");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommentEscaping, FixedClock, Separator, Timestamp, Zone};
    use chrono::{DateTime, FixedOffset};

    fn plain() -> PropertiesOptions {
        PropertiesOptions::new().without_timestamp()
    }

    fn entries(pairs: &[(&str, &str)]) -> Vec<Entry> {
        pairs.iter().map(|&pair| Entry::from(pair)).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(encode(&[], &plain()).unwrap(), "");
    }

    #[test]
    fn test_lines_in_order() {
        let text = encode(&entries(&[("zebra", "apple"), ("key", "value")]), &plain()).unwrap();
        assert_eq!(text, "zebra=apple\nkey=value\n");
    }

    #[test]
    fn test_duplicate_keys_are_written_twice() {
        let text = encode(&entries(&[("k", "1"), ("k", "2")]), &plain()).unwrap();
        assert_eq!(text, "k=1\nk=2\n");
    }

    #[test]
    fn test_separator_is_not_escaped() {
        let pairs = entries(&[("a:b", "c=d")]);
        let colon = plain().with_separator(Separator::Colon);
        assert_eq!(encode(&pairs, &colon).unwrap(), "a\\:b:c\\=d\n");
        let custom = plain().with_separator(" = ");
        assert_eq!(encode(&pairs, &custom).unwrap(), "a\\:b = c\\=d\n");
    }

    #[test]
    fn test_comment_then_timestamp_then_entries() {
        let at = DateTime::from_timestamp(1_473_703_254, 0).unwrap();
        let options = PropertiesOptions::new()
            .with_comments("one\ntwo")
            .with_clock(FixedClock(at))
            .with_time_zone(Zone::Named(chrono_tz::America::New_York));
        let text = encode(&entries(&[("key", "value")]), &options).unwrap();
        assert_eq!(
            text,
            "#one\n#two\n#Mon Sep 12 14:00:54 EDT 2016\nkey=value\n"
        );
    }

    #[test]
    fn test_timestamp_abbreviation_is_escaped() {
        let offset = FixedOffset::east_opt(0).unwrap();
        let at = DateTime::from_timestamp(0, 0).unwrap().with_timezone(&offset);
        let options = PropertiesOptions::new().with_timestamp(Timestamp::Fixed {
            at,
            abbreviation: Some("\u{3a9}".to_string()),
        });
        let text = encode(&[], &options).unwrap();
        assert_eq!(text, "#Thu Jan 01 00:00:00 \\u03a9 1970\n");

        let latin1 = options.with_comment_escaping(CommentEscaping::Latin1);
        assert_eq!(encode(&[], &latin1).unwrap(), text);
    }

    #[test]
    fn test_empty_comment_writes_nothing() {
        let options = plain().with_comments("");
        assert_eq!(encode(&entries(&[("k", "v")]), &options).unwrap(), "k=v\n");
    }

    #[test]
    fn test_out_of_range_timestamp_fails_before_output() {
        let mut written = Vec::new();
        let options = PropertiesOptions::new()
            .with_comments("never written")
            .with_timestamp(i64::MIN);
        let err = encode_to_writer(&entries(&[("k", "v")]), &options, &mut written).unwrap_err();
        assert!(matches!(err, Error::TimestampOutOfRange(i64::MIN)));
        assert!(written.is_empty());
    }

    struct FailAfter {
        remaining: usize,
        written: Vec<u8>,
    }

    impl io::Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink full"));
            }
            self.remaining -= 1;
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sink_failure_stops_and_keeps_written_lines() {
        let mut sink = FailAfter {
            remaining: 1,
            written: Vec::new(),
        };
        let err = encode_to_writer(
            &entries(&[("a", "1"), ("b", "2"), ("c", "3")]),
            &plain(),
            &mut sink,
        )
        .unwrap_err();

        match err {
            Error::Io(inner) => assert_eq!(inner.kind(), io::ErrorKind::WriteZero),
            other => panic!("Expected Io, got {:?}", other),
        }
        assert_eq!(sink.written, b"a=1\n");
    }
}
