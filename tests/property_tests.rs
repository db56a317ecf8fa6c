//! Property-based tests for escaping and line assembly.
//!
//! `load_line` is a minimal reader for one `key=value` line, following the
//! unescaping rules of `Properties.load()`.

use proptest::prelude::*;
use serde_jprops::encode::encode;
use serde_jprops::escape::{escape_key, escape_value};
use serde_jprops::normalize::Entry;
use serde_jprops::{PropertiesOptions, Separator};

fn unescape(escaped: &str) -> String {
    let mut units: Vec<u16> = Vec::new();
    let mut chars = escaped.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u16; 2];
            units.extend_from_slice(c.encode_utf16(&mut buf));
            continue;
        }
        let next = chars.next().expect("dangling backslash");
        let decoded = match next {
            'n' => u16::from(b'\n'),
            'r' => u16::from(b'\r'),
            't' => u16::from(b'\t'),
            'f' => 0x0C,
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                u16::from_str_radix(&hex, 16).expect("bad unicode escape")
            }
            other => {
                let mut buf = [0u16; 2];
                units.extend_from_slice(other.encode_utf16(&mut buf));
                continue;
            }
        };
        units.push(decoded);
    }
    String::from_utf16(&units).expect("unpaired surrogate")
}

fn load_line(line: &str) -> (String, String) {
    let mut escaped = false;
    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' {
            return (unescape(&line[..i]), unescape(&line[i + 1..]));
        }
    }
    panic!("no separator in {:?}", line);
}

fn is_printable_ascii_or_newline(c: char) -> bool {
    c == '\n' || (' '..='~').contains(&c)
}

proptest! {
    #[test]
    fn prop_key_round_trip(s in any::<String>()) {
        prop_assert_eq!(unescape(&escape_key(&s)), s);
    }

    #[test]
    fn prop_value_round_trip(s in any::<String>()) {
        prop_assert_eq!(unescape(&escape_value(&s)), s);
    }

    #[test]
    fn prop_line_round_trip(key in any::<String>(), value in any::<String>()) {
        let options = PropertiesOptions::new().without_timestamp();
        let text = encode(&[Entry::new(key.clone(), value.clone())], &options).unwrap();
        let line = text.strip_suffix('\n').unwrap();
        prop_assert!(!line.contains('\n'));
        prop_assert_eq!(load_line(line), (key, value));
    }

    #[test]
    fn prop_output_is_ascii(
        pairs in prop::collection::vec((any::<String>(), any::<String>()), 0..8),
        comments in proptest::option::of(any::<String>()),
    ) {
        let entries: Vec<_> = pairs.into_iter().map(Entry::from).collect();
        let mut options = PropertiesOptions::new().with_timestamp(1_473_703_254);
        if let Some(comments) = comments {
            options = options.with_comments(comments);
        }
        let text = encode(&entries, &options).unwrap();
        prop_assert!(text.chars().all(is_printable_ascii_or_newline), "{:?}", text);
        prop_assert_eq!(text.lines().count(), entries.len() + 1 + options.comments.map_or(0, |c| {
            if c.is_empty() { 0 } else { c.split("\r\n").flat_map(|p| p.split(['\r', '\n'])).count() }
        }));
    }

    #[test]
    fn prop_encoding_is_deterministic(
        pairs in prop::collection::vec(("[a-z ]{0,6}", "[ -~]{0,10}"), 0..10),
    ) {
        let entries: Vec<_> = pairs.into_iter().map(Entry::from).collect();
        let options = PropertiesOptions::new().with_timestamp(false);
        prop_assert_eq!(encode(&entries, &options).unwrap(), encode(&entries, &options).unwrap());
    }

    #[test]
    fn prop_separator_only_changes_separator(key in any::<String>(), value in any::<String>()) {
        let entries = [Entry::new(key.clone(), value.clone())];
        let plain = PropertiesOptions::new().without_timestamp();
        let equals = encode(&entries, &plain).unwrap();
        let tab = encode(&entries, &plain.with_separator(Separator::Tab)).unwrap();
        let expected = format!("{}\t{}\n", escape_key(&key), escape_value(&value));
        prop_assert_eq!(tab, expected);
        prop_assert_eq!(equals, format!("{}={}\n", escape_key(&key), escape_value(&value)));
    }
}
