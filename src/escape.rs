//! Character escaping for keys, values and comments.
//!
//! The escaping table is a pure classification: [`classify`] maps one code
//! point to an [`Escape`], and the `escape_*` functions only render those
//! classifications. Output is always printable ASCII, so the text survives
//! any ASCII-compatible encoding and decodes identically under a Java
//! `Properties.load()`.
//!
//! | Input | Output |
//! |---|---|
//! | `\` | `\\` |
//! | LF, CR, TAB, FF | `\n`, `\r`, `\t`, `\f` |
//! | `=` `:` `#` `!` | `\=` `\:` `\#` `\!` |
//! | space in a key | `\ ` |
//! | leading space in a value | `\ ` |
//! | other printable ASCII | itself |
//! | anything else | `\uXXXX` per UTF-16 code unit |
//!
//! ## Examples
//!
//! ```rust
//! use serde_jprops::escape::{escape_key, escape_value};
//!
//! assert_eq!(escape_key("two words"), "two\\ words");
//! assert_eq!(escape_value(" value "), "\\ value ");
//! assert_eq!(escape_value("\u{1F410}"), "\\ud83d\\udc10");
//! ```

use crate::options::CommentEscaping;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// How a single code point is written out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Escape {
    /// Emitted unchanged.
    Literal(char),
    /// Emitted as a backslash followed by the given character.
    Backslash(char),
    /// Emitted as one `\uXXXX` escape per UTF-16 code unit.
    Unicode(char),
}

/// Which half of an entry a code point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    /// Spaces are always escaped.
    Key,
    /// Spaces are escaped only where a reader would otherwise strip them.
    Value { escape_space: bool },
}

/// Classifies one code point of a key or value.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::escape::{classify, Escape, Field};
///
/// assert_eq!(classify('a', Field::Key), Escape::Literal('a'));
/// assert_eq!(classify('\n', Field::Key), Escape::Backslash('n'));
/// assert_eq!(classify(' ', Field::Key), Escape::Backslash(' '));
/// assert_eq!(classify(' ', Field::Value { escape_space: false }), Escape::Literal(' '));
/// assert_eq!(classify('\u{7F}', Field::Key), Escape::Unicode('\u{7F}'));
/// ```
#[must_use]
pub const fn classify(c: char, field: Field) -> Escape {
    match c {
        '\\' | '=' | ':' | '#' | '!' => Escape::Backslash(c),
        '\n' => Escape::Backslash('n'),
        '\r' => Escape::Backslash('r'),
        '\t' => Escape::Backslash('t'),
        '\u{0C}' => Escape::Backslash('f'),
        ' ' => match field {
            Field::Key | Field::Value { escape_space: true } => Escape::Backslash(' '),
            Field::Value { escape_space: false } => Escape::Literal(' '),
        },
        '\u{21}'..='\u{7E}' => Escape::Literal(c),
        _ => Escape::Unicode(c),
    }
}

/// Classifies one code point of a comment line.
///
/// Line breaks never reach this function; [`to_comment`] splits on them first.
#[must_use]
pub const fn classify_comment(c: char, escaping: CommentEscaping) -> Escape {
    match escaping {
        CommentEscaping::Ascii => match c {
            '\u{20}'..='\u{7E}' => Escape::Literal(c),
            _ => Escape::Unicode(c),
        },
        CommentEscaping::Latin1 => match c {
            '\u{00}'..='\u{FF}' => Escape::Literal(c),
            _ => Escape::Unicode(c),
        },
    }
}

/// Appends the rendering of `escape` to `out`.
pub fn push_escape(out: &mut String, escape: Escape) {
    match escape {
        Escape::Literal(c) => out.push(c),
        Escape::Backslash(c) => {
            out.push('\\');
            out.push(c);
        }
        Escape::Unicode(c) => {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                push_unicode_escape(out, *unit);
            }
        }
    }
}

fn push_unicode_escape(out: &mut String, unit: u16) {
    out.push_str("\\u");
    for shift in [12u16, 8, 4, 0] {
        out.push(char::from(HEX_DIGITS[usize::from((unit >> shift) & 0xF)]));
    }
}

/// Escapes a key. Every space is escaped.
#[must_use]
pub fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    push_key(&mut out, key);
    out
}

/// Escapes a value.
///
/// A leading space is escaped so readers do not strip it. A value made only
/// of spaces has every space escaped.
#[must_use]
pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    push_value(&mut out, value);
    out
}

pub(crate) fn push_key(out: &mut String, key: &str) {
    for c in key.chars() {
        push_escape(out, classify(c, Field::Key));
    }
}

pub(crate) fn push_value(out: &mut String, value: &str) {
    let all_spaces = value.chars().all(|c| c == ' ');
    for (i, c) in value.chars().enumerate() {
        let field = Field::Value {
            escape_space: i == 0 || all_spaces,
        };
        push_escape(out, classify(c, field));
    }
}

/// Escapes a single comment line without adding a prefix.
#[must_use]
pub fn escape_comment(line: &str, escaping: CommentEscaping) -> String {
    let mut out = String::with_capacity(line.len());
    for c in line.chars() {
        push_escape(&mut out, classify_comment(c, escaping));
    }
    out
}

/// Splits a comment on `\n`, `\r\n` and `\r`.
pub(crate) fn comment_lines(comments: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(comments);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(['\r', '\n']) {
            Some(at) => {
                let skip = if text[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[at + skip..]);
                Some(&text[..at])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}

/// Renders a comment block as `#`-prefixed lines, each ending in `\n`.
///
/// Lines already starting with `#` or `!` are kept as they are; the rest
/// gain a leading `#`. An empty comment produces no lines.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::escape::to_comment;
/// use serde_jprops::CommentEscaping;
///
/// assert_eq!(
///     to_comment("first\n!second\n", CommentEscaping::Ascii),
///     "#first\n!second\n#\n"
/// );
/// ```
#[must_use]
pub fn to_comment(comments: &str, escaping: CommentEscaping) -> String {
    let mut out = String::with_capacity(comments.len() + 2);
    if comments.is_empty() {
        return out;
    }
    for line in comment_lines(comments) {
        if !line.starts_with(['#', '!']) {
            out.push('#');
        }
        for c in line.chars() {
            push_escape(&mut out, classify_comment(c, escaping));
        }
        out.push('\n');
    }
    out
}
