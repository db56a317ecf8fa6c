//! Dynamic values and their conversion to property text.
//!
//! A `.properties` file only holds strings. [`Value`] is the closed set of
//! inputs the writer accepts before that conversion, and
//! [`Value::stringify`] turns one into property-value text:
//!
//! | Variant | Text |
//! |---|---|
//! | `String` | unchanged |
//! | `Decimal`, `BigInt` | exact decimal digits, never scientific notation |
//! | `Null`, `Bool`, `Integer`, `Float` | JSON text (`null`, `true`, `42`, `3.5`) |
//! | `Array`, `Map` | [`Error::UnsupportedValueType`] |
//!
//! ## Examples
//!
//! ```rust
//! use serde_jprops::{Decimal, Value};
//!
//! assert_eq!(Value::from("text").stringify().unwrap(), "text");
//! assert_eq!(Value::from(true).stringify().unwrap(), "true");
//! assert_eq!(Value::from(42).stringify().unwrap(), "42");
//!
//! let price: Decimal = "19.90".parse().unwrap();
//! assert_eq!(Value::from(price).stringify().unwrap(), "19.90");
//!
//! assert!(Value::Array(vec![]).stringify().is_err());
//! ```

use crate::{Error, PropertyMap, Result};
use num_bigint::{BigInt, Sign};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A dynamically-typed value headed for a property line.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    BigInt(BigInt),
    Decimal(Decimal),
    String(String),
    Array(Vec<Value>),
    Map(PropertyMap),
}

impl Value {
    /// Converts this value to the text of a property value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedValueType`] for arrays and maps, which
    /// cannot be represented as a single property value.
    pub fn stringify(&self) -> Result<String> {
        match self {
            Value::String(s) => Ok(s.clone()),
            Value::Decimal(d) => Ok(d.to_string()),
            Value::BigInt(bi) => Ok(bi.to_string()),
            Value::Array(_) => Err(Error::unsupported_value_type(
                "list cannot be converted to a .properties value",
            )),
            Value::Map(_) => Err(Error::unsupported_value_type(
                "map cannot be converted to a .properties value",
            )),
            Value::Float(f) if f.is_nan() => Ok("NaN".to_string()),
            Value::Float(f) if f.is_infinite() => {
                Ok(if *f > 0.0 { "Infinity" } else { "-Infinity" }.to_string())
            }
            Value::Null | Value::Bool(_) | Value::Integer(_) | Value::Float(_) => {
                serde_json::to_string(self).map_err(Error::custom)
            }
        }
    }

    /// Returns a short name for the kind of value, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) | Value::BigInt(_) => "integer",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Array(_) => "list",
            Value::Map(_) => "map",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::BigInt(bi) => serializer.serialize_str(&bi.to_string()),
            Value::Decimal(d) => d.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Map(map) => {
                use serde::ser::SerializeMap;
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map.iter() {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or_else(|_| Value::BigInt(BigInt::from(value)), Value::Integer)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::String(value.clone())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<PropertyMap> for Value {
    fn from(map: PropertyMap) -> Self {
        Value::Map(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// An exact decimal number: `unscaled * 10^-scale`.
///
/// Keeps the digits it was written with, so `1.50` stays `1.50`, and the
/// sign of a negative zero, so `-0.00` stays `-0.00`.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::Decimal;
///
/// assert_eq!(Decimal::new(150, 2).to_string(), "1.50");
/// assert_eq!(Decimal::new(-5, 3).to_string(), "-0.005");
/// assert_eq!("12.340".parse::<Decimal>().unwrap().to_string(), "12.340");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
    negative: bool,
}

impl Decimal {
    #[must_use]
    pub fn new(unscaled: impl Into<BigInt>, scale: u32) -> Self {
        let unscaled = unscaled.into();
        Decimal {
            negative: unscaled.sign() == Sign::Minus,
            unscaled,
            scale,
        }
    }

    /// True for negative values, including a negative zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.negative
    }

    #[must_use]
    pub const fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        let digits = self.unscaled.magnitude().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return f.write_str(&digits);
        }
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (whole, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{}.{}", whole, fraction)
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let body = s.strip_prefix(['+', '-']).unwrap_or(s);
        let (whole, fraction) = body.split_once('.').unwrap_or((body, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(Error::invalid_decimal(s));
        }
        let scale = u32::try_from(fraction.len()).map_err(|_| Error::invalid_decimal(s))?;
        let magnitude = BigInt::parse_bytes(format!("{}{}", whole, fraction).as_bytes(), 10)
            .ok_or_else(|| Error::invalid_decimal(s))?;
        let negative = s.starts_with('-');
        let unscaled = if negative { -magnitude } else { magnitude };
        Ok(Decimal {
            unscaled,
            scale,
            negative,
        })
    }
}

impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stringify_json_fallback() {
        assert_eq!(Value::Null.stringify().unwrap(), "null");
        assert_eq!(Value::Bool(false).stringify().unwrap(), "false");
        assert_eq!(Value::Integer(-17).stringify().unwrap(), "-17");
        assert_eq!(Value::Float(3.5).stringify().unwrap(), "3.5");
        assert_eq!(Value::Float(1.0).stringify().unwrap(), "1.0");
    }

    #[test]
    fn test_stringify_non_finite_floats() {
        assert_eq!(Value::Float(f64::NAN).stringify().unwrap(), "NaN");
        assert_eq!(Value::Float(f64::INFINITY).stringify().unwrap(), "Infinity");
        assert_eq!(
            Value::Float(f64::NEG_INFINITY).stringify().unwrap(),
            "-Infinity"
        );
    }

    #[test]
    fn test_stringify_string_is_verbatim() {
        let s = "a=b: \"quoted\" \u{2603}";
        assert_eq!(Value::from(s).stringify().unwrap(), s);
    }

    #[test]
    fn test_stringify_exact_numbers() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            Value::BigInt(big).stringify().unwrap(),
            "123456789012345678901234567890"
        );
        assert_eq!(Value::from(u64::MAX).stringify().unwrap(), "18446744073709551615");
        assert_eq!(
            Value::from(Decimal::new(1_000_000, 0)).stringify().unwrap(),
            "1000000"
        );
    }

    #[test]
    fn test_stringify_composites_fail() {
        let list = Value::from(vec![1, 2]);
        assert!(matches!(list.stringify(), Err(Error::UnsupportedValueType(_))));

        let map = Value::Map(PropertyMap::new());
        assert!(matches!(map.stringify(), Err(Error::UnsupportedValueType(_))));
    }

    #[test]
    fn test_decimal_display() {
        assert_eq!(Decimal::new(5, 1).to_string(), "0.5");
        assert_eq!(Decimal::new(-150, 2).to_string(), "-1.50");
        assert_eq!(Decimal::new(0, 3).to_string(), "0.000");
        assert_eq!(Decimal::new(42, 0).to_string(), "42");
    }

    #[test]
    fn test_decimal_parse() {
        let parsed: Decimal = "-0.050".parse().unwrap();
        assert_eq!(parsed, Decimal::new(-50, 3));
        assert_eq!(parsed.to_string(), "-0.050");

        assert_eq!(".5".parse::<Decimal>().unwrap().to_string(), "0.5");
        assert_eq!("+7".parse::<Decimal>().unwrap(), Decimal::new(7, 0));
        assert_eq!("3.".parse::<Decimal>().unwrap().to_string(), "3");
    }

    #[test]
    fn test_decimal_negative_zero_keeps_sign() {
        let parsed: Decimal = "-0.00".parse().unwrap();
        assert!(parsed.is_negative());
        assert_eq!(parsed.to_string(), "-0.00");
        assert_eq!(Value::from(parsed).stringify().unwrap(), "-0.00");

        let unsigned: Decimal = "0.00".parse().unwrap();
        assert!(!unsigned.is_negative());
        assert_eq!(unsigned.to_string(), "0.00");
        assert!(!Decimal::new(0, 2).is_negative());
    }

    #[test]
    fn test_decimal_parse_rejects() {
        for bad in ["", ".", "-", "1e5", "1.2.3", "abc", " 1", "--1", "1_000"] {
            assert!(
                matches!(bad.parse::<Decimal>(), Err(Error::InvalidDecimal(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_decimal_serializes_as_text() {
        let json = serde_json::to_string(&Decimal::new(150, 2)).unwrap();
        assert_eq!(json, "\"1.50\"");
    }

    #[test]
    fn test_kind() {
        assert_eq!(Value::from(vec![Value::Null]).kind(), "list");
        assert_eq!(Value::Integer(1).kind(), "integer");
    }
}
