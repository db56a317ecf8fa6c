//! Timestamp comments.
//!
//! `Properties.store()` writes the store time as a comment in the fixed,
//! locale-independent layout of `java.util.Date#toString()`:
//!
//! ```text
//! Mon Sep 12 14:00:54 EDT 2016
//! ```
//!
//! ## Time zones
//!
//! Timestamps that do not carry their own zone ([`Timestamp::Now`],
//! [`Timestamp::Unix`], [`Timestamp::Naive`]) are rendered in the zone set
//! with [`PropertiesOptions::with_time_zone`](crate::PropertiesOptions::with_time_zone),
//! or in the process's local zone (see [`Zone::local`]).
//!
//! ## Clocks
//!
//! The current time is read through a [`Clock`], once per encode. Tests
//! substitute a [`FixedClock`].

use crate::{Error, Result};
use chrono::{
    DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

const DATE_LAYOUT: &str = "%a %b %d %H:%M:%S";

/// Source of the current time.
pub trait Clock: fmt::Debug + Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The timestamp comment to write.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::Timestamp;
///
/// assert_eq!(Timestamp::from(false), Timestamp::Omit);
/// assert_eq!(Timestamp::from(true), Timestamp::Now);
/// assert_eq!(Timestamp::from(1_473_703_254), Timestamp::Unix(1_473_703_254));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Timestamp {
    /// No timestamp line.
    Omit,
    /// The time read from the configured [`Clock`].
    #[default]
    Now,
    /// Seconds since the Unix epoch.
    Unix(i64),
    /// A wall-clock time without a zone, interpreted in the configured or local zone.
    Naive(NaiveDateTime),
    /// A time at a fixed UTC offset, optionally with the abbreviation to print for it.
    Fixed {
        at: DateTime<FixedOffset>,
        abbreviation: Option<String>,
    },
    /// A time in a named zone.
    Zoned(DateTime<Tz>),
}

impl From<bool> for Timestamp {
    fn from(enabled: bool) -> Self {
        if enabled {
            Timestamp::Now
        } else {
            Timestamp::Omit
        }
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp::Unix(secs)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(at: NaiveDateTime) -> Self {
        Timestamp::Naive(at)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(at: DateTime<FixedOffset>) -> Self {
        Timestamp::Fixed {
            at,
            abbreviation: None,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Timestamp::Zoned(at.with_timezone(&chrono_tz::UTC))
    }
}

impl From<DateTime<Tz>> for Timestamp {
    fn from(at: DateTime<Tz>) -> Self {
        Timestamp::Zoned(at)
    }
}

/// A time zone used to render timestamps.
#[derive(Clone, Debug, PartialEq)]
pub enum Zone {
    /// An IANA zone; its abbreviation (`EDT`, `CET`, `UTC`) is printed.
    Named(Tz),
    /// A fixed offset. Without an abbreviation it prints as `GMT+HH:MM`.
    Fixed {
        offset: FixedOffset,
        abbreviation: Option<String>,
    },
    /// The operating system's local time rules, printed as `GMT+HH:MM`.
    System,
}

impl Zone {
    /// Detects the process's local zone.
    ///
    /// A non-empty `TZ` environment variable decides on its own: an IANA
    /// name, or the leading name of a POSIX rule such as
    /// `EST5EDT,M3.2.0/M11.1.0`, gives [`Zone::Named`]; any other rule
    /// (`JST-9`) gives [`Zone::System`], which follows `TZ` through the C
    /// library. Without `TZ`, the target of `/etc/localtime` is used, then
    /// [`Zone::System`].
    #[must_use]
    pub fn local() -> Zone {
        let tz = env::var("TZ").ok();
        resolve_local(tz.as_deref(), || fs::read_link("/etc/localtime").ok())
    }

    fn instant_from_naive(&self, at: &NaiveDateTime) -> DateTime<Utc> {
        match self {
            Zone::Named(tz) => from_local(tz, at),
            Zone::Fixed { offset, .. } => from_local(offset, at),
            Zone::System => from_local(&Local, at),
        }
    }

    fn render(&self, instant: &DateTime<Utc>) -> String {
        match self {
            Zone::Named(tz) => {
                let local = instant.with_timezone(tz);
                format!("{} {}", local.format(DATE_LAYOUT), local.format("%Z %Y"))
            }
            Zone::Fixed {
                offset,
                abbreviation,
            } => render_fixed(&instant.with_timezone(offset), abbreviation.as_deref()),
            Zone::System => render_fixed(&instant.with_timezone(&Local).fixed_offset(), None),
        }
    }
}

fn resolve_local<F>(tz_env: Option<&str>, localtime: F) -> Zone
where
    F: FnOnce() -> Option<PathBuf>,
{
    if let Some(value) = tz_env.filter(|value| !value.is_empty()) {
        return match parse_tz_env(value) {
            Some(tz) => {
                tracing::debug!(zone = tz.name(), "Local zone from TZ");
                Zone::Named(tz)
            }
            None => {
                tracing::debug!(tz = value, "TZ is not a named zone, using system offsets");
                Zone::System
            }
        };
    }
    match localtime().as_deref().and_then(zoneinfo_name) {
        Some(tz) => {
            tracing::debug!(zone = tz.name(), "Local zone from /etc/localtime");
            Zone::Named(tz)
        }
        None => {
            tracing::debug!("Local zone unknown, using system offsets");
            Zone::System
        }
    }
}

fn parse_tz_env(value: &str) -> Option<Tz> {
    let value = value.trim_start_matches(':');
    if let Ok(tz) = value.parse::<Tz>() {
        return Some(tz);
    }
    let name = value.split(',').next()?;
    name.parse::<Tz>().ok()
}

fn zoneinfo_name(target: &Path) -> Option<Tz> {
    let target = target.to_str()?;
    let (_, name) = target.split_once("zoneinfo/")?;
    name.parse::<Tz>().ok()
}

/// Resolves a wall-clock time in `zone`. Folds take the earlier instant, gaps
/// use the offset in effect before the gap.
fn from_local<Z: TimeZone>(zone: &Z, at: &NaiveDateTime) -> DateTime<Utc> {
    match zone.from_local_datetime(at).earliest() {
        Some(resolved) => resolved.with_timezone(&Utc),
        None => {
            let before = *at - TimeDelta::hours(12);
            let offset = zone.offset_from_local_datetime(&before).earliest().map_or_else(
                || zone.offset_from_utc_datetime(at).fix(),
                |offset| offset.fix(),
            );
            (*at - TimeDelta::seconds(i64::from(offset.local_minus_utc()))).and_utc()
        }
    }
}

fn render_fixed(local: &DateTime<FixedOffset>, abbreviation: Option<&str>) -> String {
    let zone = match abbreviation {
        Some(abbreviation) => abbreviation.to_string(),
        None => gmt_label(local.offset()),
    };
    format!("{} {} {}", local.format(DATE_LAYOUT), zone, local.format("%Y"))
}

/// Formats an offset the way Java names custom zones: `GMT`, `GMT+05:30`, `GMT-07:00`.
fn gmt_label(offset: &FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return "GMT".to_string();
    }
    let sign = if secs < 0 { '-' } else { '+' };
    let minutes = secs.unsigned_abs() / 60;
    format!("GMT{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Renders the body of the timestamp comment, or `None` for [`Timestamp::Omit`].
///
/// `zone` applies to `Now`, `Unix` and `Naive`; `None` means [`Zone::local`].
///
/// # Errors
///
/// Returns [`Error::TimestampOutOfRange`] for Unix seconds chrono cannot represent.
///
/// # Examples
///
/// ```rust
/// use serde_jprops::timestamp::{format_timestamp, SystemClock};
/// use serde_jprops::{Timestamp, Zone};
///
/// let zone = Zone::Named(chrono_tz::America::New_York);
/// let line = format_timestamp(&Timestamp::Unix(1_473_703_254), Some(&zone), &SystemClock)
///     .unwrap();
/// assert_eq!(line.as_deref(), Some("Mon Sep 12 14:00:54 EDT 2016"));
/// ```
pub fn format_timestamp(
    timestamp: &Timestamp,
    zone: Option<&Zone>,
    clock: &dyn Clock,
) -> Result<Option<String>> {
    let local_zone = || zone.cloned().unwrap_or_else(Zone::local);
    let line = match timestamp {
        Timestamp::Omit => return Ok(None),
        Timestamp::Now => local_zone().render(&clock.now()),
        Timestamp::Unix(secs) => {
            let instant =
                DateTime::from_timestamp(*secs, 0).ok_or(Error::TimestampOutOfRange(*secs))?;
            local_zone().render(&instant)
        }
        Timestamp::Naive(at) => {
            let zone = local_zone();
            zone.render(&zone.instant_from_naive(at))
        }
        Timestamp::Fixed { at, abbreviation } => render_fixed(at, abbreviation.as_deref()),
        Timestamp::Zoned(at) => {
            format!("{} {}", at.format(DATE_LAYOUT), at.format("%Z %Y"))
        }
    };
    Ok(Some(line))
}
