//! Time-of-day values stored in a `TIME` column.
//!
//! A [`DayTime`] is a single signed count of nanoseconds since midnight. The
//! hour, minute, second and nanosecond components are derived from it on
//! demand, so the stored offset and the displayed clock can never disagree.
//!
//! The canonical text form is `HH:MM:SS`, or `HH:MM:SS.NNNNNNNNN` when the
//! sub-second part is positive. It is used for storage and for JSON.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, NaiveTime, Timelike};
use ormtypes_util::scan::{scan_fixed_ints, ScanField};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::dialect::{time_column_type, ColumnType};
use crate::error::{Error, Result};
use crate::value::{DriverValue, FromDriverValue, ToDriverValue};

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;

/// `%02d:%02d:%02d.%09d`
const TEXT_FIELDS: [ScanField; 4] = [
    ScanField::new("", 2),
    ScanField::new(":", 2),
    ScanField::new(":", 2),
    ScanField::new(".", 9),
];

/// A wall-clock time of day with nanosecond resolution.
///
/// No upper bound is enforced: components past their natural range are summed
/// into the offset as given, so `DayTime::new(0, 90, 0, 0)` reads `01:30:00`
/// and `DayTime::new(25, 0, 0, 0)` reads `25:00:00`.
///
/// Equality, ordering and hashing use the derived `(hours, minutes, seconds,
/// nanoseconds)` tuple.
///
/// # Example
///
/// ```
/// use ormtypes::DayTime;
///
/// let opening = DayTime::new(9, 30, 0, 0);
/// assert_eq!(opening.to_string(), "09:30:00");
/// assert_eq!(DayTime::parse_lenient("09:30"), opening);
/// assert!(DayTime::new(17, 0, 0, 0).after(opening));
/// ```
#[derive(Clone, Copy, Default)]
pub struct DayTime(i64);

impl DayTime {
    pub const MIDNIGHT: DayTime = DayTime(0);

    /// Sum the components into one offset since midnight.
    ///
    /// No carry validation is done. Overflow of the `i64` nanosecond count
    /// wraps.
    pub fn new(hours: i64, minutes: i64, seconds: i64, nanoseconds: i64) -> Self {
        DayTime(
            hours
                .wrapping_mul(NANOS_PER_HOUR)
                .wrapping_add(minutes.wrapping_mul(NANOS_PER_MINUTE))
                .wrapping_add(seconds.wrapping_mul(NANOS_PER_SECOND))
                .wrapping_add(nanoseconds),
        )
    }

    /// The current local time of day.
    pub fn now() -> Self {
        Self::from(Local::now().time())
    }

    #[inline]
    pub const fn from_nanos(nanos: i64) -> Self {
        DayTime(nanos)
    }

    /// Raw offset since midnight in nanoseconds.
    #[inline]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }

    /// Parse text the lenient way storage and JSON text is read.
    ///
    /// The input is scanned as `HH:MM:SS.NNNNNNNNN` with fixed field widths.
    /// Scanning stops at the first mismatch and every missing field is 0; this
    /// never fails. The fraction is read as a nanosecond count, not scaled, so
    /// `"00:00:01.5"` is one second and five nanoseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use ormtypes::DayTime;
    ///
    /// assert_eq!(DayTime::parse_lenient("07:15").components(), (7, 15, 0, 0));
    /// assert_eq!(DayTime::parse_lenient("not a time"), DayTime::MIDNIGHT);
    /// ```
    pub fn parse_lenient(text: &str) -> Self {
        let [hours, minutes, seconds, nanoseconds] = scan_fixed_ints(text, &TEXT_FIELDS);
        Self::new(hours, minutes, seconds, nanoseconds)
    }

    #[inline]
    pub const fn hours(self) -> i64 {
        self.0 / NANOS_PER_HOUR
    }

    #[inline]
    pub const fn minutes(self) -> i64 {
        (self.0 % NANOS_PER_HOUR) / NANOS_PER_MINUTE
    }

    #[inline]
    pub const fn seconds(self) -> i64 {
        (self.0 % NANOS_PER_MINUTE) / NANOS_PER_SECOND
    }

    #[inline]
    pub const fn nanoseconds(self) -> i64 {
        self.0 % NANOS_PER_SECOND
    }

    /// `(hours, minutes, seconds, nanoseconds)`.
    #[inline]
    pub const fn components(self) -> (i64, i64, i64, i64) {
        (
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.nanoseconds(),
        )
    }

    /// Shift the clock by `minutes`, moving it **forward**.
    ///
    /// `minutes / 60` is added to the hour and `minutes % 60` to the minute;
    /// seconds and nanoseconds are kept. Despite the name this yields a later
    /// time. Existing callers depend on that, so it is kept as is.
    ///
    /// ```
    /// use ormtypes::DayTime;
    ///
    /// assert_eq!(DayTime::new(1, 0, 0, 0).ago(90), DayTime::new(2, 30, 0, 0));
    /// ```
    pub fn ago(self, minutes: i64) -> Self {
        let (h, m, s, n) = self.components();
        Self::new(
            h.wrapping_add(minutes / 60),
            m.wrapping_add(minutes % 60),
            s,
            n,
        )
    }

    /// Strictly later, comparing hours, then minutes, seconds, nanoseconds.
    pub fn after(self, other: DayTime) -> bool {
        self.cmp(&other) == Ordering::Greater
    }

    /// Strictly earlier, comparing hours, then minutes, seconds, nanoseconds.
    pub fn before(self, other: DayTime) -> bool {
        self.cmp(&other) == Ordering::Less
    }

    /// All four components are equal.
    pub fn equal(self, other: DayTime) -> bool {
        self == other
    }

    /// True when the seconds and nanoseconds are zero.
    ///
    /// Hours and minutes are **not** checked: `03:30:00` reports zero. Kept for
    /// compatibility with existing callers; compare against
    /// [`DayTime::MIDNIGHT`] to test for midnight.
    pub fn is_zero(self) -> bool {
        self.seconds() == 0 && self.nanoseconds() == 0
    }

    /// Signed difference in whole minutes, `self - other`, from the hour and
    /// minute components only.
    pub fn sub_minutes(self, other: DayTime) -> i64 {
        (self.hours() - other.hours()) * 60 + (self.minutes() - other.minutes())
    }

    /// [`DayTime::sub_minutes`] against leniently parsed text.
    pub fn sub_minutes_by_text(self, other: &str) -> i64 {
        self.sub_minutes(Self::parse_lenient(other))
    }

    /// JSON string holding the canonical text.
    pub fn marshal_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(Error::Serialize)
    }

    /// Read a JSON value into `self`.
    ///
    /// The literal `null` leaves `self` unchanged. Anything else has its
    /// surrounding `"` characters stripped and is parsed leniently.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        if data == b"null" {
            return Ok(());
        }
        let text = String::from_utf8_lossy(data);
        *self = Self::parse_lenient(text.trim_matches('"'));
        Ok(())
    }
}

impl PartialEq for DayTime {
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

impl Eq for DayTime {}

impl PartialOrd for DayTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DayTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.components().cmp(&other.components())
    }
}

impl Hash for DayTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components().hash(state);
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m, s, n) = self.components();
        if n > 0 {
            write!(f, "{h:02}:{m:02}:{s:02}.{n:09}")
        } else {
            write!(f, "{h:02}:{m:02}:{s:02}")
        }
    }
}

impl fmt::Debug for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DayTime({self})")
    }
}

impl FromStr for DayTime {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl From<NaiveTime> for DayTime {
    fn from(value: NaiveTime) -> Self {
        Self::new(
            i64::from(value.hour()),
            i64::from(value.minute()),
            i64::from(value.second()),
            i64::from(value.nanosecond()),
        )
    }
}

impl From<NaiveDateTime> for DayTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::from(value.time())
    }
}

impl FromDriverValue for DayTime {
    fn from_driver_value(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Text(text) => Ok(Self::parse_lenient(text)),
            DriverValue::Bytes(bytes) => Ok(Self::parse_lenient(&String::from_utf8_lossy(bytes))),
            DriverValue::DateTime(datetime) => Ok(Self::from(*datetime)),
            other => Err(Error::UnsupportedSourceType { kind: other.kind() }),
        }
    }
}

impl ToDriverValue for DayTime {
    fn to_driver_value(&self) -> Result<DriverValue> {
        Ok(DriverValue::Text(self.to_string()))
    }
}

impl ColumnType for DayTime {
    fn data_type(&self) -> &'static str {
        "time"
    }

    fn db_data_type(&self, dialect_name: &str) -> &'static str {
        time_column_type(dialect_name)
    }
}

impl Serialize for DayTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DayTimeVisitor;

impl<'de> Visitor<'de> for DayTimeVisitor {
    type Value = DayTime;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a time of day such as \"HH:MM:SS\"")
    }

    // Null keeps the zero value a fresh record holds.
    fn visit_unit<E: de::Error>(self) -> std::result::Result<DayTime, E> {
        Ok(DayTime::default())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<DayTime, E> {
        Ok(DayTime::default())
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> std::result::Result<DayTime, E> {
        Ok(DayTime::parse_lenient(&v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<DayTime, E> {
        Ok(DayTime::parse_lenient(&v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<DayTime, E> {
        Ok(DayTime::parse_lenient(&v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<DayTime, E> {
        Ok(DayTime::parse_lenient(&v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<DayTime, E> {
        Ok(DayTime::parse_lenient(v))
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> std::result::Result<DayTime, E> {
        Ok(DayTime::parse_lenient(&String::from_utf8_lossy(v)))
    }
}

impl<'de> Deserialize<'de> for DayTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(DayTimeVisitor)
    }
}
