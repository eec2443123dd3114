//! Driver-native values and the conversion traits column types implement.
//!
//! A database driver hands column data to the persistence layer as a
//! [`DriverValue`]. Column types read it back with [`FromDriverValue`] and
//! produce it with [`ToDriverValue`].

use std::borrow::Cow;

use chrono::{DateTime, NaiveDateTime, TimeZone};

use crate::error::Result;

/// A column value as exchanged with a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Bytes(Vec<u8>),
    Text(String),
    /// A full date-time, as drivers return for `DATETIME`/`TIMESTAMP` columns.
    DateTime(NaiveDateTime),
}

impl DriverValue {
    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Bool(_) => "bool",
            DriverValue::Int(_) => "int",
            DriverValue::Float(_) => "float",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::Text(_) => "text",
            DriverValue::DateTime(_) => "datetime",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// The textual form of the value, or `None` for null.
    ///
    /// Bytes are read as UTF-8 with invalid sequences replaced; scalars use
    /// their `Display` output.
    ///
    /// # Example
    ///
    /// ```
    /// use ormtypes::DriverValue;
    ///
    /// assert_eq!(DriverValue::Int(42).as_text().as_deref(), Some("42"));
    /// assert_eq!(DriverValue::from("[1]").as_text().as_deref(), Some("[1]"));
    /// assert_eq!(DriverValue::Null.as_text(), None);
    /// ```
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            DriverValue::Null => None,
            DriverValue::Bool(v) => Some(Cow::Owned(v.to_string())),
            DriverValue::Int(v) => Some(Cow::Owned(v.to_string())),
            DriverValue::Float(v) => Some(Cow::Owned(v.to_string())),
            DriverValue::Bytes(v) => Some(String::from_utf8_lossy(v)),
            DriverValue::Text(v) => Some(Cow::Borrowed(v)),
            DriverValue::DateTime(v) => Some(Cow::Owned(v.to_string())),
        }
    }
}

impl From<&str> for DriverValue {
    fn from(value: &str) -> Self {
        DriverValue::Text(value.to_string())
    }
}

impl From<String> for DriverValue {
    fn from(value: String) -> Self {
        DriverValue::Text(value)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(value: &[u8]) -> Self {
        DriverValue::Bytes(value.to_vec())
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(value: Vec<u8>) -> Self {
        DriverValue::Bytes(value)
    }
}

impl From<i64> for DriverValue {
    fn from(value: i64) -> Self {
        DriverValue::Int(value)
    }
}

impl From<f64> for DriverValue {
    fn from(value: f64) -> Self {
        DriverValue::Float(value)
    }
}

impl From<bool> for DriverValue {
    fn from(value: bool) -> Self {
        DriverValue::Bool(value)
    }
}

impl From<NaiveDateTime> for DriverValue {
    fn from(value: NaiveDateTime) -> Self {
        DriverValue::DateTime(value)
    }
}

/// Zoned date-times keep their local wall-clock reading; the offset is dropped.
impl<Tz: TimeZone> From<DateTime<Tz>> for DriverValue {
    fn from(value: DateTime<Tz>) -> Self {
        DriverValue::DateTime(value.naive_local())
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(DriverValue::Null, Into::into)
    }
}

/// Read a column type back from a driver value.
pub trait FromDriverValue: Sized {
    fn from_driver_value(value: &DriverValue) -> Result<Self>;

    /// Decode `value` into `self`.
    ///
    /// On error `self` is left as it was.
    fn scan(&mut self, value: &DriverValue) -> Result<()> {
        *self = Self::from_driver_value(value)?;
        Ok(())
    }
}

/// Produce the driver value a column type is stored as.
pub trait ToDriverValue {
    fn to_driver_value(&self) -> Result<DriverValue>;
}
