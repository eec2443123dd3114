//! Typed arrays stored as a JSON array column.

use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use ormtypes_util::sort::Sortable;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};
use crate::value::{DriverValue, FromDriverValue, ToDriverValue};

mod sealed {
    pub trait Sealed {}
}

/// Scalar types an [`Array`] may hold: integers of any width and owned strings.
///
/// This trait is sealed.
pub trait Element: sealed::Sealed + Clone + Ord + Serialize + DeserializeOwned {}

macro_rules! impl_element {
    ($($t:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Element for $t {}
        )+
    };
}

impl_element!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, String, Box<str>);

/// An ordered sequence persisted as a JSON array literal.
///
/// A null column reads back as an empty array, and an empty array is written
/// as `[]`, never as null.
///
/// # Example
///
/// ```
/// use ormtypes::{Array, DriverValue, FromDriverValue, ToDriverValue};
///
/// let tags: Array<String> = Array::from_driver_value(&DriverValue::from(r#"["a","b"]"#)).unwrap();
/// assert_eq!(tags.len(), 2);
/// assert!(tags.contains(&"b".to_string()));
///
/// let ids = Array::from(vec![3u32, 1, 2]);
/// assert_eq!(ids.to_driver_value().unwrap(), DriverValue::from("[3,1,2]"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Array<T>(Vec<T>);

impl<T> Array<T> {
    pub fn new() -> Self {
        Array(Vec::new())
    }

    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exchange the elements at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}

impl<T: Element> Array<T> {
    /// Compare the elements at positions `i` and `j` by their natural order.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn compare(&self, i: usize, j: usize) -> Ordering {
        self.0[i].cmp(&self.0[j])
    }

    /// Whether the element at `i` orders strictly before the element at `j`.
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.compare(i, j) == Ordering::Less
    }

    /// Linear membership test.
    pub fn contains(&self, value: &T) -> bool {
        self.0.iter().any(|item| item == value)
    }

    /// Parse a JSON array. The JSON literal `null` gives an empty array; empty
    /// input is an error.
    pub fn from_json_slice(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(Error::MalformedEncoding)
    }

    /// Compact JSON array literal for this sequence.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(&self.0).map_err(Error::Serialize)
    }

    /// JSON bytes for the JSON layer.
    pub fn marshal_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.0).map_err(Error::Serialize)
    }

    /// Replace the contents with the JSON array in `data`.
    ///
    /// On error the current contents are kept.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        *self = Self::from_json_slice(data)?;
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T> Deref for Array<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(value: Vec<T>) -> Self {
        Array(value)
    }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(value: Array<T>) -> Self {
        value.0
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// JSON `null` reads as an empty array, matching the null-column rule.
impl<'de, T: Element> Deserialize<'de> for Array<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<Vec<T>>::deserialize(deserializer).map(|items| Array(items.unwrap_or_default()))
    }
}

impl<T: Element> FromDriverValue for Array<T> {
    fn from_driver_value(value: &DriverValue) -> Result<Self> {
        match value {
            DriverValue::Bytes(bytes) => Self::from_stored_json(bytes),
            other => match other.as_text() {
                Some(text) => Self::from_stored_json(text.as_bytes()),
                None => Ok(Self::new()),
            },
        }
    }
}

impl<T: Element> Array<T> {
    // An empty column value reads as an empty array.
    fn from_stored_json(data: &[u8]) -> Result<Self> {
        if data.is_empty() {
            return Ok(Self::new());
        }
        Self::from_json_slice(data)
    }
}

impl<T: Element> ToDriverValue for Array<T> {
    fn to_driver_value(&self) -> Result<DriverValue> {
        self.to_json_string().map(DriverValue::Text)
    }
}

impl<T: Element> Sortable for Array<T> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn less(&self, i: usize, j: usize) -> bool {
        Array::less(self, i, j)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j);
    }
}
