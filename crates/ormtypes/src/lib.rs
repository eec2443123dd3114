//! Column value types for ORM persistence.
//!
//! This crate provides two value types that a persistence layer stores and
//! loads through a narrow conversion contract:
//! - [`Array<T>`]: an ordered sequence of integers or strings kept in a JSON
//!   array column
//! - [`DayTime`]: a time of day kept in a `TIME` column (or `TEXT` where the
//!   dialect has no `TIME` type)
//!
//! Both read from a [`DriverValue`] via [`FromDriverValue`], write one via
//! [`ToDriverValue`], and serialize to JSON through `serde`.
//!
//! # Example
//!
//! ```
//! use ormtypes::{Array, DayTime, DriverValue, FromDriverValue, ToDriverValue};
//!
//! let ids: Array<i64> = Array::from_driver_value(&DriverValue::Null).unwrap();
//! assert!(ids.is_empty());
//! assert_eq!(ids.to_driver_value().unwrap(), DriverValue::from("[]"));
//!
//! let t = DayTime::from_driver_value(&DriverValue::from("18:45:00")).unwrap();
//! assert_eq!(t.components(), (18, 45, 0, 0));
//! assert_eq!(serde_json::to_string(&t).unwrap(), r#""18:45:00""#);
//! ```

pub mod array;
pub mod day_time;
pub mod dialect;
pub mod error;
pub mod value;

pub use array::{Array, Element};
pub use day_time::DayTime;
pub use dialect::{ColumnType, Dialect};
pub use error::{Error, Result};
pub use value::{DriverValue, FromDriverValue, ToDriverValue};
