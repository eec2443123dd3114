//! Both column types embedded in one record, as a persistence layer would
//! hold them.

use ormtypes::{Array, DayTime, DriverValue, FromDriverValue, ToDriverValue};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Shift {
    name: String,
    staff_ids: Array<u32>,
    starts_at: DayTime,
    ends_at: Option<DayTime>,
}

#[test]
fn record_json_shape() {
    let shift = Shift {
        name: "early".to_string(),
        staff_ids: Array::from(vec![4, 2]),
        starts_at: DayTime::new(6, 0, 0, 0),
        ends_at: Some(DayTime::new(14, 30, 0, 0)),
    };
    let value = serde_json::to_value(&shift).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "early",
            "staff_ids": [4, 2],
            "starts_at": "06:00:00",
            "ends_at": "14:30:00"
        })
    );
    let back: Shift = serde_json::from_value(value).unwrap();
    assert_eq!(back, shift);
}

#[test]
fn record_null_columns() {
    let shift: Shift = serde_json::from_value(json!({
        "name": "late",
        "staff_ids": null,
        "starts_at": "22:00",
        "ends_at": null
    }))
    .unwrap();
    assert!(shift.staff_ids.is_empty());
    assert_eq!(shift.starts_at, DayTime::new(22, 0, 0, 0));
    assert_eq!(shift.ends_at, None);
}

#[test]
fn record_null_time_keeps_zero_value() {
    let shift: Shift = serde_json::from_str(
        r#"{"name": "open", "staff_ids": [1], "starts_at": null, "ends_at": "09:00"}"#,
    )
    .unwrap();
    assert_eq!(shift.starts_at, DayTime::default());
    assert_eq!(shift.ends_at, Some(DayTime::new(9, 0, 0, 0)));
}

#[test]
fn record_numeric_time_is_lenient() {
    let shift: Shift = serde_json::from_value(json!({
        "name": "noon",
        "staff_ids": [],
        "starts_at": 12,
        "ends_at": null
    }))
    .unwrap();
    assert_eq!(shift.starts_at.components(), (12, 0, 0, 0));
}

#[test]
fn record_row_scan() {
    let row = [
        DriverValue::from(b"[7,1]".to_vec()),
        DriverValue::from("08:15:00"),
    ];
    let mut staff_ids = Array::<u32>::default();
    let mut starts_at = DayTime::MIDNIGHT;
    staff_ids.scan(&row[0]).unwrap();
    starts_at.scan(&row[1]).unwrap();

    let shift = Shift {
        name: "row".to_string(),
        staff_ids,
        starts_at,
        ends_at: None,
    };
    assert_eq!(shift.staff_ids.to_driver_value().unwrap(), DriverValue::from("[7,1]"));
    assert_eq!(shift.starts_at.to_driver_value().unwrap(), row[1]);
}
