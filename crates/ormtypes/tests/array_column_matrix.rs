use ormtypes::{Array, DriverValue, Error, FromDriverValue, ToDriverValue};
use proptest::prelude::*;
use serde_json::json;

fn decode<T: ormtypes::Element>(value: DriverValue) -> Result<Array<T>, Error> {
    Array::from_driver_value(&value)
}

#[test]
fn absent_and_empty_sources_matrix() {
    let cases = [
        DriverValue::Null,
        DriverValue::from(""),
        DriverValue::from(Vec::<u8>::new()),
        DriverValue::from("null"),
        DriverValue::from("[]"),
    ];
    for value in cases {
        let arr: Array<i32> = decode(value.clone()).unwrap_or_else(|e| panic!("{value:?}: {e}"));
        assert!(arr.is_empty(), "{value:?}");
    }
}

#[test]
fn encode_matrix() {
    assert_eq!(
        Array::<u64>::new().to_driver_value().unwrap(),
        DriverValue::from("[]")
    );
    assert_eq!(
        Array::from(vec![-1i8, 0, 127]).to_driver_value().unwrap(),
        DriverValue::from("[-1,0,127]")
    );
    assert_eq!(
        Array::from(vec!["a\"b".to_string(), "ü".to_string()])
            .to_driver_value()
            .unwrap(),
        DriverValue::from(r#"["a\"b","ü"]"#)
    );
}

#[test]
fn malformed_encoding_matrix() {
    for text in ["[1,", "{\"a\":1}", "1", "[1.5]", "[\"1\"]", "[null]"] {
        let err = decode::<i64>(DriverValue::from(text)).unwrap_err();
        assert!(matches!(err, Error::MalformedEncoding(_)), "{text}");
    }
    let err = decode::<String>(DriverValue::from("[1]")).unwrap_err();
    assert!(matches!(err, Error::MalformedEncoding(_)));
}

#[test]
fn element_order_is_preserved() {
    let arr: Array<String> = decode(DriverValue::from(r#"["z","a","m"]"#)).unwrap();
    assert_eq!(arr.into_inner(), vec!["z", "a", "m"]);
}

#[test]
fn membership() {
    let arr = Array::from(vec![1i32, 3, 5]);
    assert!(arr.contains(&3));
    assert!(!arr.contains(&4));
}

#[test]
fn json_layer_matrix() {
    let arr = Array::from(vec![10u32, 20]);
    assert_eq!(serde_json::to_value(&arr).unwrap(), json!([10, 20]));
    assert_eq!(arr.marshal_json().unwrap(), b"[10,20]".to_vec());

    let mut target = Array::from(vec![1u32]);
    target.unmarshal_json(b"[4,5,6]").unwrap();
    assert_eq!(target.into_inner(), vec![4, 5, 6]);

    let mut target = Array::from(vec![1u32]);
    assert!(target.unmarshal_json(b"[-4]").is_err());
    assert_eq!(target.into_inner(), vec![1]);

    let from_null: Array<u32> = serde_json::from_value(json!(null)).unwrap();
    assert!(from_null.is_empty());
}

proptest! {
    #[test]
    fn prop_int_round_trip(items in proptest::collection::vec(any::<i64>(), 0..32)) {
        let arr = Array::from(items.clone());
        let stored = arr.to_driver_value().unwrap();
        let back: Array<i64> = decode(stored).unwrap();
        prop_assert_eq!(back.into_inner(), items);
    }

    #[test]
    fn prop_string_round_trip(items in proptest::collection::vec(".*", 0..16)) {
        let arr = Array::from(items.clone());
        let stored = arr.to_driver_value().unwrap();
        let back: Array<String> = decode(stored).unwrap();
        prop_assert_eq!(back.into_inner(), items);
    }
}
