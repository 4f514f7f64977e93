use r#macro::limited;
use std::panic::catch_unwind;
use std::thread::sleep;
use std::time::{Duration, Instant};
use value::{Kind, Record, Reflect, Value, ValueError};

#[derive(Reflect, Debug, PartialEq)]
struct Epoch(i64);

#[derive(Reflect, Debug, PartialEq)]
struct Label<T>(T);

#[derive(Record, Debug, Default, PartialEq)]
struct Wire {
    name: String,
    r#type: Option<String>,
    seconds: u32,
}

#[derive(Record, Debug, PartialEq)]
struct Pair(i8, String);

#[derive(Record, Debug, PartialEq)]
struct Empty;

#[test]
fn newtype_keeps_inner_kind() {
    assert_eq!(Epoch::type_info().kind(), Kind::Int);
    assert_ne!(Epoch::type_info(), i64::type_info());
    assert_eq!(Epoch(7).to_value(), Value::int(7));
    assert_eq!(Epoch::from_value(Value::int(7)), Ok(Epoch(7)));
}

#[test]
fn generic_newtype() {
    assert_eq!(Label::<String>::type_info().kind(), Kind::Text);
    assert_ne!(Label::<String>::type_info(), Label::<char>::type_info());
    assert_eq!(
        Label::<String>::from_value(Value::text("a")),
        Ok(Label("a".to_string()))
    );
}

#[test]
fn newtype_around_optional_keeps_element() {
    #[derive(Reflect)]
    struct Maybe(Option<u8>);

    assert_eq!(Maybe::type_info().kind(), Kind::Optional);
    assert_eq!(Maybe::type_info().element(), Some(u8::type_info()));
}

#[test]
fn record_shape() {
    let wire = Wire::default();
    let fields = wire.fields();
    assert_eq!(wire.field_count(), 3);
    assert_eq!(
        fields.iter().map(|f| f.name).collect::<Vec<_>>(),
        vec!["name", "type", "seconds"]
    );
    assert_eq!(fields[1].ty, Option::<String>::type_info());
    assert_eq!(Wire::type_info().kind(), Kind::Record);
}

#[test]
fn record_field_access() {
    let mut wire = Wire {
        name: "David".to_string(),
        r#type: None,
        seconds: 5,
    };
    assert_eq!(wire.field(0), Some(Value::text("David")));
    assert_eq!(wire.field(1), Some(Value::none()));
    assert_eq!(wire.field(3), None);

    wire.set_field(2, Value::int(9)).unwrap();
    assert_eq!(wire.seconds, 9);

    assert!(wire.set_field(2, Value::int(-1)).is_err());
    assert_eq!(wire.seconds, 9);

    assert_eq!(
        wire.set_field(5, Value::int(1)),
        Err(ValueError::NoField {
            record: std::any::type_name::<Wire>(),
            index: 5
        })
    );
}

#[test]
fn tuple_and_unit_records() {
    let mut pair = Pair(1, "one".to_string());
    assert_eq!(pair.fields()[0].name, "0");
    pair.set_field(0, Value::int(2)).unwrap();
    assert_eq!(pair, Pair(2, "one".to_string()));

    assert_eq!(Empty.field_count(), 0);
    assert_eq!(Empty::from_value(Empty.to_value()), Ok(Empty));
}

#[test]
fn record_as_value_requires_same_type() {
    let pair = Pair(3, "three".to_string());
    let value = pair.to_value();
    assert_eq!(Pair::from_value(value.clone()), Ok(Pair(3, "three".to_string())));
    assert!(Wire::from_value(value).is_err());
}

#[limited(s = 5)]
fn mapped_within_limit() {
    sleep(Duration::from_millis(50));
}

#[limited(ms = 100)]
fn sleeps_past_limit() {
    sleep(Duration::from_secs(5));
}

#[limited(s = 20)]
fn fails_with_field_error() {
    panic!("{}", ValueError::NoField { record: "Wire", index: 4 });
}

#[limited]
fn returns_without_limit() {}

#[test]
fn finishes_within_limit() {
    mapped_within_limit();
    returns_without_limit();
}

#[test]
fn exceeded_limit_panics_with_elapsed_time() {
    let payload = catch_unwind(sleeps_past_limit).unwrap_err();
    let message = payload.downcast_ref::<String>().cloned().unwrap_or_default();
    assert!(message.contains("exceeded the limit of 100ms"), "{message}");
}

#[test]
fn body_panic_keeps_payload_and_returns_early() {
    let start = Instant::now();
    let payload = catch_unwind(fails_with_field_error).unwrap_err();

    let message = payload.downcast_ref::<String>().cloned().unwrap_or_default();
    assert_eq!(message, "record Wire has no field at position 4");
    assert!(start.elapsed() < Duration::from_secs(20));
}

#[limited(ms = 500)]
#[test]
#[should_panic(expected = "limited body")]
fn test_attributes_move_to_wrapper() {
    panic!("limited body");
}
