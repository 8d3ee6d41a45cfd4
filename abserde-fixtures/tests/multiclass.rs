//! Contract tests for the module generated from `schemas/multiclass.abs`.

use abserde_core::ParseErrorKind;
use abserde_fixtures::multiclass::{self, Classes, Error, Record, Test, Test2};
use serde_json::json;

fn test2() -> Test2 {
    Test2::new("Will".to_string(), 30, Test::new(5, 2))
}

#[test]
fn test_init() {
    let t = Test::new(5, 2);
    assert_eq!(t.room, 5);
    assert_eq!(t.floor, 2);

    let t2 = Test2::new("Will".to_string(), 30, t.clone());
    assert_eq!(t2.name, "Will");
    assert_eq!(t2.age, 30);
    assert_eq!(t2.foo, t);
}

#[test]
fn test_from_args() {
    let t = Test::from_args(vec![json!(5), json!(2)]).expect("Failed to construct");
    assert_eq!(t, Test::new(5, 2));

    let err = Test::from_args(vec![json!("fail!"), json!(5.5)]).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { ref key, .. } if key == "room"));

    let err = Test2::from_args(vec![json!(6), json!(6), json!(6)]).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { ref key, .. } if key == "name"));

    let err = Test::from_args(vec![json!(1)]).unwrap_err();
    assert!(matches!(
        err,
        Error::Arity {
            expected: 2,
            found: 1,
            ..
        }
    ));
    assert_eq!(err.to_string(), "Test() takes 2 arguments but 1 were given");
}

#[test]
fn test_loads() {
    let t = Test::loads(r#"{"room": 4, "floor": 10}"#).expect("Failed to load");
    assert_eq!(t, Test::new(4, 10));

    let err = Test::loads(r#"{"invalid":"#).unwrap_err();
    assert!(err.is_syntax());

    let err = Test::loads(r#"{"room": "invalid", "floor": 5}"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::Data);

    let t2 = Test2::loads(r#"{"age": 4, "name": "Will", "foo": {"room": 4, "floor": 10}}"#)
        .expect("Failed to load");
    assert_eq!(t2.name, "Will");
    assert_eq!(t2.age, 4);
    assert_eq!(t2.foo, t);

    let err = Test2::loads(r#"{"age": 4, "name": 5, "foo": {"room": null, "floor": 10}}"#)
        .unwrap_err();
    assert!(!err.is_syntax());
}

#[test]
fn test_loads_bytes() {
    let t = Test::loads(br#"{"room": 1, "floor": 2}"#).expect("Failed to load");
    assert_eq!(t, Test::new(1, 2));
}

#[test]
fn test_dumps() {
    let t = Test::new(5, 2);
    assert_eq!(t.dumps().expect("Failed to dump"), r#"{"room":5,"floor":2}"#);
    assert_eq!(
        t.dumps_bytes().expect("Failed to dump"),
        br#"{"room":5,"floor":2}"#.to_vec()
    );
    assert_eq!(
        test2().dumps().expect("Failed to dump"),
        r#"{"name":"Will","age":30,"foo":{"room":5,"floor":2}}"#
    );
}

#[test]
fn test_round_trip() {
    let t = Test::new(-7, i64::MAX);
    let back = Test::loads(t.dumps().expect("Failed to dump")).expect("Failed to load");
    assert_eq!(back, t);

    let t2 = test2();
    let back = Test2::loads(t2.dumps_bytes().expect("Failed to dump")).expect("Failed to load");
    assert_eq!(back, t2);
}

#[test]
fn test_access() {
    let mut t = Test::new(5, 2);
    assert_eq!(t.get("room").expect("room"), json!(5));

    t.set("floor", json!(10)).expect("Failed to set");
    assert_eq!(t.floor, 10);

    t.room = 100;
    assert_eq!(t.get("room").expect("room"), json!(100));

    let err = t.get("nope").unwrap_err();
    assert!(err.is_attribute());
    assert_eq!(err.to_string(), "No such item nope");

    let err = t.set("nope", json!(1)).unwrap_err();
    assert!(err.is_attribute());

    let err = t.set("floor", json!("ten")).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
    assert_eq!(t.floor, 10);
}

#[test]
fn test_mapping_protocol() {
    let t2 = test2();
    assert_eq!(t2.len(), 3);
    assert!(!t2.is_empty());
    assert!(t2.contains_key("foo"));
    assert!(!t2.contains_key("bar"));
    assert_eq!(Test2::FIELDS.to_vec(), vec!["name", "age", "foo"]);
    assert_eq!(Test2::NAME, "Test2");

    let items = t2.items().expect("Failed to list items");
    assert_eq!(
        items,
        vec![
            ("name", json!("Will")),
            ("age", json!(30)),
            ("foo", json!({"room": 5, "floor": 2})),
        ]
    );
}

#[test]
fn test_display_and_debug() {
    let t = Test::new(5, 2);
    assert_eq!(t.to_string(), t.dumps().expect("Failed to dump"));
    assert_eq!(format!("{t:?}"), "Test(room=5, floor=2)");
    assert_eq!(
        format!("{:?}", test2()),
        r#"Test2(name="Will", age=30, foo=Test(room=5, floor=2))"#
    );
}

#[test]
fn test_module_loads_dispatch() {
    let loaded = multiclass::loads(r#"{"room": 1, "floor": 2}"#).expect("Failed to load");
    assert_eq!(loaded, Classes::Test(Test::new(1, 2)));
    assert_eq!(loaded.name(), "Test");

    let loaded = multiclass::loads(r#"{"name": "Will", "age": 30, "foo": {"room": 5, "floor": 2}}"#)
        .expect("Failed to load");
    assert_eq!(loaded, Classes::Test2(test2()));

    // Test is tried first and unknown keys are ignored.
    let loaded = multiclass::loads(r#"{"room": 1, "floor": 2, "name": "x"}"#)
        .expect("Failed to load");
    assert_eq!(loaded.name(), "Test");

    let err = multiclass::loads(r#"{"nothing": true}"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::NoMatch);
    assert!(err.to_string().contains("Test, Test2"));

    let err = multiclass::loads("not json").unwrap_err();
    assert!(err.is_syntax());

    let via_classes = Classes::loads(r#"{"room": 3, "floor": 4}"#).expect("Failed to load");
    assert_eq!(via_classes, Classes::from(Test::new(3, 4)));
}

#[test]
fn test_module_dumps_dispatch() {
    let t2 = test2();
    assert_eq!(
        multiclass::dumps(&t2).expect("Failed to dump"),
        t2.dumps().expect("Failed to dump")
    );

    let classes = Classes::from(Test::new(5, 2));
    assert_eq!(
        multiclass::dumps(&classes).expect("Failed to dump"),
        r#"{"room":5,"floor":2}"#
    );
    assert_eq!(classes.to_string(), r#"{"room":5,"floor":2}"#);

    let err = multiclass::dumps(&42_i32).unwrap_err();
    assert!(matches!(err, Error::UnsupportedType { .. }));
}

#[test]
fn test_classes_serialize_untagged() {
    let classes = Classes::Test2(test2());
    assert_eq!(
        serde_json::to_string(&classes).expect("Failed to serialize"),
        r#"{"name":"Will","age":30,"foo":{"room":5,"floor":2}}"#
    );
}

#[test]
fn test_module_constants() {
    assert_eq!(multiclass::MODULE_NAME, "multiclass");
    assert_eq!(multiclass::RECORDS.to_vec(), vec!["Test", "Test2"]);
    assert_eq!(multiclass::FUNCTIONS.to_vec(), vec!["loads", "dumps"]);
}
