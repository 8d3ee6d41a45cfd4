//! Contract tests for the module generated from `schemas/prelude_names.abs`.

use abserde_fixtures::prelude_names::{
    self, AsRef as AsRefRecord, Classes, From as FromRecord, Record, Union1,
};
use serde_json::json;

#[test]
fn test_variant_named_fields() {
    let mut from = FromRecord::new(3, Some("x".to_string()), true);
    assert_eq!(from.None, 3);
    assert_eq!(from.Some.as_deref(), Some("x"));
    assert_eq!(
        from.dumps().expect("Failed to dump"),
        r#"{"None":3,"Some":"x","RECORDS":true}"#
    );

    from.set("Some", json!(null)).expect("Failed to set");
    assert_eq!(from.Some, None);
    assert_eq!(from.get("RECORDS").expect("RECORDS"), json!(true));
    assert_eq!(format!("{from:?}"), "From(None=3, Some=None, RECORDS=true)");
}

#[test]
fn test_record_named_after_traits() {
    let from = FromRecord::new(1, None, false);
    let as_ref = AsRefRecord::new(from.clone(), vec![from.clone()], Union1::From(from.clone()));

    let text = as_ref.dumps().expect("Failed to dump");
    assert_eq!(AsRefRecord::loads(&text).expect("Failed to load"), as_ref);
    assert_eq!(Union1::from(7_i64), Union1::Int(7));
    assert_eq!(Classes::from(from.clone()), Classes::From(from));
}

#[test]
fn test_module_dispatch() {
    let loaded = prelude_names::loads(r#"{"None": 1, "RECORDS": false}"#).expect("Failed to load");
    assert_eq!(loaded.name(), "From");
    assert_eq!(prelude_names::RECORDS.to_vec(), vec!["From", "AsRef"]);
}
