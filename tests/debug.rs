use rpc_struct::{Map, Value};

#[test]
fn value_nil() {
    assert_eq!(format!("{:?}", Value::Nil), "Nil");
}

#[test]
fn value_scalars() {
    assert_eq!(format!("{:?}", Value::from(true)), "Bool(true)");
    assert_eq!(format!("{:?}", Value::from(1)), "Int(1)");
    assert_eq!(format!("{:?}", Value::from(1i64)), "Int64(1)");
    assert_eq!(format!("{:?}", Value::from(1.0)), "Double(1.0)");
    assert_eq!(format!("{:?}", Value::from("s")), "String(\"s\")");
    assert_eq!(format!("{:?}", Value::Base64(vec![0, 255])), "Base64([0, 255])");
}

#[test]
fn value_array() {
    assert_eq!(format!("{:?}", Value::Array(Vec::new())), "Array([])");
}

#[test]
fn value_struct() {
    assert_eq!(format!("{:?}", Value::Struct(Map::new())), "Struct({})");

    let map: Map = [("b", Value::from(2)), ("a", Value::Nil)].into();
    assert_eq!(
        format!("{:?}", Value::Struct(map)),
        "Struct({\"b\": Int(2), \"a\": Nil})",
    );
}

#[test]
fn error() {
    let mut map = Map::new();
    map.add("a".to_owned(), Value::Nil).unwrap();
    let err = map.add("a".to_owned(), Value::Nil).unwrap_err();
    let expected = "Error(\"duplicate key `a`\")";
    assert_eq!(format!("{:?}", err), expected);
}

#[test]
fn error_code() {
    let err = Map::<Value>::new().try_get("x").unwrap_err();
    assert_eq!(format!("{:?}", err.code()), "KeyNotFound(\"x\")");

    let err = Map::<Value>::new().enumerate().current().unwrap_err();
    assert_eq!(format!("{:?}", err.code()), "EnumerationNotStarted");
}

#[test]
fn enumerator_and_sync_root() {
    let map: Map<i32> = [("a", 1)].into();
    assert_eq!(format!("{:?}", map.sync_root()), "SyncRoot");
    assert!(format!("{:?}", map.enumerate()).starts_with("Enumerator"));
}

#[test]
fn indented() {
    let map: Map = [("a", Value::from(1))].into();
    let expected = "{\n    \"a\": Int(\n        1,\n    ),\n}";
    assert_eq!(format!("{:#?}", map), expected);
}
