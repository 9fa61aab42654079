use rpc_struct::{Map, Value};

#[test]
fn test_map_order() {
    // Wire order, not sorted order
    const EXPECTED: &[&str] = &["b", "a", "c"];

    let v: Value = serde_json::from_str(r#"{"b":null,"a":null,"c":null}"#).unwrap();
    let keys: Vec<_> = v.as_struct().unwrap().keys().collect();
    assert_eq!(keys, EXPECTED);
}

#[test]
fn test_update_keeps_slot() {
    let mut map: Map = serde_json::from_str(r#"{"b":1,"a":2,"c":3}"#).unwrap();
    map.insert("b".to_owned(), Value::from("one"));
    map.insert("c".to_owned(), Value::from("three"));

    let keys: Vec<_> = map.keys().collect();
    assert_eq!(keys, ["b", "a", "c"]);
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"b":"one","a":2,"c":"three"}"#);
}
