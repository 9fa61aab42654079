use indoc::indoc;
use rpc_struct::{Map, Value};
use serde::{Deserialize, Serialize};

fn fault() -> Map {
    let mut map = Map::new();
    map.add("faultCode".to_owned(), Value::from(4)).unwrap();
    map.add("faultString".to_owned(), Value::from("Too many parameters."))
        .unwrap();
    map
}

#[test]
fn test_serialize_in_insertion_order() {
    let mut map = Map::new();
    map.add("zeta".to_owned(), Value::from(1)).unwrap();
    map.add("alpha".to_owned(), Value::from(2)).unwrap();
    map.add("mid".to_owned(), Value::Nil).unwrap();
    map.insert("zeta".to_owned(), Value::from(3));

    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, r#"{"zeta":3,"alpha":2,"mid":null}"#);
}

#[test]
fn test_serialize_nested_pretty() {
    let mut outer = Map::new();
    outer.add("ok".to_owned(), Value::from(false)).unwrap();
    outer.add("fault".to_owned(), Value::Struct(fault())).unwrap();
    outer
        .add(
            "tags".to_owned(),
            Value::from(vec![Value::from("a"), Value::from(1.5)]),
        )
        .unwrap();

    let expected = indoc! {r#"
        {
          "ok": false,
          "fault": {
            "faultCode": 4,
            "faultString": "Too many parameters."
          },
          "tags": [
            "a",
            1.5
          ]
        }"#};
    assert_eq!(serde_json::to_string_pretty(&outer).unwrap(), expected);
}

#[test]
fn test_deserialize_keeps_wire_order() {
    let map: Map = serde_json::from_str(r#"{"b":null,"a":1,"c":{"y":2,"x":3}}"#).unwrap();

    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys, ["b", "a", "c"]);

    let nested = map["c"].as_struct().unwrap();
    let nested_keys: Vec<&String> = nested.keys().collect();
    assert_eq!(nested_keys, ["y", "x"]);
}

#[test]
fn test_deserialize_value_types() {
    let map: Map = serde_json::from_str(
        r#"{"int":7,"neg":-7,"big":1099511627776,"double":2.5,"s":"x","nil":null,"list":[true]}"#,
    )
    .unwrap();

    assert_eq!(map["int"], Value::Int(7));
    assert_eq!(map["neg"], Value::Int(-7));
    assert_eq!(map["big"], Value::Int64(1 << 40));
    assert_eq!(map["double"], Value::Double(2.5));
    assert_eq!(map["s"], "x");
    assert!(map["nil"].is_nil());
    assert_eq!(map["list"], Value::Array(vec![Value::Bool(true)]));
}

#[test]
fn test_deserialize_rejects_out_of_range_integer() {
    let err = serde_json::from_str::<Map>(r#"{"n":18446744073709551615}"#).unwrap_err();
    assert!(err.to_string().contains("an integer that fits in i8"));
}

#[test]
fn test_deserialize_rejects_duplicate_member() {
    let err = serde_json::from_str::<Map>(r#"{"a":1,"b":2,"a":3}"#).unwrap_err();
    assert!(err.to_string().starts_with("duplicate key `a`"));

    let err = serde_json::from_str::<Value>(r#"{"outer":{"x":1,"x":1}}"#).unwrap_err();
    assert!(err.to_string().starts_with("duplicate key `x`"));
}

#[test]
fn test_round_trip() {
    let mut map = fault();
    map.add("detail".to_owned(), Value::Struct(fault())).unwrap();
    map.remove("faultCode");

    let json = serde_json::to_string(&map).unwrap();
    let back: Map = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}

#[derive(Serialize, Deserialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
struct Fault {
    fault_code: i32,
    fault_string: String,
}

#[test]
fn test_marshal_native_struct() {
    let native = Fault {
        fault_code: 4,
        fault_string: "Too many parameters.".to_owned(),
    };

    let json = serde_json::to_string(&native).unwrap();
    let map: Map = serde_json::from_str(&json).unwrap();
    assert_eq!(map, fault());

    let json = serde_json::to_string(&map).unwrap();
    let back: Fault = serde_json::from_str(&json).unwrap();
    assert_eq!(back, native);
}

#[test]
fn test_typed_values() {
    let map: Map<u16> = serde_json::from_str(r#"{"port":8080,"backlog":16}"#).unwrap();
    assert_eq!(map.values().copied().collect::<Vec<_>>(), [8080, 16]);
    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"port":8080,"backlog":16}"#);
}
