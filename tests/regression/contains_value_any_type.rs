use rpc_struct::{Map, Value};

// Value membership used to compare only string values, so a struct holding
// an int never reported containing it.
#[test]
fn test() {
    let mut map = Map::new();
    map.insert("n".to_owned(), Value::from(42));
    map.insert("flag".to_owned(), Value::from(true));
    map.insert("nested".to_owned(), Value::Array(vec![Value::Nil]));

    assert!(map.contains_value(&42));
    assert!(map.contains_value(&true));
    assert!(map.contains_value(&Value::Array(vec![Value::Nil])));
    assert!(!map.contains_value("42"));
}
