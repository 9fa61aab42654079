use rpc_struct::{Map, Value};

// Assigning to an existing key used to append a second ordered entry while
// the lookup side still held one, so the enumeration grew on every update.
#[test]
fn test() {
    let mut map = Map::new();
    map.insert("a".to_owned(), Value::from(1));
    for i in 0..10 {
        map.insert("a".to_owned(), Value::from(i));
    }

    assert_eq!(map.len(), 1);
    assert_eq!(map.iter().count(), 1);
    assert_eq!(map.enumerate().count(), 1);
    assert_eq!(map["a"], 9);
}
