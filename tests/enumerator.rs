use rpc_struct::error::{Category, ErrorCode};
use rpc_struct::{Map, Value};

fn sample() -> Map {
    let mut map = Map::new();
    map.add("a".to_owned(), Value::from(1)).unwrap();
    map.add("b".to_owned(), Value::from(2)).unwrap();
    map.add("c".to_owned(), Value::from(3)).unwrap();
    map
}

#[test]
fn test_read_before_first_advance() {
    let map = sample();
    let cursor = map.enumerate();

    let err = cursor.current().unwrap_err();
    assert_eq!(err.classify(), Category::InvalidState);
    assert_eq!(*err.code(), ErrorCode::EnumerationNotStarted);
    assert!(cursor.key().unwrap_err().is_invalid_state());
    assert!(cursor.value().unwrap_err().is_invalid_state());
}

#[test]
fn test_walk_in_insertion_order() {
    let map = sample();
    let mut cursor = map.enumerate();

    let mut seen = Vec::new();
    while cursor.move_next() {
        seen.push(cursor.current().unwrap());
    }
    assert_eq!(
        seen,
        [
            ("a", &Value::from(1)),
            ("b", &Value::from(2)),
            ("c", &Value::from(3)),
        ]
    );
}

#[test]
fn test_read_after_exhaustion() {
    let map = sample();
    let mut cursor = map.enumerate();
    for _ in 0..3 {
        assert!(cursor.move_next());
    }
    assert_eq!(cursor.key().unwrap(), "c");

    assert!(!cursor.move_next());
    let err = cursor.current().unwrap_err();
    assert_eq!(*err.code(), ErrorCode::EnumerationFinished);
    assert_eq!(err.to_string(), "enumeration has already finished");

    // stays exhausted
    assert!(!cursor.move_next());
    assert!(cursor.value().unwrap_err().is_invalid_state());
}

#[test]
fn test_empty_map() {
    let map: Map = Map::new();
    let mut cursor = map.enumerate();
    assert!(!cursor.move_next());
    assert_eq!(*cursor.current().unwrap_err().code(), ErrorCode::EnumerationFinished);
}

#[test]
fn test_reset() {
    let map = sample();
    let mut cursor = map.enumerate();
    while cursor.move_next() {}

    cursor.reset();
    assert!(cursor.current().unwrap_err().is_invalid_state());
    assert!(cursor.move_next());
    assert_eq!(cursor.key().unwrap(), "a");
}

#[test]
fn test_independent_cursors() {
    let map = sample();
    let mut first = map.enumerate();
    assert!(first.move_next());
    assert!(first.move_next());

    let mut second = map.enumerate();
    assert!(second.current().is_err());
    assert!(second.move_next());

    assert_eq!(first.key().unwrap(), "b");
    assert_eq!(second.key().unwrap(), "a");
}

#[test]
fn test_as_iterator() {
    let map = sample();
    let cursor = map.enumerate();
    assert_eq!(cursor.len(), 3);

    let keys: Vec<&str> = cursor.map(|(key, _)| key).collect();
    assert_eq!(keys, ["a", "b", "c"]);

    let mut cursor = map.enumerate();
    cursor.next();
    assert_eq!(cursor.len(), 2);
    assert_eq!(cursor.value().unwrap(), &Value::from(1));
    assert_eq!(cursor.by_ref().count(), 2);
    assert_eq!(cursor.next(), None);
}

#[test]
fn test_order_follows_updates_and_removals() {
    let mut map = sample();
    map.insert("a".to_owned(), Value::from(9));
    map.remove("b");

    let pairs: Vec<(&str, &Value)> = map.enumerate().collect();
    assert_eq!(pairs, [("a", &Value::from(9)), ("c", &Value::from(3))]);
}
