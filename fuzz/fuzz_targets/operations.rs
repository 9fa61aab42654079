#![no_main]
use libfuzzer_sys::fuzz_target;
use rpc_struct::Map;

// Replays byte pairs as map operations against a plain vector of pairs and
// checks that both agree on contents and order after every step.
fuzz_target!(|data: &[u8]| {
    let mut map: Map<u8> = Map::new();
    let mut model: Vec<(String, u8)> = Vec::new();

    for op in data.chunks_exact(2) {
        let key = (op[1] % 8).to_string();
        let position = model.iter().position(|(k, _)| *k == key);
        match op[0] % 4 {
            0 => {
                let added = map.add(key.clone(), op[1]);
                match position {
                    Some(_) => assert!(added.unwrap_err().is_duplicate_key()),
                    None => {
                        added.unwrap();
                        model.push((key, op[1]));
                    }
                }
            }
            1 => {
                let previous = map.insert(key.clone(), op[1]);
                match position {
                    Some(i) => {
                        assert_eq!(previous, Some(model[i].1));
                        model[i].1 = op[1];
                    }
                    None => {
                        assert_eq!(previous, None);
                        model.push((key, op[1]));
                    }
                }
            }
            2 => {
                let removed = map.remove(&key);
                assert_eq!(removed, position.map(|i| model.remove(i).1));
            }
            _ => {
                map.clear();
                model.clear();
            }
        }

        assert_eq!(map.len(), model.len());
        assert!(map.iter().map(|(k, v)| (k.clone(), *v)).eq(model.iter().cloned()));
        assert!(map.enumerate().map(|(k, _)| k).eq(model.iter().map(|(k, _)| k.as_str())));
    }

    let mut copied = vec![(String::new(), 0); map.len()];
    map.copy_to(&mut copied, 0).unwrap();
    assert_eq!(copied, model);
    assert_eq!(Map::import(map.export()).unwrap(), map);
});
