#![feature(test)]

extern crate test;

use rpc_struct::{Map, UntypedMap, Value};
use test::Bencher;

const MEMBERS: usize = 64;

fn member_names() -> Vec<String> {
    (0..MEMBERS).map(|i| format!("member{}", i)).collect()
}

fn populated() -> Map {
    member_names()
        .into_iter()
        .enumerate()
        .map(|(i, name)| (name, Value::from(i as i32)))
        .collect()
}

#[bench]
fn bench_add(b: &mut Bencher) {
    let names = member_names();
    b.iter(|| {
        let mut map = Map::with_capacity(names.len());
        for name in &names {
            map.add(name.clone(), Value::Nil).unwrap();
        }
        map
    });
}

#[bench]
fn bench_lookup(b: &mut Bencher) {
    let map = populated();
    let names = member_names();
    b.iter(|| {
        for name in &names {
            test::black_box(map.get(name.as_str()));
        }
    });
}

#[bench]
fn bench_untyped_lookup(b: &mut Bencher) {
    let map = populated();
    let facet: &dyn UntypedMap = &map;
    let keys: Vec<Value> = member_names().into_iter().map(Value::from).collect();
    b.iter(|| {
        for key in &keys {
            test::black_box(facet.get(key).unwrap());
        }
    });
}

#[bench]
fn bench_iterate(b: &mut Bencher) {
    let map = populated();
    b.iter(|| map.iter().count());
}

#[bench]
fn bench_enumerate(b: &mut Bencher) {
    let map = populated();
    b.iter(|| {
        let mut cursor = map.enumerate();
        let mut n = 0;
        while cursor.move_next() {
            test::black_box(cursor.current().unwrap());
            n += 1;
        }
        n
    });
}

#[bench]
fn bench_remove_front(b: &mut Bencher) {
    let map = populated();
    let names = member_names();
    b.iter(|| {
        let mut map = map.clone();
        for name in &names {
            map.remove(name.as_str());
        }
        map
    });
}
