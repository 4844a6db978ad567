#![cfg(test)]

use super::*;
use crate::collections::contiguous::List;
use crate::collections::hash::{HashFn, IdentityBuildHasher, KeyValuePair};
use crate::error::KeyNotFound;
use crate::util::drop::CountedDrop;
use crate::util::panic::assert_panics;

fn sample() -> Map<String, i32> {
    Map::from([("a".to_string(), 1), ("b".to_string(), 2)])
}

#[test]
fn test_at() {
    let map = sample();

    assert_eq!(map.at("a"), Ok(&1));
    assert_eq!(map.at("b"), Ok(&2));
    assert_eq!(map.at("c"), Err(KeyNotFound { param: "key" }));
    assert_eq!(
        map.at("c").unwrap_err().to_string(),
        "No entry found for the provided `key`!"
    );
}

#[test]
fn test_index() {
    let map = sample();
    assert_eq!(map["a"], 1);
    assert_panics!({ map["c"]; }, "Indexing with a missing key should panic.");
}

#[test]
fn test_add_and_insert() {
    let mut map: Map<&str, u32> = Map::new();

    assert!(map.add("one", 1));
    assert!(!map.add("one", 10), "Adding an existing key should be rejected.");
    assert_eq!(map.at("one"), Ok(&1), "A rejected add shouldn't change the value.");

    assert_eq!(map.insert("one", 11), Some(1), "Inserting should return the previous value.");
    assert_eq!(map.insert("two", 2), None);
    assert_eq!(map.at("one"), Ok(&11));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_find_and_try_get() {
    let map = sample();

    assert_eq!(map.find("b"), Ok(&KeyValuePair::new("b".to_string(), 2)));
    assert!(map.find("z").is_err());
    assert_eq!(map.try_get_value("a"), Some(&1));
    assert_eq!(map.try_get_value("z"), None);
}

#[test]
fn test_at_mut_and_values_mut() {
    let mut map = sample();

    *map.at_mut("a").expect("Key a exists.") += 10;
    assert_eq!(map["a"], 11);
    assert!(map.at_mut("z").is_err());

    for value in map.values_mut() {
        *value *= 2;
    }
    assert_eq!(map["a"], 22);
    assert_eq!(map["b"], 4);
}

#[test]
fn test_remove_and_take() {
    let counter = CountedDrop::new();
    let mut map: Map<u8, CountedDrop> = Map::new();
    map.add(1, counter.clone());
    map.add(2, counter.clone());

    assert!(map.remove(&1));
    assert!(!map.remove(&1), "Removing a missing key should fail.");
    assert_eq!(counter.count(), 1, "Removing should drop the value.");

    let taken = map.take(&2);
    assert!(taken.is_some());
    assert_eq!(counter.count(), 1, "Taking should hand the value back instead of dropping it.");
    drop(taken);
    assert_eq!(counter.count(), 2);
    assert!(map.is_empty());
}

#[test]
fn test_contains() {
    let map = sample();

    assert!(map.contains_key("a"));
    assert!(!map.contains_key("c"));
    assert!(map.contains_value(&2));
    assert!(!map.contains_value(&3));
}

#[test]
fn test_keys_and_values() {
    let mut map: Map<u32, char, IdentityBuildHasher> = Map::with_cap(8);
    map.extend([(2, 'b'), (10, 'j'), (1, 'a')]);

    assert_eq!(map.keys().copied().collect::<List<_>>(), [2, 10, 1]);
    assert_eq!(map.values().copied().collect::<List<_>>(), ['b', 'j', 'a']);
    assert_eq!(map.keys().len(), 3);
    assert_eq!(
        map.into_iter().collect::<List<_>>(),
        [(2, 'b'), (10, 'j'), (1, 'a')]
    );
}

#[test]
fn test_extend_overwrites() {
    let mut map = sample();
    map.extend([("a".to_string(), 5), ("c".to_string(), 3)]);

    assert_eq!(map.len(), 3);
    assert_eq!(map["a"], 5, "Extending should overwrite existing values.");
}

#[test]
fn test_hash_fn() {
    fn by_length(key: &String) -> u64 {
        key.len() as u64
    }

    let mut map: Map<String, i32, HashFn<String>> = Map::with_hasher(HashFn(by_length));
    map.add("ab".to_string(), 1);
    map.add("cd".to_string(), 2);

    assert_eq!(map.len(), 2, "Colliding keys should both be kept.");
    assert_eq!(map.at(&"cd".to_string()), Ok(&2));
    assert!(!map.contains_key(&"abc".to_string()));
}

#[test]
fn test_clone_and_eq() {
    let map = sample();
    let mut copy = map.clone();
    assert_eq!(copy, map);

    copy.insert("a".to_string(), 100);
    assert_ne!(copy, map, "The copy should be independent of the original.");
    assert_eq!(map["a"], 1);
}

#[test]
fn test_display() {
    let mut map: Map<u32, &str, IdentityBuildHasher> = Map::with_cap(4);
    map.add(1, "one");
    map.add(2, "two");

    assert_eq!(map.to_string(), "[1: one, 2: two]");
    assert_eq!(format!("{map:?}"), r#"{1: "one", 2: "two"}"#);
    assert_eq!(Map::<u32, u32>::new().to_string(), "[]");
}

#[test]
fn test_clear() {
    let mut map = sample();
    let cap = map.cap();

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.cap(), cap);
    assert!(map.at("a").is_err());

    map.add("a".to_string(), 7);
    assert_eq!(map["a"], 7);
}
