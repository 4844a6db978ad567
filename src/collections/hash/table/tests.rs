#![cfg(test)]

use std::collections::HashSet as StdHashSet;
use std::hash::BuildHasher;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::collections::contiguous::List;
use crate::collections::hash::{DefaultHashBuilder, IdentityBuildHasher, KeyHasher, KeyStrategy, KeyValuePair, PairKey, TableConfig, ValueKey};
use crate::util::drop::CountedDrop;
use crate::util::hash::ManualHash;
use crate::util::panic::assert_panics;

type IdentityTable<T> = HashTable<T, ValueKey, IdentityBuildHasher>;

fn identity_table(capacity: usize, load_factor: f64) -> IdentityTable<u64> {
    HashTable::with_config(TableConfig { capacity, load_factor }, IdentityBuildHasher)
        .expect("Test configs are valid.")
}

fn collect<T: Copy, X: KeyStrategy<T>, S>(table: &HashTable<T, X, S>) -> List<T> {
    table.iter().copied().collect()
}

#[test]
fn test_duplicate_keys() {
    let mut table: HashTable<&str, ValueKey> = HashTable::new();

    assert!(table.insert("a"));
    assert!(table.insert("b"));
    assert!(!table.insert("a"), "Inserting an existing key should be rejected.");
    assert_eq!(table.len(), 2, "A rejected insert shouldn't change the length.");

    assert_eq!(table.insert_or_reject("b"), Err("b"), "The rejected value should be returned.");
}

#[test]
fn test_load_factor_invariant() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    let mut table: HashTable<u64, ValueKey> = HashTable::with_config(
        TableConfig { capacity: 3, load_factor: 0.6 },
        Default::default(),
    ).expect("Config is valid.");

    for _ in 0..2_000 {
        let old_cap = table.cap();
        table.insert(rng.random_range(0..5_000));

        assert!(
            (table.len() as f64) < table.cap() as f64 * table.load_factor(),
            "The table should always stay below its load factor."
        );
        assert!(
            table.cap() == old_cap || table.cap() == old_cap * 2,
            "The table should only ever grow by doubling."
        );
    }
}

#[test]
fn test_rehash_preserves_entries() {
    let mut table = identity_table(4, 0.75);

    for i in 0..100 {
        table.insert(i * 7);
    }

    assert!(table.cap() >= 128, "The table should have grown to fit all entries.");
    assert_eq!(table.len(), 100);
    for i in 0..100 {
        assert!(table.contains(&(i * 7)), "Entry {} should survive rehashing.", i * 7);
    }
    assert!(!table.contains(&1));
}

#[test]
fn test_erase_then_reinsert() {
    let mut table: HashTable<KeyValuePair<&str, u32>, PairKey> = HashTable::new();
    table.insert(KeyValuePair::new("key", 1));

    assert!(table.erase("key"));
    assert!(!table.erase("key"), "Erasing a missing key should fail.");
    assert!(table.insert(KeyValuePair::new("key", 2)), "Reinserting an erased key should work.");
    assert_eq!(table.get("key").map(|e| e.value), Some(2));
}

#[test]
fn test_chain_survival() {
    let mut table = identity_table(16, 1.0);
    table.extend([0, 16, 32]);

    assert_eq!(table.chain_len(0), 3, "All three keys should share bucket 0.");
    assert_eq!(table.occupied_buckets(), 1);

    assert!(table.erase(&16));
    assert!(table.contains(&0), "The head of the chain should survive a mid-chain erase.");
    assert!(table.contains(&32), "The tail of the chain should survive a mid-chain erase.");
    assert_eq!(table.chain_len(0), 2);
    assert_eq!(table.len(), 2);

    assert!(table.erase(&0));
    assert_eq!(
        collect(&table),
        [32],
        "Erasing the head should move the next entry into the bucket."
    );
    assert_eq!(table.occupied_buckets(), 1);

    assert!(table.erase(&32));
    assert_eq!(table.occupied_buckets(), 0, "An emptied bucket should lose its record.");
    assert!(table.is_empty());
}

#[test]
fn test_forced_collisions() {
    let mut table: HashTable<ManualHash<&str>, ValueKey, IdentityBuildHasher> =
        HashTable::with_config(TableConfig { capacity: 6, load_factor: 1.0 }, IdentityBuildHasher)
            .expect("Config is valid.");

    table.insert(ManualHash::new(0, "zero"));
    table.insert(ManualHash::new(0, "one"));
    table.insert(ManualHash::new(2, "two"));
    table.insert(ManualHash::new(0, "three"));
    table.insert(ManualHash::new(2, "four"));

    table.erase(&ManualHash::new(0, "zero"));
    table.erase(&ManualHash::new(2, "two"));

    assert_eq!(
        table.into_iter().map(|i| i.value()).collect::<List<_>>(),
        ["one", "three", "four"],
        "No colliding entries should be lost during removal."
    );
}

#[test]
fn test_non_head_record_removal() {
    let mut table = identity_table(8, 1.0);
    table.extend([1, 2, 3]);
    assert_eq!(table.occupied_buckets(), 3);

    assert!(table.erase(&2));
    assert_eq!(table.occupied_buckets(), 2, "A record in the middle should be removed.");
    assert_eq!(table.meta.iter().map(|record| record.index).collect::<List<_>>(), [1, 3]);
    assert_eq!(collect(&table), [1, 3]);

    assert!(table.erase(&3));
    assert_eq!(table.occupied_buckets(), 1, "The last record should be removed.");

    table.insert(5);
    assert_eq!(
        collect(&table),
        [1, 5],
        "New records should be appended after the removal of the last one."
    );
    assert_eq!(table.to_string(), "[1, 5]");
}

#[test]
fn test_iteration_order() {
    let mut table = identity_table(8, 1.0);
    table.extend([3, 11, 1, 19, 6]);

    assert_eq!(
        collect(&table),
        [3, 11, 19, 1, 6],
        "Buckets should be visited in the order they were occupied, chains in insertion order."
    );
    assert_eq!(table.iter().len(), 5);
    assert_eq!(table.to_string(), "[3, 11, 19, 1, 6]");
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new();
    let mut table: HashTable<KeyValuePair<u32, CountedDrop>, PairKey, IdentityBuildHasher> =
        HashTable::with_cap_and_hasher(8, IdentityBuildHasher);
    for i in 0..5 {
        table.insert(KeyValuePair::new(i * 8, counter.clone()));
    }

    table.clear();
    assert_eq!(counter.count(), 5, "Clearing should drop every entry.");
    assert_eq!(table.len(), 0);
    assert_eq!(table.cap(), 8, "Clearing shouldn't change the capacity.");
    assert_eq!(table.occupied_buckets(), 0);

    table.clear();
    assert_eq!(counter.count(), 5, "Clearing twice should be the same as clearing once.");
    assert!(table.is_empty());

    assert!(table.insert(KeyValuePair::new(0, counter.clone())));
    assert_eq!(table.len(), 1, "The table should be usable after clearing.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut table: HashTable<KeyValuePair<u32, CountedDrop>, PairKey, IdentityBuildHasher> =
        HashTable::with_cap_and_hasher(4, IdentityBuildHasher);
    for i in 0..20 {
        table.insert(KeyValuePair::new(i % 10 * 4, counter.clone()));
    }
    assert_eq!(counter.count(), 10, "Rejected duplicates should be dropped.");

    table.erase(&8);
    assert_eq!(counter.count(), 11, "Erasing should drop the entry.");

    let previous = table.replace(KeyValuePair::new(12, counter.clone()));
    assert!(previous.is_some());
    drop(previous);
    assert_eq!(counter.count(), 12, "Replacing should hand back the old entry.");

    drop(table);
    assert_eq!(counter.count(), 21, "Dropping the table should drop all 9 remaining entries.");
}

#[test]
fn test_replace_missing_key() {
    let mut table = identity_table(2, 1.0);
    assert_eq!(table.replace(1), None);

    assert_eq!(table.replace(2), None, "Replacing a missing key should insert it, growing if needed.");
    assert_eq!(table.cap(), 4);
    assert_eq!(table.len(), 2);
    assert_eq!(table.replace(2), Some(2));
    assert_eq!(collect(&table), [1, 2]);
}

#[test]
fn test_into_iter() {
    let counter = CountedDrop::new();
    let mut table: HashTable<KeyValuePair<u32, CountedDrop>, PairKey> = HashTable::new();
    for i in 0..10 {
        table.insert(KeyValuePair::new(i, counter.clone()));
    }

    let mut iter = table.into_iter();
    assert_eq!(iter.len(), 10);
    drop(iter.next());
    drop(iter.next());
    assert_eq!(iter.len(), 8);

    drop(iter);
    assert_eq!(counter.count(), 10, "Dropping a partially used iterator should drop the rest.");
}

#[test]
fn test_retain() {
    let mut table = identity_table(16, 1.0);
    table.extend([0, 16, 32, 48, 1, 17, 2]);

    table.retain(|i| i % 32 != 0 && *i != 17);

    assert_eq!(table.len(), 4);
    assert_eq!(collect(&table), [16, 48, 1, 2]);
    assert_eq!(table.chain_len(0), 2, "Survivors should be relinked in order.");
    assert_eq!(table.chain_len(1), 1);

    table.retain(|i| *i == 2);
    assert_eq!(collect(&table), [2]);
    assert_eq!(table.occupied_buckets(), 1, "Emptied buckets should lose their records.");

    table.retain(|_| false);
    assert!(table.is_empty());
    assert_eq!(table.occupied_buckets(), 0);
}

#[test]
fn test_retain_panicking_predicate() {
    let mut table = identity_table(8, 1.0);
    table.extend([0, 8, 16]);

    assert_panics!(
        {
            table.retain(|i| if *i == 0 { panic!("rejected the head") } else { true });
        },
        "The predicate's panic should propagate."
    );
    assert_eq!(table.len(), 3);
    assert_eq!(collect(&table), [0, 8, 16], "A panic on the head shouldn't detach its chain.");
    assert_eq!(table.occupied_buckets(), 1);

    assert_panics!(
        {
            table.retain(|i| if *i == 16 { panic!("rejected the tail") } else { *i != 8 });
        },
        "The predicate's panic should propagate."
    );
    assert_eq!(table.len(), 2, "Entries removed before the panic should stay removed.");
    assert_eq!(collect(&table), [0, 16]);

    table.insert(24);
    assert_eq!(table.occupied_buckets(), 1, "The bucket should still have exactly one record.");
    assert_eq!(collect(&table), [0, 16, 24]);
}

#[test]
fn test_identity_hasher() {
    assert_eq!(IdentityBuildHasher.hash_one(7_u32), 7);
    assert_eq!(IdentityBuildHasher.hash_one(ManualHash::new(12, "twelve")), 12);
    assert_ne!(
        IdentityBuildHasher.hash_one("a"),
        IdentityBuildHasher.hash_one("zz"),
        "Strings should be folded, not reduced to their trailing marker byte."
    );
    assert_ne!(IdentityBuildHasher.hash_one((1_u32, 2_u32)), IdentityBuildHasher.hash_one((3_u32, 2_u32)));

    let mut table: HashTable<String, ValueKey, IdentityBuildHasher> =
        HashTable::with_cap_and_hasher(16, IdentityBuildHasher);
    table.extend(["a", "b", "c", "d", "e", "f"].map(String::from));

    assert_eq!(table.len(), 6);
    assert!(table.occupied_buckets() > 1, "Distinct strings should spread across buckets.");
    assert!(table.contains("d"));
}

#[test]
fn test_default_hasher_is_deterministic() {
    let a = DefaultHashBuilder::default();
    let b = DefaultHashBuilder::default();
    assert_eq!(a.hash_key("key"), b.hash_key("key"));

    let first: HashTable<u32, ValueKey> = (0..50).collect();
    let second: HashTable<u32, ValueKey> = (0..50).collect();
    assert!(first.iter().eq(second.iter()), "Iteration order should be reproducible.");
}

#[test]
fn test_zero_cap() {
    let mut table = identity_table(0, 0.75);
    assert_eq!(table.cap(), 0);
    assert!(!table.contains(&1), "Lookups on an unallocated table should miss.");
    assert!(!table.erase(&1));

    table.insert(1);
    assert!(table.cap() > 0, "Inserting should allocate.");
    assert!(table.contains(&1));
}

#[test]
fn test_config_validation() {
    let err = HashTable::<u8, ValueKey>::with_config(
        TableConfig { capacity: 4, load_factor: 1.5 },
        Default::default(),
    ).expect_err("A load factor above 1 should be rejected.");
    assert_eq!(err.param, "load_factor");

    assert!(HashTable::<u8, ValueKey>::with_config(
        TableConfig { capacity: 4, load_factor: f64::NAN },
        Default::default(),
    ).is_err());
    assert!(TableConfig { capacity: 0, load_factor: 1.0 }.validate().is_ok());
}

#[test]
fn test_reserve() {
    let mut table = identity_table(4, 0.75);
    table.extend([1, 2]);

    table.reserve(2);
    assert_eq!(table.cap(), 4, "Reserving less than the capacity should do nothing.");

    table.reserve(64);
    assert_eq!(table.cap(), 64);
    assert_eq!(collect(&table), [1, 2]);

    for i in 3..40 {
        table.insert(i);
    }
    assert_eq!(table.cap(), 64, "No growth should be needed below the load factor.");
}

#[test]
fn test_clone_and_eq() {
    let mut table = identity_table(4, 1.0);
    table.extend([0, 4, 8, 1]);

    let copy = table.clone();
    assert_eq!(copy, table);
    assert_eq!(copy.cap(), table.cap());

    table.erase(&4);
    assert_ne!(copy, table, "The copy should be independent of the original.");
    assert_eq!(copy.len(), 4);

    let mut reordered = identity_table(16, 1.0);
    reordered.extend([1, 8, 0]);
    assert_eq!(reordered, table, "Equality shouldn't depend on capacity or order.");
}

#[test]
fn test_debug() {
    let mut table = identity_table(4, 1.0);
    table.extend([0, 4, 1]);

    let rendered = format!("{table:?}");
    assert!(
        rendered.contains("buckets: [0 -> 4, 1, -, -]"),
        "Debug output should show each bucket's chain: {rendered}"
    );
}

#[test]
fn test_against_std() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut table: HashTable<u32, ValueKey> = HashTable::with_cap(1);
    let mut reference = StdHashSet::new();

    for _ in 0..5_000 {
        let value = rng.random_range(0..500);
        if rng.random_bool(0.6) {
            assert_eq!(table.insert(value), reference.insert(value));
        } else {
            assert_eq!(table.erase(&value), reference.remove(&value));
        }
        assert_eq!(table.len(), reference.len());
    }

    for value in 0..500 {
        assert_eq!(table.contains(&value), reference.contains(&value));
    }
    assert_eq!(table.iter().count(), reference.len());
}
