#![cfg(test)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;
use crate::collections::contiguous::List;
use crate::collections::hash::{IdentityBuildHasher, TableConfig};
use crate::collections::traits::SetLike;
use crate::util::hash::ManualHash;

fn set<const N: usize>(values: [i32; N]) -> Set<i32> {
    Set::from(values)
}

fn sorted<'a>(iter: impl Iterator<Item = &'a i32>) -> List<i32> {
    let mut items = iter.copied().collect::<List<_>>();
    items.sort();
    items
}

fn identity_set(capacity: usize) -> Set<i32, IdentityBuildHasher> {
    Set::with_config(TableConfig { capacity, load_factor: 1.0 }, IdentityBuildHasher)
        .expect("Config is valid.")
}

#[test]
fn test_colliding_removal() {
    let mut set = identity_set(4);

    assert!(set.add(0));
    assert!(set.add(4));
    assert!(set.add(8));
    assert_eq!(set.cap(), 4, "Three entries shouldn't reach a load factor of 1.");
    assert_eq!(set.len(), 3);
    assert!(set.contains(&0));
    assert!(set.contains(&4));
    assert!(set.contains(&8));

    assert!(set.remove(&4));
    assert!(!set.contains(&4));
    assert!(set.contains(&0), "Removing from a chain shouldn't lose the head.");
    assert!(set.contains(&8), "Removing from a chain shouldn't lose the tail.");
    assert_eq!(set.len(), 2);
}

#[test]
fn test_hash_collisions() {
    let mut set = Set::with_hasher(IdentityBuildHasher);
    set.add(ManualHash::new(0, "zero"));
    set.add(ManualHash::new(0, "one"));
    set.add(ManualHash::new(2, "two"));
    set.add(ManualHash::new(0, "three"));
    set.add(ManualHash::new(2, "four"));
    set.add(ManualHash::new(1, "five"));

    set.remove(&ManualHash::new(0, "zero"));
    set.remove(&ManualHash::new(2, "two"));

    assert_eq!(
        set.into_iter().map(|i| i.value()).collect::<List<_>>(),
        ["one", "three", "four", "five"],
        "Set should handle hash collisions so that no elements are lost during removal."
    );
}

#[test]
fn test_intersect_of() {
    let a = set([1, 2, 3]);
    let b = set([4, 3, 2]);

    let both: Set<i32> = Set::intersect_of(&a, &b);
    assert!(both.set_equals(&set([3, 2])));
    assert!(Set::intersect_of(&b, &a).set_equals(&both), "Argument order shouldn't matter.");
    assert_eq!(a.len(), 3, "The static form shouldn't modify its arguments.");
}

#[test]
fn test_union_of() {
    let a = set([1, 2, 3]);
    let b = set([3, 4]);

    let either: Set<i32> = Set::union_of(&a, &b);
    assert_eq!(either, set([1, 2, 3, 4]));
    assert_eq!(b.len(), 2);
}

#[test]
fn test_union_in_place() {
    let mut set = identity_set(8);
    set.extend([1, 2]);

    set.union(&identity_set(8));
    assert_eq!(set.len(), 2, "A union with an empty set should change nothing.");

    let mut other = identity_set(8);
    other.extend([2, 3, 10]);
    set.union(&other);
    assert_eq!(set.iter().copied().collect::<List<_>>(), [1, 2, 10, 3]);
}

#[test]
fn test_intersect_in_place() {
    let mut set = identity_set(8);
    set.extend([0, 8, 16, 1, 9, 2]);

    let mut other = identity_set(16);
    other.extend([16, 9, 2, 5]);

    set.intersect(&other);
    assert_eq!(
        set.iter().copied().collect::<List<_>>(),
        [16, 9, 2],
        "Removing entries while walking the buckets should keep the survivors in order."
    );

    set.intersect(&Set::<i32>::new());
    assert!(set.is_empty());
}

#[test]
fn test_overlaps() {
    let a = set([1, 2, 3]);

    assert!(a.overlaps(&set([3, 4, 5, 6])));
    assert!(!a.overlaps(&set([4, 5])));
    assert!(!a.overlaps(&Set::<i32>::new()));
}

#[test]
fn test_set_equals() {
    let a = set([1, 2, 3]);

    assert!(a.set_equals(&set([3, 1, 2])));
    assert!(!a.set_equals(&set([1, 2])));
    assert!(!a.set_equals(&set([1, 2, 4])));

    let mut differently_hashed = identity_set(64);
    differently_hashed.extend([2, 3, 1]);
    assert!(a.set_equals(&differently_hashed), "Equality shouldn't depend on the hasher.");
}

#[test]
fn test_subset() {
    let small = set([1, 2]);
    let big = set([1, 2, 3]);

    assert!(small.is_subset(&big));
    assert!(!big.is_subset(&small));
    assert!(big.is_superset(&small));
    assert!(small.is_subset(&small));
}

#[test]
fn test_lazy_operations() {
    let a: Set<i32, IdentityBuildHasher> = Set::from([1, 2, 3]);
    let b: Set<i32, IdentityBuildHasher> = Set::from([2, 3, 4]);

    assert_eq!(sorted(a.iter_difference(&b)), [1]);
    assert_eq!(sorted(a.iter_symmetric_difference(&b)), [1, 4]);
    assert_eq!(sorted(a.iter_intersection(&b)), [2, 3]);
    assert_eq!(sorted(a.iter_union(&b)), [1, 2, 3, 4]);

    let mut owned = a.clone().into_intersection(b.clone()).collect::<List<_>>();
    owned.sort();
    assert_eq!(owned, [2, 3]);
    assert_eq!(a.into_difference(b).collect::<List<_>>(), [1]);
}

#[test]
fn test_set_like_comparisons() {
    let a = set([1, 2, 3]);

    assert!(SetLike::overlaps(&a, &set([9, 3])));
    assert!(!SetLike::overlaps(&a, &set([4, 5, 6, 7])));
    assert!(SetLike::set_equals(&a, &set([3, 2, 1])));
    assert!(!SetLike::set_equals(&a, &set([1, 2, 3, 4])));
    assert!(SetLike::is_superset(&a, &set([2])));
    assert!(!SetLike::is_superset(&set([2]), &a));
    assert_eq!(a, set([2, 3, 1]), "PartialEq should agree with set_equals.");
}

#[test]
fn test_take_and_replace() {
    let mut set: Set<_> = Set::from([ManualHash::new(1, "a")]);

    let previous = set.replace(ManualHash::new(1, "a"));
    assert!(previous.is_some(), "Replacing an equal value should return the old one.");
    assert_eq!(set.len(), 1);

    assert!(set.take(&ManualHash::new(1, "a")).is_some());
    assert!(set.take(&ManualHash::new(1, "a")).is_none());
}

#[test]
fn test_display() {
    let mut set = identity_set(8);
    set.extend([3, 1, 11]);

    assert_eq!(set.to_string(), "[3, 11, 1]");
    assert_eq!(format!("{set:?}"), "{3, 11, 1}");
    assert_eq!(Set::<u8>::new().to_string(), "[]");
}

#[test]
fn test_clear_twice() {
    let mut set: Set<&str> = Set::from(["a", "b", "c"]);

    set.clear();
    set.clear();
    assert_eq!(set.len(), 0);
    assert!(!set.contains("a"));

    set.add("a");
    assert!(set.contains("a"));
}

#[test]
fn test_randomized_algebra() {
    let mut rng = SmallRng::seed_from_u64(7);

    for _ in 0..50 {
        let a: Set<u8> = (0..rng.random_range(0..40)).map(|_| rng.random_range(0..64)).collect();
        let b: Set<u8> = (0..rng.random_range(0..40)).map(|_| rng.random_range(0..64)).collect();

        let both = Set::intersect_of(&a, &b);
        let either = Set::union_of(&a, &b);

        assert!(both.is_subset(&a) && both.is_subset(&b));
        assert!(either.is_superset(&a) && either.is_superset(&b));
        assert_eq!(both.len() + either.len(), a.len() + b.len());
        assert_eq!(a.overlaps(&b), !both.is_empty());

        let mut in_place = a.clone();
        in_place.intersect(&b);
        assert_eq!(in_place, both);
    }
}
