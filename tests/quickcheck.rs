#![cfg(feature = "quickcheck")]

use quickcheck_macros::quickcheck;
use rbtree::Set;
use std::collections::BTreeSet;

mod insert {
    use quickcheck::{quickcheck, TestResult};
    use rbtree::{InsertError, Set};

    #[test]
    fn sets_len() {
        fn test(mut set: Set<u32>, item: u32) -> bool {
            let old_len = set.len();

            if set.insert(item) {
                set.len() == old_len + 1
            } else {
                set.len() == old_len
            }
        }

        quickcheck(test as fn(Set<u32>, u32) -> bool);
    }

    #[test]
    fn inserts_item() {
        fn test(mut set: Set<u32>, item: u32) -> bool {
            set.insert(item);
            set.contains(&item) && set.iter().filter(|&&x| x == item).count() == 1
        }

        quickcheck(test as fn(Set<u32>, u32) -> bool);
    }

    #[test]
    fn affects_no_others() {
        fn test(mut set: Set<u32>, item: u32) -> bool {
            let old_set = set.clone();
            set.insert(item);

            set.iter().filter(|&&x| x != item).collect::<Vec<_>>() ==
                old_set.iter().filter(|&&x| x != item).collect::<Vec<_>>()
        }

        quickcheck(test as fn(Set<u32>, u32) -> bool);
    }

    #[test]
    fn rejects_duplicates() {
        fn test(mut set: Set<u32>, index: usize) -> TestResult {
            if set.is_empty() { return TestResult::discard(); }

            let item = *set.iter().nth(index % set.len()).unwrap();
            let old_set = set.clone();

            TestResult::from_bool(
                set.try_insert(item) == Err(InsertError::Duplicate(item)) &&
                !set.insert(item) &&
                set == old_set
            )
        }

        quickcheck(test as fn(Set<u32>, usize) -> TestResult);
    }
}

mod contains {
    use quickcheck::quickcheck;
    use rbtree::Set;
    use std::collections::BTreeSet;

    #[test]
    fn agrees_with_btree_set() {
        fn test(items: Vec<u8>, probes: Vec<u8>) -> bool {
            let set: Set<u8> = items.iter().cloned().collect();
            let expected: BTreeSet<u8> = items.into_iter().collect();

            probes.iter().all(|probe| set.contains(probe) == expected.contains(probe))
        }

        quickcheck(test as fn(Vec<u8>, Vec<u8>) -> bool);
    }

    #[test]
    fn agrees_with_iter() {
        fn test(set: Set<u32>) -> bool {
            set.iter().all(|item| set.contains(item))
        }

        quickcheck(test as fn(Set<u32>) -> bool);
    }
}

mod for_each {
    use quickcheck::{quickcheck, TestResult};
    use rbtree::Set;

    #[test]
    fn agrees_with_iter() {
        fn test(set: Set<u32>) -> bool {
            let mut visited = vec![];
            set.for_each(|&item| { visited.push(item); true }) &&
                visited == set.iter().cloned().collect::<Vec<_>>()
        }

        quickcheck(test as fn(Set<u32>) -> bool);
    }

    #[test]
    fn stops_early() {
        fn test(set: Set<u32>, k: usize) -> TestResult {
            if set.is_empty() { return TestResult::discard(); }

            let k = k % set.len() + 1;
            let mut calls = 0;
            let completed = set.for_each(|_| { calls += 1; calls < k });

            TestResult::from_bool(!completed && calls == k)
        }

        quickcheck(test as fn(Set<u32>, usize) -> TestResult);
    }

    #[test]
    fn empty_set_succeeds() {
        let set: Set<u32> = Set::new();
        assert!(set.for_each(|_| false));
    }
}

mod dispose {
    use quickcheck::{quickcheck, TestResult};
    use rbtree::Set;
    use std::collections::BTreeSet;

    #[test]
    fn disposes_each_item_once() {
        fn test(items: Vec<u8>) -> TestResult {
            let mut released = vec![];

            {
                let mut set = Set::with_cmp_and_dispose(
                    compare::natural(), |item: u8| released.push(item));
                set.extend(items.iter().cloned());
            }

            let expected: Vec<u8> = items.into_iter().collect::<BTreeSet<_>>().into_iter().collect();
            released.sort();
            TestResult::from_bool(released == expected)
        }

        quickcheck(test as fn(Vec<u8>) -> TestResult);
    }
}

mod min_max {
    use quickcheck::quickcheck;
    use rbtree::Set;

    #[test]
    fn agrees_with_iter() {
        fn test(set: Set<u32>) -> bool {
            set.min() == set.iter().next() && set.max() == set.iter().next_back()
        }

        quickcheck(test as fn(Set<u32>) -> bool);
    }
}

#[quickcheck]
fn iter_is_strictly_ascending(set: Set<i64>) -> bool {
    set.iter().zip(set.iter().skip(1)).all(|(a, b)| a < b)
}

#[quickcheck]
fn len_counts_distinct_items(items: Vec<u16>) -> bool {
    let set: Set<u16> = items.iter().cloned().collect();
    let expected: BTreeSet<u16> = items.into_iter().collect();

    set.len() == expected.len() && set.iter().len() == expected.len()
}

#[quickcheck]
fn matches_btree_set_order(items: Vec<i32>) -> bool {
    let set: Set<i32> = items.iter().cloned().collect();
    let expected: BTreeSet<i32> = items.into_iter().collect();

    set.iter().eq(expected.iter()) && set.into_iter().eq(expected.into_iter())
}

#[test]
fn string_order() {
    let mut set = Set::new();
    assert!(set.insert("banana".to_string()));
    assert!(set.insert("apple".to_string()));

    assert_eq!(set.iter().collect::<Vec<_>>(), ["apple", "banana"]);
    assert_eq!(rbtree::analyzer::concatenate(&set), "apple\nbanana\n");
}

#[test]
fn max_norm_vector() {
    use rbtree::analyzer::{self, Vector, VectorOrder};

    let mut set = Set::with_cmp(VectorOrder);
    assert!(set.insert(Vector(vec![1.0, 1.0])));
    assert!(set.insert(Vector(vec![3.0])));

    let max = analyzer::max_norm_vector(&set).unwrap();
    assert_eq!(max, Vector(vec![3.0]));
    assert_eq!(max.norm_squared(), 9.0);
    assert_eq!(set.iter().next(), Some(&Vector(vec![1.0, 1.0])));
}
