extern crate std;

use core::cmp::Ordering;
use core::hash::BuildHasher;
use std::format;
use std::vec;
use std::vec::Vec;

use hashbrown::{DefaultHashBuilder, HashSet};

use crate::linked_list::forward::{ForwardList, swap};

#[test]
fn test_equality() {
    let a = ForwardList::from([1, 2, 3]);
    let b = ForwardList::from([1, 2, 3]);
    let c = ForwardList::from([1, 2]);
    let d = ForwardList::from([1, 2, 4]);

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, c);
    assert_ne!(c, a);
    assert_ne!(a, d);
    assert_eq!(ForwardList::<i32>::new(), ForwardList::new());
}

#[test]
fn test_lexicographic_order() {
    let empty = ForwardList::<i32>::new();
    let one = ForwardList::from([1]);

    assert!(ForwardList::from([1, 2]) < ForwardList::from([1, 2, 3]));
    assert!(ForwardList::from([1, 3]) > ForwardList::from([1, 2, 9]));
    assert!(empty < one);
    assert!(!(empty > one));
    assert!(empty <= empty.clone());
    assert!(empty >= empty.clone());
    assert!(!(empty < empty.clone()));
}

#[test]
fn test_derived_comparisons_agree() {
    let lists = [
        ForwardList::new(),
        ForwardList::from([0]),
        ForwardList::from([0, 0]),
        ForwardList::from([0, 1]),
        ForwardList::from([1]),
    ];
    for a in &lists {
        for b in &lists {
            assert_eq!(a <= b, !(b < a));
            assert_eq!(a > b, b < a);
            assert_eq!(a >= b, !(a < b));
            assert_eq!(a == b, !(a < b) && !(b < a));
        }
    }
}

#[test]
fn test_partial_order_with_unordered_elements() {
    let a = ForwardList::from([1.0, f64::NAN]);
    let b = ForwardList::from([1.0, 2.0]);
    assert_eq!(a.partial_cmp(&b), None);
    assert!(!(a < b) && !(a > b));
    assert_eq!(
        ForwardList::from([0.5]).partial_cmp(&b),
        Some(Ordering::Less)
    );
}

#[test]
fn test_total_order_sorts_lists() {
    let mut lists = vec![
        ForwardList::from([2]),
        ForwardList::from([1, 5]),
        ForwardList::new(),
        ForwardList::from([1]),
    ];
    lists.sort();
    let sorted: Vec<Vec<i32>> = lists.iter().map(|l| l.iter().copied().collect()).collect();
    assert_eq!(sorted, vec![vec![], vec![1], vec![1, 5], vec![2]]);
}

#[test]
fn test_hash_consistent_with_eq() {
    let hasher = DefaultHashBuilder::default();
    let a = ForwardList::from([1, 2, 3]);
    let mut b = ForwardList::from([0, 2, 3]);
    *b.get_mut(b.begin()) = 1;
    assert_eq!(hasher.hash_one(&a), hasher.hash_one(&b));

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    set.insert(ForwardList::from([1, 2]));
    set.insert(ForwardList::new());
    assert_eq!(set.len(), 3);
    assert!(set.contains(&ForwardList::from([1, 2, 3])));
}

#[test]
fn test_debug_format() {
    assert_eq!(format!("{:?}", ForwardList::from([1, 2, 3])), "[1, 2, 3]");
    assert_eq!(format!("{:?}", ForwardList::<u8>::new()), "[]");
}

#[test]
fn test_swap_long_and_short() {
    let mut long: ForwardList<_> = (0..1000).collect();
    let mut short = ForwardList::from([7]);
    swap(&mut long, &mut short);
    assert_eq!(long.len(), 1);
    assert_eq!(short.len(), 1000);
    assert_eq!(short.front(), Some(&0));
    assert_eq!(long.front(), Some(&7));
}
