//! Randomized operation sequences checked against reference sequences.
extern crate std;

use std::vec::Vec;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::linked_list::forward::{ForwardList, Position};

/// Cell `n` of the chain: the sentinel for 0, otherwise the n-th element.
fn cell(list: &ForwardList<u32>, n: usize) -> Position {
    (0..n).fold(list.before_begin(), |pos, _| list.advance(pos))
}

#[test]
fn test_front_operations_match_persistent_list() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut list = ForwardList::new();
    let mut model = rpds::List::new();

    for _ in 0..5_000 {
        match rng.random_range(0..10) {
            0..=5 => {
                let value: u32 = rng.random();
                list.push_front(value);
                model.push_front_mut(value);
            }
            6..=8 => {
                let expected = model.first().copied();
                model.drop_first_mut();
                assert_eq!(list.pop_front(), expected);
            }
            _ => {
                list.clear();
                model = rpds::List::new();
            }
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.is_empty(), model.is_empty());
        assert_eq!(list.front(), model.first());
    }
    assert!(list.iter().eq(model.iter()));
}

#[test]
fn test_positional_operations_match_vec() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut list = ForwardList::new();
    let mut model: Vec<u32> = Vec::new();

    for _ in 0..2_000 {
        match rng.random_range(0..4) {
            0 | 1 => {
                let at = rng.random_range(0..=model.len());
                let value: u32 = rng.random();
                let pos = cell(&list, at);
                let inserted = list.insert_after(pos, value);
                model.insert(at, value);
                assert_eq!(*list.get(inserted), value);
            }
            2 if !model.is_empty() => {
                let at = rng.random_range(0..model.len());
                let pos = cell(&list, at);
                let next = list.erase_after(pos);
                model.remove(at);
                match model.get(at) {
                    Some(value) => assert_eq!(list.get(next), value),
                    None => assert!(next.is_end()),
                }
            }
            _ if !model.is_empty() => {
                let at = rng.random_range(0..model.len());
                let value: u32 = rng.random();
                *list.get_mut(cell(&list, at + 1)) = value;
                model[at] = value;
            }
            _ => {}
        }

        assert_eq!(list.len(), model.len());
        assert!(list.iter().eq(model.iter()));
    }

    let copy = list.clone();
    assert!(copy.into_iter().eq(model));
}
