use std::collections::BTreeSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GraphError;
use crate::model::Adjacency;

use super::{AdjacencyManager, AdjacencyTree, Cursor};

fn adj(tail: u32, head: u32) -> Adjacency {
    Adjacency::new(tail, head)
}

#[test]
fn duplicates_collapse() {
    let mut tree = AdjacencyTree::new();
    for _ in 0..4 {
        tree.insert(adj(0, 1));
    }
    assert_eq!(tree.len(), 1);
    tree.assert_invariants();
}

#[test]
fn mixed_insert() {
    let mut tree = AdjacencyTree::new();
    tree.insert(adj(0, 1));
    tree.insert(adj(1, 2));
    assert_eq!(tree.len(), 2);

    tree.insert(adj(0, 2));
    tree.insert(adj(0, 3));
    tree.insert(adj(1, 2));
    assert_eq!(tree.len(), 4);
    tree.assert_invariants();
}

#[test]
fn deletion() {
    let mut tree = AdjacencyTree::new();
    tree.insert(adj(0, 1));
    tree.insert(adj(1, 2));
    tree.insert(adj(0, 2));
    tree.insert(adj(0, 3));
    tree.insert(adj(1, 2));

    let found = tree.find(adj(0, 2));
    tree.erase(found);
    assert_eq!(tree.len(), 3);

    let found = tree.find(adj(0, 3));
    tree.erase(found);
    assert_eq!(tree.len(), 2);

    // Erasing a key that is already gone is a no-op.
    let found = tree.find(adj(0, 2));
    tree.erase(found);
    assert_eq!(tree.len(), 2);
    tree.assert_invariants();
}

#[test]
fn large_vertex_ids() {
    let mut tree = AdjacencyTree::new();
    tree.insert(adj(1, 2));
    tree.insert(adj(1 << 30, 1 << 29));
    assert_eq!(tree.len(), 2);
    tree.assert_invariants();
}

#[test]
fn in_order_entries_are_sorted() {
    let mut tree = AdjacencyTree::new();
    let keys = [(3, 1), (0, 2), (2, 0), (0, 1), (3, 0), (1, 3)];
    for &(t, h) in &keys {
        tree.insert(adj(t, h));
    }
    let entries = tree.entries();
    let expected: BTreeSet<Adjacency> = keys.iter().map(|&(t, h)| adj(t, h)).collect();
    assert_eq!(entries, expected.into_iter().collect::<Vec<_>>());
}

#[test]
fn rank_select_round_trip() {
    let mut tree = AdjacencyTree::new();
    for t in 0..6u32 {
        for h in 0..6u32 {
            if t != h {
                tree.insert(adj(t, h));
            }
        }
    }
    let n = tree.len();
    assert_eq!(n, 30);
    for k in 1..=n {
        let cursor = tree.select(k);
        assert!(!cursor.is_end());
        assert_eq!(tree.rank(cursor), k);
    }
    assert!(tree.select(0).is_end());
    assert!(tree.select(n + 1).is_end());
    tree.assert_invariants();
}

#[test]
fn select_matches_in_order() {
    let mut tree = AdjacencyTree::new();
    let keys = [(5, 0), (1, 4), (2, 2), (0, 9), (7, 1)];
    for &(t, h) in &keys {
        tree.insert(adj(t, h));
    }
    let entries = tree.entries();
    for (i, expected) in entries.iter().enumerate() {
        let cursor = tree.select(i + 1);
        assert_eq!(tree.get(cursor), Some(expected));
    }
}

#[test]
fn cursor_navigation() {
    let mut tree = AdjacencyTree::new();
    for h in [4u32, 1, 3, 0, 2] {
        tree.insert(adj(9, h));
    }

    // Forward walk visits keys in ascending order.
    let mut cursor = tree.begin();
    let mut seen = Vec::new();
    while let Some(&a) = tree.get(cursor) {
        seen.push(a.head);
        cursor = tree.next(cursor);
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);

    // Stepping back from past-the-end lands on the maximum.
    let last = tree.prev(Cursor::END);
    assert_eq!(tree.get(last), Some(&adj(9, 4)));

    // Jumps.
    let begin = tree.begin();
    let third = tree.advance(begin, 2);
    assert_eq!(tree.get(third), Some(&adj(9, 2)));
    let back = tree.advance(third, -2);
    assert_eq!(tree.get(back), Some(&adj(9, 0)));
    assert!(tree.advance(begin, 5).is_end());
}

#[test]
fn cursor_distance() {
    let mut tree = AdjacencyTree::new();
    for h in 0..7u32 {
        tree.insert(adj(0, h + 1));
    }
    let begin = tree.begin();
    assert_eq!(tree.distance(Cursor::END, begin), 7);
    assert_eq!(tree.distance(begin, Cursor::END), -7);
    let fourth = tree.select(4);
    assert_eq!(tree.distance(fourth, begin), 3);
}

#[test]
fn bounds() {
    let mut tree = AdjacencyTree::new();
    for &(t, h) in &[(0, 2), (0, 5), (2, 1), (2, 4)] {
        tree.insert(adj(t, h));
    }

    let exact = tree.lower_bound(adj(0, 5));
    assert_eq!(tree.get(exact), Some(&adj(0, 5)));
    let between = tree.lower_bound(adj(0, 3));
    assert_eq!(tree.get(between), Some(&adj(0, 5)));
    let next_tail = tree.lower_bound(adj(1, 0));
    assert_eq!(tree.get(next_tail), Some(&adj(2, 1)));
    assert!(tree.lower_bound(adj(2, 5)).is_end());

    let above_exact = tree.upper_bound(adj(0, 5));
    assert_eq!(tree.get(above_exact), Some(&adj(2, 1)));
    let above_low = tree.upper_bound(adj(0, 0));
    assert_eq!(tree.get(above_low), Some(&adj(0, 2)));
    assert!(tree.upper_bound(adj(2, 4)).is_end());
}

#[test]
fn erase_all_then_reuse() {
    let mut tree = AdjacencyTree::new();
    for h in 1..=8u32 {
        tree.insert(adj(0, h));
    }
    for h in 1..=8u32 {
        let cursor = tree.find(adj(0, h));
        tree.erase(cursor);
        tree.assert_invariants();
    }
    assert!(tree.is_empty());

    // Freed slots are recycled for fresh inserts.
    tree.insert(adj(3, 4));
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.get(tree.begin()), Some(&adj(3, 4)));
}

#[test]
fn stress_against_reference_set() {
    let mut rng = ChaCha8Rng::seed_from_u64(0xDEADBEEF);
    let mut tree = AdjacencyTree::new();
    let mut reference: BTreeSet<Adjacency> = BTreeSet::new();

    for round in 0..2000 {
        let tail = rng.gen_range(0..12u32);
        let head = rng.gen_range(0..12u32);
        let key = adj(tail, head);
        if rng.gen_bool(0.6) {
            tree.insert(key);
            reference.insert(key);
        } else {
            let cursor = tree.find(key);
            tree.erase(cursor);
            reference.remove(&key);
        }
        assert_eq!(tree.len(), reference.len());
        if round % 100 == 0 {
            tree.assert_invariants();
            let entries = tree.entries();
            assert_eq!(entries, reference.iter().copied().collect::<Vec<_>>());
        }
    }
    tree.assert_invariants();
    assert_eq!(
        tree.entries(),
        reference.iter().copied().collect::<Vec<_>>()
    );

    // Order statistics agree with the reference order.
    let sorted: Vec<Adjacency> = reference.iter().copied().collect();
    for k in (1..=sorted.len()).step_by(3) {
        assert_eq!(tree.get(tree.select(k)), Some(&sorted[k - 1]));
    }
}

#[test]
fn manager_tracks_tail_ranges() {
    let mut manager = AdjacencyManager::new(10);
    manager.insert(adj(2, 5)).unwrap();
    manager.insert(adj(2, 1)).unwrap();
    manager.insert(adj(2, 8)).unwrap();
    manager.insert(adj(4, 0)).unwrap();

    assert_eq!(manager.get(manager.begin_of(2)), Some(&adj(2, 1)));
    assert_eq!(manager.get(manager.begin_of(4)), Some(&adj(4, 0)));
    assert!(manager.begin_of(3).is_end());

    let neighbors: Vec<u32> = manager.out_neighbors(2).map(|a| a.head).collect();
    assert_eq!(neighbors, vec![1, 5, 8]);
}

#[test]
fn manager_end_of_is_exclusive() {
    let mut manager = AdjacencyManager::new(6);
    manager.insert(adj(1, 0)).unwrap();
    manager.insert(adj(1, 3)).unwrap();
    manager.insert(adj(2, 0)).unwrap();

    let end = manager.end_of(1);
    assert_eq!(manager.get(end), Some(&adj(2, 0)));

    // The last tail's range ends past-the-end.
    assert!(manager.end_of(2).is_end());
    assert!(manager.end_of(5).is_end());
}

#[test]
fn manager_erase_keeps_index_current() {
    let mut manager = AdjacencyManager::new(8);
    for h in [1u32, 3, 5] {
        manager.insert(adj(0, h)).unwrap();
    }

    // Dropping the first adjacency moves the lower end of the range.
    manager.erase(adj(0, 1)).unwrap();
    assert_eq!(manager.get(manager.begin_of(0)), Some(&adj(0, 3)));

    // Dropping the last adjacency moves the upper end.
    manager.erase(adj(0, 5)).unwrap();
    let neighbors: Vec<u32> = manager.out_neighbors(0).map(|a| a.head).collect();
    assert_eq!(neighbors, vec![3]);

    // Dropping the sole adjacency clears the entry.
    manager.erase(adj(0, 3)).unwrap();
    assert!(manager.begin_of(0).is_end());
    assert!(manager.is_empty());
}

#[test]
fn manager_erase_middle_leaves_ends() {
    let mut manager = AdjacencyManager::new(4);
    for h in [1u32, 2, 3] {
        manager.insert(adj(0, h)).unwrap();
    }
    manager.erase(adj(0, 2)).unwrap();
    assert_eq!(manager.get(manager.begin_of(0)), Some(&adj(0, 1)));
    let neighbors: Vec<u32> = manager.out_neighbors(0).map(|a| a.head).collect();
    assert_eq!(neighbors, vec![1, 3]);
}

#[test]
fn manager_insert_is_idempotent() {
    let mut manager = AdjacencyManager::new(4);
    manager.insert(adj(1, 2)).unwrap();
    manager.insert(adj(1, 2)).unwrap();
    assert_eq!(manager.len(), 1);
}

#[test]
fn manager_rejects_bad_arguments() {
    let mut manager = AdjacencyManager::new(4);
    assert!(matches!(
        manager.insert(adj(0, 4)),
        Err(GraphError::InvalidArgument(_))
    ));
    assert!(matches!(
        manager.insert(adj(9, 0)),
        Err(GraphError::InvalidArgument(_))
    ));
    assert!(matches!(
        manager.insert(adj(2, 2)),
        Err(GraphError::InvalidArgument(_))
    ));
    assert!(manager.is_empty());
}

#[test]
fn manager_kth_present() {
    let mut manager = AdjacencyManager::new(8);
    for &(t, h) in &[(5, 1), (0, 3), (2, 7), (0, 1)] {
        manager.insert(adj(t, h)).unwrap();
    }
    assert_eq!(manager.get(manager.kth_present(0)), Some(&adj(0, 1)));
    assert_eq!(manager.get(manager.kth_present(1)), Some(&adj(0, 3)));
    assert_eq!(manager.get(manager.kth_present(3)), Some(&adj(5, 1)));
    assert!(manager.kth_present(4).is_end());
}

#[test]
fn manager_first_last_are_extremal_under_stress() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut manager = AdjacencyManager::new(8);
    let mut reference: BTreeSet<Adjacency> = BTreeSet::new();

    for _ in 0..1500 {
        let tail = rng.gen_range(0..8u32);
        let head = rng.gen_range(0..8u32);
        if tail == head {
            continue;
        }
        let key = adj(tail, head);
        if rng.gen_bool(0.55) {
            manager.insert(key).unwrap();
            reference.insert(key);
        } else {
            manager.erase(key).unwrap();
            reference.remove(&key);
        }
    }

    manager.tree().assert_invariants();
    for u in 0..8u32 {
        let expected_first = reference.iter().find(|a| a.tail == u).copied();
        let expected_last = reference.iter().rev().find(|a| a.tail == u).copied();
        assert_eq!(manager.get(manager.begin_of(u)).copied(), expected_first);
        let walked: Vec<Adjacency> = manager.out_neighbors(u).collect();
        let expected: Vec<Adjacency> =
            reference.iter().filter(|a| a.tail == u).copied().collect();
        assert_eq!(walked, expected);
        if let Some(last) = expected_last {
            let end = manager.end_of(u);
            let before_end = manager.prev(end);
            assert_eq!(manager.get(before_end), Some(&last));
        }
    }
}
