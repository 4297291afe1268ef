//! Operation-count evidence that list operations are O(1).
//!
//! Runs each operation once at a fixed position on lists of very different
//! sizes, with a `CountingIndex` recording predecessor-index traffic. If the
//! operations are O(1), the per-call access profile is identical whatever
//! the list length.

use poslist::{CountingIndex, IndexOps, MapIndex, PosList, Position};

type CountedList = PosList<u64, CountingIndex<MapIndex>>;

fn build(n: usize) -> (CountedList, Vec<Position>) {
    let mut list: CountedList = PosList::with_index(CountingIndex::default());
    let handles = (0..n as u64).map(|i| list.append(i)).collect();
    (list, handles)
}

/// Index accesses for one call of each operation at a mid position.
#[derive(Debug, PartialEq, Eq)]
struct Profile {
    get: IndexOps,
    prepend: IndexOps,
    insert_after: IndexOps,
    insert_before: IndexOps,
    remove: IndexOps,
}

fn profile(n: usize) -> Profile {
    let (mut list, handles) = build(n);
    let mid = handles[n / 2];

    list.index_mut().reset();
    list.get(mid).unwrap();
    let get = list.index_mut().take_ops();

    let p_pre = list.prepend(0);
    let prepend = list.index_mut().take_ops();

    let p_aft = list.insert_after(mid, 0).unwrap();
    let insert_after = list.index_mut().take_ops();

    let p_bef = list.insert_before(mid, 0).unwrap();
    let insert_before = list.index_mut().take_ops();

    list.remove(p_aft).unwrap();
    let remove = list.index_mut().take_ops();

    // Restore the original contents so the invariant check sees a clean list
    list.remove(p_bef).unwrap();
    list.remove(p_pre).unwrap();
    list.assert_invariants();

    Profile {
        get,
        prepend,
        insert_after,
        insert_before,
        remove,
    }
}

#[test]
fn index_traffic_is_flat_across_list_sizes() {
    let small = profile(10);
    let medium = profile(1_000);
    let large = profile(100_000);

    assert_eq!(small, medium);
    assert_eq!(medium, large);
}

#[test]
fn per_operation_index_traffic_is_bounded() {
    let p = profile(1_000);

    // get/next validate with exactly one lookup and touch nothing else
    assert_eq!(p.get.lookups, 1);
    assert_eq!(p.get.sets + p.get.removes, 0);

    // prepend: entry for the new node, repoint the old head
    assert_eq!(p.prepend.lookups, 0);
    assert!(p.prepend.sets <= 2);

    // splices: one validating lookup, bounded fix-ups
    assert_eq!(p.insert_after.lookups, 1);
    assert!(p.insert_after.sets <= 2);
    assert_eq!(p.insert_before.lookups, 1);
    assert!(p.insert_before.sets <= 3);

    // remove: validate, repoint successor, delete the target entry
    assert_eq!(p.remove.lookups, 1);
    assert!(p.remove.sets <= 1);
    assert_eq!(p.remove.removes, 1);
}

#[test]
fn append_touches_the_index_once() {
    let (mut list, _) = build(1_000);

    list.index_mut().reset();
    list.append(0);
    let ops = list.index_mut().take_ops();

    assert_eq!(ops.lookups, 0);
    assert_eq!(ops.sets, 1);
    assert_eq!(ops.removes, 0);
}

#[test]
fn counting_decorator_does_not_change_behavior() {
    let (mut counted, handles) = build(100);
    let mut plain: PosList<u64> = PosList::new();
    let plain_handles: Vec<Position> = (0..100u64).map(|i| plain.append(i)).collect();

    counted.remove(handles[40]).unwrap();
    plain.remove(plain_handles[40]).unwrap();
    counted.insert_before(handles[10], 777).unwrap();
    plain.insert_before(plain_handles[10], 777).unwrap();

    let a: Vec<u64> = counted.iter().copied().collect();
    let b: Vec<u64> = plain.iter().copied().collect();
    assert_eq!(a, b);

    counted.assert_invariants();
    plain.assert_invariants();
}
