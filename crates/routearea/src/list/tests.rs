use super::*;
use crate::driver::{Driver, SortKey};
use proptest::prelude::*;

fn roster(raw: &[(&str, f64)]) -> DriverList {
    raw.iter().map(|&(n, a)| Driver::new(n, a)).collect()
}

fn names(list: &DriverList) -> Vec<&str> {
    list.iter().map(|d| d.name.as_str()).collect()
}

/// Forward and backward chains agree on length and (mirrored) order.
fn assert_links_consistent<T: std::fmt::Debug>(list: &OrderedList<T>) {
    let fwd: Vec<String> = list.iter().map(|v| format!("{v:?}")).collect();
    let mut bwd: Vec<String> = list.iter_rev().map(|v| format!("{v:?}")).collect();
    bwd.reverse();
    assert_eq!(fwd, bwd);
    assert_eq!(fwd.len(), list.size());
    assert_eq!(list.is_empty(), list.head_id().is_none());
    assert_eq!(list.is_empty(), list.tail_id().is_none());
}

#[test]
fn empty_list_has_no_ends() {
    let mut list: OrderedList<i32> = OrderedList::new();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert!(list.head().is_none() && list.tail().is_none());
    assert_eq!(list.sort_ascending(), 0);
    assert_eq!(list.to_string(), "");
}

#[test]
fn append_maintains_both_chains() {
    let mut list = OrderedList::new();
    let first = list.append(1);
    assert_eq!(list.head_id(), Some(first));
    assert_eq!(list.tail_id(), Some(first));
    list.append(2);
    let last = list.append(3);
    assert_eq!(list.tail_id(), Some(last));
    assert_eq!(list.node(last).and_then(Node::prev).map(NodeId::index), Some(1));
    assert_eq!(list.node(first).and_then(Node::prev), None);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(list.iter_rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    assert_links_consistent(&list);
}

#[test]
fn generic_sorts_use_natural_order() {
    let mut list: OrderedList<i32> = [5, 1, 4, 2, 3].into_iter().collect();
    list.sort_ascending();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    list.sort_descending();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    assert_links_consistent(&list);
}

#[test]
fn sorts_converge_on_inputs_needing_many_passes() {
    // Reverse order needs n-1 passes; a single pass would leave it unsorted.
    let mut list: OrderedList<u32> = (0..20).rev().collect();
    let swaps = list.sort_ascending();
    assert_eq!(swaps, 20 * 19 / 2);
    assert!(list.is_sorted_by(Direction::Asc, Ord::cmp));
}

#[test]
fn sorting_keeps_node_ids_in_place() {
    let mut list: OrderedList<i32> = [3, 2, 1].into_iter().collect();
    let head = list.head_id();
    let tail = list.tail_id();
    list.sort_ascending();
    assert_eq!(list.head_id(), head);
    assert_eq!(list.tail_id(), tail);
    assert_eq!(list.head(), Some(&1));
    assert_eq!(list.tail(), Some(&3));
}

#[test]
fn search_is_trimmed_and_case_insensitive() {
    let list = roster(&[("Bob", 4.0), ("Alice", 2.0)]);
    let hit = list.search_by_name(" alice ").unwrap();
    assert_eq!(hit.name, "Alice");
    assert!(list.search_by_name("carol").is_none());
    assert!(DriverList::new().search_by_name("bob").is_none());
}

#[test]
fn search_returns_first_match_in_current_order() {
    let mut list = roster(&[("Sam", 9.0), ("sam", 1.0)]);
    assert_eq!(list.search_by_name("SAM").map(|d| d.area), Some(9.0));
    list.sort_by_area(Direction::Asc);
    assert_eq!(list.search_by_name("SAM").map(|d| d.area), Some(1.0));
}

#[test]
fn sort_by_name_is_case_sensitive_lexical() {
    let mut list = roster(&[("bob", 1.0), ("Carol", 2.0), ("alice", 3.0), ("Bob", 4.0)]);
    list.sort_by_name(Direction::Asc);
    assert_eq!(names(&list), vec!["Bob", "Carol", "alice", "bob"]);
    list.sort_by_name(Direction::Dsc);
    assert_eq!(names(&list), vec!["bob", "alice", "Carol", "Bob"]);
    assert_links_consistent(&list);
}

#[test]
fn sort_by_area_both_directions() {
    let mut list = roster(&[("a", 3.0), ("b", 1.0), ("c", 2.0)]);
    list.sort_by_area(Direction::Asc);
    assert_eq!(names(&list), vec!["b", "c", "a"]);
    list.sort_by_area(Direction::Dsc);
    assert_eq!(names(&list), vec!["a", "c", "b"]);
}

#[test]
fn area_ties_keep_input_order() {
    let mut list = roster(&[("x", 2.0), ("y", 1.0), ("z", 2.0), ("w", 1.0)]);
    list.sort_by_area(Direction::Asc);
    assert_eq!(names(&list), vec!["y", "w", "x", "z"]);
    list.sort_by_area(Direction::Dsc);
    assert_eq!(names(&list), vec!["x", "z", "y", "w"]);
}

#[test]
fn name_ties_keep_input_order() {
    let mut list = roster(&[("Kim", 3.0), ("Ann", 0.0), ("Kim", 1.0), ("Kim", 2.0)]);
    list.sort_by_name(Direction::Asc);
    let areas: Vec<f64> = list.iter().map(|d| d.area).collect();
    assert_eq!(areas, vec![0.0, 3.0, 1.0, 2.0]);
}

#[test]
fn natural_order_sorts_keep_equal_names_in_input_order() {
    let mut list = roster(&[("Kim", 3.0), ("Ann", 0.0), ("Kim", 1.0)]);
    list.sort_ascending();
    let areas: Vec<f64> = list.iter().map(|d| d.area).collect();
    assert_eq!(areas, vec![0.0, 3.0, 1.0]);
    list.sort_descending();
    let areas: Vec<f64> = list.iter().map(|d| d.area).collect();
    assert_eq!(areas, vec![3.0, 1.0, 0.0]);
    assert_links_consistent(&list);
}

#[test]
fn display_lists_one_driver_per_line() {
    let list = roster(&[("Bob", 4.0), ("Al", 1.5)]);
    assert_eq!(list.to_string(), "Bob\t4.00\nAl\t1.50\n");
}

fn driver_strategy() -> impl Strategy<Value = Vec<(String, f64)>> {
    prop::collection::vec(("[A-Ca-c]{1,3}", 0.0f64..50.0), 0..24)
}

/// Few short names, so duplicates are common.
fn dup_name_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ABb]{1,2}", 0..24)
}

/// Drivers tagged by input position through their area.
fn tagged_roster(names: &[String]) -> DriverList {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| Driver::new(n.clone(), i as f64))
        .collect()
}

fn tags(list: &DriverList) -> Vec<f64> {
    list.iter().map(|d| d.area).collect()
}

fn build(raw: &[(String, f64)]) -> DriverList {
    raw.iter().map(|(n, a)| Driver::new(n.clone(), *a)).collect()
}

proptest! {
    #[test]
    fn sorted_output_satisfies_key_order(raw in driver_strategy(), by_area in any::<bool>(), asc in any::<bool>()) {
        let key = if by_area { SortKey::Area } else { SortKey::Name };
        let dir = if asc { Direction::Asc } else { Direction::Dsc };
        let mut list = build(&raw);
        list.sort_by_key(key, dir);
        prop_assert!(list.is_sorted_by_key(key, dir));
        prop_assert_eq!(list.size(), raw.len());
        assert_links_consistent(&list);
    }

    #[test]
    fn sorting_is_idempotent(raw in driver_strategy()) {
        let mut once = build(&raw);
        once.sort_by_name(Direction::Asc);
        let mut twice = once.clone();
        prop_assert_eq!(twice.sort_by_name(Direction::Asc), 0);
        let a: Vec<_> = once.iter().map(|d| (d.name.clone(), d.area)).collect();
        let b: Vec<_> = twice.iter().map(|d| (d.name.clone(), d.area)).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn sorts_are_stable(raw in driver_strategy(), by_area in any::<bool>(), asc in any::<bool>()) {
        let key = if by_area { SortKey::Area } else { SortKey::Name };
        let dir = if asc { Direction::Asc } else { Direction::Dsc };
        // Tag each record with its input position.
        let tagged: Vec<(usize, Driver)> = raw
            .iter()
            .enumerate()
            .map(|(i, (n, a))| (i, Driver::new(n.clone(), *a)))
            .collect();
        let mut list: OrderedList<(usize, Driver)> = tagged.iter().cloned().collect();
        list.sort_by(dir, |a, b| key.compare(&a.1, &b.1));

        let mut expected = tagged.clone();
        expected.sort_by(|a, b| match dir {
            Direction::Asc => key.compare(&a.1, &b.1),
            Direction::Dsc => key.compare(&b.1, &a.1),
        });
        let got: Vec<usize> = list.iter().map(|(i, _)| *i).collect();
        let want: Vec<usize> = expected.iter().map(|(i, _)| *i).collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn natural_order_sorts_are_stable(names in dup_name_strategy(), asc in any::<bool>()) {
        let mut list = tagged_roster(&names);
        let mut expected: Vec<(String, usize)> =
            names.iter().cloned().enumerate().map(|(i, n)| (n, i)).collect();
        if asc {
            list.sort_ascending();
            expected.sort_by(|a, b| a.0.cmp(&b.0));
        } else {
            list.sort_descending();
            expected.sort_by(|a, b| b.0.cmp(&a.0));
        }
        let want: Vec<f64> = expected.iter().map(|(_, i)| *i as f64).collect();
        prop_assert_eq!(tags(&list), want);
        assert_links_consistent(&list);
    }

    #[test]
    fn natural_order_sorts_are_idempotent(names in dup_name_strategy(), asc in any::<bool>()) {
        let mut list = tagged_roster(&names);
        if asc {
            list.sort_ascending();
        } else {
            list.sort_descending();
        }
        let once = tags(&list);
        let second_swaps = if asc { list.sort_ascending() } else { list.sort_descending() };
        prop_assert_eq!(second_swaps, 0);
        prop_assert_eq!(tags(&list), once);
    }

    #[test]
    fn key_sorts_are_idempotent(names in dup_name_strategy(), by_area in any::<bool>(), asc in any::<bool>()) {
        let key = if by_area { SortKey::Area } else { SortKey::Name };
        let dir = if asc { Direction::Asc } else { Direction::Dsc };
        let mut list = tagged_roster(&names);
        list.sort_by_key(key, dir);
        let once = tags(&list);
        prop_assert_eq!(list.sort_by_key(key, dir), 0);
        prop_assert_eq!(tags(&list), once);
    }
}
