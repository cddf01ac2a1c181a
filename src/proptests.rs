use super::*;

use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn validate_tree(t: &Tree) {
    let mut stack = vec![ROOT];
    let mut reachable = 0usize;
    while let Some(idx) = stack.pop() {
        reachable += 1;
        let node = &t.nodes[idx];
        for pair in node.edges.windows(2) {
            assert!(
                pair[0].key < pair[1].key,
                "edge keys must be strictly increasing"
            );
        }
        for edge in node.edges.iter() {
            assert!(edge.child > idx, "children are created after their parent");
            stack.push(edge.child);
        }
    }
    assert_eq!(reachable, t.nodes.len(), "every node is reachable exactly once");
}

fn addresses() -> impl Strategy<Value = Vec<([u8; 4], String)>> {
    vec((any::<[u8; 4]>(), "[a-z]{1,8}"), 0..64)
}

proptest! {
    #[test]
    fn prop_structure_stays_valid(entries in addresses()) {
        let mut tree = Tree::new();
        for (address, label) in entries.iter() {
            tree.insert(address, label);
            validate_tree(&tree);
        }
    }

    #[test]
    fn prop_exact_match_first_writer(entries in addresses()) {
        let mut tree = Tree::new();
        let mut expected: BTreeMap<[u8; 4], &str> = BTreeMap::new();
        for (address, label) in entries.iter() {
            tree.insert(address, label);
            expected.entry(*address).or_insert(label);
        }
        for (address, label) in expected.iter() {
            prop_assert_eq!(tree.lookup(address), Ok(*label));
        }
    }

    #[test]
    fn prop_counter_is_per_octet(entries in addresses()) {
        let mut tree = Tree::new();
        let mut previous = 0;
        for (i, (address, label)) in entries.iter().enumerate() {
            tree.insert(address, label);
            prop_assert!(tree.size() >= previous);
            prop_assert_eq!(tree.size(), (i + 1) * 4);
            previous = tree.size();
        }
    }

    #[test]
    fn prop_closest_lower_edge(
        keys in btree_set(any::<u8>(), 1..16),
        octet in any::<u8>(),
    ) {
        let mut tree = Tree::new();
        for key in keys.iter() {
            tree.insert(&[10, 0, 0, *key], &format!("k{}", key));
        }
        let result = tree.lookup(&[10, 0, 0, octet]);
        match keys.range(..=octet).next_back() {
            Some(key) => {
                let expected = format!("k{}", key);
                prop_assert_eq!(result, Ok(expected.as_str()));
            }
            None => prop_assert_eq!(result, Err(NotFound)),
        }
    }

    #[test]
    fn prop_insert_never_removes_labels(entries in addresses(), more in addresses()) {
        let mut tree = Tree::new();
        for (address, label) in entries.iter() {
            tree.insert(address, label);
        }
        let before: Vec<String> = entries
            .iter()
            .map(|(address, _)| tree.lookup(address).map(str::to_owned))
            .collect::<Result<_, _>>()
            .unwrap();
        let size = tree.size();
        let nodes = tree.node_count();
        for (address, label) in more.iter() {
            tree.insert(address, label);
        }
        prop_assert!(tree.size() >= size);
        prop_assert!(tree.node_count() >= nodes);
        for ((address, _), label) in entries.iter().zip(before.iter()) {
            prop_assert_eq!(tree.lookup(address), Ok(label.as_str()));
        }
    }
}
