//! Property tests for the path engine

use proptest::prelude::*;
use treepath::{
    Node, Object,
    codec::{JsonCodec, TextCodec},
    coerce::{self, CoercionOptions, DynMap},
    mutate, navigate,
    path::{Path, PathBuilder},
};

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::null()),
        any::<bool>().prop_map(Node::from),
        any::<i64>().prop_map(Node::from),
        // Quarters round-trip through decimal text exactly
        (-4000i32..4000).prop_map(|n| Node::from(n as f64 / 4.0)),
        "[a-z ]{0,8}".prop_map(Node::from),
    ]
}

fn tree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Node::Array),
            prop::collection::vec(("[a-z]{0,3}", inner), 0..6)
                .prop_map(|entries| Node::Object(entries.into_iter().collect::<Object>())),
        ]
    })
}

/// Paths that start with a name, so they are writable on an object root.
fn writable_path() -> impl Strategy<Value = Path> {
    prop::collection::vec(("[a-z]{1,3}", prop::collection::vec(0usize..5, 0..3)), 1..5).prop_map(
        |segments| {
            let mut builder = PathBuilder::new();
            for (name, indices) in segments {
                builder = builder.name(name).expect("generated names are valid");
                for index in indices {
                    builder = builder.index(index);
                }
            }
            builder.build()
        },
    )
}

proptest! {
    #[test]
    fn json_round_trip(node in tree()) {
        let codec = JsonCodec::compact();
        let text = codec.serialize(&node).unwrap();
        prop_assert_eq!(codec.parse(&text).unwrap(), node);
    }

    #[test]
    fn canonical_path_reparses(path in writable_path()) {
        prop_assert_eq!(Path::parse(&path.to_string()).unwrap(), path);
    }

    #[test]
    fn set_then_get_returns_value(path in writable_path(), value in leaf()) {
        let mut root = Node::object();
        mutate::set(&mut root, &path, value.clone()).unwrap();
        prop_assert_eq!(navigate::get(&root, &path), Some(&value));
    }

    #[test]
    fn set_is_idempotent(path in writable_path(), value in leaf()) {
        let mut root = Node::object();
        mutate::set(&mut root, &path, value.clone()).unwrap();
        let once = root.clone();
        mutate::set(&mut root, &path, value).unwrap();
        prop_assert_eq!(root, once);
    }

    #[test]
    fn failed_set_leaves_tree_unchanged(
        node in tree(),
        path in writable_path(),
        value in leaf(),
    ) {
        let mut root = Node::Object([("r".to_string(), node)].into_iter().collect());
        let before = root.clone();
        if mutate::set(&mut root, &path, value).is_err() {
            prop_assert_eq!(root, before);
        }
    }

    #[test]
    fn object_keys_keep_insertion_order(keys in prop::collection::vec("[a-z]{1,4}", 1..12)) {
        let mut root = Node::object();
        let mut expected: Vec<String> = Vec::new();
        for (i, key) in keys.iter().enumerate() {
            mutate::set(&mut root, &Path::parse(key).unwrap(), Node::from(i as i64)).unwrap();
            if !expected.contains(key) {
                expected.push(key.clone());
            }
        }
        let actual: Vec<String> = root.as_object().unwrap().keys().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn shuffled_dense_keys_become_array(order in Just((0..8i64).collect::<Vec<_>>()).prop_shuffle()) {
        let map: DynMap = order.iter().map(|&i| (i, i * 10)).collect();
        let node = coerce::from_map(&map, None, &CoercionOptions::default());
        let expected: Vec<Node> = (0..8i64).map(|i| Node::from(i * 10)).collect();
        prop_assert_eq!(node, Node::Array(expected));
    }

    #[test]
    fn gapped_keys_become_object(gap in 0i64..6) {
        let map: DynMap = (0..6i64).filter(|&i| i != gap).map(|i| (i, i)).chain([(6, 6)]).collect();
        let node = coerce::from_map(&map, None, &CoercionOptions::default());
        prop_assert!(node.as_object().is_some());
        prop_assert_eq!(node.len(), 6);
    }
}
