//! Write traversal integration tests

use treepath::{
    Node,
    mutate::{self, MAX_INDEX, StructuralError},
    navigate,
    node::NodeKind,
    path::Path,
};

use crate::helpers::{assert_json, json, keys, path};

#[test]
fn test_user_scenario() {
    let mut root = Node::object();

    mutate::set(&mut root, &path("user.name"), Node::from("Ada")).unwrap();
    assert_json(&root, r#"{"user":{"name":"Ada"}}"#);

    mutate::set(&mut root, &path("user.tags[1]"), Node::from("x")).unwrap();
    assert_json(&root, r#"{"user":{"name":"Ada","tags":[null,"x"]}}"#);

    assert_eq!(
        navigate::get(&root, &path("user.tags[0]")),
        Some(&Node::null())
    );
    assert_eq!(navigate::get(&root, &path("user.missing")), None);
}

#[test]
fn test_padding_on_empty_array() {
    let mut root = Node::array();
    mutate::set(&mut root, &path("[3]"), Node::from(true)).unwrap();
    assert_json(&root, "[null,null,null,true]");
}

#[test]
fn test_overwrite_keeps_key_position() {
    let mut root = json(r#"{"a":1,"b":2,"c":3}"#);
    mutate::set(&mut root, &path("b"), json(r#"{"nested":true}"#)).unwrap();
    mutate::set(&mut root, &path("d"), Node::from(4)).unwrap();

    assert_eq!(keys(&root), vec!["a", "b", "c", "d"]);
    assert_json(&root, r#"{"a":1,"b":{"nested":true},"c":3,"d":4}"#);
}

#[test]
fn test_overwrite_existing_element() {
    let mut root = json(r#"{"list":[1,2,3]}"#);
    mutate::set(&mut root, &path("list[1]"), Node::from("two")).unwrap();
    assert_json(&root, r#"{"list":[1,"two",3]}"#);
}

#[test]
fn test_deep_mixed_creation() {
    let mut root = Node::object();
    mutate::set(&mut root, &path("a[1].b[0][2].c"), Node::from(1)).unwrap();
    assert_json(&root, r#"{"a":[null,{"b":[[null,null,{"c":1}]]}]}"#);
}

#[test]
fn test_descends_into_existing_containers() {
    let mut root = json(r#"{"a":{"keep":1},"list":[{"x":1}]}"#);
    mutate::set(&mut root, &path("a.new"), Node::from(2)).unwrap();
    mutate::set(&mut root, &path("list[0].y"), Node::from(3)).unwrap();
    assert_json(&root, r#"{"a":{"keep":1,"new":2},"list":[{"x":1,"y":3}]}"#);
}

#[test]
fn test_conflict_names_offending_prefix() {
    let mut root = json(r#"{"user":{"tags":"not a list"}}"#);
    let before = root.clone();

    let err = mutate::set(&mut root, &path("user.tags[0]"), Node::from("x")).unwrap_err();
    assert_eq!(
        err,
        StructuralError::TypeConflict {
            path: "user.tags".to_string(),
            expected: NodeKind::Array,
            found: NodeKind::String,
        }
    );
    assert_eq!(
        err.to_string(),
        "Type conflict at 'user.tags': expected array, found string"
    );
    assert_eq!(root, before);
}

#[test]
fn test_conflict_inside_index_chain() {
    let mut root = json(r#"{"grid":[[1],5]}"#);
    let err = mutate::set(&mut root, &path("grid[1][0]"), Node::from(0)).unwrap_err();
    assert_eq!(err.path(), Some("grid[1]"));

    let err = mutate::set(&mut root, &path("grid[0].x"), Node::from(0)).unwrap_err();
    assert!(matches!(
        err,
        StructuralError::TypeConflict { expected: NodeKind::Object, found: NodeKind::Array, .. }
    ));
}

#[test]
fn test_scalar_root_is_rejected() {
    for mut root in [Node::null(), Node::from(1), Node::from("s")] {
        let err = mutate::set(&mut root, &path("a"), Node::from(1)).unwrap_err();
        assert!(err.is_type_conflict());
    }
}

#[test]
fn test_empty_path_is_rejected() {
    let mut root = Node::object();
    assert_eq!(
        mutate::set(&mut root, &Path::root(), Node::from(1)),
        Err(StructuralError::EmptyPath)
    );
}

#[test]
fn test_set_is_idempotent() {
    let mut once = Node::object();
    mutate::set(&mut once, &path("a[2].b"), Node::from(1)).unwrap();

    let mut twice = once.clone();
    mutate::set(&mut twice, &path("a[2].b"), Node::from(1)).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_remove_then_get() {
    let mut root = json(r#"{"a":{"b":1,"c":2}}"#);
    assert_eq!(mutate::remove(&mut root, &path("a.b")), Some(Node::from(1)));
    assert_eq!(navigate::get(&root, &path("a.b")), None);
    assert_eq!(keys(navigate::get(&root, &path("a")).unwrap()), vec!["c"]);
}

#[test]
fn test_max_usize_index_is_rejected() {
    let mut root = Node::object();
    let err = mutate::set(&mut root, &path("a[18446744073709551615]"), Node::from(1)).unwrap_err();
    assert_eq!(
        err,
        StructuralError::IndexTooLarge {
            path: "a".to_string(),
            index: usize::MAX,
            max: MAX_INDEX,
        }
    );
    assert_eq!(root, Node::object());

    let mut root = Node::array();
    let max = Path::parse(&format!("[{}]", usize::MAX)).unwrap();
    let err = mutate::set(&mut root, &max, Node::from(1)).unwrap_err();
    assert!(err.is_index_too_large());
    assert_eq!(err.path(), Some("(root)"));
    assert_eq!(root, Node::array());
}

#[test]
fn test_index_past_limit_leaves_tree_unchanged() {
    let mut root = json(r#"{"keep":1}"#);
    let deep = path(&format!("new.rows[{}].cell", MAX_INDEX + 1));

    let err = mutate::set(&mut root, &deep, Node::from("x")).unwrap_err();
    assert_eq!(err.path(), Some("new.rows"));
    assert_eq!(
        err.to_string(),
        format!(
            "Index {} at 'new.rows' exceeds the maximum array index {MAX_INDEX}",
            MAX_INDEX + 1
        )
    );
    // No intermediate containers were created before the rejection
    assert_json(&root, r#"{"keep":1}"#);
}

#[test]
fn test_large_index_within_existing_document() {
    let mut root = json(r#"{"rows":[]}"#);
    mutate::set(&mut root, &path("rows[1000]"), Node::from(true)).unwrap();
    assert_eq!(navigate::get(&root, &path("rows")).map(Node::len), Some(1001));
}
