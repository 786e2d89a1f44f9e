//! Path parsing integration tests

use treepath::{
    mutate::StructuralError,
    path::{Path, PathBuilder, PathError, Step},
};

#[test]
fn test_grammar_examples() {
    let cases: Vec<(&str, Vec<Step>)> = vec![
        ("3", vec![Step::Name("3")]),
        ("a.b.c", vec![Step::Name("a"), Step::Name("b"), Step::Name("c")]),
        ("a[0][1]", vec![Step::Name("a"), Step::Index(0), Step::Index(1)]),
        ("[2]", vec![Step::Index(2)]),
        ("", vec![]),
    ];

    for (input, expected) in cases {
        let path = Path::parse(input).unwrap();
        let steps: Vec<Step> = path.steps().collect();
        assert_eq!(steps, expected, "steps of '{input}'");
    }
}

#[test]
fn test_segment_structure() {
    let path = Path::parse("a[0][1].b").unwrap();
    assert_eq!(path.len(), 2);

    let first = &path.segments()[0];
    assert_eq!(first.name(), Some("a"));
    assert_eq!(first.indices(), &[0, 1]);

    let second = &path.segments()[1];
    assert_eq!(second.name(), Some("b"));
    assert!(second.indices().is_empty());
}

#[test]
fn test_from_str_and_try_from() {
    let parsed: Path = "x.y[3]".parse().unwrap();
    let converted = Path::try_from("x.y[3]").unwrap();
    assert_eq!(parsed, converted);
    assert_eq!(parsed.to_string(), "x.y[3]");
}

#[test]
fn test_error_taxonomy() {
    let cases = vec![
        ("a[1", "unterminated"),
        ("a[x]", "invalid"),
        ("a[-2]", "invalid"),
        ("a.", "unexpected"),
        ("a[0]b", "unexpected"),
        ("a..b", "empty"),
        (".a", "empty"),
    ];

    for (input, kind) in cases {
        let err = Path::parse(input).unwrap_err();
        let actual = match err {
            PathError::UnterminatedIndex { .. } => "unterminated",
            PathError::InvalidIndex { .. } => "invalid",
            PathError::UnexpectedChar { .. } => "unexpected",
            PathError::EmptyPathWhereSegmentRequired { .. } => "empty",
            _ => "other",
        };
        assert_eq!(actual, kind, "error kind for '{input}'");
    }
}

#[test]
fn test_error_positions_and_messages() {
    let err = Path::parse("items[4").unwrap_err();
    assert_eq!(err.position(), 5);
    assert!(err.is_index_error());
    assert_eq!(err.to_string(), "Unterminated index starting at position 5");

    let err = Path::parse("a[1]?").unwrap_err();
    assert_eq!(err.position(), 4);
    assert!(!err.is_index_error());
    assert!(err.to_string().contains("'?'"));
}

#[test]
fn test_builder_from_host_values() {
    let host_indices: Vec<i64> = vec![2, 0];
    let mut builder = PathBuilder::new().name("rows").unwrap();
    for index in host_indices {
        builder = builder.signed_index(index).unwrap();
    }
    let path = builder.name("cell").unwrap().build();
    assert_eq!(path.to_string(), "rows[2][0].cell");

    assert_eq!(
        PathBuilder::new().signed_index(-5).unwrap_err(),
        StructuralError::NegativeIndex { index: -5 }
    );
}
