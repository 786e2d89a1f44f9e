//! Codec integration tests

use treepath::{
    Node,
    codec::{CodecError, Format, JsonCodec, TextCodec},
    mutate,
};

use crate::helpers::{json, path};

#[test]
fn test_json_preserves_key_order() {
    let codec = JsonCodec::compact();
    let text = r#"{"zeta":1,"alpha":{"m":true,"b":null},"mid":[1.5,"s"]}"#;
    let node = codec.parse(text).unwrap();
    assert_eq!(codec.serialize(&node).unwrap(), text);
}

#[test]
fn test_json_scalars_keep_their_type() {
    let node = json(r#"{"i":3,"f":3.0,"big":18446744073709551615}"#);
    assert_eq!(node.as_object().unwrap().get("i"), Some(&Node::from(3)));
    assert_eq!(node.as_object().unwrap().get("f"), Some(&Node::from(3.0)));
    assert!(node.as_object().unwrap().get("big").unwrap().as_i64().is_none());
}

#[test]
fn test_edit_then_serialize() {
    let codec = JsonCodec::compact();
    let mut node = codec.parse(r#"{"a":{"b":1}}"#).unwrap();
    mutate::set(&mut node, &path("a.c[1]"), Node::from("x")).unwrap();
    assert_eq!(
        codec.serialize(&node).unwrap(),
        r#"{"a":{"b":1,"c":[null,"x"]}}"#
    );
}

#[test]
fn test_codec_errors_are_syntax_errors() {
    let err: treepath::Error = JsonCodec::default().parse("[1,").unwrap_err().into();
    assert!(err.is_syntax_error());
    assert_eq!(err.module(), "codec");

    let err: treepath::Error = Format::from_extension("ini").unwrap_err().into();
    assert!(!err.is_syntax_error());
}

#[test]
fn test_format_codec_names() {
    assert_eq!(Format::Json.codec().name(), "json");
    assert!(matches!(
        Format::from_extension("csv"),
        Err(CodecError::UnknownFormat { .. })
    ));
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_and_json_agree() {
    use treepath::codec::YamlCodec;

    let from_yaml = YamlCodec
        .parse("user:\n  name: Ada\n  tags:\n    - null\n    - x\n")
        .unwrap();
    let from_json = json(r#"{"user":{"name":"Ada","tags":[null,"x"]}}"#);
    assert_eq!(from_yaml, from_json);
}
