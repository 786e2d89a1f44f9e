//! Document load/save and string-path integration tests

use std::{
    fmt::Debug,
    fs,
    sync::{Arc, Mutex},
};

use tempfile::TempDir;
use tracing::{
    Event, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
};
use treepath::{Document, Node, codec::JsonCodec};

use crate::helpers::assert_json;

#[test]
fn test_load_edit_save_json() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("config.json");
    fs::write(&file, r#"{"server":{"port":80}}"#).unwrap();

    let mut doc = Document::load(&file).unwrap();
    assert_eq!(doc.get_as::<i64>("server.port"), Some(80));

    doc.set("server.port", 8080).unwrap();
    doc.set("server.hosts[0]", "a.internal").unwrap();
    doc.save(&file).unwrap();

    let reloaded = Document::load(&file).unwrap();
    assert_json(
        reloaded.root(),
        r#"{"server":{"port":8080,"hosts":["a.internal"]}}"#,
    );
}

#[cfg(feature = "yaml")]
#[test]
fn test_load_yaml_save_json() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("in.yaml");
    let target = dir.path().join("out.json");
    fs::write(&source, "b: 1\na: [x, y]\n").unwrap();

    let doc = Document::load(&source).unwrap();
    doc.save(&target).unwrap();

    let reloaded = Document::load(&target).unwrap();
    assert_eq!(reloaded, doc);
    assert_json(reloaded.root(), r#"{"b":1,"a":["x","y"]}"#);
}

#[test]
fn test_load_errors() {
    let dir = TempDir::new().unwrap();

    let missing = Document::load(dir.path().join("missing.json")).unwrap_err();
    assert!(missing.is_io_error());

    let unknown = dir.path().join("notes.txt");
    fs::write(&unknown, "{}").unwrap();
    let err = Document::load(&unknown).unwrap_err();
    assert_eq!(err.module(), "codec");

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{").unwrap();
    assert!(Document::load(&broken).unwrap_err().is_syntax_error());
}

#[test]
fn test_missing_versus_malformed() {
    let doc = Document::new();
    assert_eq!(doc.get("a.b[3]").unwrap(), None);
    assert!(doc.get("a.b[3").unwrap_err().is_path_error());
}

#[test]
fn test_typed_reads() {
    let mut doc = Document::new();
    doc.set("flag", true).unwrap();
    doc.set("ratio", 0.25).unwrap();
    doc.set("label", String::from("ok")).unwrap();

    assert_eq!(doc.get_as::<bool>("flag"), Some(true));
    assert_eq!(doc.get_as::<f64>("ratio"), Some(0.25));
    assert_eq!(doc.get_as::<String>("label"), Some("ok".to_string()));
    assert_eq!(doc.get_as::<i64>("label"), None);
}

#[test]
fn test_conflict_reports_and_leaves_document_unchanged() {
    let mut doc = Document::new();
    doc.set("a.b", 1).unwrap();
    let before = doc.clone();

    let err = doc.set("a.b.c[0]", "x").unwrap_err();
    assert!(err.is_type_error());
    assert_eq!(
        err.to_string(),
        "Type conflict at 'a.b': expected object, found int"
    );
    assert_eq!(doc, before);
}

#[test]
fn test_serde_transparent() {
    let mut doc = Document::new();
    doc.set("k", Node::null()).unwrap();
    assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"k":null}"#);

    let parsed: Document = serde_json::from_str(r#"[1,{"x":2}]"#).unwrap();
    assert_eq!(parsed.get_as::<i64>("[1].x"), Some(2));
}

#[test]
fn test_explicit_codec_ignores_extension() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("settings.conf");
    fs::write(&file, r#"{"a":1}"#).unwrap();

    assert!(Document::load(&file).is_err());

    let codec = JsonCodec::compact();
    let mut doc = Document::load_with(&file, &codec).unwrap();
    doc.set("b[0]", "x").unwrap();
    doc.save_with(&file, &codec).unwrap();

    assert_eq!(fs::read_to_string(&file).unwrap(), r#"{"a":1,"b":["x"]}"#);
}

/// Collects the message of every event it sees.
#[derive(Clone, Default)]
struct Messages(Arc<Mutex<Vec<String>>>);

struct MessageVisitor(String);

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Messages {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0.lock().unwrap().push(visitor.0);
    }
}

#[test]
fn test_load_logs_only_after_successful_parse() {
    let dir = TempDir::new().unwrap();
    let broken = dir.path().join("broken.json");
    let valid = dir.path().join("valid.json");
    fs::write(&broken, "{").unwrap();
    fs::write(&valid, "{}").unwrap();

    let messages = Messages::default();
    let subscriber = tracing_subscriber::registry().with(messages.clone());
    tracing::subscriber::with_default(subscriber, || {
        assert!(Document::load(&broken).is_err());
        assert!(messages.0.lock().unwrap().iter().all(|m| m != "Loaded document"));

        Document::load(&valid).unwrap();
        assert!(messages.0.lock().unwrap().iter().any(|m| m == "Loaded document"));
    });
}
