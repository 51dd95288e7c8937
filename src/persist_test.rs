use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::doc::{Content, ElementKind};

fn sample_records() -> Vec<ElementRecord> {
    vec![
        ElementRecord {
            id: Uuid::new_v4(),
            kind: ElementKind::Text,
            x: 10,
            y: 20,
            width: 200,
            height: 150,
            content: json!({ "text": "Welcome" }),
        },
        ElementRecord {
            id: Uuid::new_v4(),
            kind: ElementKind::Bio,
            x: 0,
            y: 200,
            width: 200,
            height: 150,
            content: serde_json::Value::Null,
        },
    ]
}

#[test]
fn to_json_then_load_json_keeps_order() {
    let records = sample_records();
    let json = to_json(&records).unwrap();
    let elements = load_json(&json).unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].id, records[0].id);
    assert_eq!(elements[0].content, Content::Text { text: "Welcome".into() });
    assert_eq!(elements[1].id, records[1].id);
    assert_eq!(elements[1].content, Content::Bio);
}

#[test]
fn load_json_rejects_malformed() {
    assert!(matches!(load_json("[{"), Err(LayoutError::Json(_))));
}

#[test]
fn load_json_rejects_bad_content() {
    let json = json!([{
        "id": Uuid::new_v4(), "type": "button", "x": 0, "y": 0, "width": 200, "height": 60,
        "content": "Click me",
    }])
    .to_string();
    assert!(matches!(load_json(&json), Err(LayoutError::Content { kind: ElementKind::Button, .. })));
}

#[test]
fn load_json_empty_array() {
    assert!(load_json("[]").unwrap().is_empty());
}

#[test]
fn memory_sink_keeps_last_save() {
    let mut sink = MemorySink::default();
    let records = sample_records();
    sink.save(&records).unwrap();
    sink.save(&records[..1]).unwrap();
    assert_eq!(sink.saved.unwrap().len(), 1);
}

#[test]
fn json_file_sink_round_trips_through_disk() {
    let path = std::env::temp_dir().join(format!("freeform-{}.json", Uuid::new_v4()));
    let records = sample_records();
    JsonFileSink::new(&path).save(&records).unwrap();
    let loaded = load_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1].id, records[1].id);
}

#[test]
fn load_file_missing_is_io_error() {
    let path = std::env::temp_dir().join(format!("freeform-missing-{}.json", Uuid::new_v4()));
    assert!(matches!(load_file(&path), Err(LayoutError::Io(_))));
}
