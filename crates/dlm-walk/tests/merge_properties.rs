use dlm_core::normalize;
use dlm_schema::SchemaNode;
use dlm_walk::merge_validate_normalize;
use proptest::prelude::*;
use serde_json::{Value, json};

fn schema() -> SchemaNode {
    SchemaNode::parse(&json!({
        "title": {"type": "string"},
        "label": {"type": "string", "required": true, "default": "Not Set"},
        "nested": {"inner": {"type": "string"}},
        "tags": [{"name": {"type": "string"}}]
    }))
    .unwrap()
}

proptest! {
    #[test]
    fn strings_are_normalized_or_defaulted(
        title in ".{0,24}",
        label in ".{0,24}",
        inner in ".{0,24}",
        tags in prop::collection::vec(".{0,12}", 0..4),
    ) {
        let params = json!({
            "title": title,
            "label": label,
            "nested": {"inner": inner},
            "tags": tags.iter().map(|name| json!({"name": name})).collect::<Vec<_>>(),
        });

        let out = merge_validate_normalize(&schema(), &params, "prop").unwrap();

        prop_assert_eq!(&out["title"], &Value::String(normalize(&title)));
        prop_assert_eq!(&out["nested"]["inner"], &Value::String(normalize(&inner)));
        if label.trim().is_empty() {
            prop_assert_eq!(&out["label"], &json!("Not Set"));
        } else {
            prop_assert_eq!(&out["label"], &Value::String(normalize(&label)));
        }
        let names: Vec<Value> = tags.iter().map(|name| Value::String(normalize(name))).collect();
        let got: Vec<Value> = out
            .get("tags")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(|item| item["name"].clone()).collect())
            .unwrap_or_default();
        prop_assert_eq!(got, names);
    }
}
