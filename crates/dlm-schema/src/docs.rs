//! The reserved `docs` block.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::path::FieldPath;

/// Free-form documentation attached to a branch.
///
/// Never part of a payload: traversals skip it at every level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Docs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Example payload showing the structure callers are expected to send.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure_expected: Option<Value>,
}

impl Docs {
    /// Read the known keys of a `docs` block. Unusable metadata is logged and
    /// dropped so it never blocks loading the template.
    pub(crate) fn from_value(value: &Value, path: &FieldPath) -> Self {
        let Some(map) = value.as_object() else {
            tracing::warn!(%path, "ignoring `docs` that is not an object");
            return Self::default();
        };

        let description = match map.get("description") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => {
                tracing::warn!(%path, "ignoring non-string `docs.description`");
                None
            }
        };
        let structure_expected = map
            .get("structureExpected")
            .filter(|example| !example.is_null())
            .cloned();

        Self {
            description,
            structure_expected,
        }
    }
}
