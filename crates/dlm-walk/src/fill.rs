//! Fill a template with example values for documentation.

use std::convert::Infallible;

use dlm_core::JsonKind;
use dlm_schema::{FieldPath, Leaf, SchemaNode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::engine::{Engine, empty_result};
use crate::policy::LeafPolicy;

/// How filled leaves are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Raw example values, defaults, or `""`.
    #[default]
    Simplified,
    /// Descriptor strings such as `"(string) ✅ required"`.
    Annotated,
}

/// Best-effort illustration policy; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FillExample {
    mode: FillMode,
}

impl FillExample {
    #[must_use]
    pub const fn new(mode: FillMode) -> Self {
        Self { mode }
    }
}

impl LeafPolicy for FillExample {
    type Error = Infallible;

    fn visit_leaf(
        &mut self,
        leaf: &Leaf,
        input: Option<&Value>,
        _path: &FieldPath,
    ) -> Result<Option<Value>, Infallible> {
        let value = match (self.mode, input, leaf.default.as_ref()) {
            (FillMode::Simplified, Some(example), _) => example.clone(),
            (FillMode::Simplified, None, Some(default)) => default.clone(),
            (FillMode::Simplified, None, None) => Value::String(String::new()),
            (FillMode::Annotated, Some(example), _) => Value::String(descriptor(leaf, Some(example))),
            (FillMode::Annotated, None, Some(default)) => Value::String(format!(
                "{} {}",
                display_scalar(default),
                descriptor(leaf, Some(default))
            )),
            (FillMode::Annotated, None, None) => Value::String(descriptor(leaf, None)),
        };
        Ok(Some(value))
    }

    fn placeholder_list_item(&self) -> bool {
        true
    }
}

/// `"(type)"` or `"(type) ✅ required"`; the type falls back to the runtime
/// kind of the value shown, then `any`.
#[must_use]
pub fn descriptor(leaf: &Leaf, shown: Option<&Value>) -> String {
    let ty = leaf.ty.map_or_else(
        || shown.map_or("any", |value| JsonKind::of(value).as_str()),
        |ty| ty.as_str(),
    );
    if leaf.required {
        format!("({ty}) ✅ required")
    } else {
        format!("({ty})")
    }
}

fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Produce a sample payload for `schema`, using `example` where it has
/// values. Lists with no example elements show a single placeholder item.
#[must_use]
pub fn fill_example(schema: &SchemaNode, example: Option<&Value>, mode: FillMode) -> Value {
    let mut engine = Engine::new(FillExample::new(mode));
    let Ok(filled) = engine.walk(schema, example, &FieldPath::root());
    filled.unwrap_or_else(|| empty_result(schema))
}
