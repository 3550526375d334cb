//! Report required fields an expected-structure example leaves out.

use std::convert::Infallible;

use dlm_schema::{FieldPath, Leaf, SchemaNode};
use serde_json::Value;

use crate::engine::Engine;
use crate::policy::LeafPolicy;

/// Accumulates the path of every required leaf without a value.
#[derive(Debug, Clone, Default)]
pub struct AuditRequired {
    missing: Vec<String>,
}

impl AuditRequired {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Missing paths in traversal order.
    #[must_use]
    pub fn into_missing(self) -> Vec<String> {
        self.missing
    }
}

impl LeafPolicy for AuditRequired {
    type Error = Infallible;

    fn visit_leaf(
        &mut self,
        leaf: &Leaf,
        input: Option<&Value>,
        path: &FieldPath,
    ) -> Result<Option<Value>, Infallible> {
        if leaf.required && input.is_none() {
            self.missing.push(path.to_string());
        }
        Ok(None)
    }
}

/// Required field paths absent from `example`, relative to the schema root.
#[must_use]
pub fn audit_required(schema: &SchemaNode, example: &Value) -> Vec<String> {
    audit_required_at(schema, example, &FieldPath::root())
}

/// Like [`audit_required`], with every reported path prefixed by `base`
/// (typically the event name).
#[must_use]
pub fn audit_required_at(schema: &SchemaNode, example: &Value, base: &FieldPath) -> Vec<String> {
    let mut engine = Engine::new(AuditRequired::new());
    let Ok(_) = engine.walk(schema, Some(example), base);
    engine.into_policy().into_missing()
}
