//! Build an outgoing event payload from caller parameters.

use dlm_core::{JsonKind, normalize};
use dlm_schema::{FieldPath, Leaf, SchemaNode};
use serde_json::Value;

use crate::engine::{Engine, empty_result};
use crate::error::ValidationError;
use crate::policy::LeafPolicy;

/// Merges caller parameters into a template, validating and normalizing as
/// it goes. Fails fast on the first invalid leaf.
#[derive(Debug, Clone)]
pub struct MergeValidateNormalize<'a> {
    event: &'a str,
}

impl<'a> MergeValidateNormalize<'a> {
    /// `event` is only used to label errors.
    #[must_use]
    pub const fn new(event: &'a str) -> Self {
        Self { event }
    }

    fn missing(&self, path: &FieldPath) -> ValidationError {
        ValidationError::MissingRequiredField {
            path: path.to_string(),
            event: self.event.to_string(),
        }
    }
}

impl LeafPolicy for MergeValidateNormalize<'_> {
    type Error = ValidationError;

    fn visit_leaf(
        &mut self,
        leaf: &Leaf,
        input: Option<&Value>,
        path: &FieldPath,
    ) -> Result<Option<Value>, ValidationError> {
        if leaf.required && input.is_none_or(is_blank) {
            return match &leaf.default {
                Some(default) => Ok(Some(default.clone())),
                None => Err(self.missing(path)),
            };
        }

        let Some(value) = input else {
            return Ok(leaf.default.clone());
        };

        let actual = JsonKind::of(value);
        if let Some(expected) = leaf.ty {
            if !expected.accepts(actual) {
                return Err(ValidationError::TypeMismatch {
                    path: path.to_string(),
                    event: self.event.to_string(),
                    expected,
                    actual,
                });
            }
        }

        Ok(Some(match value {
            Value::String(text) => Value::String(normalize(text)),
            other => other.clone(),
        }))
    }

    fn null_is_absent(&self) -> bool {
        true
    }
}

fn is_blank(value: &Value) -> bool {
    value.as_str().is_some_and(|text| text.trim().is_empty())
}

/// Produce the cleaned payload for `params` against `schema`.
///
/// Only fields declared by the schema survive. Strings supplied by the
/// caller are normalized; defaults are emitted verbatim.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered, in traversal order.
pub fn merge_validate_normalize(
    schema: &SchemaNode,
    params: &Value,
    event: &str,
) -> Result<Value, ValidationError> {
    let mut engine = Engine::new(MergeValidateNormalize::new(event));
    let merged = engine
        .walk(schema, Some(params), &FieldPath::root())
        .inspect_err(|error| tracing::debug!(%event, %error, "payload rejected"))?;
    Ok(merged.unwrap_or_else(|| empty_result(schema)))
}
