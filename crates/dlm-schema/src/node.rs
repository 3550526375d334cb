//! The typed template schema tree.
//!
//! Templates are plain JSON. A JSON object containing any of `type`,
//! `required` or `default` is a [`Leaf`]; any other object is a [`Branch`];
//! an array is a [`List`] whose first element is the item schema. The
//! decision is made once, here, so traversals never re-inspect raw objects.
//!
//! Classification is by key presence only. A payload field that is itself
//! named `type` therefore turns its parent object into a leaf. When that
//! happens with a non-string `type` value the template is rejected rather
//! than guessed at.

use std::fmt;

use dlm_core::JsonKind;
use serde_json::{Map, Value};

use crate::docs::Docs;
use crate::error::SchemaError;
use crate::path::FieldPath;

/// Reserved metadata key, skipped at every branch level.
pub const DOCS_KEY: &str = "docs";

/// Keys whose presence marks an object as a leaf.
pub const LEAF_KEYS: [&str; 3] = ["type", "required", "default"];

/// Shape of a raw template value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Branch,
    List,
}

/// Classify a raw template value.
///
/// # Errors
///
/// Returns [`SchemaError::MalformedTemplate`] for strings, numbers, booleans
/// and null, which cannot describe a payload field.
pub fn classify(value: &Value, path: &FieldPath) -> Result<NodeKind, SchemaError> {
    match value {
        Value::Object(map) if LEAF_KEYS.iter().any(|key| map.contains_key(*key)) => {
            Ok(NodeKind::Leaf)
        }
        Value::Array(_) => Ok(NodeKind::List),
        Value::Object(_) => Ok(NodeKind::Branch),
        other => Err(SchemaError::malformed(
            path,
            format!(
                "expected a leaf, object or array, found {}",
                JsonKind::of(other)
            ),
        )),
    }
}

/// Declared type of a leaf field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafType {
    String,
    Number,
    Boolean,
    /// Objects and arrays alike.
    Object,
    Array,
    Any,
}

impl LeafType {
    /// Parse a declared type name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "object" => Some(Self::Object),
            "array" => Some(Self::Array),
            "any" => Some(Self::Any),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Any => "any",
        }
    }

    /// Whether a value of runtime kind `kind` satisfies this declared type.
    #[must_use]
    pub const fn accepts(self, kind: JsonKind) -> bool {
        match self {
            Self::Any => true,
            Self::String => matches!(kind, JsonKind::String),
            Self::Number => matches!(kind, JsonKind::Number),
            Self::Boolean => matches!(kind, JsonKind::Boolean),
            Self::Object => kind.is_container(),
            Self::Array => matches!(kind, JsonKind::Array),
        }
    }
}

impl fmt::Display for LeafType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A terminal field contract.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaf {
    pub ty: Option<LeafType>,
    pub required: bool,
    /// `"default": null` is treated as no default.
    pub default: Option<Value>,
}

impl Leaf {
    fn parse(map: &Map<String, Value>, path: &FieldPath) -> Result<Self, SchemaError> {
        let ty = match map.get("type") {
            None => None,
            Some(Value::String(name)) => Some(LeafType::parse(name).ok_or_else(|| {
                SchemaError::malformed(path, format!("unknown leaf type \"{name}\""))
            })?),
            Some(other) => {
                return Err(SchemaError::malformed(
                    path,
                    format!(
                        "leaf `type` must be a string, found {}; a payload field named `type` \
                         cannot sit next to other fields",
                        JsonKind::of(other)
                    ),
                ));
            }
        };

        let required = match map.get("required") {
            None => false,
            Some(Value::Bool(required)) => *required,
            Some(other) => {
                return Err(SchemaError::malformed(
                    path,
                    format!("leaf `required` must be a boolean, found {}", JsonKind::of(other)),
                ));
            }
        };

        let default = map.get("default").filter(|value| !value.is_null()).cloned();

        Ok(Self {
            ty,
            required,
            default,
        })
    }

    /// The declared type name, or `any` when undeclared.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.ty.map_or("any", LeafType::as_str)
    }
}

/// A nested object of named fields, in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    fields: Vec<(String, SchemaNode)>,
    docs: Option<Docs>,
}

impl Branch {
    fn parse(map: &Map<String, Value>, path: &FieldPath) -> Result<Self, SchemaError> {
        let mut fields = Vec::with_capacity(map.len());
        let mut docs = None;

        for (key, value) in map {
            if key == DOCS_KEY {
                docs = Some(Docs::from_value(value, &path.key(key)));
                continue;
            }
            let node = SchemaNode::parse_at(value, &path.key(key))?;
            fields.push((key.clone(), node));
        }

        Ok(Self { fields, docs })
    }

    /// Declared fields, `docs` excluded.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &SchemaNode)> {
        self.fields.iter().map(|(key, node)| (key.as_str(), node))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SchemaNode> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, node)| node)
    }

    #[must_use]
    pub const fn docs(&self) -> Option<&Docs> {
        self.docs.as_ref()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A repeated structure described by a single item schema.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    item: Box<SchemaNode>,
}

impl List {
    fn parse(items: &[Value], path: &FieldPath) -> Result<Self, SchemaError> {
        let item = match items.first() {
            Some(first) => SchemaNode::parse_at(first, &path.index(0))?,
            None => SchemaNode::Branch(Branch::default()),
        };
        if items.len() > 1 {
            tracing::debug!(
                path = %path,
                ignored = items.len() - 1,
                "list schema declares extra elements; only the first is used"
            );
        }
        Ok(Self {
            item: Box::new(item),
        })
    }

    /// The schema every element is matched against.
    #[must_use]
    pub fn item(&self) -> &SchemaNode {
        &self.item
    }
}

/// A node of the template tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Leaf(Leaf),
    Branch(Branch),
    List(List),
}

impl SchemaNode {
    /// Parse a whole template tree.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedTemplate`] naming the first offending
    /// path.
    pub fn parse(value: &Value) -> Result<Self, SchemaError> {
        Self::parse_at(value, &FieldPath::root())
    }

    /// Parse a subtree located at `path`; `path` only feeds error messages.
    ///
    /// # Errors
    ///
    /// See [`SchemaNode::parse`].
    pub fn parse_at(value: &Value, path: &FieldPath) -> Result<Self, SchemaError> {
        match (classify(value, path)?, value) {
            (NodeKind::Leaf, Value::Object(map)) => Ok(Self::Leaf(Leaf::parse(map, path)?)),
            (NodeKind::Branch, Value::Object(map)) => Ok(Self::Branch(Branch::parse(map, path)?)),
            (NodeKind::List, Value::Array(items)) => Ok(Self::List(List::parse(items, path)?)),
            _ => Err(SchemaError::malformed(path, "unclassifiable template node")),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Leaf(_) => NodeKind::Leaf,
            Self::Branch(_) => NodeKind::Branch,
            Self::List(_) => NodeKind::List,
        }
    }

    #[must_use]
    pub const fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Self::Leaf(leaf) => Some(leaf),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_branch(&self) -> Option<&Branch> {
        match self {
            Self::Branch(branch) => Some(branch),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!({"type": "string"}), NodeKind::Leaf)]
    #[case(json!({"required": true}), NodeKind::Leaf)]
    #[case(json!({"default": 3}), NodeKind::Leaf)]
    #[case(json!({"name": {"type": "string"}}), NodeKind::Branch)]
    #[case(json!({}), NodeKind::Branch)]
    #[case(json!([{"sku": {"type": "string"}}]), NodeKind::List)]
    #[case(json!([]), NodeKind::List)]
    fn classifies_by_key_presence(#[case] value: Value, #[case] expected: NodeKind) {
        assert_eq!(classify(&value, &FieldPath::root()).unwrap(), expected);
    }

    #[rstest]
    #[case(json!("literal"))]
    #[case(json!(42))]
    #[case(json!(true))]
    #[case(json!(null))]
    fn primitives_are_malformed(#[case] value: Value) {
        let err = classify(&value, &FieldPath::named("event")).unwrap_err();
        assert!(matches!(
            err,
            SchemaError::MalformedTemplate { ref path, .. } if path == "event"
        ));
    }

    #[test]
    fn parses_nested_template() {
        let node = SchemaNode::parse(&json!({
            "event": {"type": "string", "default": "add_to_cart"},
            "ecommerce": {
                "currency": {"type": "string", "required": true},
                "items": [{"item_id": {"type": "string", "required": true}}]
            },
            "docs": {"description": "Cart addition"}
        }))
        .unwrap();

        let branch = node.as_branch().unwrap();
        let keys: Vec<&str> = branch.fields().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["event", "ecommerce"]);
        assert_eq!(
            branch.docs().and_then(|docs| docs.description.as_deref()),
            Some("Cart addition")
        );

        let event = branch.get("event").and_then(SchemaNode::as_leaf).unwrap();
        assert_eq!(event.ty, Some(LeafType::String));
        assert!(!event.required);
        assert_eq!(event.default, Some(json!("add_to_cart")));

        let items = branch
            .get("ecommerce")
            .and_then(SchemaNode::as_branch)
            .and_then(|ecommerce| ecommerce.get("items"))
            .and_then(SchemaNode::as_list)
            .unwrap();
        assert_eq!(items.item().kind(), NodeKind::Branch);
    }

    #[test]
    fn malformed_docs_do_not_block_parsing() {
        let node = SchemaNode::parse(&json!({
            "docs": "free text",
            "value": {"type": "number"}
        }))
        .unwrap();
        let branch = node.as_branch().unwrap();
        assert_eq!(branch.docs(), Some(&Docs::default()));
        assert!(branch.get("value").is_some());
    }

    #[test]
    fn nested_docs_are_not_fields() {
        let node = SchemaNode::parse(&json!({
            "product": {
                "docs": {"description": "nested"},
                "id": {"type": "string"}
            }
        }))
        .unwrap();
        let product = node
            .as_branch()
            .and_then(|b| b.get("product"))
            .and_then(SchemaNode::as_branch)
            .unwrap();
        assert_eq!(product.len(), 1);
        assert!(product.get("docs").is_none());
    }

    #[test]
    fn extra_list_elements_are_ignored() {
        let node = SchemaNode::parse(&json!([
            {"sku": {"type": "string"}},
            {"other": {"type": "number"}}
        ]))
        .unwrap();
        let item = node.as_list().unwrap().item().as_branch().unwrap();
        assert!(item.get("sku").is_some());
        assert!(item.get("other").is_none());
    }

    #[test]
    fn empty_list_has_empty_item() {
        let node = SchemaNode::parse(&json!([])).unwrap();
        let item = node.as_list().unwrap().item().as_branch().unwrap();
        assert!(item.is_empty());
    }

    #[test]
    fn primitive_inside_branch_names_full_path() {
        let err = SchemaNode::parse(&json!({
            "ecommerce": {"items": [{"price": 10}]}
        }))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed template at 'ecommerce.items[0].price': expected a leaf, object or array, found number"
        );
    }

    #[test]
    fn field_named_type_with_object_value_is_rejected() {
        let err = SchemaNode::parse(&json!({
            "payment": {
                "type": {"code": {"type": "string"}},
                "amount": {"type": "number"}
            }
        }))
        .unwrap_err();
        match err {
            SchemaError::MalformedTemplate { path, reason } => {
                assert_eq!(path, "payment");
                assert!(reason.contains("named `type`"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_leaf_type_is_rejected() {
        let err = SchemaNode::parse(&json!({"price": {"type": "decimal"}})).unwrap_err();
        assert!(err.to_string().contains("unknown leaf type \"decimal\""));
    }

    #[test]
    fn non_boolean_required_is_rejected() {
        let err = SchemaNode::parse(&json!({"price": {"required": "yes"}})).unwrap_err();
        assert!(err.to_string().contains("`required` must be a boolean"));
    }

    #[test]
    fn null_default_means_no_default() {
        let node = SchemaNode::parse(&json!({"type": "string", "default": null})).unwrap();
        assert_eq!(node.as_leaf().unwrap().default, None);
    }

    #[rstest]
    #[case(LeafType::String, JsonKind::String, true)]
    #[case(LeafType::String, JsonKind::Number, false)]
    #[case(LeafType::Number, JsonKind::Number, true)]
    #[case(LeafType::Boolean, JsonKind::Boolean, true)]
    #[case(LeafType::Object, JsonKind::Object, true)]
    #[case(LeafType::Object, JsonKind::Array, true)]
    #[case(LeafType::Array, JsonKind::Object, false)]
    #[case(LeafType::Any, JsonKind::Null, true)]
    fn leaf_type_acceptance(#[case] ty: LeafType, #[case] kind: JsonKind, #[case] ok: bool) {
        assert_eq!(ty.accepts(kind), ok);
    }
}
