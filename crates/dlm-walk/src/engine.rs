//! The recursive walker shared by every policy.
//!
//! The engine descends a schema tree in lock-step with an input tree:
//! - list schema: every input element is matched against the item schema;
//!   non-array input counts as absent
//! - leaf schema: the [`LeafPolicy`] decides
//! - branch schema: every declared field is visited (never `docs`) and
//!   fields that resolve to nothing are left out

use dlm_schema::{Branch, FieldPath, List, SchemaNode};
use serde_json::{Map, Value};

use crate::policy::{EmptyPolicy, LeafPolicy};

/// Traversal engine parameterized by a leaf policy.
#[derive(Debug)]
pub struct Engine<P> {
    policy: P,
}

impl<P: LeafPolicy> Engine<P> {
    pub const fn new(policy: P) -> Self {
        Self { policy }
    }

    pub const fn policy(&self) -> &P {
        &self.policy
    }

    pub fn into_policy(self) -> P {
        self.policy
    }

    /// Walk `node` against `input`.
    ///
    /// Returns `Ok(None)` when the node resolves to "omit".
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by the policy.
    pub fn walk(
        &mut self,
        node: &SchemaNode,
        input: Option<&Value>,
        path: &FieldPath,
    ) -> Result<Option<Value>, P::Error> {
        let input = if self.policy.null_is_absent() {
            input.filter(|value| !value.is_null())
        } else {
            input
        };
        match node {
            SchemaNode::List(list) => self.walk_list(list, input, path),
            SchemaNode::Leaf(leaf) => self.policy.visit_leaf(leaf, input, path),
            SchemaNode::Branch(branch) => self.walk_branch(branch, input, path),
        }
    }

    fn walk_list(
        &mut self,
        list: &List,
        input: Option<&Value>,
        path: &FieldPath,
    ) -> Result<Option<Value>, P::Error> {
        let elements: &[Value] = match input {
            Some(Value::Array(items)) => items,
            _ => &[],
        };
        let keep_empty = self.policy.empty_policy() == EmptyPolicy::KeepEmpty;
        let mut out = Vec::with_capacity(elements.len().max(1));

        if elements.is_empty() && self.policy.placeholder_list_item() {
            if let Some(value) = self.walk(list.item(), None, &path.index(0))? {
                out.push(value);
            }
        }

        for (index, element) in elements.iter().enumerate() {
            match self.walk(list.item(), Some(element), &path.index(index))? {
                Some(value) => out.push(value),
                None if keep_empty => out.push(Value::Null),
                None => {}
            }
        }

        Ok(self.finish(Value::Array(out)))
    }

    fn walk_branch(
        &mut self,
        branch: &Branch,
        input: Option<&Value>,
        path: &FieldPath,
    ) -> Result<Option<Value>, P::Error> {
        let fields = input.and_then(Value::as_object);
        let mut out = Map::new();

        for (key, child) in branch.fields() {
            let child_input = fields.and_then(|map| map.get(key));
            if let Some(value) = self.walk(child, child_input, &path.key(key))? {
                out.insert(key.to_string(), value);
            }
        }

        Ok(self.finish(Value::Object(out)))
    }

    fn finish(&self, container: Value) -> Option<Value> {
        match self.policy.empty_policy() {
            EmptyPolicy::CollapseEmpty if is_empty_container(&container) => None,
            _ => Some(container),
        }
    }
}

fn is_empty_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// The value a top-level call returns when the whole tree was omitted.
pub(crate) fn empty_result(node: &SchemaNode) -> Value {
    match node {
        SchemaNode::Branch(_) => Value::Object(Map::new()),
        SchemaNode::List(_) => Value::Array(Vec::new()),
        SchemaNode::Leaf(_) => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use dlm_schema::Leaf;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    /// Echoes input values and records every visited path.
    #[derive(Default)]
    struct Echo {
        empty: EmptyPolicy,
        visited: Vec<String>,
    }

    impl LeafPolicy for Echo {
        type Error = Infallible;

        fn visit_leaf(
            &mut self,
            _leaf: &Leaf,
            input: Option<&Value>,
            path: &FieldPath,
        ) -> Result<Option<Value>, Infallible> {
            self.visited.push(path.to_string());
            Ok(input.cloned())
        }

        fn empty_policy(&self) -> EmptyPolicy {
            self.empty
        }
    }

    /// Fails on the first leaf whose input is the string "boom".
    struct Tripwire;

    impl LeafPolicy for Tripwire {
        type Error = String;

        fn visit_leaf(
            &mut self,
            _leaf: &Leaf,
            input: Option<&Value>,
            path: &FieldPath,
        ) -> Result<Option<Value>, String> {
            if input.and_then(Value::as_str) == Some("boom") {
                return Err(path.to_string());
            }
            Ok(input.cloned())
        }
    }

    fn schema(value: Value) -> SchemaNode {
        SchemaNode::parse(&value).unwrap()
    }

    #[test]
    fn visits_fields_in_declaration_order() {
        let node = schema(json!({
            "b": {"type": "string"},
            "a": {"inner": {"type": "string"}},
            "list": [{"x": {"type": "number"}}],
            "docs": {"description": "ignored"}
        }));
        let mut engine = Engine::new(Echo::default());
        let input = json!({"list": [{"x": 1}, {"x": 2}]});
        engine.walk(&node, Some(&input), &FieldPath::root()).unwrap();
        assert_eq!(
            engine.into_policy().visited,
            vec!["b", "a.inner", "list[0].x", "list[1].x"]
        );
    }

    #[test]
    fn empty_branches_collapse_by_default() {
        let node = schema(json!({
            "kept": {"type": "string"},
            "nested": {"gone": {"type": "string"}},
            "items": [{"gone": {"type": "string"}}]
        }));
        let input = json!({"kept": "x", "items": [{}, {}]});
        let out = Engine::new(Echo::default())
            .walk(&node, Some(&input), &FieldPath::root())
            .unwrap();
        assert_eq!(out, Some(json!({"kept": "x"})));
    }

    #[test]
    fn keep_empty_preserves_containers_and_positions() {
        let node = schema(json!({
            "nested": {"gone": {"type": "string"}},
            "tags": [{"type": "string"}]
        }));
        let input = json!({"tags": ["a", null, "b"]});
        let policy = Echo {
            empty: EmptyPolicy::KeepEmpty,
            ..Echo::default()
        };
        let out = Engine::new(policy)
            .walk(&node, Some(&input), &FieldPath::root())
            .unwrap();
        assert_eq!(out, Some(json!({"nested": {}, "tags": ["a", null, "b"]})));
    }

    #[test]
    fn non_array_input_for_list_is_absent() {
        let node = schema(json!({"items": [{"sku": {"type": "string"}}]}));
        let input = json!({"items": {"sku": "A"}});
        let mut engine = Engine::new(Echo::default());
        let out = engine.walk(&node, Some(&input), &FieldPath::root()).unwrap();
        assert_eq!(out, None);
        assert!(engine.policy().visited.is_empty());
    }

    #[test]
    fn non_object_input_for_branch_is_absent() {
        let node = schema(json!({"product": {"id": {"type": "string"}}}));
        let input = json!({"product": "flat"});
        let out = Engine::new(Echo::default())
            .walk(&node, Some(&input), &FieldPath::root())
            .unwrap();
        assert_eq!(out, None);
    }

    #[test]
    fn first_error_stops_the_walk() {
        let node = schema(json!([{"v": {"type": "string"}}]));
        let input = json!([{"v": "ok"}, {"v": "boom"}, {"v": "boom"}]);
        let err = Engine::new(Tripwire)
            .walk(&node, Some(&input), &FieldPath::root())
            .unwrap_err();
        assert_eq!(err, "[1].v");
    }

    #[test]
    fn null_reaches_policies_that_keep_it() {
        let node = schema(json!({"a": {"type": "string"}, "b": {"type": "string"}}));
        let input = json!({"a": null});
        let mut engine = Engine::new(Echo::default());
        let out = engine.walk(&node, Some(&input), &FieldPath::root()).unwrap();
        assert_eq!(out, Some(json!({"a": null})));
    }

    #[test]
    fn empty_result_matches_node_shape() {
        assert_eq!(empty_result(&schema(json!({}))), json!({}));
        assert_eq!(empty_result(&schema(json!([]))), json!([]));
        assert_eq!(empty_result(&schema(json!({"type": "string"}))), Value::Null);
    }
}
