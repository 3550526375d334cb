//! Pluggable behavior for the traversal engine.

use dlm_schema::{FieldPath, Leaf};
use serde_json::Value;

/// What to do with branches and list elements that resolve to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Empty objects and arrays collapse to "omit" at their parent, and
    /// omitted list elements are dropped.
    #[default]
    CollapseEmpty,
    /// Empty objects and arrays are kept; omitted list elements become
    /// `null` so element positions survive.
    KeepEmpty,
}

/// Decides what the engine emits for each leaf.
pub trait LeafPolicy {
    /// Error that aborts the traversal. Total policies use
    /// [`std::convert::Infallible`].
    type Error;

    /// Visit one leaf.
    ///
    /// `input` is the value found at the same path in the input tree.
    /// JSON `null` arrives as `Some(Value::Null)` unless
    /// [`null_is_absent`](Self::null_is_absent) is set. Returning `Ok(None)`
    /// omits the leaf from the result.
    ///
    /// # Errors
    ///
    /// Any error returned here stops the traversal immediately.
    fn visit_leaf(
        &mut self,
        leaf: &Leaf,
        input: Option<&Value>,
        path: &FieldPath,
    ) -> Result<Option<Value>, Self::Error>;

    fn empty_policy(&self) -> EmptyPolicy {
        EmptyPolicy::CollapseEmpty
    }

    /// Whether JSON `null` input is mapped to `None` before the leaf is
    /// visited.
    fn null_is_absent(&self) -> bool {
        false
    }

    /// Whether a list with no input elements is still walked once, with no
    /// input, so the result shows the item shape.
    fn placeholder_list_item(&self) -> bool {
        false
    }
}
