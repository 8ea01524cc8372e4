//! Pre-order traversal over untyped JSON trees.
//!
//! Nodes are `serde_json::Value`s; a node's children are the array stored
//! under a caller-chosen field name. Anything that does not fit that shape is
//! skipped quietly: a non-array root is a no-op, and a node whose children
//! field is missing or holds a non-array value is a leaf.

use serde_json::Value;
#[cfg(feature = "observability")]
use tracing::trace;

use super::traverse::{walk, TreeNode};

/// Field name used by [`for_each_value_default`] and the `TreeNode` impl.
pub const DEFAULT_CHILDREN_FIELD: &str = "children";

impl TreeNode for Value {
    fn children(&self) -> Option<&[Self]> {
        children_under(self, DEFAULT_CHILDREN_FIELD)
    }
}

/// Walk a JSON array of nodes in pre-order.
///
/// `visitor(node, siblings)` is called once per node; descent follows the
/// array under `children_field`. An absent or non-array `nodes`, or an empty
/// `children_field`, results in no calls.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use serde_json::json;
/// use toolbelt_common::tree::for_each_value;
///
/// let menus = json!([
///     { "key": "a", "items": [{ "key": "a1" }, { "key": "a2", "items": "n/a" }] },
///     { "key": "b" }
/// ]);
///
/// let mut keys = Vec::new();
/// for_each_value(Some(&menus), |node, _| keys.push(node["key"].clone()), "items");
/// assert_eq!(keys, vec!["a", "a1", "a2", "b"]);
/// # }
/// ```
pub fn for_each_value<'a, F>(nodes: Option<&'a Value>, mut visitor: F, children_field: &str)
where
    F: FnMut(&'a Value, &'a [Value]),
{
    if children_field.is_empty() {
        #[cfg(feature = "observability")]
        trace!("tree traversal skipped: empty children field name");
        return;
    }

    let Some(roots) = nodes.and_then(Value::as_array) else {
        #[cfg(feature = "observability")]
        trace!(present = nodes.is_some(), "tree traversal skipped: roots are not an array");
        return;
    };

    walk(roots, &|node: &'a Value| children_under(node, children_field), &mut visitor);
}

/// [`for_each_value`] with the conventional `"children"` field.
pub fn for_each_value_default<'a, F>(nodes: Option<&'a Value>, visitor: F)
where
    F: FnMut(&'a Value, &'a [Value]),
{
    for_each_value(nodes, visitor, DEFAULT_CHILDREN_FIELD);
}

fn children_under<'a>(node: &'a Value, field: &str) -> Option<&'a [Value]> {
    node.get(field).and_then(Value::as_array).map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    //! Unit tests for tree::value.
    use serde_json::json;

    use super::*;

    fn keys_with(nodes: Option<&Value>, field: &str) -> Vec<String> {
        let mut keys = Vec::new();
        for_each_value(
            nodes,
            |node, _| keys.push(node["key"].as_str().unwrap_or_default().to_string()),
            field,
        );
        keys
    }

    /// Validates `for_each_value` behavior for the custom field scenario.
    ///
    /// Assertions:
    /// - Confirms keys follow pre-order under the `nodes` field.
    /// - Confirms the default field is not consulted.
    #[test]
    fn test_custom_children_field() {
        let tree = json!([
            { "key": "1", "nodes": [{ "key": "1.1" }], "children": [{ "key": "ignored" }] },
            { "key": "2" }
        ]);
        assert_eq!(keys_with(Some(&tree), "nodes"), vec!["1", "1.1", "2"]);
    }

    #[test]
    fn test_non_array_children_is_leaf() {
        let tree = json!([
            { "key": "a", "children": { "key": "object-not-array" } },
            { "key": "b", "children": 42 },
            { "key": "c", "children": null }
        ]);
        assert_eq!(keys_with(Some(&tree), "children"), vec!["a", "b", "c"]);
    }

    /// Validates the silent no-op inputs.
    ///
    /// Assertions:
    /// - Confirms absent, empty, non-array, and empty-field inputs visit
    ///   nothing.
    #[test]
    fn test_noop_inputs() {
        let tree = json!([{ "key": "a" }]);
        assert!(keys_with(None, "children").is_empty());
        assert!(keys_with(Some(&json!([])), "children").is_empty());
        assert!(keys_with(Some(&json!({ "key": "root" })), "children").is_empty());
        assert!(keys_with(Some(&tree), "").is_empty());
    }

    #[test]
    fn test_non_object_elements_are_visited_not_descended() {
        let tree = json!([1, "two", { "key": "three", "children": [null] }]);
        let mut visited = 0;
        for_each_value_default(Some(&tree), |_, _| visited += 1);
        assert_eq!(visited, 4);
    }

    #[test]
    fn test_value_tree_node_impl_uses_default_field() {
        let node = json!({ "children": [{}, {}] });
        assert_eq!(node.children().map(<[Value]>::len), Some(2));
        assert!(json!({ "items": [] }).children().is_none());
    }
}
