//! Pre-order traversal over typed trees.
//!
//! ## Ordering
//! Every walk in this module is depth-first and pre-order: a node is handed
//! to the caller before any of its descendants, and siblings are processed
//! left to right.
//!
//! ## Cycles
//! Owned trees (`Vec<Self>` children) cannot form cycles. Implementations of
//! [`TreeNode`] that hand out borrowed children from shared storage must keep
//! the graph acyclic; no cycle detection is performed.
//!
//! ## Thread Safety
//! The functions hold no state between calls. Independent trees may be
//! walked concurrently from any number of threads.

/// A node that may carry an ordered sequence of children of its own type.
///
/// Returning `None` (or an empty slice) marks the node as a leaf.
pub trait TreeNode: Sized {
    /// Children of this node, if any.
    fn children(&self) -> Option<&[Self]>;
}

/// Walk `nodes` in pre-order, calling `visitor(node, siblings)` once per node.
///
/// `siblings` is the full sequence the node belongs to (the slice being
/// iterated at that level). `None` or an empty slice produces no calls.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "foundation")]
/// # {
/// use toolbelt_common::tree::{for_each, TreeNode};
///
/// struct Dept {
///     name: String,
///     teams: Option<Vec<Dept>>,
/// }
///
/// impl TreeNode for Dept {
///     fn children(&self) -> Option<&[Self]> {
///         self.teams.as_deref()
///     }
/// }
///
/// let org = vec![Dept {
///     name: "eng".into(),
///     teams: Some(vec![
///         Dept { name: "infra".into(), teams: None },
///         Dept { name: "web".into(), teams: None },
///     ]),
/// }];
///
/// let mut seen = Vec::new();
/// for_each(Some(org.as_slice()), |dept, siblings| {
///     seen.push((dept.name.clone(), siblings.len()));
/// });
/// assert_eq!(
///     seen,
///     vec![("eng".to_string(), 1), ("infra".to_string(), 2), ("web".to_string(), 2)]
/// );
/// # }
/// ```
pub fn for_each<'a, T, F>(nodes: Option<&'a [T]>, mut visitor: F)
where
    T: TreeNode,
    F: FnMut(&'a T, &'a [T]),
{
    if let Some(nodes) = nodes {
        walk(nodes, &|node: &'a T| node.children(), &mut visitor);
    }
}

/// Collect references to every node in pre-order.
pub fn flatten<T: TreeNode>(nodes: Option<&[T]>) -> Vec<&T> {
    let mut out = Vec::new();
    for_each(nodes, |node, _| out.push(node));
    out
}

/// Return the first node, in pre-order, for which `predicate` holds.
///
/// The walk stops at the first match.
pub fn find<'a, T, P>(nodes: Option<&'a [T]>, mut predicate: P) -> Option<&'a T>
where
    T: TreeNode,
    P: FnMut(&T) -> bool,
{
    fn search<'a, T: TreeNode, P: FnMut(&T) -> bool>(
        nodes: &'a [T],
        predicate: &mut P,
    ) -> Option<&'a T> {
        for node in nodes {
            if predicate(node) {
                return Some(node);
            }
            if let Some(children) = node.children() {
                if let Some(found) = search(children, predicate) {
                    return Some(found);
                }
            }
        }
        None
    }

    search(nodes?, &mut predicate)
}

/// Maximum depth of the forest: 0 when empty, 1 for childless roots.
pub fn depth<T: TreeNode>(nodes: Option<&[T]>) -> usize {
    match nodes {
        Some(nodes) => nodes
            .iter()
            .map(|node| 1 + depth(node.children()))
            .max()
            .unwrap_or(0),
        None => 0,
    }
}

/// Shared pre-order walker.
///
/// `children_of` resolves the child slice of a node; both the typed and the
/// JSON-backed traversals go through here.
pub(crate) fn walk<'a, T, C, F>(nodes: &'a [T], children_of: &C, visitor: &mut F)
where
    C: Fn(&'a T) -> Option<&'a [T]>,
    F: FnMut(&'a T, &'a [T]),
{
    for node in nodes {
        visitor(node, nodes);
        if let Some(children) = children_of(node) {
            walk(children, children_of, visitor);
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for tree::traverse.
    use super::*;

    #[derive(Debug)]
    struct Node {
        key: u32,
        children: Option<Vec<Node>>,
    }

    impl TreeNode for Node {
        fn children(&self) -> Option<&[Self]> {
            self.children.as_deref()
        }
    }

    fn leaf(key: u32) -> Node {
        Node { key, children: None }
    }

    fn branch(key: u32, children: Vec<Node>) -> Node {
        Node { key, children: Some(children) }
    }

    /// Builds a 4-level tree of 10 nodes:
    ///
    /// ```text
    /// 1 ── 2 ── 3 ── 4
    /// │    └─── 5
    /// └─── 6
    /// 7 ── 8 ── 9
    ///      └─── 10
    /// ```
    fn sample() -> Vec<Node> {
        vec![
            branch(1, vec![branch(2, vec![branch(3, vec![leaf(4)]), leaf(5)]), leaf(6)]),
            branch(7, vec![branch(8, vec![leaf(9)]), leaf(10)]),
        ]
    }

    /// Validates `for_each` behavior for the pre-order scenario.
    ///
    /// Assertions:
    /// - Confirms the collected keys equal `1..=10` in order.
    #[test]
    fn test_for_each_preorder() {
        let tree = sample();
        let mut keys = Vec::new();
        for_each(Some(tree.as_slice()), |node, _| keys.push(node.key));
        assert_eq!(keys, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_for_each_passes_sibling_slice() {
        let tree = sample();
        let mut sibling_counts = Vec::new();
        for_each(Some(tree.as_slice()), |node, siblings| {
            assert!(siblings.iter().any(|s| std::ptr::eq(s, node)));
            sibling_counts.push(siblings.len());
        });
        assert_eq!(sibling_counts, vec![2, 2, 2, 1, 2, 2, 2, 2, 1, 2]);
    }

    /// Validates `for_each` behavior for absent and empty inputs.
    ///
    /// Assertions:
    /// - Confirms `calls` equals `0` for both inputs.
    #[test]
    fn test_for_each_absent_and_empty() {
        let mut calls = 0;
        for_each::<Node, _>(None, |_, _| calls += 1);
        for_each::<Node, _>(Some(&[][..]), |_, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_empty_children_is_leaf() {
        let tree = vec![branch(1, vec![]), leaf(2)];
        let keys: Vec<_> = flatten(Some(tree.as_slice())).iter().map(|n| n.key).collect();
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn test_find_stops_at_first_match() {
        let tree = sample();
        let mut inspected = 0;
        let found = find(Some(tree.as_slice()), |node| {
            inspected += 1;
            node.key % 4 == 0
        });
        assert_eq!(found.map(|n| n.key), Some(4));
        assert_eq!(inspected, 4);
        assert!(find(Some(tree.as_slice()), |node| node.key > 100).is_none());
        assert!(find::<Node, _>(None, |_| true).is_none());
    }

    #[test]
    fn test_depth() {
        assert_eq!(depth::<Node>(None), 0);
        assert_eq!(depth::<Node>(Some(&[][..])), 0);
        assert_eq!(depth(Some(&[leaf(1)][..])), 1);
        assert_eq!(depth(Some(sample().as_slice())), 4);
    }
}
