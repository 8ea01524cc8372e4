//! Tree traversal helpers
//!
//! This module walks caller-owned trees without defining their shape:
//! - **[`traverse`]**: pre-order, depth-first walks over any [`TreeNode`]
//! - **[`value`]**: the same walk over untyped `serde_json::Value` trees whose
//!   children live under a configurable field name
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "foundation")]
//! # {
//! use toolbelt_common::tree::{for_each, TreeNode};
//!
//! struct Menu {
//!     key: &'static str,
//!     children: Vec<Menu>,
//! }
//!
//! impl TreeNode for Menu {
//!     fn children(&self) -> Option<&[Self]> {
//!         Some(&self.children)
//!     }
//! }
//!
//! let menus = vec![Menu {
//!     key: "file",
//!     children: vec![Menu { key: "open", children: vec![] }],
//! }];
//!
//! let mut keys = Vec::new();
//! for_each(Some(menus.as_slice()), |node, _siblings| keys.push(node.key));
//! assert_eq!(keys, vec!["file", "open"]);
//! # }
//! ```

pub mod traverse;
pub mod value;

pub use traverse::{depth, find, flatten, for_each, TreeNode};
pub use value::{for_each_value, for_each_value_default, DEFAULT_CHILDREN_FIELD};
