//! This crate exposes a self-balancing Binary Search Tree (an AVL tree)
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is the number of nodes on the
//! longest path from the root `Node` down to a leaf `Node`). Inserting ascending
//! keys into a plain BST builds a linked list with height `N`.
//!
//! ## AVL Tree
//!
//! An AVL tree adds a third invariant: for every `Node`, the heights of its two
//! subtrees differ by at most one. Each `Node` caches its own height (an empty
//! subtree has height 0, a leaf has height 1) and after every insertion the path
//! back to the root is repaired with at most one single or double rotation. This
//! keeps the height below `1.44 * lg(N + 2)`.
//!
//! ```
//! use avl::Tree;
//!
//! let tree = Tree::try_from_keys(1..=1000)?;
//!
//! assert!(tree.is_valid_avl());
//! assert!(tree.height() <= 15);
//! assert!(tree.in_order().copied().eq(1..=1000));
//! # Ok::<(), avl::Error>(())
//! ```
//!
//! Everything is exported from the crate root. There is no `avl::avl` path:
//!
//! ```compile_fail
//! let _tree = avl::avl::Tree::<i32>::new();
//! ```

#![deny(missing_docs)]

mod avl;
mod error;
mod iter;
mod pretty;
mod util;


pub use crate::avl::Tree;
pub use error::{Error, Result};
pub use iter::{InOrder, PostOrder, PreOrder};
pub use pretty::Pretty;
