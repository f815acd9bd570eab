//! An insert-only AVL tree. Every node is owned by exactly one parent (or by the [`Tree`]
//! itself) and every structural change goes through the "hand over a subtree root, get back the
//! new subtree root" idiom, so there are no parent pointers to keep in sync.
//!
//! # Examples
//!
//! ```
//! use avl::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Ascending keys would turn a plain BST into a linked list.
//! for key in [10, 20, 30] {
//!     tree.insert(key)?;
//! }
//!
//! // The rotation put 20 on top.
//! assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [20, 10, 30]);
//! assert_eq!(tree.height(), 2);
//!
//! // Inserting a key twice changes nothing.
//! assert_eq!(tree.insert(20)?, false);
//! assert_eq!(tree.count_nodes(), 3);
//! # Ok::<(), avl::Error>(())
//! ```

use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::iter::Sum;
use std::ptr::NonNull;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::iter::{InOrder, PostOrder, PreOrder};
use crate::pretty::Pretty;
use crate::util::{Descent, Imbalance};

pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A self-balancing Binary Search Tree (specifically, an AVL tree) holding a set of keys.
///
/// Two trees compare equal when they have the same shape, the same keys in the same places and
/// the same cached heights.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        free(self.root.take());
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree by inserting each key in turn. Duplicates are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::try_from_keys([3, 1, 2, 3])?;
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// # Ok::<(), avl::Error>(())
    /// ```
    pub fn try_from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut tree = Self::new();
        for key in keys {
            tree.insert(key)?;
        }
        Ok(tree)
    }

    /// Inserts `key` and rebalances the path back to the root. Returns whether a node was
    /// created: inserting a key that is already present leaves the tree untouched and returns
    /// `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfMemory`] if the new node can't be allocated. The tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1)?, true);
    /// assert_eq!(tree.insert(1)?, false);
    /// assert!(tree.contains(&1));
    /// # Ok::<(), avl::Error>(())
    /// ```
    pub fn insert(&mut self, key: K) -> Result<bool>
    where
        K: Ord,
    {
        let descent = insert(&mut self.root, key)?;
        Ok(descent != Descent::Duplicate)
    }

    /// Whether a node holds `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// The smallest key, if any.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key, if any.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Adds up every key. `S` is the type of the total, so `i64` keys can be summed into an
    /// `i64` (overflowing the way [`Iterator::sum`] does) or anything else that implements
    /// [`Sum<&K>`][Sum]. An empty tree sums to `S`'s zero.
    ///
    /// ```
    /// use avl::Tree;
    ///
    /// let tree = Tree::try_from_keys([10, 20, 30])?;
    /// assert_eq!(tree.sum_keys::<i32>(), 60);
    /// assert_eq!(Tree::<i32>::new().sum_keys::<i32>(), 0);
    /// # Ok::<(), avl::Error>(())
    /// ```
    pub fn sum_keys<'a, S>(&'a self) -> S
    where
        S: Sum<&'a K>,
    {
        self.in_order().sum()
    }

    /// Gets the height of this tree. An empty tree has height 0 and a single node has height 1.
    /// This reads the height cached in the root so it is `O(1)`.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The root's left height minus its right height, or 0 for an empty tree.
    pub fn balance_factor(&self) -> isize {
        balance_factor(&self.root)
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes by walking the whole tree.
    pub fn count_nodes(&self) -> usize {
        count_nodes(&self.root)
    }

    /// Counts the nodes without children.
    pub fn count_leaves(&self) -> usize {
        count_leaves(&self.root)
    }

    /// Checks that every node's balance factor is -1, 0 or 1, using the cached heights. Stops
    /// at the first node that isn't.
    pub fn is_valid_avl(&self) -> bool {
        is_valid_avl(&self.root)
    }

    /// Checks that every key is strictly greater than everything in its left subtree and
    /// strictly less than everything in its right subtree.
    pub fn is_valid_bst(&self) -> bool
    where
        K: Ord,
    {
        is_valid_bst(&self.root, None, None)
    }

    /// Releases every node, children before parents, leaving an empty tree.
    pub fn clear(&mut self) {
        free(self.root.take());
    }

    /// Keys in ascending order (left, node, right).
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root.as_deref())
    }

    /// Keys root first (node, left, right).
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root.as_deref())
    }

    /// Keys children first (left, right, node).
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root.as_deref())
    }

    /// A sideways drawing of the tree for `{}` formatting.
    pub fn pretty(&self) -> Pretty<'_, K> {
        Pretty::new(self.root.as_deref())
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl<K> Node<K> {
    /// Allocates a leaf for `key`. Goes through the allocator directly so that running out of
    /// memory comes back as an error instead of aborting.
    fn try_new_boxed(key: K) -> Result<Box<Self>> {
        let layout = Layout::new::<Self>();

        #[cfg(test)]
        if crate::test::alloc::take_failure() {
            return Err(Error::out_of_memory(layout));
        }

        // SAFETY: `Node` always contains a `usize` so `layout` has a non-zero size.
        let ptr = unsafe { alloc::alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(ptr) else {
            return Err(Error::out_of_memory(layout));
        };

        // SAFETY: `ptr` was just allocated by the global allocator with the layout of `Self` so
        // it is valid for writes and well aligned. After the write it holds an initialized
        // `Self`, which is what `Box::from_raw` needs to take ownership of it.
        unsafe {
            ptr.as_ptr().write(Node {
                height: 1,
                key,
                left: None,
                right: None,
            });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// The difference in height between the left and right subtrees. Positive means the left
    /// side is taller.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Height of a possibly empty subtree. Empty is 0.
fn height<K>(link: &Link<K>) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

fn balance_factor<K>(link: &Link<K>) -> isize {
    link.as_deref().map_or(0, Node::balance_factor)
}

/// Inserts `key` into the subtree in `slot`, replacing the subtree root if a rotation moved it.
/// The answer says how `key` compared to the root that was in `slot`, which is what the caller
/// needs to choose between a single and a double rotation.
///
/// Heights are only touched after the recursive call succeeded, so both a duplicate key and a
/// failed allocation leave every node on the path exactly as it was.
fn insert<K>(slot: &mut Link<K>, key: K) -> Result<Descent>
where
    K: Ord,
{
    let node = match slot {
        Some(node) => node,
        None => {
            *slot = Some(Node::try_new_boxed(key)?);
            return Ok(Descent::Placed);
        }
    };

    let here = Descent::from(key.cmp(&node.key));
    let below = match here {
        Descent::Left => insert(&mut node.left, key)?,
        Descent::Right => insert(&mut node.right, key)?,
        _ => {
            debug!("ignoring duplicate key");
            return Ok(Descent::Duplicate);
        }
    };
    if below == Descent::Duplicate {
        return Ok(Descent::Duplicate);
    }

    node.fix_height();
    if let Some(imbalance) = Imbalance::classify(node.balance_factor(), below) {
        trace!("rebalancing {imbalance:?}");
        *slot = slot.take().map(|node| rebalance(node, imbalance));
    }

    // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
    if cfg!(debug_assertions) {
        if let Some(root) = slot.as_deref() {
            let left_height = height(&root.left);
            let right_height = height(&root.right);
            assert_eq!(root.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
    }

    Ok(here)
}

/// Applies the rotation(s) for `imbalance` and returns the new subtree root.
fn rebalance<K>(mut node: Box<Node<K>>, imbalance: Imbalance) -> Box<Node<K>> {
    #[cfg(test)]
    crate::test::rebalance::record(imbalance);

    match imbalance {
        Imbalance::LeftLeft => rotate_right(node),
        Imbalance::RightRight => rotate_left(node),
        Imbalance::LeftRight => {
            node.left = node.left.take().map(rotate_left);
            rotate_right(node)
        }
        Imbalance::RightLeft => {
            node.right = node.right.take().map(rotate_right);
            rotate_left(node)
        }
    }
}

/// Rotate `z` to the right. This moves the left child up vertically and `z` down vertically.
/// Used to rebalance the tree when the left child is too tall. As such, it must only be called
/// when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///        z                 y
///       / \               / \
///      y   d   rotate -> a   z
///     / \                   / \
///    a   t                 t   d
/// ```
fn rotate_right<K>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let mut y = z.left.take().expect("Rotate right => left child");
    z.left = y.right.take();

    // `y`'s height depends on `z`'s so `z` goes first.
    z.fix_height();
    y.right = Some(z);
    y.fix_height();
    y
}

/// Mirror image of [`rotate_right`]: the right child moves up and takes over its left subtree
/// as `z`'s new right subtree.
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left<K>(mut z: Box<Node<K>>) -> Box<Node<K>> {
    let mut y = z.right.take().expect("Rotate left => right child");
    z.right = y.left.take();

    z.fix_height();
    y.left = Some(z);
    y.fix_height();
    y
}

fn count_nodes<K>(link: &Link<K>) -> usize {
    link.as_deref().map_or(0, |n| {
        1 + count_nodes(&n.left) + count_nodes(&n.right)
    })
}

fn count_leaves<K>(link: &Link<K>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(n) if n.left.is_none() && n.right.is_none() => 1,
        Some(n) => count_leaves(&n.left) + count_leaves(&n.right),
    }
}

fn is_valid_avl<K>(link: &Link<K>) -> bool {
    match link.as_deref() {
        None => true,
        Some(n) => {
            (-1..=1).contains(&n.balance_factor())
                && is_valid_avl(&n.left)
                && is_valid_avl(&n.right)
        }
    }
}

/// Every key in `link` must lie strictly between `low` and `high` (where given).
fn is_valid_bst<K>(link: &Link<K>, low: Option<&K>, high: Option<&K>) -> bool
where
    K: Ord,
{
    let Some(n) = link.as_deref() else {
        return true;
    };
    if low.is_some_and(|low| n.key <= *low) || high.is_some_and(|high| n.key >= *high) {
        return false;
    }
    is_valid_bst(&n.left, low, Some(&n.key)) && is_valid_bst(&n.right, Some(&n.key), high)
}

/// Post-order teardown: both children are released before the node that owns them.
fn free<K>(link: Link<K>) {
    if let Some(mut node) = link {
        free(node.left.take());
        free(node.right.take());
        trace!("releasing node");
        drop(node);
    }
}
