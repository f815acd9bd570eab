//! Depth-first walks over a [`Tree`][crate::Tree]. Each walk keeps its own stack of pending
//! nodes instead of recursing, so it can be paused between keys. Cloning a walk, or asking the
//! tree for a new one, starts over without touching the tree.

use std::iter::FusedIterator;

use crate::avl::Node;

/// Keys in ascending order. Created by [`Tree::in_order`][crate::Tree::in_order].
#[derive(Debug)]
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree has been (or is being) visited but which haven't been yielded.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

/// Keys with every node before its subtrees, left before right. Created by
/// [`Tree::pre_order`][crate::Tree::pre_order].
#[derive(Debug)]
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so that left comes off the stack first.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.key)
    }
}

/// Keys with both subtrees before their node, left before right. This is the order in which
/// the tree releases its nodes. Created by [`Tree::post_order`][crate::Tree::post_order].
#[derive(Debug)]
pub struct PostOrder<'a, K> {
    /// `true` once a node's children have been pushed above it.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right.as_deref().map(|n| (n, false)));
            self.stack.extend(node.left.as_deref().map(|n| (n, false)));
        }
    }
}

// Derived `Clone` would needlessly require `K: Clone`.
impl<K> Clone for InOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}
impl<K> Clone for PreOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}
impl<K> Clone for PostOrder<'_, K> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<K> FusedIterator for InOrder<'_, K> {}
impl<K> FusedIterator for PreOrder<'_, K> {}
impl<K> FusedIterator for PostOrder<'_, K> {}
