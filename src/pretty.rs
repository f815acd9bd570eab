use std::fmt;

use crate::avl::Node;

/// Columns added per level of depth.
const INDENT: usize = 5;

/// Draws a tree on its side: the root in the first column, the right subtree above it and the
/// left subtree below, one `key(bf=N)` per line. Created by [`Tree::pretty`][crate::Tree::pretty].
///
/// # Examples
///
/// ```
/// use avl::Tree;
///
/// let tree = Tree::try_from_keys([2, 1, 3])?;
/// assert_eq!(
///     tree.pretty().to_string(),
///     "     3(bf=0)\n2(bf=0)\n     1(bf=0)\n"
/// );
/// # Ok::<(), avl::Error>(())
/// ```
#[derive(Debug)]
pub struct Pretty<'a, K> {
    root: Option<&'a Node<K>>,
}

impl<'a, K> Pretty<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self { root }
    }
}

impl<K> fmt::Display for Pretty<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write_node(f, root, 0),
            None => Ok(()),
        }
    }
}

fn write_node<K>(f: &mut fmt::Formatter<'_>, node: &Node<K>, depth: usize) -> fmt::Result
where
    K: fmt::Display,
{
    if let Some(right) = node.right.as_deref() {
        write_node(f, right, depth + 1)?;
    }
    writeln!(
        f,
        "{:indent$}{}(bf={})",
        "",
        node.key,
        node.balance_factor(),
        indent = depth * INDENT
    )?;
    if let Some(left) = node.left.as_deref() {
        write_node(f, left, depth + 1)?;
    }
    Ok(())
}
