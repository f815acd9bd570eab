use std::cmp::Ordering;

/// Where an inserted key ended up relative to the root of the subtree it was handed to. The
/// parent uses the answer from its child to tell a straight-line imbalance from a zig-zag one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Descent {
    /// The key was already present. Nothing was changed anywhere along the path.
    Duplicate,
    /// The subtree was empty and the new node is now its root.
    Placed,
    /// The key is smaller than the subtree root's key.
    Left,
    /// The key is larger than the subtree root's key.
    Right,
}

impl From<Ordering> for Descent {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Left,
            Ordering::Equal => Self::Duplicate,
            Ordering::Greater => Self::Right,
        }
    }
}

/// The four shapes an insertion can leave behind at the first unbalanced ancestor. See
/// [the Wikipedia page][wiki] for the diagrams.
///
/// [wiki]: https://en.wikipedia.org/wiki/AVL_tree#Rebalancing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Imbalance {
    /// Left child is too tall and the key went into its left subtree. One right rotation.
    LeftLeft,
    /// Right child is too tall and the key went into its right subtree. One left rotation.
    RightRight,
    /// Left child is too tall and the key went into its right subtree. Rotate the child left,
    /// then the node right.
    LeftRight,
    /// Right child is too tall and the key went into its left subtree. Rotate the child right,
    /// then the node left.
    RightLeft,
}

impl Imbalance {
    /// Picks the correction for a node whose height was just refreshed. `balance_factor` is the
    /// node's left height minus its right height and `child` is how the new key compared to the
    /// key of the child it was inserted under.
    ///
    /// Returns `None` when the node is still within the AVL bound.
    pub(crate) fn classify(balance_factor: isize, child: Descent) -> Option<Self> {
        match child {
            Descent::Left if balance_factor > 1 => Some(Self::LeftLeft),
            Descent::Right if balance_factor < -1 => Some(Self::RightRight),
            Descent::Right if balance_factor > 1 => Some(Self::LeftRight),
            Descent::Left if balance_factor < -1 => Some(Self::RightLeft),
            // A freshly placed child has height 1 so its parent can't be out of balance yet.
            _ => None,
        }
    }
}
