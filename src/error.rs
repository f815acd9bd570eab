//! Errors reported by [`Tree`][crate::Tree] operations.

use std::alloc::Layout;

/// The only way building a tree can fail is running out of memory for a new node. Everything
/// else (duplicate keys, queries on an empty tree) is defined behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The allocator refused to hand out memory for a new node. The tree is left exactly as it
    /// was before the failed insert.
    #[error("out of memory allocating a tree node ({size} bytes, align {align})")]
    OutOfMemory {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment.
        align: usize,
    },
}

impl Error {
    pub(crate) fn out_of_memory(layout: Layout) -> Self {
        Self::OutOfMemory {
            size: layout.size(),
            align: layout.align(),
        }
    }
}

/// Shorthand for results carrying an [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
