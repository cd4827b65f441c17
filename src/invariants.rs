//! Checking a [`Tree`] against the Binary Search Tree and Red-Black invariants. Insertion keeps
//! these on its own; this is for tests and for callers who want to double check.

use generational_arena::Index;
use thiserror::Error;

use crate::node::Key;
use crate::red_black::Tree;

/// The first broken invariant [`Tree::validate`] came across.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A key sits in a subtree whose ancestors bound it from below by `lower` or from above by
    /// `upper`.
    #[error("key {key} is outside the bounds {lower:?}..={upper:?} set by its ancestors")]
    OutOfOrder {
        /// The misplaced key.
        key: Key,
        /// The smallest key allowed here, if any.
        lower: Option<Key>,
        /// The largest key allowed here, if any.
        upper: Option<Key>,
    },

    /// The root is red.
    #[error("root {0} is red")]
    RedRoot(Key),

    /// A red node has a red child.
    #[error("red node {parent} has red child {child}")]
    RedRedEdge {
        /// The key of the red parent.
        parent: Key,
        /// The key of the red child.
        child: Key,
    },

    /// The two subtrees of a node hold a different number of black nodes on their paths down.
    #[error("node {key} has black height {left} on the left but {right} on the right")]
    BlackHeightMismatch {
        /// The key of the node whose subtrees disagree.
        key: Key,
        /// The black height of the left subtree.
        left: usize,
        /// The black height of the right subtree.
        right: usize,
    },

    /// A node's parent link doesn't point at the node that owns it, or the root has a parent.
    #[error("node {0} has a parent link that doesn't match its owner")]
    BrokenParentLink(Key),

    /// The stored count disagrees with the number of reachable nodes.
    #[error("tree counts {expected} keys but holds {found} nodes")]
    CountMismatch {
        /// The count the tree keeps.
        expected: usize,
        /// The number of nodes actually reachable from the root.
        found: usize,
    },
}

impl Tree {
    /// Walks the whole tree and checks it is ordered, balanced, linked and counted correctly.
    /// Takes `O(N)`.
    ///
    /// Rotations can move a key equal to its parent's into the left subtree, so ordering is
    /// checked non-strictly: left keys are at most, and right keys at least, their ancestor's key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let tree: Tree = (0..100).collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), InvariantError> {
        let Some(root) = self.root else {
            return match self.len {
                0 => Ok(()),
                expected => Err(InvariantError::CountMismatch { expected, found: 0 }),
            };
        };

        let node = &self.nodes[root];
        if node.is_red() {
            return Err(InvariantError::RedRoot(node.key));
        }
        if node.parent.is_some() {
            return Err(InvariantError::BrokenParentLink(node.key));
        }

        let mut found = 0;
        self.check_subtree(root, None, None, &mut found)?;
        if found != self.len {
            return Err(InvariantError::CountMismatch {
                expected: self.len,
                found,
            });
        }
        Ok(())
    }

    /// Checks the subtree at `id` and returns its black height, counting `id` itself.
    fn check_subtree(
        &self,
        id: Index,
        lower: Option<Key>,
        upper: Option<Key>,
        found: &mut usize,
    ) -> Result<usize, InvariantError> {
        *found += 1;
        let node = &self.nodes[id];
        if lower.map_or(false, |lower| node.key < lower)
            || upper.map_or(false, |upper| node.key > upper)
        {
            return Err(InvariantError::OutOfOrder {
                key: node.key,
                lower,
                upper,
            });
        }

        let left = self.check_child(id, node.left, lower, Some(node.key), found)?;
        let right = self.check_child(id, node.right, Some(node.key), upper, found)?;
        if left != right {
            return Err(InvariantError::BlackHeightMismatch {
                key: node.key,
                left,
                right,
            });
        }

        Ok(left + usize::from(!node.is_red()))
    }

    fn check_child(
        &self,
        parent: Index,
        child: Option<Index>,
        lower: Option<Key>,
        upper: Option<Key>,
        found: &mut usize,
    ) -> Result<usize, InvariantError> {
        let Some(child) = child else {
            return Ok(0);
        };

        let (parent_node, child_node) = (&self.nodes[parent], &self.nodes[child]);
        if child_node.parent != Some(parent) {
            return Err(InvariantError::BrokenParentLink(child_node.key));
        }
        if parent_node.is_red() && child_node.is_red() {
            return Err(InvariantError::RedRedEdge {
                parent: parent_node.key,
                child: child_node.key,
            });
        }

        self.check_subtree(child, lower, upper, found)
    }
}
