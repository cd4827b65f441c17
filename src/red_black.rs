//! A Red-Black Tree. Nodes live in an arena and refer to their children and parent by index, so
//! rotations are a handful of index swaps rather than pointer surgery.
//!
//! # Examples
//!
//! ```
//! use rbt::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(1));
//!
//! tree.insert(1);
//! assert!(tree.contains(1));
//!
//! // Equal keys are stored again, to the right of the existing one.
//! tree.insert(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Copies are independent of the original.
//! let mut copy = tree.clone();
//! copy.insert(2);
//! assert!(copy.contains(2));
//! assert!(!tree.contains(2));
//! ```

use std::cmp::Ordering;
use std::fmt;

use generational_arena::{Arena, Index};
use log::{debug, trace};

use crate::node::{Color, Key, Node};
use crate::util::Side;

/// A self-balancing Binary Search Tree (specifically, a Red-Black Tree) holding a multiset of
/// [`Key`]s. It supports inserting keys and testing membership in `O(lg N)`.
pub struct Tree {
    pub(crate) nodes: Arena<Node>,
    pub(crate) root: Option<Index>,
    pub(crate) len: usize,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Tree {
    /// Deep copies the tree node by node, keeping every key, color and the exact shape.
    fn clone(&self) -> Self {
        let mut copy = Self::new();
        if let Some(root) = self.root {
            copy.root = Some(copy.copy_of(self, root, None));
        }
        debug!("copied {} of {} nodes", copy.len, self.len);
        copy
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("nodes", &self.to_infix_string())
            .finish()
    }
}

impl Extend<Key> for Tree {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl FromIterator<Key> for Tree {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Generates a `Tree` holding just `key` in a black root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let tree = Tree::with_key(10);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.to_prefix_string(), " B10 ");
    /// ```
    pub fn with_key(key: Key) -> Self {
        let mut nodes = Arena::new();
        let root = nodes.insert(Node::new(key, Color::Black));
        Self {
            nodes,
            root: Some(root),
            len: 1,
        }
    }

    /// The number of keys stored, counting repeated keys once per insertion.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks whether `key` was ever inserted. This never modifies the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.contains(1));
    ///
    /// tree.insert(1);
    /// assert!(tree.contains(1));
    /// assert!(!tree.contains(42));
    /// ```
    pub fn contains(&self, key: Key) -> bool {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return true,
                Ordering::Greater => node.right,
            };
        }
        false
    }

    /// Inserts `key` and rebalances. Inserting a key that is already present stores it again.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10);
    /// tree.insert(20);
    /// tree.insert(30);
    ///
    /// // Inserting in order rotated 20 up to the root.
    /// assert_eq!(tree.to_prefix_string(), " B20 R10 R30 ");
    /// ```
    pub fn insert(&mut self, key: Key) {
        self.len += 1;

        if self.root.is_none() {
            self.root = Some(self.nodes.insert(Node::new(key, Color::Black)));
            return;
        }

        let node = self.basic_insert(key);
        if self.red_parent(node).is_some() {
            self.insert_fix_up(node);
        }

        if cfg!(debug_assertions) {
            let root = &self.nodes[self.root.expect("Inserting implies a root")];
            assert_eq!(root.color, Color::Black);
            assert!(root.parent.is_none());
        }
    }

    /// The number of nodes on the longest path from the root down to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        self.subtree_height(self.root)
    }

    /// The number of black nodes on any path from the root down to a missing child, not counting
    /// the root itself. `None` for an empty tree.
    pub fn black_height(&self) -> Option<usize> {
        let root = self.root?;
        let mut black_height = 0;
        let mut current = self.nodes[root].left;
        while let Some(id) = current {
            if !self.nodes[id].is_red() {
                black_height += 1;
            }
            current = self.nodes[id].left;
        }
        Some(black_height)
    }

    fn subtree_height(&self, id: Option<Index>) -> usize {
        match id {
            None => 0,
            Some(id) => {
                let node = &self.nodes[id];
                self.subtree_height(node.left)
                    .max(self.subtree_height(node.right))
                    + 1
            }
        }
    }

    /// Plain BST insertion of a red node holding `key`. Equal keys go right. Returns the new
    /// node, which may now be a red child of a red parent.
    fn basic_insert(&mut self, key: Key) -> Index {
        let mut parent = None;
        let mut current = self.root;
        while let Some(id) = current {
            parent = Some(id);
            current = self.nodes[id].child(side_for(key, self.nodes[id].key));
        }

        let mut node = Node::new(key, Color::Red);
        node.parent = parent;
        let id = self.nodes.insert(node);
        match parent {
            None => self.root = Some(id),
            Some(parent) => {
                let side = side_for(key, self.nodes[parent].key);
                self.nodes[parent].set_child(side, Some(id));
            }
        }
        id
    }

    /// Restores the Red-Black invariants after `node` was inserted under a red parent.
    ///
    /// While `node` and its parent are both red, look at the uncle:
    ///
    /// - A red uncle means the grandparent's blackness can be pushed down onto the parent and
    ///   uncle. The grandparent turns red (unless it is the root), which may clash with its own
    ///   parent, so we continue from the grandparent.
    /// - A black or missing uncle means one or two rotations settle it for good. If `node` and
    ///   the parent lean the same way we rotate the grandparent away from them. Otherwise we first
    ///   rotate the parent so they do, lifting `node` into the middle.
    fn insert_fix_up(&mut self, mut node: Index) {
        while let Some(parent) = self.red_parent(node) {
            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };

            let red_uncle = self.uncle(node).filter(|&uncle| self.nodes[uncle].is_red());
            if let Some(uncle) = red_uncle {
                trace!("recoloring below {}", self.nodes[grandparent].key);
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                if self.root == Some(grandparent) {
                    break;
                }
                self.nodes[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            self.nodes[grandparent].color = Color::Red;
            match (self.side_of(node), self.side_of(parent)) {
                (Some(node_side), Some(parent_side)) if node_side == parent_side => {
                    trace!(
                        "{node_side:?}-{parent_side:?} case at {}",
                        self.nodes[grandparent].key
                    );
                    self.rotate(grandparent, parent_side.opposite());
                    self.nodes[parent].color = Color::Black;
                }
                (Some(node_side), Some(parent_side)) => {
                    trace!(
                        "{node_side:?}-{parent_side:?} case at {}",
                        self.nodes[grandparent].key
                    );
                    self.rotate(parent, parent_side);
                    self.rotate(grandparent, node_side);
                    self.nodes[node].color = Color::Black;
                    self.nodes[parent].color = Color::Red;
                }
                shape => panic!(
                    "impossible state! {} under {} under {} has shape {:?}",
                    self.nodes[node].key,
                    self.nodes[parent].key,
                    self.nodes[grandparent].key,
                    shape
                ),
            }
            break;
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }

    /// Rotates `node` down towards `side`, lifting its child from the other side into its place.
    /// Colors are untouched. Without that child there is nothing to rotate and this does nothing.
    ///
    /// # Diagram
    ///
    /// For `side == Side::Left`; `Side::Right` is the mirror image:
    ///
    /// ```text
    ///   Option<parent>            Option<parent>
    ///      /                         /
    ///    node                      pivot
    ///   /    \                    /     \
    ///  x    pivot    rotate ->  node     z
    ///       /   \              /    \
    ///      y     z            x      y
    /// ```
    fn rotate(&mut self, node: Index, side: Side) {
        let Some(pivot) = self.nodes[node].child(side.opposite()) else {
            return;
        };
        trace!(
            "rotating {} {side:?} under {}",
            self.nodes[node].key,
            self.nodes[pivot].key
        );

        let inner = self.nodes[pivot].child(side);
        self.nodes[node].set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(node);
        }

        let parent = self.nodes[node].parent;
        match parent {
            None => self.root = Some(pivot),
            Some(parent) => {
                let node_side = if self.nodes[parent].left == Some(node) {
                    Side::Left
                } else {
                    Side::Right
                };
                self.nodes[parent].set_child(node_side, Some(pivot));
            }
        }
        self.nodes[pivot].parent = parent;

        self.nodes[pivot].set_child(side, Some(node));
        self.nodes[node].parent = Some(pivot);
    }

    /// The parent of `node`, but only when that parent is red.
    fn red_parent(&self, node: Index) -> Option<Index> {
        self.nodes[node]
            .parent
            .filter(|&parent| self.nodes[parent].is_red())
    }

    /// Which child of its parent `node` is. `None` for the root, or for a node its parent does
    /// not actually point to.
    fn side_of(&self, node: Index) -> Option<Side> {
        let parent = &self.nodes[self.nodes[node].parent?];
        if parent.left == Some(node) {
            Some(Side::Left)
        } else if parent.right == Some(node) {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// The other child of `node`'s grandparent, if there is one.
    fn uncle(&self, node: Index) -> Option<Index> {
        let parent = self.nodes[node].parent?;
        let grandparent = self.nodes[parent].parent?;
        self.nodes[grandparent].child(self.side_of(parent)?.opposite())
    }

    /// Allocates a copy of `source`'s subtree at `id` in this tree's arena under `parent`.
    fn copy_of(&mut self, source: &Tree, id: Index, parent: Option<Index>) -> Index {
        let original = &source.nodes[id];
        let mut node = Node::new(original.key, original.color);
        node.is_null_node = original.is_null_node;
        node.parent = parent;

        let new_id = self.nodes.insert(node);
        self.len += 1;

        let left = original
            .left
            .map(|left| self.copy_of(source, left, Some(new_id)));
        self.nodes[new_id].left = left;
        let right = original
            .right
            .map(|right| self.copy_of(source, right, Some(new_id)));
        self.nodes[new_id].right = right;

        new_id
    }
}

/// Which side of a node holding `other` a new `key` belongs on.
fn side_for(key: Key, other: Key) -> Side {
    if key < other {
        Side::Left
    } else {
        Side::Right
    }
}
