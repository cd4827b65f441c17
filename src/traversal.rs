//! Walking a [`Tree`]: text dumps tagged with node colors, and sorted iteration over its keys.

use std::fmt::Write;

use generational_arena::Index;

use crate::node::{Key, Node};
use crate::red_black::Tree;

/// The order in which a dump visits a node relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Keys come out sorted.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

impl Tree {
    /// Dumps the tree in order. See [`Tree::to_order_string`] for the format.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let tree: Tree = [30, 10, 20].into_iter().collect();
    /// assert_eq!(tree.to_infix_string(), " R10 B20 R30 ");
    /// ```
    pub fn to_infix_string(&self) -> String {
        self.to_order_string(Order::InOrder)
    }

    /// Dumps the tree root first. See [`Tree::to_order_string`] for the format.
    pub fn to_prefix_string(&self) -> String {
        self.to_order_string(Order::PreOrder)
    }

    /// Dumps the tree root last. See [`Tree::to_order_string`] for the format.
    pub fn to_postfix_string(&self) -> String {
        self.to_order_string(Order::PostOrder)
    }

    /// Dumps every node as its color tag (`R` or `B`) followed by its key, visiting nodes in the
    /// given `order`. Nodes are separated by single spaces and the whole dump is padded by one
    /// space on each side. An empty tree dumps as an empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::{Order, Tree};
    ///
    /// let tree: Tree = [10, 20, 30].into_iter().collect();
    /// assert_eq!(tree.to_order_string(Order::PostOrder), " R10 R30 B20 ");
    /// assert_eq!(Tree::new().to_order_string(Order::PreOrder), "");
    /// ```
    pub fn to_order_string(&self, order: Order) -> String {
        let mut dump = String::new();
        self.walk(self.root, order, &mut |node| {
            // Writing to a `String` can't fail.
            let _ = write!(dump, " {}{}", node.color.tag(), node.key);
        });
        if !dump.is_empty() {
            dump.push(' ');
        }
        dump
    }

    /// Iterates over the keys in ascending order. Repeated keys are yielded once per insertion.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbt::Tree;
    ///
    /// let tree: Tree = [3, 1, 2, 1].into_iter().collect();
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    fn walk<F>(&self, id: Option<Index>, order: Order, visit: &mut F)
    where
        F: FnMut(&Node),
    {
        let Some(id) = id else {
            return;
        };
        let node = &self.nodes[id];

        if order == Order::PreOrder {
            visit(node);
        }
        self.walk(node.left, order, visit);
        if order == Order::InOrder {
            visit(node);
        }
        self.walk(node.right, order, visit);
        if order == Order::PostOrder {
            visit(node);
        }
    }
}

/// An ascending iterator over the keys of a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a> {
    tree: &'a Tree,
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<Index>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(tree: &'a Tree) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        while let Some(id) = current {
            self.stack.push(id);
            current = self.tree.nodes[id].left;
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[id];
        self.push_left_spine(node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
