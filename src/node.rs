use std::fmt;

use generational_arena::Index;

use crate::util::Side;

/// The key stored in a [`Tree`][crate::Tree].
pub type Key = i32;

/// The color bit of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    /// A red node. Its children, if any, are black.
    Red,
    /// A black node. Missing children count as black too.
    Black,
}

impl Color {
    /// The one letter tag used in traversal dumps: `'R'` or `'B'`.
    pub fn tag(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A single stored key. Children are owned through the tree's arena; `parent` is only a back
/// reference and is `None` for the root.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) color: Color,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
    pub(crate) parent: Option<Index>,
    /// Sentinel marker for a future `delete`. Nothing sets it yet.
    pub(crate) is_null_node: bool,
}

impl Node {
    pub(crate) fn new(key: Key, color: Color) -> Self {
        Self {
            key,
            color,
            left: None,
            right: None,
            parent: None,
            is_null_node: false,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Index>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}
