use crate::arena::Entry;

/// The key type stored in a `RedBlackSet`.
pub type Key = i32;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

/// An enum representing which child slot of its parent a node or leaf occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other child slot.
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// An opaque, copyable identity of a node stored in a `RedBlackSet`.
///
/// Two handles are equal if and only if they refer to the same node. A handle stays valid until
/// its node is physically removed from the set; afterwards `RedBlackSet::node` returns `None` for
/// it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct NodeHandle(pub(crate) Entry);

/// A struct representing an internal node of a red black tree. A `None` child is a black sentinel
/// leaf.
pub struct Node {
    pub key: Key,
    pub color: Color,
    pub parent: Option<NodeHandle>,
    pub left: Option<NodeHandle>,
    pub right: Option<NodeHandle>,
}

impl Node {
    pub fn new(key: Key, parent: Option<NodeHandle>) -> Self {
        Node {
            key,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, side: Side) -> Option<NodeHandle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn child_mut(&mut self, side: Side) -> &mut Option<NodeHandle> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
