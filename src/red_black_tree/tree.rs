use crate::arena::TypedArena;
use crate::red_black_tree::node::{Color, Key, Node, NodeHandle, Side};
use log::{debug, trace};
use std::cmp::Ordering;

/// The arena-backed red black tree underlying `RedBlackSet`. A `None` link is a black sentinel
/// leaf.
pub struct Tree {
    arena: TypedArena<Node>,
    root: Option<NodeHandle>,
}

impl Tree {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            arena: TypedArena::with_capacity(capacity),
            root: None,
        }
    }

    pub fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn get(&self, handle: NodeHandle) -> Option<&Node> {
        self.arena.get(&handle.0)
    }

    pub fn node(&self, handle: NodeHandle) -> &Node {
        &self.arena[handle.0]
    }

    pub fn node_mut(&mut self, handle: NodeHandle) -> &mut Node {
        &mut self.arena[handle.0]
    }

    pub fn color(&self, link: Option<NodeHandle>) -> Color {
        match link {
            None => Color::Black,
            Some(handle) => self.node(handle).color,
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    // precondition: `handle` has a parent
    fn side_of(&self, handle: NodeHandle) -> Side {
        let parent = self
            .node(handle)
            .parent
            .expect("Expected parent node to be `Some`.");
        if self.node(parent).left == Some(handle) {
            Side::Left
        } else {
            Side::Right
        }
    }

    pub fn find(&self, key: Key) -> Option<NodeHandle> {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = self.node(handle);
            curr = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub fn min_from(&self, mut handle: NodeHandle) -> NodeHandle {
        while let Some(left) = self.node(handle).left {
            handle = left;
        }
        handle
    }

    pub fn max_from(&self, mut handle: NodeHandle) -> NodeHandle {
        while let Some(right) = self.node(handle).right {
            handle = right;
        }
        handle
    }

    // Points the link that held `old` (a child slot of `parent`, or the root) at `new`.
    fn replace_child(
        &mut self,
        parent: Option<NodeHandle>,
        old: NodeHandle,
        new: Option<NodeHandle>,
    ) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = self.node_mut(parent);
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            },
        }
    }

    // Rotating towards `side` lifts the child on the opposite side of `x` into the position of
    // `x`: `Side::Left` is a left rotation and `Side::Right` a right rotation.
    pub fn rotate(&mut self, x: NodeHandle, side: Side) {
        let opposite = side.opposite();
        let y = self
            .node(x)
            .child(opposite)
            .expect("Expected rotated child node to be `Some`.");
        trace!("rotating {:?} at {}", side, self.node(x).key);

        let inner = self.node(y).child(side);
        *self.node_mut(x).child_mut(opposite) = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(x);
        }

        let parent = self.node(x).parent;
        self.node_mut(y).parent = parent;
        self.replace_child(parent, x, Some(y));

        *self.node_mut(y).child_mut(side) = Some(x);
        self.node_mut(x).parent = Some(y);
    }

    pub fn insert(&mut self, key: Key) -> (bool, NodeHandle) {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = self.node(handle);
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    debug!("insert of {} rejected as duplicate", key);
                    return (false, handle);
                },
            };
            parent = Some(handle);
            curr = node.child(side);
        }

        let new_node = NodeHandle(self.arena.allocate(Node::new(key, parent)));
        match parent {
            None => self.root = Some(new_node),
            Some(parent) => *self.node_mut(parent).child_mut(side) = Some(new_node),
        }

        self.insert_fixup(new_node);
        debug!("inserted {}", key);
        (true, new_node)
    }

    fn insert_fixup(&mut self, mut curr: NodeHandle) {
        while let Some(mut parent) = self.node(curr).parent {
            if self.node(parent).color == Color::Black {
                break;
            }

            // the root is black, so a red parent always has a parent
            let grandparent = self
                .node(parent)
                .parent
                .expect("Expected grandparent node to be `Some`.");
            let side = self.side_of(parent);

            if let Some(uncle) = self.node(grandparent).child(side.opposite()) {
                if self.node(uncle).color == Color::Red {
                    trace!("insert fixup: red uncle at {}", self.node(uncle).key);
                    self.node_mut(parent).color = Color::Black;
                    self.node_mut(uncle).color = Color::Black;
                    self.node_mut(grandparent).color = Color::Red;
                    curr = grandparent;
                    continue;
                }
            }

            if self.node(parent).child(side.opposite()) == Some(curr) {
                trace!("insert fixup: triangle at {}", self.node(curr).key);
                self.rotate(parent, side);
                curr = parent;
                parent = self
                    .node(curr)
                    .parent
                    .expect("Expected parent node to be `Some`.");
            }

            trace!("insert fixup: line at {}", self.node(curr).key);
            self.node_mut(parent).color = Color::Black;
            self.node_mut(grandparent).color = Color::Red;
            self.rotate(grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.node_mut(root).color = Color::Black;
        }
    }

    pub fn delete(&mut self, key: Key) -> bool {
        let mut target = match self.find(key) {
            Some(handle) => handle,
            None => {
                debug!("delete of {} found nothing", key);
                return false;
            },
        };

        if let (Some(_), Some(right)) = (self.node(target).left, self.node(target).right) {
            let successor = self.min_from(right);
            let successor_key = self.node(successor).key;
            self.node_mut(successor).key = key;
            self.node_mut(target).key = successor_key;
            target = successor;
        }

        let (child, parent, color) = {
            let node = self.node(target);
            (node.left.or(node.right), node.parent, node.color)
        };
        if let Some(child) = child {
            self.node_mut(child).parent = parent;
        }
        self.replace_child(parent, target, child);
        self.arena.free(&target.0);

        if color == Color::Black {
            self.delete_fixup(child, parent);
        }
        debug!("deleted {}", key);
        true
    }

    // `curr` is the link that took the place of the removed black node and `parent` is its
    // parent. `curr` is tracked alongside its parent because a sentinel leaf has no parent link.
    fn delete_fixup(&mut self, mut curr: Option<NodeHandle>, mut parent: Option<NodeHandle>) {
        while let Some(curr_parent) = parent {
            if self.color(curr) == Color::Red {
                break;
            }

            let side = if self.node(curr_parent).left == curr {
                Side::Left
            } else {
                Side::Right
            };
            let mut sibling = self
                .node(curr_parent)
                .child(side.opposite())
                .expect("Expected sibling node to be `Some`.");

            if self.node(sibling).color == Color::Red {
                trace!("delete fixup: red sibling at {}", self.node(sibling).key);
                self.node_mut(sibling).color = Color::Black;
                self.node_mut(curr_parent).color = Color::Red;
                self.rotate(curr_parent, side);
                sibling = self
                    .node(curr_parent)
                    .child(side.opposite())
                    .expect("Expected sibling node to be `Some`.");
            }

            let near = self.node(sibling).child(side);
            let far = self.node(sibling).child(side.opposite());
            if self.color(near) == Color::Black && self.color(far) == Color::Black {
                trace!("delete fixup: black nephews at {}", self.node(sibling).key);
                self.node_mut(sibling).color = Color::Red;
                curr = Some(curr_parent);
                parent = self.node(curr_parent).parent;
                continue;
            }

            if self.color(far) == Color::Black {
                trace!("delete fixup: triangle at {}", self.node(sibling).key);
                let near = near.expect("Expected near nephew node to be `Some`.");
                self.node_mut(near).color = Color::Black;
                self.node_mut(sibling).color = Color::Red;
                self.rotate(sibling, side.opposite());
                sibling = self
                    .node(curr_parent)
                    .child(side.opposite())
                    .expect("Expected sibling node to be `Some`.");
            }

            trace!("delete fixup: line at {}", self.node(sibling).key);
            let far = self
                .node(sibling)
                .child(side.opposite())
                .expect("Expected far nephew node to be `Some`.");
            let parent_color = self.node(curr_parent).color;
            self.node_mut(sibling).color = parent_color;
            self.node_mut(curr_parent).color = Color::Black;
            self.node_mut(far).color = Color::Black;
            self.rotate(curr_parent, side);
            curr = self.root;
            break;
        }

        if let Some(curr) = curr {
            self.node_mut(curr).color = Color::Black;
        }
    }
}
