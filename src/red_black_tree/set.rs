use crate::red_black_tree::invariants::{self, Result};
use crate::red_black_tree::node::{Color, Key, Node, NodeHandle, Side};
use crate::red_black_tree::tree::Tree;
use std::fmt;
use std::iter::FromIterator;
use std::ptr;

/// An ordered set of signed integers implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black.
/// The tree maintains the invariants that the root and every sentinel leaf are black, that a red
/// node never has a red child, and that every path from a node down to a leaf passes through the
/// same number of black nodes. Together these keep the height of the tree within twice the
/// optimum, so insertion, deletion, and lookup are logarithmic.
///
/// Nodes live in an arena and are addressed by `NodeHandle`s. Besides the usual set operations,
/// the set exposes its structure through `NodeRef` views so that the coloring and the shape of
/// the tree can be inspected.
///
/// # Examples
///
/// ```
/// use ordered_set::red_black_tree::{Color, RedBlackSet};
///
/// let mut set = RedBlackSet::new();
/// set.insert(0);
/// set.insert(3);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.min(), Some(0));
///
/// let root = set.root().unwrap();
/// assert_eq!(root.key(), 0);
/// assert_eq!(root.color(), Color::Black);
/// assert_eq!(root.right().map(|node| node.key()), Some(3));
///
/// assert!(set.delete(0));
/// assert!(!set.delete(1));
/// ```
pub struct RedBlackSet {
    tree: Tree,
}

impl RedBlackSet {
    /// Constructs a new, empty `RedBlackSet`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let set = RedBlackSet::new();
    /// assert!(set.root().is_none());
    /// ```
    pub fn new() -> Self {
        RedBlackSet { tree: Tree::new() }
    }

    /// Constructs a new, empty `RedBlackSet` that can hold `capacity` keys before it
    /// reallocates its node storage.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let set = RedBlackSet::with_capacity(1024);
    /// assert!(set.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        RedBlackSet {
            tree: Tree::with_capacity(capacity),
        }
    }

    /// Inserts a key into the set. Returns `(true, handle)` with the handle of the new node if
    /// the key was absent. If the key already exists, the set is left untouched and
    /// `(false, handle)` is returned with the handle of the existing node.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// let (inserted, handle) = set.insert(1);
    /// assert!(inserted);
    /// assert_eq!(set.insert(1), (false, handle));
    /// ```
    pub fn insert(&mut self, key: Key) -> (bool, NodeHandle) {
        self.tree.insert(key)
    }

    /// Inserts every key yielded by `keys` in order and returns one `insert` result per key,
    /// in the same order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(10);
    ///
    /// let results = set.insert_nodes(vec![10, 12, 43]);
    /// let inserted: Vec<bool> = results.iter().map(|result| result.0).collect();
    /// assert_eq!(inserted, vec![false, true, true]);
    /// ```
    pub fn insert_nodes<I>(&mut self, keys: I) -> Vec<(bool, NodeHandle)>
    where
        I: IntoIterator<Item = Key>,
    {
        keys.into_iter().map(|key| self.insert(key)).collect()
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    ///
    /// When the key is stored in a node with two children, the key of its in-order successor is
    /// moved into that node and the successor's node is removed instead, so the handle that is
    /// invalidated is not necessarily the one that held the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.delete(1));
    /// assert!(!set.delete(1));
    /// ```
    pub fn delete(&mut self, key: Key) -> bool {
        self.tree.delete(key)
    }

    /// Returns the node holding a particular key, or `None` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.find(1).map(|node| node.key()), Some(1));
    /// assert!(set.find(0).is_none());
    /// ```
    pub fn find(&self, key: Key) -> Option<NodeRef<'_>> {
        self.tree.find(key).map(|handle| self.node_ref(handle))
    }

    /// Returns the root node of the tree, or `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(3);
    /// set.insert(2);
    /// set.insert(1);
    /// assert_eq!(set.root().map(|node| node.key()), Some(2));
    /// ```
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.tree.root().map(|handle| self.node_ref(handle))
    }

    /// Returns the node named by a handle obtained from this set, or `None` if that node has
    /// since been removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// let (_, handle) = set.insert(1);
    /// assert_eq!(set.node(handle).map(|node| node.key()), Some(1));
    ///
    /// set.delete(1);
    /// assert!(set.node(handle).is_none());
    /// ```
    pub fn node(&self, handle: NodeHandle) -> Option<NodeRef<'_>> {
        self.tree.get(handle).map(|_| self.node_ref(handle))
    }

    fn node_ref(&self, handle: NodeHandle) -> NodeRef<'_> {
        NodeRef {
            tree: &self.tree,
            handle,
        }
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(0));
    /// assert!(set.contains(1));
    /// ```
    pub fn contains(&self, key: Key) -> bool {
        self.tree.find(key).is_some()
    }

    /// Returns the number of keys in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let set = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all keys and invalidating every handle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.min(), Some(1));
    /// ```
    pub fn min(&self) -> Option<Key> {
        self.tree
            .root()
            .map(|root| self.tree.node(self.tree.min_from(root)).key)
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.max(), Some(3));
    /// ```
    pub fn max(&self) -> Option<Key> {
        self.tree
            .root()
            .map(|root| self.tree.node(self.tree.max_from(root)).key)
    }

    // Clears `out` and pushes every node matching `predicate` in pre-order.
    fn collect_nodes<'a, F>(&'a self, out: &mut Vec<NodeRef<'a>>, predicate: F)
    where
        F: Fn(&Node) -> bool,
    {
        out.clear();
        let mut stack: Vec<NodeHandle> = self.tree.root().into_iter().collect();
        while let Some(handle) = stack.pop() {
            let node = self.tree.node(handle);
            if predicate(node) {
                out.push(self.node_ref(handle));
            }
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    /// Replaces the contents of `out` with every node whose two children are both sentinel
    /// leaves. Sentinel leaves themselves are not reported; see `sentinel_leaves`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert_nodes(vec![2, 1, 3]);
    ///
    /// let mut leaves = Vec::new();
    /// set.leaf_nodes(&mut leaves);
    /// let mut keys: Vec<i32> = leaves.iter().map(|node| node.key()).collect();
    /// keys.sort();
    /// assert_eq!(keys, vec![1, 3]);
    /// ```
    pub fn leaf_nodes<'a>(&'a self, out: &mut Vec<NodeRef<'a>>) {
        self.collect_nodes(out, Node::is_leaf);
    }

    /// Replaces the contents of `out` with every node that has at least one real child.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert_nodes(vec![2, 1, 3]);
    ///
    /// let mut non_leaves = Vec::new();
    /// set.non_leaf_nodes(&mut non_leaves);
    /// assert_eq!(non_leaves.len(), 1);
    /// assert_eq!(non_leaves[0].key(), 2);
    /// ```
    pub fn non_leaf_nodes<'a>(&'a self, out: &mut Vec<NodeRef<'a>>) {
        self.collect_nodes(out, |node| !node.is_leaf());
    }

    /// Replaces the contents of `out` with every node of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert_nodes(vec![2, 1, 3]);
    ///
    /// let mut nodes = Vec::new();
    /// set.all_nodes(&mut nodes);
    /// assert_eq!(nodes.len(), 3);
    /// ```
    pub fn all_nodes<'a>(&'a self, out: &mut Vec<NodeRef<'a>>) {
        self.collect_nodes(out, |_| true);
    }

    /// Replaces the contents of `out` with every sentinel leaf of the tree, that is every empty
    /// child slot of a node. A non-empty set of `n` keys has `n + 1` sentinel leaves and an
    /// empty set has none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::{Color, RedBlackSet};
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert_nodes(vec![2, 1, 3]);
    ///
    /// let mut leaves = Vec::new();
    /// set.sentinel_leaves(&mut leaves);
    /// assert_eq!(leaves.len(), 4);
    /// assert!(leaves.iter().all(|leaf| leaf.color() == Color::Black));
    /// ```
    pub fn sentinel_leaves<'a>(&'a self, out: &mut Vec<SentinelLeaf<'a>>) {
        out.clear();
        let mut stack: Vec<NodeHandle> = self.tree.root().into_iter().collect();
        while let Some(handle) = stack.pop() {
            let node = self.tree.node(handle);
            for &side in &[Side::Left, Side::Right] {
                match node.child(side) {
                    Some(child) => stack.push(child),
                    None => out.push(SentinelLeaf {
                        parent: self.node_ref(handle),
                        side,
                    }),
                }
            }
        }
    }

    /// Verifies the structure of the tree: binary search tree order, parent links, a black
    /// root, no red node with a red child, and equal black heights. Returns the black height of
    /// the tree counting the sentinel leaf (0 for an empty set), or the first violation found.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.check_invariants(), Ok(0));
    ///
    /// set.insert_nodes(vec![2, 1, 3]);
    /// assert_eq!(set.check_invariants(), Ok(2));
    /// ```
    pub fn check_invariants(&self) -> Result<usize> {
        invariants::check(&self.tree)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(1));
    /// assert_eq!(iterator.next(), Some(3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_> {
        RedBlackSetIter {
            tree: &self.tree,
            stack: Vec::new(),
            curr: self.tree.root(),
        }
    }
}

/// A read-only view of a node of a `RedBlackSet`.
///
/// Two views are equal if they refer to the same node of the same set.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a Tree,
    handle: NodeHandle,
}

impl<'a> NodeRef<'a> {
    fn node(&self) -> &'a Node {
        self.tree.node(self.handle)
    }

    fn link(&self, link: Option<NodeHandle>) -> Option<NodeRef<'a>> {
        link.map(|handle| NodeRef {
            tree: self.tree,
            handle,
        })
    }

    /// Returns the handle of this node.
    pub fn handle(&self) -> NodeHandle {
        self.handle
    }

    /// Returns the key stored in this node.
    pub fn key(&self) -> Key {
        self.node().key
    }

    /// Returns the color of this node.
    pub fn color(&self) -> Color {
        self.node().color
    }

    /// Returns `true` if this node is red.
    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    /// Returns `true` if this node is black.
    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    /// Returns the parent of this node, or `None` for the root.
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.link(self.node().parent)
    }

    /// Returns the left child of this node, or `None` if it is a sentinel leaf.
    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.link(self.node().left)
    }

    /// Returns the right child of this node, or `None` if it is a sentinel leaf.
    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.link(self.node().right)
    }

    /// Returns the color of the left child. Sentinel leaves are black.
    pub fn left_color(&self) -> Color {
        self.tree.color(self.node().left)
    }

    /// Returns the color of the right child. Sentinel leaves are black.
    pub fn right_color(&self) -> Color {
        self.tree.color(self.node().right)
    }

    /// Returns `true` if both children of this node are sentinel leaves.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns the number of black nodes on the path from this node up to the root, both
    /// included.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert_nodes(vec![2, 1, 3, 0]);
    ///
    /// // 0 is a red child of the black node 1, which is a child of the black root 2
    /// assert_eq!(set.find(0).unwrap().black_ancestors(), 2);
    /// assert_eq!(set.find(3).unwrap().black_ancestors(), 2);
    /// ```
    pub fn black_ancestors(&self) -> usize {
        let mut count = 0;
        let mut curr = Some(self.handle);
        while let Some(handle) = curr {
            let node = self.tree.node(handle);
            if node.color == Color::Black {
                count += 1;
            }
            curr = node.parent;
        }
        count
    }
}

impl<'a> PartialEq for NodeRef<'a> {
    fn eq(&self, other: &NodeRef<'a>) -> bool {
        ptr::eq(self.tree, other.tree) && self.handle == other.handle
    }
}

impl<'a> Eq for NodeRef<'a> {}

impl<'a> fmt::Debug for NodeRef<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.key())
            .field("color", &self.color())
            .finish()
    }
}

/// A black, keyless sentinel leaf of a `RedBlackSet`, identified by the node whose empty child
/// slot it occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SentinelLeaf<'a> {
    parent: NodeRef<'a>,
    side: Side,
}

impl<'a> SentinelLeaf<'a> {
    /// Returns the node this leaf hangs from.
    pub fn parent(&self) -> NodeRef<'a> {
        self.parent
    }

    /// Returns which child slot of its parent this leaf occupies.
    pub fn side(&self) -> Side {
        self.side
    }

    /// Sentinel leaves are always black.
    pub fn color(&self) -> Color {
        Color::Black
    }

    /// Returns the number of black nodes on the path from this leaf up to the root, counting the
    /// leaf.
    pub fn black_ancestors(&self) -> usize {
        self.parent.black_ancestors() + 1
    }
}

impl Default for RedBlackSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RedBlackSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Key> for RedBlackSet {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Key>,
    {
        let mut set = RedBlackSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Key> for RedBlackSet {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = Key>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a> IntoIterator for &'a RedBlackSet {
    type IntoIter = RedBlackSetIter<'a>;
    type Item = Key;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackSet`.
///
/// This iterator traverses the elements of the set in-order and yields keys.
pub struct RedBlackSetIter<'a> {
    tree: &'a Tree,
    stack: Vec<NodeHandle>,
    curr: Option<NodeHandle>,
}

impl<'a> Iterator for RedBlackSetIter<'a> {
    type Item = Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(handle) = self.curr {
            self.stack.push(handle);
            self.curr = self.tree.node(handle).left;
        }
        self.stack.pop().map(|handle| {
            let node = self.tree.node(handle);
            self.curr = node.right;
            node.key
        })
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackSet;
    use crate::red_black_tree::node::{Color, Side};

    #[test]
    fn test_len_empty() {
        let set = RedBlackSet::new();
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let set = RedBlackSet::new();
        assert!(set.is_empty());
    }

    #[test]
    fn test_min_max_empty() {
        let set = RedBlackSet::new();
        assert_eq!(set.min(), None);
        assert_eq!(set.max(), None);
    }

    #[test]
    fn test_insert() {
        let mut set = RedBlackSet::new();
        let (inserted, handle) = set.insert(1);
        assert!(inserted);
        assert!(set.contains(1));
        assert_eq!(set.node(handle).map(|node| node.key()), Some(1));
    }

    #[test]
    fn test_insert_duplicate_returns_existing_node() {
        let mut set = RedBlackSet::new();
        let (_, handle) = set.insert(1);
        set.insert(2);
        assert_eq!(set.insert(1), (false, handle));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_insert_nodes() {
        let mut set = RedBlackSet::new();
        let results = set.insert_nodes(vec![3, 1, 3, 2]);
        assert_eq!(
            results.iter().map(|result| result.0).collect::<Vec<bool>>(),
            vec![true, true, false, true],
        );
        assert_eq!(results[0].1, results[2].1);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_delete() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        assert!(set.delete(1));
        assert!(!set.contains(1));
        assert!(!set.delete(1));
    }

    #[test]
    fn test_delete_invalidates_removed_node() {
        let mut set = RedBlackSet::new();
        let (_, two) = set.insert(2);
        let (_, one) = set.insert(1);
        let (_, three) = set.insert(3);

        assert!(set.delete(2));
        assert_eq!(set.node(two).map(|node| node.key()), Some(3));
        assert!(set.node(three).is_none());
        assert_eq!(set.node(one).map(|node| node.key()), Some(1));
    }

    #[test]
    fn test_find_and_root_links() {
        let mut set = RedBlackSet::new();
        set.insert_nodes(vec![2, 1, 3]);

        let root = set.root().unwrap();
        let left = root.left().unwrap();
        assert_eq!(left.key(), 1);
        assert_eq!(left.parent(), Some(root));
        assert_eq!(set.find(1), Some(left));
        assert!(root.parent().is_none());
        assert!(left.left().is_none());
        assert_eq!(left.left_color(), Color::Black);
        assert!(left.is_red());
        assert!(root.is_black());
    }

    #[test]
    fn test_min_max() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(3);
        set.insert(5);

        assert_eq!(set.min(), Some(1));
        assert_eq!(set.max(), Some(5));
    }

    #[test]
    fn test_enumerations_clear_output() {
        let mut set = RedBlackSet::new();
        set.insert_nodes(vec![4, 2, 6, 1]);

        let mut nodes = Vec::new();
        set.all_nodes(&mut nodes);
        assert_eq!(nodes.len(), 4);

        set.leaf_nodes(&mut nodes);
        let mut keys: Vec<i32> = nodes.iter().map(|node| node.key()).collect();
        keys.sort();
        assert_eq!(keys, vec![1, 6]);

        set.non_leaf_nodes(&mut nodes);
        let mut keys: Vec<i32> = nodes.iter().map(|node| node.key()).collect();
        keys.sort();
        assert_eq!(keys, vec![2, 4]);
    }

    #[test]
    fn test_all_nodes_is_pre_order() {
        let mut set = RedBlackSet::new();
        set.insert_nodes(vec![4, 2, 6, 1, 3]);

        let mut nodes = Vec::new();
        set.all_nodes(&mut nodes);
        assert_eq!(
            nodes.iter().map(|node| node.key()).collect::<Vec<i32>>(),
            vec![4, 2, 1, 3, 6],
        );
    }

    #[test]
    fn test_sentinel_leaves() {
        let mut set = RedBlackSet::new();
        {
            let mut leaves = Vec::new();
            set.sentinel_leaves(&mut leaves);
            assert!(leaves.is_empty());
        }

        set.insert_nodes(vec![2, 1]);
        let mut leaves = Vec::new();
        set.sentinel_leaves(&mut leaves);
        assert_eq!(leaves.len(), 3);

        let root_leaf = leaves
            .iter()
            .find(|leaf| leaf.parent().key() == 2)
            .unwrap();
        assert_eq!(root_leaf.side(), Side::Right);
        assert_eq!(root_leaf.black_ancestors(), 2);
        assert!(leaves.iter().all(|leaf| leaf.black_ancestors() == 2));
    }

    #[test]
    fn test_clear() {
        let mut set = RedBlackSet::new();
        let (_, handle) = set.insert(1);
        set.insert(2);
        set.clear();
        assert!(set.is_empty());
        assert!(set.root().is_none());
        assert!(set.node(handle).is_none());
    }

    #[test]
    fn test_iter() {
        let mut set = RedBlackSet::new();
        set.insert(1);
        set.insert(5);
        set.insert(3);

        assert_eq!(set.iter().collect::<Vec<i32>>(), vec![1, 3, 5]);
        assert_eq!((&set).into_iter().count(), 3);
    }

    #[test]
    fn test_from_iter_and_debug() {
        let set: RedBlackSet = vec![3, -1, 2, 3].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(format!("{:?}", set), "{-1, 2, 3}");
    }

    #[test]
    fn test_check_invariants() {
        let set: RedBlackSet = (0..100).collect();
        assert_eq!(set.check_invariants(), Ok(7));
    }
}
