use crate::red_black_tree::node::{Color, Key, NodeHandle};
use crate::red_black_tree::tree::Tree;
use std::error;
use std::fmt;
use std::result;

/// A structural defect found by `RedBlackSet::check_invariants`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The root node is red.
    RedRoot,
    /// A red node has a red child. Carries the key of the child.
    RedViolation { key: Key },
    /// Two paths to sentinel leaves pass through different numbers of black nodes. Carries the
    /// key of the parent of the first leaf that disagreed.
    BlackHeightMismatch { key: Key },
    /// A key is out of binary search tree order or duplicated.
    OrderViolation { key: Key },
    /// A node's parent link does not name its structural parent.
    BrokenParentLink { key: Key },
    /// The number of reachable nodes differs from the number of stored nodes.
    LengthMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RedRoot => write!(f, "root node is red"),
            Error::RedViolation { key } => write!(f, "red node has a red child {}", key),
            Error::BlackHeightMismatch { key } => {
                write!(f, "black height below node {} differs from the rest of the tree", key)
            },
            Error::OrderViolation { key } => write!(f, "node {} is out of order", key),
            Error::BrokenParentLink { key } => write!(f, "node {} has a broken parent link", key),
            Error::LengthMismatch { expected, actual } => write!(
                f,
                "expected {} reachable nodes, found {}",
                expected, actual,
            ),
        }
    }
}

impl error::Error for Error {}

/// Convenience `Result` type for invariant checks.
pub type Result<T> = result::Result<T, Error>;

// Walks the tree with an explicit stack and returns the number of black nodes on every path from
// the root to a sentinel leaf, counting the leaf. An empty tree has a black height of 0.
pub fn check(tree: &Tree) -> Result<usize> {
    let root = match tree.root() {
        Some(root) => root,
        None => {
            return if tree.len() == 0 {
                Ok(0)
            } else {
                Err(Error::LengthMismatch {
                    expected: tree.len(),
                    actual: 0,
                })
            };
        },
    };

    let root_node = tree.node(root);
    if root_node.parent.is_some() {
        return Err(Error::BrokenParentLink { key: root_node.key });
    }
    if root_node.color == Color::Red {
        return Err(Error::RedRoot);
    }

    let mut black_height = None;
    let mut count = 0;
    // (node, exclusive lower bound, exclusive upper bound, black nodes strictly above)
    let mut stack: Vec<(NodeHandle, Option<Key>, Option<Key>, usize)> =
        vec![(root, None, None, 0)];

    while let Some((handle, lower, upper, blacks_above)) = stack.pop() {
        count += 1;
        let node = tree.node(handle);
        let below_lower = lower.map_or(false, |lower| node.key <= lower);
        let above_upper = upper.map_or(false, |upper| node.key >= upper);
        if below_lower || above_upper {
            return Err(Error::OrderViolation { key: node.key });
        }

        let blacks = match node.color {
            Color::Black => blacks_above + 1,
            Color::Red => blacks_above,
        };

        for &(child, lower, upper) in &[
            (node.left, lower, Some(node.key)),
            (node.right, Some(node.key), upper),
        ] {
            match child {
                Some(child) => {
                    let child_node = match tree.get(child) {
                        Some(child_node) => child_node,
                        None => return Err(Error::BrokenParentLink { key: node.key }),
                    };
                    if child_node.parent != Some(handle) {
                        return Err(Error::BrokenParentLink { key: child_node.key });
                    }
                    if node.color == Color::Red && child_node.color == Color::Red {
                        return Err(Error::RedViolation { key: child_node.key });
                    }
                    stack.push((child, lower, upper, blacks));
                },
                None => {
                    let leaf_height = blacks + 1;
                    match black_height {
                        None => black_height = Some(leaf_height),
                        Some(height) if height != leaf_height => {
                            return Err(Error::BlackHeightMismatch { key: node.key });
                        },
                        Some(_) => {},
                    }
                },
            }
        }
    }

    if count != tree.len() {
        return Err(Error::LengthMismatch {
            expected: tree.len(),
            actual: count,
        });
    }

    Ok(black_height.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::{check, Error};
    use crate::red_black_tree::node::{Color, Side};
    use crate::red_black_tree::tree::Tree;

    #[test]
    fn test_check_empty() {
        assert_eq!(check(&Tree::new()), Ok(0));
    }

    #[test]
    fn test_check_single() {
        let mut tree = Tree::new();
        tree.insert(1);
        assert_eq!(check(&tree), Ok(2));
    }

    #[test]
    fn test_check_detects_red_root() {
        let mut tree = Tree::new();
        tree.insert(2);
        tree.insert(1);
        // lifts the red child above the black root
        let root = tree.root().unwrap();
        tree.rotate(root, Side::Right);
        assert_eq!(check(&tree), Err(Error::RedRoot));
    }

    #[test]
    fn test_check_detects_black_height_mismatch() {
        let mut tree = Tree::new();
        for key in &[2, 1, 3, 4] {
            tree.insert(*key);
        }
        assert_eq!(check(&tree), Ok(3));

        let root = tree.root().unwrap();
        tree.rotate(root, Side::Left);
        assert_eq!(check(&tree), Err(Error::BlackHeightMismatch { key: 2 }));
    }

    #[test]
    fn test_check_detects_order_violation() {
        let mut tree = Tree::new();
        for key in &[2, 1, 3] {
            tree.insert(*key);
        }
        assert!(check(&tree).is_ok());
        let three = tree.find(3).unwrap();
        tree.node_mut(three).key = 0;
        assert_eq!(check(&tree), Err(Error::OrderViolation { key: 0 }));
    }

    #[test]
    fn test_check_detects_red_violation() {
        let mut tree = Tree::new();
        for key in &[2, 1, 3, 0] {
            tree.insert(*key);
        }
        assert_eq!(check(&tree), Ok(3));

        // 1 is black with the red child 0
        let one = tree.find(1).unwrap();
        tree.node_mut(one).color = Color::Red;
        assert_eq!(check(&tree), Err(Error::RedViolation { key: 0 }));
    }

    #[test]
    fn test_check_detects_broken_parent_link() {
        let mut tree = Tree::new();
        for key in &[2, 1, 3] {
            tree.insert(*key);
        }
        let one = tree.find(1).unwrap();
        let three = tree.find(3).unwrap();
        tree.node_mut(three).parent = Some(one);
        assert_eq!(check(&tree), Err(Error::BrokenParentLink { key: 3 }));
    }

    #[test]
    fn test_check_detects_length_mismatch() {
        let mut tree = Tree::new();
        for key in &[2, 1, 3] {
            tree.insert(*key);
        }
        // detaching the red leaf 1 keeps the tree balanced but leaves it allocated
        let root = tree.root().unwrap();
        tree.node_mut(root).left = None;
        assert_eq!(
            check(&tree),
            Err(Error::LengthMismatch {
                expected: 3,
                actual: 2,
            }),
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Error::RedViolation { key: 0 }.to_string(),
            "red node has a red child 0",
        );
        assert_eq!(Error::RedRoot.to_string(), "root node is red");
        assert_eq!(
            Error::LengthMismatch {
                expected: 2,
                actual: 1,
            }
            .to_string(),
            "expected 2 reachable nodes, found 1",
        );
    }
}
