//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions and deletions.
//!
//! Every empty child slot of a node is a black, keyless sentinel leaf. Sentinel leaves are not
//! allocated; they are the `None` links of the tree and can be inspected through
//! `RedBlackSet::sentinel_leaves`.

mod invariants;
mod node;
mod set;
mod tree;

pub use self::invariants::{Error, Result};
pub use self::node::{Color, Key, NodeHandle, Side};
pub use self::set::{NodeRef, RedBlackSet, RedBlackSetIter, SentinelLeaf};
