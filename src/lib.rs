//! An ordered set of signed integers backed by a red black tree whose nodes live in a typed
//! arena. The tree exposes its structure (colors, parent links, leaves) for inspection.

pub mod arena;
pub mod red_black_tree;
