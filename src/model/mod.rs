//! Data model for binary trees.
//!
//! # Tree representation
//! Two representations are provided:
//!
//! | Type | Links | Use case |
//! |------|-------|----------|
//! | [Tree] / [Node] | Owned `Option<Box<Node>>` children | Input to the continuation-based walks |
//! | [ArenaTree] / [ArenaNode] | [NodeIndex] into an arena, plus parent and thread links | Stackless walks via parents or threads |
//!
//! An [ArenaTree] is always derived from a [Tree] via
//! [`ArenaTree::from_tree()`].

pub mod arena;
pub mod node;

// Owned trees
pub use node::Link;
pub use node::Node;
pub use node::Tree;
// Arena trees
pub use arena::ArenaNode;
pub use arena::ArenaTree;
pub use arena::NodeIndex;
