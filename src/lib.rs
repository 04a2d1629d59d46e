//! Trampwick is a library for stack-safe inorder traversal of binary trees.
//!
//! The inorder walk is written in continuation-passing style: every step of
//! the walk is handed "what to do next" as a [Continuation]. Instead of
//! calling that continuation (which would nest native calls as deep as the
//! tree is high), each step returns it, and a trampoline loop keeps
//! resuming until nothing is left. The native stack therefore stays flat,
//! however degenerate the tree.
//!
//! Core functionality provided:
//! - Tree model: owned [Tree] of [Node]s with optional children, see
//!   [crate::model]. Also an arena tree with parent links and inorder
//!   threads for comparison walks.
//! - Traversal: the trampolined walk ([drive], [`Tree::inorder()`]) plus
//!   several other walks producing the same sequence, see [crate::traversal]:
//!   - Eager continuation-passing with an accumulator
//!   - The same on a generic [Bounce] trampoline
//!   - Plain recursion, an explicit work stack, parent links and threads
//! - Notation: a bracket notation to read and write trees, see
//!   [crate::notation].
//!
//! Limitations:
//! - Only binary trees
//! - The notation parser itself recurses and so is bounded by nesting depth;
//!   deep trees should be built in code (e.g. [`Tree::left_chain()`])
//!
//! # Usage patterns
//! 1. Iterate lazily with [inorder] (or [`Tree::inorder()`]); the
//!    iterator can be dropped or [suspended](traversal::Inorder::suspend)
//!    at any point.
//! 2. Pick a [Strategy] and [traverse] to collect the values.
//!
//! ## Example
//! ```
//! use trampwick::{inorder, parse_tree_str, SAMPLE_TREE};
//! use trampwick::notation::format_inorder;
//!
//! let tree = parse_tree_str::<String>(SAMPLE_TREE).unwrap();
//! assert_eq!(format_inorder(inorder(&tree), " "), "D H B E A F C I G J");
//! ```
//!
//! ## Example Deep Tree
//! ```
//! use trampwick::model::Tree;
//!
//! let tree = Tree::left_chain(0..100_000u32);
//! assert_eq!(tree.inorder().count(), 100_000);
//! assert_eq!(tree.inorder().next(), Some(&99_999));
//! ```

pub mod model;
pub mod notation;
pub mod parser;
pub mod traversal;

pub use crate::model::{Node, Tree};
pub use crate::notation::SAMPLE_TREE;
pub use crate::traversal::{
    Bounce, Continuation, Inorder, Step, Strategy, drive, traverse, traverse_step,
};

use crate::parser::ParsingError;
use std::fmt::Display;
use std::str::FromStr;

// ============================================================================
// Quick Traversal API
// ============================================================================
/// Returns a lazy, stack-safe inorder iterator over the values of `tree`.
///
/// Shorthand for [`Tree::inorder()`].
pub fn inorder<T>(tree: &Tree<T>) -> Inorder<'_, T> {
    drive(tree.root())
}

/// Collects the inorder sequence of `tree` eagerly, in continuation-passing
/// style with an accumulator.
///
/// Recurses as deep as the tree is high; for very deep trees collect from
/// [inorder] instead.
///
/// See [`traversal::collect_inorder`] for full documentation.
pub fn collect_inorder<T: Clone>(tree: &Tree<T>) -> Vec<T> {
    traversal::collect_inorder(tree.root())
}

// ============================================================================
// Quick Notation API
// ============================================================================
/// Parses a tree from the bracket notation.
///
/// See [`notation::parse_str`] for full documentation.
pub fn parse_tree_str<T>(notation: impl AsRef<str>) -> Result<Tree<T>, ParsingError>
where
    T: FromStr,
    T::Err: Display,
{
    notation::parse_str(notation)
}

/// Returns the ten node example tree ([SAMPLE_TREE]) with `char` values.
pub fn sample_tree() -> Tree<char> {
    let leaf = |c| Some(Node::boxed_leaf(c));
    let d = Node::boxed('D', None, leaf('H'));
    let b = Node::boxed('B', Some(d), leaf('E'));
    let g = Node::boxed('G', leaf('I'), leaf('J'));
    let c = Node::boxed('C', leaf('F'), Some(g));
    Tree::new(Node::new('A', Some(b), Some(c)))
}
