//! Inorder traversals of binary trees.
//!
//! The core is the trampolined continuation walk:
//! * [traverse_step] builds [Step]s from a node and a [Continuation]
//! * [drive] runs them in a loop and hands out an [Inorder] iterator
//!
//! Every other walk yields the same sequence and exists for comparison:
//!
//! | [Strategy] | Lazy | Stack safe | Entry point |
//! |------------|------|------------|-------------|
//! | `Trampoline` | yes | yes | [drive], [`Tree::inorder()`] |
//! | `Eager` | no | no | [collect_inorder] |
//! | `Bounced` | no | yes | [collect_inorder_bounced] |
//! | `Direct` | no | no | [direct] |
//! | `Stack` | yes | yes | [StackInorder] |
//! | `Parent` | yes | yes | [`ArenaTree::parent_walk()`] |
//! | `Threaded` | yes | yes | [`ArenaTree::threaded_walk()`] |
//!
//! "Stack safe" means the native stack does not grow with tree height.

pub mod bounce;
pub mod continuation;
pub mod eager;
pub mod stack;
pub mod trampoline;

pub use bounce::Bounce;
pub use continuation::{Continuation, Step, traverse_step};
pub use eager::{collect_inorder, collect_inorder_bounced, direct};
pub use stack::StackInorder;
pub use trampoline::{Inorder, drive};

use crate::model::{ArenaTree, Tree};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

// =#========================================================================#=
// STRATEGY
// =#========================================================================#=
/// Selects one of the inorder walks provided by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Continuation steps driven by a trampoline ([drive])
    #[default]
    Trampoline,
    /// Continuation-passing style with accumulator ([collect_inorder])
    Eager,
    /// Accumulating continuations on a generic trampoline ([collect_inorder_bounced])
    Bounced,
    /// Plain recursion ([direct])
    Direct,
    /// Explicit work stack ([StackInorder])
    Stack,
    /// Arena tree with parent links ([`ArenaTree::parent_walk()`])
    Parent,
    /// Arena tree with inorder threads ([`ArenaTree::threaded_walk()`])
    Threaded,
}

impl Strategy {
    /// All strategies, trampoline first.
    pub const ALL: [Strategy; 7] = [
        Strategy::Trampoline,
        Strategy::Eager,
        Strategy::Bounced,
        Strategy::Direct,
        Strategy::Stack,
        Strategy::Parent,
        Strategy::Threaded,
    ];

    /// Name of this strategy as accepted by [`Strategy::from_str()`].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Trampoline => "trampoline",
            Strategy::Eager => "eager",
            Strategy::Bounced => "bounced",
            Strategy::Direct => "direct",
            Strategy::Stack => "stack",
            Strategy::Parent => "parent",
            Strategy::Threaded => "threaded",
        }
    }

    /// Returns `true` if the walk does not grow the native stack with
    /// the height of the tree.
    pub fn is_stack_safe(self) -> bool {
        !matches!(self, Strategy::Eager | Strategy::Direct)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error for an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown traversal strategy '{0}' (expected one of: trampoline, eager, bounced, direct, stack, parent, threaded)")]
pub struct StrategyError(pub String);

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StrategyError(s.to_string()))
    }
}

// ============================================================================
// Dispatch (pub)
// ============================================================================
/// Collects the values of `tree` inorder using the given strategy.
///
/// # Example
/// ```
/// use trampwick::model::{Node, Tree};
/// use trampwick::traversal::{Strategy, traverse};
///
/// let tree = Tree::new(Node::new(2, Some(Node::boxed_leaf(1)), Some(Node::boxed_leaf(3))));
/// for strategy in Strategy::ALL {
///     assert_eq!(traverse(strategy, &tree), vec![1, 2, 3]);
/// }
/// ```
pub fn traverse<T: Clone>(strategy: Strategy, tree: &Tree<T>) -> Vec<T> {
    debug!(target: "trampwick::traversal", %strategy, nodes = tree.len(), "collecting inorder");

    match strategy {
        Strategy::Trampoline => tree.inorder().cloned().collect(),
        Strategy::Eager => collect_inorder(tree.root()),
        Strategy::Bounced => collect_inorder_bounced(tree.root()),
        Strategy::Direct => direct(tree.root()),
        Strategy::Stack => StackInorder::new(tree.root()).cloned().collect(),
        Strategy::Parent => ArenaTree::from_tree(tree).parent_walk().cloned().collect(),
        Strategy::Threaded => ArenaTree::from_tree(tree).threaded_walk().cloned().collect(),
    }
}
