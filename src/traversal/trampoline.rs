//! Trampoline driver turning continuation steps into a lazy sequence.
//!
//! [Inorder] owns a single cursor, the continuation to resume next. Each
//! call to `next` resumes continuations one at a time until one of them
//! produces a value, and returns that value. A resumed continuation never
//! resumes another one itself, so the native stack stays at a constant
//! depth no matter how high the tree is.
//!
//! The walk ends when a step has no next continuation. A step without a
//! produced value is simply a step that did some bookkeeping (descending
//! into a subtree, handing over past an empty one) and never means that
//! the walk is over.

use crate::model::{Node, Tree};
use crate::traversal::continuation::{Continuation, Step, traverse_step};
use std::iter::FusedIterator;
use tracing::trace;

// =#========================================================================#=
// INORDER ITERATOR
// =#========================================================================#=
/// Lazy inorder iterator over a tree, driven by a trampoline.
///
/// Obtained via [drive] or [`Tree::inorder()`]. Single-pass: to walk the
/// same tree again, call [drive] again. To pause a walk and pick it up
/// later, [`suspend()`](Inorder::suspend) it and rebuild it with
/// [`Inorder::from_step()`].
///
/// # Example
/// ```
/// use trampwick::model::{Node, Tree};
///
/// let tree = Tree::new(Node::new(
///     'B',
///     Some(Node::boxed_leaf('A')),
///     Some(Node::boxed_leaf('C')),
/// ));
///
/// // Stop early; nothing needs to be cleaned up
/// let first_after_a = tree.inorder().find(|&&c| c > 'A');
/// assert_eq!(first_after_a, Some(&'B'));
/// ```
pub struct Inorder<'a, T> {
    /// Value of a step handed in via `from_step` that has not been yielded yet
    pending: Option<&'a T>,
    /// Continuation to resume next; `None` once the walk is over
    current: Option<Continuation<'a, T>>,
    /// Number of resumed continuations so far
    steps: usize,
}

/// Starts a lazy inorder walk of the subtree rooted at `root`.
///
/// Only builds the first step; all work happens while iterating.
pub fn drive<T>(root: Option<&Node<T>>) -> Inorder<'_, T> {
    Inorder::from_step(traverse_step(root, Continuation::done()))
}

impl<'a, T> Inorder<'a, T> {
    /// Creates an iterator that continues from the given step: first the
    /// step's produced value (if any) is yielded, then its continuation
    /// is resumed.
    pub fn from_step(step: Step<'a, T>) -> Self {
        Inorder {
            pending: step.produced,
            current: step.next,
            steps: 0,
        }
    }

    /// Stops iterating and returns the unconsumed remainder of the walk
    /// as a step, which can be turned back into an iterator with
    /// [`Inorder::from_step()`].
    pub fn suspend(self) -> Step<'a, T> {
        Step {
            produced: self.pending,
            next: self.current,
        }
    }

    /// Returns the number of continuations resumed by this iterator.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns `true` if the walk is over.
    pub fn is_finished(&self) -> bool {
        self.pending.is_none() && self.current.is_none()
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.pending.take() {
            return Some(value);
        }

        loop {
            // No continuation left: exhausted
            let k = self.current.take()?;
            let step = k.resume();
            self.steps += 1;
            self.current = step.next;

            if self.current.is_none() {
                trace!(target: "trampwick::traversal::trampoline", steps = self.steps, "inorder walk complete");
            }

            if step.produced.is_some() {
                return step.produced;
            }
        }
    }
}

impl<T> FusedIterator for Inorder<'_, T> {}

// ============================================================================
// Tree integration (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Returns a lazy inorder iterator over the values of this tree.
    ///
    /// The walk is trampolined, so it is safe for trees of any height.
    pub fn inorder(&self) -> Inorder<'_, T> {
        drive(self.root())
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

// =$========================================================================$=
// TESTS
// =$========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<u32> {
        Tree::new(Node::new(
            2,
            Some(Node::boxed_leaf(1)),
            Some(Node::boxed(4, Some(Node::boxed_leaf(3)), Some(Node::boxed_leaf(5)))),
        ))
    }

    #[test]
    fn test_drive_empty() {
        let mut iter = drive::<u32>(None);
        assert_eq!(iter.next(), None);
        assert!(iter.is_finished());
        // Handing over to `done`, then resuming it
        assert_eq!(iter.steps(), 1);
    }

    #[test]
    fn test_drive_yields_inorder() {
        let tree = sample();
        let values: Vec<u32> = drive(tree.root()).copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_iterator_is_fused() {
        let tree = Tree::new(Node::leaf(1));
        let mut iter = tree.inorder();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_suspend_and_resume() {
        let tree = sample();
        let mut iter = tree.inorder();
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));

        let rest = iter.suspend();
        assert!(!rest.is_terminal());

        let values: Vec<u32> = Inorder::from_step(rest).copied().collect();
        assert_eq!(values, vec![3, 4, 5]);
    }

    #[test]
    fn test_from_step_yields_pending_value_first() {
        let node = Node::leaf(9);
        let step = Step::emit(&7, Continuation::done());
        let values: Vec<u32> = Inorder::from_step(step).copied().collect();
        assert_eq!(values, vec![7]);

        let step = traverse_step(Some(&node), Continuation::done());
        let values: Vec<u32> = Inorder::from_step(step).copied().collect();
        assert_eq!(values, vec![9]);
    }

    #[test]
    fn test_steps_grow_linearly() {
        // Three resumes per node plus the final `done`
        let tree = sample();
        let mut iter = tree.inorder();
        while iter.next().is_some() {}
        assert_eq!(iter.steps(), 3 * tree.len() + 1);
    }
}
