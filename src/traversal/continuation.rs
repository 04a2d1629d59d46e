//! Continuations and the inorder step builder.
//!
//! A [Continuation] is a deferred "rest of the walk": resuming it yields
//! exactly one [Step], which may carry a produced value and the
//! continuation to resume next. [traverse_step] builds the first step for
//! a subtree. Nothing here ever calls itself: the work that would be a
//! recursive call in a textbook walk is parked in a new continuation and
//! left for the driver in [trampoline](crate::traversal::trampoline).
//!
//! Continuations are defunctionalized: rather than boxed closures, each is
//! one of a handful of resumption points, holding the node it is about and
//! the boxed continuation to hand over to afterwards. Consequently a chain
//! of pending continuations is a heap-allocated linked list, and dropping
//! it (e.g. when a consumer stops iterating early) does not recurse.

use crate::model::Node;
use std::fmt;
use std::mem;

// =#========================================================================#=
// CONTINUATION
// =#========================================================================#=
/// The remaining work of a traversal.
///
/// Opaque to callers: it can only be created with [`Continuation::done()`]
/// or by [traverse_step], and only be consumed by [`Continuation::resume()`],
/// so every continuation is invoked at most once.
pub struct Continuation<'a, T> {
    kont: Kont<'a, T>,
}

/// Resumption points of an inorder walk.
enum Kont<'a, T> {
    /// Nothing left to do
    Done,
    /// Walk the left subtree of `node`, then continue with `AfterLeft`
    Descend {
        node: &'a Node<T>,
        k: Box<Continuation<'a, T>>,
    },
    /// Left subtree of `node` is exhausted: emit its value
    AfterLeft {
        node: &'a Node<T>,
        k: Box<Continuation<'a, T>>,
    },
    /// Value of `node` was emitted: walk its right subtree, then resume `k`
    AfterValue {
        node: &'a Node<T>,
        k: Box<Continuation<'a, T>>,
    },
}

impl<'a, T> Continuation<'a, T> {
    /// The terminal continuation; resuming it yields a terminal [Step].
    pub fn done() -> Self {
        Continuation { kont: Kont::Done }
    }

    fn new(kont: Kont<'a, T>) -> Self {
        Continuation { kont }
    }

    /// Returns `true` if this is the terminal continuation.
    pub fn is_done(&self) -> bool {
        matches!(self.kont, Kont::Done)
    }

    /// Invokes this continuation, performing one constant-size unit of work.
    pub fn resume(mut self) -> Step<'a, T> {
        match mem::replace(&mut self.kont, Kont::Done) {
            Kont::Done => Step::terminal(),
            Kont::Descend { node, k } => {
                traverse_step(node.left(), Continuation::new(Kont::AfterLeft { node, k }))
            }
            Kont::AfterLeft { node, k } => Step::emit(
                node.value(),
                Continuation::new(Kont::AfterValue { node, k }),
            ),
            Kont::AfterValue { node, k } => traverse_step(node.right(), *k),
        }
    }
}

impl<T> Drop for Continuation<'_, T> {
    // Unlink the chain one continuation at a time.
    fn drop(&mut self) {
        let mut kont = mem::replace(&mut self.kont, Kont::Done);
        loop {
            match kont {
                Kont::Done => break,
                Kont::Descend { mut k, .. }
                | Kont::AfterLeft { mut k, .. }
                | Kont::AfterValue { mut k, .. } => {
                    kont = mem::replace(&mut k.kont, Kont::Done);
                }
            }
        }
    }
}

impl<T> fmt::Debug for Continuation<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.kont {
            Kont::Done => "Done",
            Kont::Descend { .. } => "Descend",
            Kont::AfterLeft { .. } => "AfterLeft",
            Kont::AfterValue { .. } => "AfterValue",
        };
        f.debug_tuple("Continuation").field(&name).finish()
    }
}

// =#========================================================================#=
// STEP
// =#========================================================================#=
/// Result of resuming a [Continuation]: an optional produced value and the
/// continuation to resume next.
///
/// A step with `next == None` is terminal. Whether a value was produced is
/// irrelevant for termination.
#[derive(Debug)]
pub struct Step<'a, T> {
    /// Value emitted by this step, if any
    pub produced: Option<&'a T>,
    /// Continuation to resume for the following step, `None` if the walk is over
    pub next: Option<Continuation<'a, T>>,
}

impl<'a, T> Step<'a, T> {
    /// Step that emits nothing and ends the walk.
    pub fn terminal() -> Self {
        Step {
            produced: None,
            next: None,
        }
    }

    /// Step that emits nothing and continues with `next`.
    pub fn silent(next: Continuation<'a, T>) -> Self {
        Step {
            produced: None,
            next: Some(next),
        }
    }

    /// Step that emits `value` and continues with `next`.
    pub fn emit(value: &'a T, next: Continuation<'a, T>) -> Self {
        Step {
            produced: Some(value),
            next: Some(next),
        }
    }

    /// Returns `true` if there is no continuation to resume after this step.
    pub fn is_terminal(&self) -> bool {
        self.next.is_none()
    }
}

// =#========================================================================#=
// STEP BUILDER
// =#========================================================================#=
/// Builds the first step of walking the subtree rooted at `node` inorder,
/// followed by `k` once the subtree is exhausted.
///
/// * `node == None`: the empty subtree contributes nothing, so the step
///   hands over to `k` right away.
/// * Otherwise the step is a deferred descent: resuming its continuation
///   walks the left subtree, then emits the node's value, then walks the
///   right subtree, and finally resumes `k`.
///
/// Neither case produces a value or invokes anything; the call is a pure
/// construction of a new [Step].
///
/// # Example
/// ```
/// use trampwick::model::Node;
/// use trampwick::traversal::{Continuation, traverse_step};
///
/// let leaf = Node::leaf(42);
/// let step = traverse_step(Some(&leaf), Continuation::done());
/// assert!(step.produced.is_none());
///
/// // descend into the (empty) left subtree
/// let step = step.next.unwrap().resume();
/// assert!(step.produced.is_none());
/// // empty left subtree resumes with the emission of the value
/// let step = step.next.unwrap().resume();
/// assert_eq!(step.produced, Some(&42));
/// ```
pub fn traverse_step<'a, T>(node: Option<&'a Node<T>>, k: Continuation<'a, T>) -> Step<'a, T> {
    match node {
        None => Step::silent(k),
        Some(node) => Step::silent(Continuation::new(Kont::Descend {
            node,
            k: Box::new(k),
        })),
    }
}
