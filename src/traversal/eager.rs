//! Eager inorder walks collecting into a [Vec].
//!
//! These produce the same sequence as the trampolined
//! [Inorder](crate::traversal::Inorder) iterator but materialize it in one
//! call, and serve as baselines for it:
//! * [direct] - textbook recursion, native stack depth = tree height
//! * [collect_inorder] - continuation-passing style with an accumulator,
//!   continuations invoked directly, so the native stack grows as well
//! * [collect_inorder_bounced] - the same continuations, but returning
//!   [Bounce]s for a generic trampoline to finish
//!
//! Only the last one is safe for very deep trees.

use crate::model::Node;
use crate::traversal::bounce::Bounce;

/// Continuation receiving the values of a finished subtree.
type Collect<'a, T> = Box<dyn FnOnce(Vec<T>) -> Vec<T> + 'a>;

/// Continuation receiving the values of a finished subtree, bouncing back
/// to the trampoline instead of calling onwards.
type Accumulate<'a, T> = Box<dyn FnOnce(Vec<T>) -> Bounce<'a, Vec<T>> + 'a>;

// ============================================================================
// Direct recursion
// ============================================================================
/// Collects the values of the subtree rooted at `root` inorder by plain
/// recursion.
pub fn direct<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    let mut values = Vec::new();
    direct_rec(root, &mut values);
    values
}

fn direct_rec<T: Clone>(node: Option<&Node<T>>, values: &mut Vec<T>) {
    if let Some(node) = node {
        direct_rec(node.left(), values);
        values.push(node.value().clone());
        direct_rec(node.right(), values);
    }
}

// ============================================================================
// Continuation-passing style
// ============================================================================
/// Collects the values of the subtree rooted at `root` inorder in
/// continuation-passing style.
///
/// Every subtree hands its values to a continuation `k(values)`; the
/// continuation for a left subtree appends the node's value, walks the
/// right subtree and concatenates both results before calling onwards.
/// Continuations are invoked directly, so deep trees need a deep stack.
///
/// # Example
/// ```
/// use trampwick::model::{Node, Tree};
/// use trampwick::traversal::collect_inorder;
///
/// let tree = Tree::new(Node::new(2, Some(Node::boxed_leaf(1)), None));
/// assert_eq!(collect_inorder(tree.root()), vec![1, 2]);
/// ```
pub fn collect_inorder<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    collect_rec(root, Box::new(|values: Vec<T>| values))
}

fn collect_rec<'a, T: Clone + 'a>(node: Option<&'a Node<T>>, k: Collect<'a, T>) -> Vec<T> {
    match node {
        None => k(Vec::new()),
        Some(node) => collect_rec(
            node.left(),
            Box::new(move |mut left: Vec<T>| {
                left.push(node.value().clone());
                collect_rec(
                    node.right(),
                    Box::new(move |right: Vec<T>| {
                        left.extend(right);
                        k(left)
                    }),
                )
            }),
        ),
    }
}

// ============================================================================
// Continuation-passing style, trampolined
// ============================================================================
/// Collects the values of the subtree rooted at `root` inorder in
/// continuation-passing style, finished by a [Bounce] trampoline.
///
/// Same continuations as [collect_inorder], but every call is returned as
/// a thunk rather than made, so the native stack stays flat. Still eager:
/// the result is only available once the whole tree was walked.
pub fn collect_inorder_bounced<T: Clone>(root: Option<&Node<T>>) -> Vec<T> {
    bounce_rec(root, Box::new(Bounce::Done)).run()
}

fn bounce_rec<'a, T: Clone + 'a>(
    node: Option<&'a Node<T>>,
    k: Accumulate<'a, T>,
) -> Bounce<'a, Vec<T>> {
    Bounce::more(move || match node {
        None => k(Vec::new()),
        Some(node) => bounce_rec(
            node.left(),
            Box::new(move |mut left: Vec<T>| {
                left.push(node.value().clone());
                bounce_rec(
                    node.right(),
                    Box::new(move |right: Vec<T>| {
                        left.extend(right);
                        Bounce::more(move || k(left))
                    }),
                )
            }),
        ),
    })
}

// =$========================================================================$=
// TESTS
// =$========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tree;

    fn sample() -> Tree<char> {
        // B(A, D(C, -))
        Tree::new(Node::new(
            'B',
            Some(Node::boxed_leaf('A')),
            Some(Node::boxed('D', Some(Node::boxed_leaf('C')), None)),
        ))
    }

    #[test]
    fn test_all_eager_walks_agree() {
        let tree = sample();
        let expected = vec!['A', 'B', 'C', 'D'];
        assert_eq!(direct(tree.root()), expected);
        assert_eq!(collect_inorder(tree.root()), expected);
        assert_eq!(collect_inorder_bounced(tree.root()), expected);
    }

    #[test]
    fn test_empty() {
        assert!(direct::<u8>(None).is_empty());
        assert!(collect_inorder::<u8>(None).is_empty());
        assert!(collect_inorder_bounced::<u8>(None).is_empty());
    }

    #[test]
    fn test_bounced_survives_deep_chain_on_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let tree = Tree::left_chain(0..20_000u32);
                collect_inorder_bounced(tree.root())
            })
            .unwrap();
        let values = handle.join().unwrap();
        assert_eq!(values, (0..20_000).rev().collect::<Vec<u32>>());
    }
}
