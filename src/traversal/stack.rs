//! Inorder walk over an explicit work stack.
//!
//! The frames on the stack correspond to the two points a recursive walk
//! can be at: about to traverse a subtree, or about to emit a value after
//! the left subtree is done.

use crate::model::Node;

/// Pending work of a [StackInorder] walk.
enum Frame<'a, T> {
    /// Walk the subtree rooted at this node
    Traverse(&'a Node<T>),
    /// Emit the value of this node
    Emit(&'a Node<T>),
}

/// Lazy inorder iterator using a heap-allocated stack of frames.
///
/// # Example
/// ```
/// use trampwick::model::{Node, Tree};
/// use trampwick::traversal::StackInorder;
///
/// let tree = Tree::new(Node::new(2, Some(Node::boxed_leaf(1)), Some(Node::boxed_leaf(3))));
/// let values: Vec<_> = StackInorder::new(tree.root()).copied().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub struct StackInorder<'a, T> {
    stack: Vec<Frame<'a, T>>,
}

impl<'a, T> StackInorder<'a, T> {
    /// Creates an iterator walking the subtree rooted at `root`.
    pub fn new(root: Option<&'a Node<T>>) -> Self {
        StackInorder {
            stack: root.map(Frame::Traverse).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for StackInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            match frame {
                Frame::Emit(node) => return Some(node.value()),
                Frame::Traverse(node) => {
                    // Reverse order: popped as left, emit, right
                    if let Some(right) = node.right() {
                        self.stack.push(Frame::Traverse(right));
                    }
                    self.stack.push(Frame::Emit(node));
                    if let Some(left) = node.left() {
                        self.stack.push(Frame::Traverse(left));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tree;

    #[test]
    fn test_empty_and_single() {
        assert_eq!(StackInorder::<u8>::new(None).next(), None);

        let tree = Tree::new(Node::leaf(5));
        let values: Vec<u8> = StackInorder::new(tree.root()).copied().collect();
        assert_eq!(values, vec![5]);
    }

    #[test]
    fn test_skewed_chains() {
        let left = Tree::left_chain(1..=5);
        let values: Vec<i32> = StackInorder::new(left.root()).copied().collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);

        let right = Tree::right_chain(1..=5);
        let values: Vec<i32> = StackInorder::new(right.root()).copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }
}
