//! Owned, pointer-linked binary trees.
//!
//! Provides the two types every traversal in this crate consumes:
//! * [Node] - immutable tree cell owning its (optional) children
//! * [Tree] - a root [Node] or nothing
//!
//! Children are modelled as `Option<Box<Node<T>>>`, never as sentinels,
//! so an empty subtree is just `None`. Since every node exclusively owns
//! its children, neither sharing nor cycles can be expressed.
//!
//! Construction, measuring and dropping are all done without recursion,
//! so arbitrarily deep (e.g. fully skewed) trees are fine to build and
//! to throw away.

use std::fmt;

/// Optional owning link to a child node.
pub type Link<T> = Option<Box<Node<T>>>;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// A cell of a binary tree: a value and two optional children.
///
/// Nodes are immutable once constructed; the only way to get a
/// different tree is to build a new one.
///
/// # Example
/// ```
/// use trampwick::model::Node;
///
/// let node = Node::new('B', Some(Node::boxed_leaf('D')), None);
/// assert_eq!(*node.value(), 'B');
/// assert_eq!(node.left().map(|n| *n.value()), Some('D'));
/// assert!(node.right().is_none());
/// ```
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new node with the given children.
    pub fn new(value: T, left: Link<T>, right: Link<T>) -> Self {
        Node { value, left, right }
    }

    /// Creates a new node without children.
    pub fn leaf(value: T) -> Self {
        Node::new(value, None, None)
    }

    /// Creates a new node with the given children, boxed and ready to be
    /// used as a child link of another node.
    pub fn boxed(value: T, left: Link<T>, right: Link<T>) -> Box<Self> {
        Box::new(Node::new(value, left, right))
    }

    /// Creates a new boxed node without children.
    pub fn boxed_leaf(value: T) -> Box<Self> {
        Box::new(Node::leaf(value))
    }

    /// Returns a reference to the value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the left child, or `None` if the left subtree is empty.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Returns the right child, or `None` if the right subtree is empty.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has neither a left nor a right child.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Drop for Node<T> {
    // The derived drop would recurse once per level; unlink instead.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
            // `node` now has no children and drops in constant depth
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left.as_ref().map(|n| &n.value))
            .field("right", &self.right.as_ref().map(|n| &n.value))
            .finish()
    }
}

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A binary tree given by its (optional) root [Node].
///
/// # Example
/// ```
/// use trampwick::model::{Node, Tree};
///
/// let tree = Tree::new(Node::new(
///     2,
///     Some(Node::boxed_leaf(1)),
///     Some(Node::boxed_leaf(3)),
/// ));
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.height(), 2);
///
/// let values: Vec<i32> = tree.inorder().copied().collect();
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub struct Tree<T> {
    root: Link<T>,
}

// ============================================================================
// New, Getters / Accessors (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Creates a tree with the given root.
    pub fn new(root: Node<T>) -> Self {
        Tree {
            root: Some(Box::new(root)),
        }
    }

    /// Creates a tree without any node.
    pub fn empty() -> Self {
        Tree { root: None }
    }

    /// Creates a tree from an optional boxed root.
    pub fn from_link(root: Link<T>) -> Self {
        Tree { root }
    }

    /// Builds a tree in which every node only has a left child.
    ///
    /// The first value becomes the root, the last one the deepest node,
    /// so the inorder sequence is the input sequence reversed.
    pub fn left_chain<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        // Bottom-up: the deepest node is built first
        let mut link: Link<T> = None;
        for value in values.into_iter().rev() {
            link = Some(Node::boxed(value, link, None));
        }
        Tree { root: link }
    }

    /// Builds a tree in which every node only has a right child.
    ///
    /// The first value becomes the root, the last one the deepest node,
    /// so the inorder sequence equals the input sequence.
    pub fn right_chain<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        let mut link: Link<T> = None;
        for value in values.into_iter().rev() {
            link = Some(Node::boxed(value, None, link));
        }
        Tree { root: link }
    }

    /// Returns the root, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Returns `true` if the tree has no node.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes in this tree.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Returns the height of this tree, i.e. the number of nodes on a
    /// longest root-to-leaf path (0 for the empty tree).
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> = self.root().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::empty()
    }
}

impl<T> From<Node<T>> for Tree<T> {
    fn from(root: Node<T>) -> Self {
        Tree::new(root)
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len())
            .field("root", &self.root().map(|n| n.value()))
            .finish()
    }
}
