//! Arena representation of binary trees with parent pointers and threads.
//!
//! An [ArenaTree] stores its [ArenaNode]s in a contiguous vector and links
//! them by [NodeIndex] instead of owning pointers. This makes it cheap to
//! have a `parent` link and an inorder `thread` link next to the child
//! links, which in turn enables two more inorder walks without any stack:
//! * [`ArenaTree::parent_walk()`] - climbs back up via parent links
//! * [`ArenaTree::threaded_walk()`] - follows precomputed successor threads

use crate::model::node::{Node, Tree};
use tracing::debug;

/// Index of a node in an [ArenaTree].
pub type NodeIndex = usize;

// =#========================================================================#=
// ARENA NODE
// =#========================================================================#=
/// A node of an [ArenaTree].
///
/// # Invariants
/// - `index` is the position of this node in the arena
/// - `parent` is `None` exactly for the root
/// - if set, `thread` is the index of the inorder successor
#[derive(Debug, Clone, PartialEq)]
pub struct ArenaNode<T> {
    index: NodeIndex,
    value: T,
    left: Option<NodeIndex>,
    right: Option<NodeIndex>,
    parent: Option<NodeIndex>,
    thread: Option<NodeIndex>,
}

impl<T> ArenaNode<T> {
    /// Returns the index of this node in its arena.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns a reference to the value of this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the index of the left child, if any.
    pub fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Returns the index of the right child, if any.
    pub fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns the index of the inorder successor, if threads were computed
    /// and this is not the last node in inorder.
    pub fn thread(&self) -> Option<NodeIndex> {
        self.thread
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

// =#========================================================================#=
// ARENA TREE
// =#========================================================================#=
/// A binary tree stored using the arena pattern on [ArenaNode].
///
/// # Construction
/// Built from a [Tree] via [`ArenaTree::from_tree()`], which copies values
/// in preorder, so the root always has index 0.
///
/// # Example
/// ```
/// use trampwick::model::{ArenaTree, Node, Tree};
///
/// let tree = Tree::new(Node::new(
///     'B',
///     Some(Node::boxed_leaf('A')),
///     Some(Node::boxed_leaf('C')),
/// ));
/// let mut arena = ArenaTree::from_tree(&tree);
/// assert!(arena.is_valid());
///
/// let by_parent: String = arena.parent_walk().collect();
/// let by_thread: String = arena.threaded_walk().collect();
/// assert_eq!(by_parent, "ABC");
/// assert_eq!(by_thread, "ABC");
/// ```
#[derive(Debug, Clone)]
pub struct ArenaTree<T> {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<ArenaNode<T>>,

    /// Whether `thread` links are up to date
    threaded: bool,
}

// ============================================================================
// New, Getters / Accessors (pub)
// ============================================================================
impl<T> ArenaTree<T> {
    /// Returns the root, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&ArenaNode<T>> {
        self.nodes.first()
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &ArenaNode<T> {
        &self[index]
    }

    /// Returns whether inorder threads have been computed.
    pub fn is_threaded(&self) -> bool {
        self.threaded
    }

    /// Validates the tree structure and all index references.
    ///
    /// Checks:
    /// - All node indices match their position in the arena
    /// - Exactly the root (index 0) has no parent
    /// - All child indices are in bounds and point back to their parent
    /// - Every node is reachable from the root exactly once
    pub fn is_valid(&self) -> bool {
        let len = self.nodes.len();

        for (index, node) in self.nodes.iter().enumerate() {
            if node.index != index {
                return false;
            }

            // Root is first, and only the root has no parent
            if (index == 0) != node.parent.is_none() {
                return false;
            }

            for child in [node.left, node.right].into_iter().flatten() {
                if child >= len || self.nodes[child].parent != Some(index) {
                    return false;
                }
            }

            if let Some(parent) = node.parent {
                if parent >= len {
                    return false;
                }
                let p = &self.nodes[parent];
                if p.left != Some(index) && p.right != Some(index) {
                    return false;
                }
            }
        }

        // Reachability, bounded by len so a broken arena cannot loop forever
        let mut seen = vec![false; len];
        let mut stack: Vec<NodeIndex> = self.root().map(|r| r.index).into_iter().collect();
        let mut reached = 0;
        while let Some(index) = stack.pop() {
            if seen[index] {
                return false;
            }
            seen[index] = true;
            reached += 1;
            stack.extend(self.nodes[index].left);
            stack.extend(self.nodes[index].right);
        }

        reached == len
    }
}

impl<T: Clone> ArenaTree<T> {
    /// Copies the given tree into an arena, assigning indices in preorder.
    ///
    /// Uses an explicit stack, so the depth of `tree` is not limited by
    /// the native stack.
    pub fn from_tree(tree: &Tree<T>) -> Self {
        let mut nodes: Vec<ArenaNode<T>> = Vec::new();
        // (node, parent index, is left child)
        let mut stack: Vec<(&Node<T>, Option<NodeIndex>, bool)> = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, None, false));
        }

        while let Some((node, parent, is_left)) = stack.pop() {
            let index = nodes.len();
            nodes.push(ArenaNode {
                index,
                value: node.value().clone(),
                left: None,
                right: None,
                parent,
                thread: None,
            });

            if let Some(parent) = parent {
                if is_left {
                    nodes[parent].left = Some(index);
                } else {
                    nodes[parent].right = Some(index);
                }
            }

            // Right first, so left gets the next index
            if let Some(right) = node.right() {
                stack.push((right, Some(index), false));
            }
            if let Some(left) = node.left() {
                stack.push((left, Some(index), true));
            }
        }

        ArenaTree {
            nodes,
            threaded: false,
        }
    }
}

impl<T> std::ops::Index<NodeIndex> for ArenaTree<T> {
    type Output = ArenaNode<T>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Threading (pub)
// ============================================================================
impl<T> ArenaTree<T> {
    /// Sets the `thread` of every node to its inorder successor.
    ///
    /// Uses Morris threading: the right link of the rightmost node of each
    /// left subtree temporarily points back up to the subtree's parent.
    /// Every such temporary link is removed again before the walk leaves
    /// the node, so child links are unchanged afterwards.
    pub fn thread(&mut self) {
        for node in &mut self.nodes {
            node.thread = None;
        }

        let mut prev: Option<NodeIndex> = None;
        let mut current = self.root().map(|r| r.index);

        while let Some(t) = current {
            match self.nodes[t].left {
                None => {
                    self.link_thread(prev, t);
                    prev = Some(t);
                    current = self.nodes[t].right;
                }
                Some(left) => {
                    let rightmost = self.rightmost_before(left, t);
                    if self.nodes[rightmost].right == Some(t) {
                        // Came back up through the temporary link
                        self.nodes[rightmost].right = None;
                        self.link_thread(prev, t);
                        prev = Some(t);
                        current = self.nodes[t].right;
                    } else {
                        self.nodes[rightmost].right = Some(t);
                        current = Some(left);
                    }
                }
            }
        }

        self.threaded = true;
        debug!(target: "trampwick::model::arena", nodes = self.nodes.len(), "threaded arena tree");
    }

    /// Rightmost node under `index`, not following a link back to `sentinel`.
    fn rightmost_before(&self, index: NodeIndex, sentinel: NodeIndex) -> NodeIndex {
        let mut index = index;
        while let Some(right) = self.nodes[index].right {
            if right == sentinel {
                break;
            }
            index = right;
        }
        index
    }

    fn link_thread(&mut self, prev: Option<NodeIndex>, next: NodeIndex) {
        if let Some(prev) = prev {
            self.nodes[prev].thread = Some(next);
        }
    }

    /// Leftmost node of the whole tree, i.e. the first one in inorder.
    fn leftmost(&self) -> Option<NodeIndex> {
        let mut index = self.root()?.index;
        while let Some(left) = self.nodes[index].left {
            index = left;
        }
        Some(index)
    }
}

// =$========================================================================$=
// ITERATORS
// =$========================================================================$=
impl<T> ArenaTree<T> {
    /// Returns an inorder iterator that moves through the tree with a
    /// constant-size state, using parent links to climb back up.
    pub fn parent_walk(&self) -> ParentWalk<'_, T> {
        ParentWalk {
            tree: self,
            state: self.root().map(|r| (true, r.index)),
        }
    }

    /// Returns an inorder iterator following the `thread` links from the
    /// leftmost node. Computes threads first if necessary.
    pub fn threaded_walk(&mut self) -> ThreadedWalk<'_, T> {
        if !self.threaded {
            self.thread();
        }
        ThreadedWalk {
            tree: self,
            current: self.leftmost(),
        }
    }
}

/// Inorder iterator over an [ArenaTree] using parent links.
///
/// The state is a node plus whether its left subtree still has to be
/// entered. Each call to `next` steps until a value is emitted.
pub struct ParentWalk<'a, T> {
    tree: &'a ArenaTree<T>,
    state: Option<(bool, NodeIndex)>, // (may descend left, node)
}

impl<'a, T> ParentWalk<'a, T> {
    /// Performs one transition of the state machine, returning the new
    /// state and the value emitted by this transition (if any).
    fn step(&self, go_left: bool, index: NodeIndex) -> (Option<(bool, NodeIndex)>, Option<&'a T>) {
        let tree = self.tree;
        let node = &tree[index];

        if go_left && let Some(left) = node.left {
            return (Some((true, left)), None);
        }

        if let Some(right) = node.right {
            return (Some((true, right)), Some(&node.value));
        }

        // Leaf, or left already done and no right: emit, then climb as long
        // as we come up from a right child
        let mut current = index;
        while let Some(parent) = tree[current].parent {
            if tree[parent].right != Some(current) {
                break;
            }
            current = parent;
        }
        let next = tree[current].parent.map(|p| (false, p));

        (next, Some(&node.value))
    }
}

impl<'a, T> Iterator for ParentWalk<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((go_left, index)) = self.state {
            let (state, emitted) = self.step(go_left, index);
            self.state = state;
            if emitted.is_some() {
                return emitted;
            }
        }
        None
    }
}

/// Inorder iterator over a threaded [ArenaTree].
pub struct ThreadedWalk<'a, T> {
    tree: &'a ArenaTree<T>,
    current: Option<NodeIndex>,
}

impl<'a, T> Iterator for ThreadedWalk<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        let node = &tree[self.current?];
        self.current = node.thread;
        Some(&node.value)
    }
}

// =$========================================================================$=
// TESTS
// =$========================================================================$=
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Tree<u32> {
        // 2(1, 4(3, 5))
        Tree::new(Node::new(
            2,
            Some(Node::boxed_leaf(1)),
            Some(Node::boxed(4, Some(Node::boxed_leaf(3)), Some(Node::boxed_leaf(5)))),
        ))
    }

    #[test]
    fn test_from_tree_assigns_preorder_indices() {
        let arena = ArenaTree::from_tree(&sample());
        assert_eq!(arena.len(), 5);
        assert!(arena.is_valid());

        let root = arena.root().unwrap();
        assert_eq!(root.index(), 0);
        assert_eq!(*root.value(), 2);
        assert_eq!(root.left(), Some(1));
        assert_eq!(root.right(), Some(2));
        assert_eq!(arena[1].parent(), Some(0));
        assert!(arena[1].is_leaf());
        assert_eq!(*arena[2].value(), 4);
    }

    #[test]
    fn test_threads_point_to_successor() {
        let mut arena = ArenaTree::from_tree(&sample());
        assert!(!arena.is_threaded());
        arena.thread();
        assert!(arena.is_threaded());

        // Indices: 0=2, 1=1, 2=4, 3=3, 4=5
        assert_eq!(arena[1].thread(), Some(0));
        assert_eq!(arena[0].thread(), Some(3));
        assert_eq!(arena[3].thread(), Some(2));
        assert_eq!(arena[2].thread(), Some(4));
        assert_eq!(arena[4].thread(), None);
    }

    #[test]
    fn test_threading_restores_child_links() {
        let mut arena = ArenaTree::from_tree(&sample());
        let before = arena.clone();
        arena.thread();
        assert!(arena.is_valid());
        for index in 0..arena.len() {
            assert_eq!(arena[index].left(), before[index].left());
            assert_eq!(arena[index].right(), before[index].right());
        }
    }

    #[test]
    fn test_walks_on_empty_tree() {
        let mut arena: ArenaTree<u32> = ArenaTree::from_tree(&Tree::empty());
        assert!(arena.is_empty());
        assert!(arena.is_valid());
        assert_eq!(arena.parent_walk().count(), 0);
        assert_eq!(arena.threaded_walk().count(), 0);
    }

    #[test]
    fn test_walks_match_inorder() {
        let mut arena = ArenaTree::from_tree(&sample());
        let by_parent: Vec<u32> = arena.parent_walk().copied().collect();
        let by_thread: Vec<u32> = arena.threaded_walk().copied().collect();
        assert_eq!(by_parent, vec![1, 2, 3, 4, 5]);
        assert_eq!(by_thread, vec![1, 2, 3, 4, 5]);
    }
}
