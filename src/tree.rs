//! An unbalanced BST that exclusively owns its nodes. Every parent owns its children through a
//! `Box`, nothing outside the tree can reach a node, and all queries return plain data (values,
//! counts, depths) rather than handles into the structure.
//!
//! # Examples
//!
//! ```
//! use bst::tree::{Duplicates, Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&5));
//!
//! for x in [5, 3, 8, 3, 3] {
//!     tree.insert(x, Duplicates::Admit);
//! }
//!
//! // Equal values pile up to the left of the first equal node.
//! assert_eq!(tree.traverse(Order::InOrder), vec![&3, &3, &3, &5, &8]);
//! assert_eq!(tree.count(&3).count, 3);
//!
//! // A rejected duplicate leaves the tree untouched.
//! assert!(!tree.insert(8, Duplicates::Reject));
//! assert_eq!(tree.len(), 5);
//! ```

use std::cmp::Ordering;
use std::fmt;

use tracing::trace;

/// What `insert` does with a value equal to one already in the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duplicates {
    /// Inserting a present value is a no-op. Order is strict: left `<`, right `>`.
    Reject,
    /// Equal values are stored again, always descending to the left (left `<=`, right `>`).
    Admit,
}

impl From<bool> for Duplicates {
    fn from(admit: bool) -> Self {
        if admit {
            Self::Admit
        } else {
            Self::Reject
        }
    }
}

/// The order in which [`Tree::traverse`] visits nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Ascending for a tree built with [`Duplicates::Reject`].
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
}

/// An inclusive range of depths, counted in edges from the root (the root is at depth 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthRange {
    /// The shallowest depth seen.
    pub min: usize,
    /// The deepest depth seen.
    pub max: usize,
}

impl DepthRange {
    fn at(depth: usize) -> Self {
        Self {
            min: depth,
            max: depth,
        }
    }

    fn widen(self, depth: usize) -> Self {
        Self {
            min: self.min.min(depth),
            max: self.max.max(depth),
        }
    }

    fn record(range: &mut Option<Self>, depth: usize) {
        *range = Some(range.map_or_else(|| Self::at(depth), |r| r.widen(depth)));
    }
}

/// The result of [`Tree::count`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Occurrences {
    /// How many nodes hold the value.
    pub count: usize,
    /// Depths of the matching nodes. `None` exactly when `count` is 0.
    pub depths: Option<DepthRange>,
}

/// A root-to-node chain of values returned by [`Tree::path`].
#[derive(Debug, PartialEq, Eq)]
pub struct Path<'a, T> {
    /// Values from the root down to, and including, the shallowest match.
    pub values: Vec<&'a T>,
    /// Depths of every match found on the descent.
    pub depths: DepthRange,
}

/// One line of the sideways layout produced by [`Tree::sideways`].
#[derive(Debug, PartialEq, Eq)]
pub struct Row<'a, T> {
    /// Depth of the node, used as its indentation.
    pub depth: usize,
    /// The node's value.
    pub value: &'a T,
}

/// An unbalanced Binary Search Tree.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.root.release();
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
        }
    }

    /// Number of nodes in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// The value stored at the root, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.node().map(|n| &n.value)
    }

    /// Releases every node, leaving an empty tree.
    pub fn clear(&mut self) {
        self.root.release();
        self.len = 0;
    }

    /// Inserts `value` according to the `duplicates` policy and returns whether a node was
    /// allocated. With [`Duplicates::Reject`] a value already in the tree is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::{Duplicates, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1, Duplicates::Reject));
    /// assert!(!tree.insert(1, Duplicates::Reject));
    /// assert!(tree.insert(1, Duplicates::Admit));
    /// assert_eq!(tree.count(&1).count, 2);
    /// ```
    pub fn insert(&mut self, value: T, duplicates: Duplicates) -> bool
    where
        T: Ord,
    {
        if duplicates == Duplicates::Reject && self.contains(&value) {
            trace!("value already present, insert skipped");
            return false;
        }

        let inserted = self.root.insert(value, duplicates);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    /// Searches for `value` by descending from the root, going left when it is smaller than the
    /// visited node and right otherwise. Takes `O(height)` comparisons and relies on the BST
    /// invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::{Duplicates, Tree};
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, Duplicates::Reject);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.find(value).is_some()
    }

    /// Searches for `value` by visiting every node. Unlike [`Tree::contains`] this does not rely
    /// on the BST invariant, at the cost of `O(n)` comparisons.
    pub fn contains_unordered(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.root.preorder().any(|(_, node)| node.value == *value)
    }

    /// Collects every value in the given traversal order. Each call starts again from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::{Duplicates, Order, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for x in [2, 1, 3] {
    ///     tree.insert(x, Duplicates::Reject);
    /// }
    ///
    /// assert_eq!(tree.traverse(Order::InOrder), vec![&1, &2, &3]);
    /// assert_eq!(tree.traverse(Order::PreOrder), vec![&2, &1, &3]);
    /// ```
    pub fn traverse(&self, order: Order) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len);
        self.root.walk(order, &mut values);
        values
    }

    /// Counts every node equal to `value` along with the depths they sit at. This visits the
    /// whole tree.
    pub fn count(&self, value: &T) -> Occurrences
    where
        T: PartialEq,
    {
        let mut occurrences = Occurrences::default();
        self.root.count(value, &mut occurrences);
        occurrences
    }

    /// Returns the chain of values from the root to the shallowest node equal to `value`, or
    /// `None` when no node matches.
    ///
    /// The walk follows the insertion rule of [`Duplicates::Admit`] (left when `value <= node`,
    /// right otherwise) and keeps going past a match. Every copy of `value` was placed by that
    /// same descent, so the returned depths cover all of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::{Duplicates, Tree};
    ///
    /// let mut tree = Tree::new();
    /// for x in [5, 3, 8, 3] {
    ///     tree.insert(x, Duplicates::Admit);
    /// }
    ///
    /// let path = tree.path(&3).unwrap();
    /// assert_eq!(path.values, vec![&5, &3]);
    /// assert_eq!((path.depths.min, path.depths.max), (1, 2));
    ///
    /// assert!(tree.path(&4).is_none());
    /// ```
    pub fn path(&self, value: &T) -> Option<Path<'_, T>>
    where
        T: Ord,
    {
        let mut walked = Vec::new();
        let mut first_match = None;
        let mut depths = None;

        let mut link = &self.root;
        while let Some(node) = link.node() {
            walked.push(&node.value);
            if node.value == *value {
                let depth = walked.len() - 1;
                first_match.get_or_insert(walked.len());
                DepthRange::record(&mut depths, depth);
            }
            link = if *value <= node.value {
                &node.left
            } else {
                &node.right
            };
        }

        let end = first_match?;
        walked.truncate(end);
        trace!(depth = end - 1, "path found");
        Some(Path {
            values: walked,
            depths: depths?,
        })
    }

    /// The number of edges on the longest root-to-leaf path, or `None` for an empty tree
    /// (the conventional height of -1).
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::{Duplicates, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), None);
    ///
    /// tree.insert(1, Duplicates::Reject);
    /// assert_eq!(tree.height(), Some(0));
    /// ```
    pub fn height(&self) -> Option<usize> {
        self.root.node().map(Node::height)
    }

    /// The height of the subtree rooted at the first node holding `value`, found the same way as
    /// [`Tree::contains`]. `None` when the value is absent.
    pub fn subtree_height(&self, value: &T) -> Option<usize>
    where
        T: Ord,
    {
        self.root.find(value).map(Node::height)
    }

    /// Depths of the shallowest and the deepest leaf. `None` for an empty tree.
    pub fn leaf_depths(&self) -> Option<DepthRange> {
        self.root.leaf_depths()
    }

    /// The leftmost value.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(&node.value)
    }

    /// The rightmost value.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.node()?;
        while let Some(right) = node.right.node() {
            node = right;
        }
        Some(&node.value)
    }

    /// Lays the tree out sideways: rows in reverse in-order (right subtree first) with their
    /// depth, so indenting each row by its depth draws the tree rotated a quarter turn.
    pub fn sideways(&self) -> Vec<Row<'_, T>> {
        self.root.sideways()
    }
}

#[derive(Debug)]
struct Link<T>(Option<Box<Node<T>>>);

impl<T> Link<T> {
    fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    fn insert(&mut self, value: T, duplicates: Duplicates) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.0;
        while let Some(node) = link {
            link = match (value.cmp(&node.value), duplicates) {
                (Ordering::Less, _) | (Ordering::Equal, Duplicates::Admit) => &mut node.left.0,
                (Ordering::Greater, _) => &mut node.right.0,
                // Only reachable if the caller skipped the membership check.
                (Ordering::Equal, Duplicates::Reject) => return false,
            };
        }
        *link = Some(Box::new(Node::new(value)));
        true
    }

    fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut node = self.node()?;
        loop {
            node = match value.cmp(&node.value) {
                Ordering::Less => node.left.node()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.node()?,
            };
        }
    }

    /// Every node below this link in pre-order, paired with its depth.
    fn preorder(&self) -> Preorder<'_, T> {
        Preorder {
            stack: self.node().map(|n| (0, n)).into_iter().collect(),
        }
    }

    /// Calls `visit` on every node in in-order, or in reverse in-order when `mirrored`, with
    /// the node's depth. Uses an explicit stack, like every walk in this module, so tall trees
    /// don't recurse once per level.
    fn in_order<'a>(&'a self, mirrored: bool, mut visit: impl FnMut(usize, &'a Node<T>)) {
        let mut stack: Vec<(usize, &Node<T>)> = Vec::new();
        let mut next = self.node().map(|n| (0, n));
        loop {
            while let Some((depth, node)) = next {
                stack.push((depth, node));
                let near = if mirrored { &node.right } else { &node.left };
                next = near.node().map(|n| (depth + 1, n));
            }
            let Some((depth, node)) = stack.pop() else {
                return;
            };
            visit(depth, node);
            let far = if mirrored { &node.left } else { &node.right };
            next = far.node().map(|n| (depth + 1, n));
        }
    }

    fn walk<'a>(&'a self, order: Order, values: &mut Vec<&'a T>) {
        match order {
            Order::InOrder => self.in_order(false, |_, node| values.push(&node.value)),
            Order::PreOrder => values.extend(self.preorder().map(|(_, node)| &node.value)),
        }
    }

    fn count(&self, value: &T, occurrences: &mut Occurrences)
    where
        T: PartialEq,
    {
        for (depth, node) in self.preorder() {
            if node.value == *value {
                occurrences.count += 1;
                DepthRange::record(&mut occurrences.depths, depth);
            }
        }
    }

    fn leaf_depths(&self) -> Option<DepthRange> {
        let mut depths = None;
        for (depth, _) in self.preorder().filter(|(_, node)| node.is_leaf()) {
            DepthRange::record(&mut depths, depth);
        }
        depths
    }

    fn sideways(&self) -> Vec<Row<'_, T>> {
        let mut rows = Vec::new();
        self.in_order(true, |depth, node| {
            rows.push(Row {
                depth,
                value: &node.value,
            })
        });
        rows
    }

    /// Detaches and frees every node below this link with an explicit stack, so a list-shaped
    /// tree doesn't recurse once per node while dropping.
    fn release(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.0.take());
            stack.extend(node.right.0.take());
        }
    }
}

/// Pre-order iterator over borrowed nodes and their depths relative to where it started.
struct Preorder<'a, T> {
    stack: Vec<(usize, &'a Node<T>)>,
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = (usize, &'a Node<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Right first so the left subtree comes off the stack first.
        self.stack.extend(node.right.node().map(|n| (depth + 1, n)));
        self.stack.extend(node.left.node().map(|n| (depth + 1, n)));
        Some((depth, node))
    }
}

/// A `Node` holds one value and owns up to two children. Nodes are never cloned or handed out,
/// and their value never changes after insertion.
#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: Link(None),
            right: Link(None),
        }
    }

    fn is_leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }

    /// Height of the subtree rooted here: the depth of its deepest node.
    fn height(&self) -> usize {
        Preorder {
            stack: vec![(0, self)],
        }
        .map(|(depth, _)| depth)
        .fold(0, usize::max)
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies operations to a tree and to a plain `Vec` model holding the same multiset of
    /// values, checking every query against the model as it goes.
    fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Vec<i8>) -> bool {
        for op in ops {
            let ok = match op {
                Op::Insert(x, duplicates) => {
                    let expected = *duplicates == Duplicates::Admit || !model.contains(x);
                    if expected {
                        model.push(*x);
                    }
                    tree.insert(*x, *duplicates) == expected
                }
                Op::Search(x) => tree.contains(x) == model.contains(x),
                Op::Count(x) => {
                    tree.count(x).count == model.iter().filter(|y| *y == x).count()
                }
                Op::Path(x) => match tree.path(x) {
                    Some(path) => {
                        path.values.first().copied() == tree.root()
                            && path.values.last() == Some(&x)
                            && tree.count(x).depths == Some(path.depths)
                    }
                    None => !model.contains(x),
                },
                Op::Traverse(order) => tree.traverse(*order).len() == model.len(),
            };
            if !ok {
                return false;
            }
        }
        true
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut model = Vec::new();

            if !do_ops(&ops, &mut tree, &mut model) {
                return false;
            }
            model.sort_unstable();
            tree.traverse(Order::InOrder).into_iter().copied().eq(model)
        }
    }

    quickcheck::quickcheck! {
        fn inorder_is_strictly_ascending_without_duplicates(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x, Duplicates::Reject);
            }

            tree.traverse(Order::InOrder).windows(2).all(|w| w[0] < w[1])
        }
    }

    quickcheck::quickcheck! {
        fn leaf_depths_are_bounded_by_height(xs: Vec<i8>) -> bool {
            let mut tree = Tree::new();
            for x in &xs {
                tree.insert(*x, Duplicates::Admit);
            }

            match (tree.leaf_depths(), tree.height()) {
                (Some(leaves), Some(height)) => leaves.max == height && leaves.min <= height,
                (None, None) => xs.is_empty(),
                _ => false,
            }
        }
    }
}
