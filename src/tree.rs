//! A mutable, unbalanced BST that stores keys only. Each `Node` owns its two children outright so
//! all mutation is done by detaching and reattaching owned subtrees.
//!
//! The tree never rebalances. Inserting keys in sorted order produces a chain whose height equals
//! the number of keys, and that is the expected behavior.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1).map(|n| *n.key()), Some(1));
//!
//! // Inserting the same key again changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether anything was removed.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use log::trace;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree over totally ordered keys. This can be used for inserting, searching
/// and deleting keys. Duplicate keys are ignored and no balancing is ever done.
pub struct OrderedTree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for OrderedTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for OrderedTree<K> {
    fn drop(&mut self) {
        // Unlink nodes one at a time so a degenerate chain doesn't drop recursively.
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Cloning re-inserts the keys in pre-order, which rebuilds exactly the same shape.
impl<K> Clone for OrderedTree<K>
where
    K: Clone + Ord,
{
    fn clone(&self) -> Self {
        self.pre_order().map(|node| node.key.clone()).collect()
    }
}

impl<K> fmt::Debug for OrderedTree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> OrderedTree<K> {
    /// Generates a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of keys stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// The root node, if the tree is not empty. Together with [`Node::left`] and
    /// [`Node::right`] this allows read-only traversal of the tree's shape.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Inserts `key` if it isn't already present. Returns `true` if a node was added and `false`
    /// if the key was already in the tree, in which case the tree is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(2));
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right,
            };
        }

        *link = Some(Node::new_boxed(key));
        self.len += 1;
        true
    }

    /// Finds the node holding `key` by walking down from the root without recursing. If no node
    /// has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let tree: OrderedTree<_> = vec![50, 30, 70].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&30).map(|n| *n.key()), Some(30));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Same contract as [`search`][Self::search] but implemented by recursing into subtrees. See
    /// [`Node::search`].
    pub fn search_recursive(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|root| root.search(key))
    }

    /// Whether `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Deletes the node holding `key`. Returns `true` if a node was removed. If the tree does not
    /// contain `key`, nothing changes and `false` is returned.
    ///
    /// A node with two children takes the key of its in-order successor (the smallest key of its
    /// right subtree) and the successor's node is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let mut tree: OrderedTree<_> = vec![50, 30, 70, 60, 80].into_iter().collect();
    ///
    /// assert!(tree.delete(&50));
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(60));
    /// assert!(!tree.contains(&50));
    /// assert!(tree.is_valid_bst());
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let deleted = Node::delete(&mut self.root, key);
        if deleted {
            self.len -= 1;
        }
        deleted
    }

    /// Checks the BST ordering over the whole tree: every key must lie strictly between the
    /// bounds set by its ancestors. This visits every node so it's meant for tests and
    /// verification, not for calling on every mutation.
    pub fn is_valid_bst(&self) -> bool
    where
        K: Ord,
    {
        Node::is_within(self.root(), None, None)
    }

    /// Number of nodes on the longest path from the root to a leaf. An empty tree has height 0
    /// and a tree with only a root has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::tree::OrderedTree;
    ///
    /// let balanced: OrderedTree<_> = vec![2, 1, 3].into_iter().collect();
    /// let chain: OrderedTree<_> = vec![1, 2, 3].into_iter().collect();
    ///
    /// assert_eq!(balanced.height(), 2);
    /// assert_eq!(chain.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| &root.find_min().key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|root| &root.find_max().key)
    }

    /// Iterates the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Iterates the nodes in pre-order: each node is visited before its left subtree, which is
    /// visited before its right subtree. Re-inserting the keys in this order rebuilds the same
    /// shape.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }
}

impl<K> FromIterator<K> for OrderedTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for OrderedTree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a OrderedTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A `Node` holds a key and owns up to two children. Nodes don't know their parent.
#[derive(Debug)]
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, holding keys smaller than this node's key.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding keys larger than this node's key.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Height of the subtree rooted at this node. A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        let left_height = self.left().map_or(0, Self::height);
        let right_height = self.right().map_or(0, Self::height);
        left_height.max(right_height) + 1
    }

    /// The leftmost node of this subtree, which holds its smallest key.
    pub fn find_min(&self) -> &Self {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        current
    }

    /// The rightmost node of this subtree, which holds its largest key.
    pub fn find_max(&self) -> &Self {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        current
    }

    /// Recursively searches this subtree for `key`.
    pub fn search(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.search(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.search(key)),
        }
    }

    /// Deletes `key` from the subtree owned by `link`. Walks down without recursing, then
    /// rewrites the link that holds `key`.
    fn delete(mut link: &mut Link<K>, key: &K) -> bool
    where
        K: Ord,
    {
        loop {
            // Pick a direction with a shared borrow so `link` is free to move down.
            let ordering = match link.as_deref() {
                Some(node) => key.cmp(&node.key),
                None => return false,
            };
            if ordering == Ordering::Equal {
                return Self::unlink(link);
            }

            link = match link {
                Some(node) => {
                    if ordering == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    }
                }
                None => return false,
            };
        }
    }

    /// Removes the node `link` points at, replacing it with whichever subtree is left over. A
    /// node with two children takes its in-order successor's key instead.
    fn unlink(link: &mut Link<K>) -> bool {
        let node = match link.as_mut() {
            Some(node) => node,
            None => return false,
        };

        if node.left.is_none() {
            let right = node.right.take();
            *link = right;
        } else if node.right.is_none() {
            let left = node.left.take();
            *link = left;
        } else if let Some(successor) = Self::detach_min(&mut node.right) {
            trace!("promoting in-order successor into a node with two children");
            node.key = successor;
        }
        true
    }

    /// Unlinks the leftmost node of the subtree owned by `link` and returns its key. That node
    /// has no left child so its right subtree takes its place.
    fn detach_min(mut link: &mut Link<K>) -> Option<K> {
        while link.as_ref()?.left.is_some() {
            link = match link {
                Some(node) => &mut node.left,
                None => return None,
            };
        }

        let mut min = link.take()?;
        *link = min.right.take();
        Some(min.key)
    }

    /// Whether every key in the subtree at `node` lies strictly between `lower` and `upper`. A
    /// `None` bound is unbounded.
    fn is_within(node: Option<&Self>, lower: Option<&K>, upper: Option<&K>) -> bool
    where
        K: Ord,
    {
        let node = match node {
            Some(node) => node,
            None => return true,
        };

        if lower.map_or(false, |lower| node.key <= *lower)
            || upper.map_or(false, |upper| node.key >= *upper)
        {
            return false;
        }

        Self::is_within(node.left(), lower, Some(&node.key))
            && Self::is_within(node.right(), Some(&node.key), upper)
    }
}

/// An in-order iterator over the keys of an [`OrderedTree`]. Created by [`OrderedTree::iter`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K> ExactSizeIterator for Iter<'a, K> {}

/// A pre-order iterator over the nodes of an [`OrderedTree`]. Created by
/// [`OrderedTree::pre_order`].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}
