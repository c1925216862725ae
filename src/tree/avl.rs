//! AVL tree operations: recursive insert and delete with upward rebalancing,
//! search, depth-aware search, and in-order/introspection helpers.

use std::cmp::{self, Ordering};
use std::mem;

use super::node::Node;

/// A self-balancing binary search tree over unique `i64` keys.
///
/// After every public operation the tree satisfies BST order, the AVL
/// balance invariant (every node's balance factor is in `[-1, 1]`) and
/// exact cached heights. Inserting an existing key and removing an absent
/// key are both no-ops.
pub struct AvlTree {
    root: Option<Box<Node>>,
}

impl AvlTree {
    pub fn new() -> Self {
        AvlTree { root: None }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `key`, rebalancing on the way back up. A duplicate key
    /// leaves the tree unchanged.
    pub fn insert(&mut self, key: i64) {
        let root = self.root.take();
        self.root = Some(Self::insert_node(root, key));
    }

    /// Removes `key` if present, rebalancing every ancestor on the way
    /// back up. Returns whether a node was removed.
    pub fn remove(&mut self, key: i64) -> bool {
        let root = self.root.take();
        let (new_root, removed) = Self::remove_node(root, key);
        self.root = new_root;
        removed
    }

    pub fn contains(&self, key: i64) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        false
    }

    /// Number of edges from the root to `key`, or `None` if absent.
    /// The root itself is at depth 0.
    pub fn depth_of(&self, key: i64) -> Option<u32> {
        let mut current = self.root.as_deref();
        let mut depth = 0;
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(depth),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
            depth += 1;
        }
        None
    }

    /// All keys in ascending order (left subtree, node, right subtree).
    pub fn in_order_keys(&self) -> Vec<i64> {
        fn walk(node: &Option<Box<Node>>, keys: &mut Vec<i64>) {
            if let Some(n) = node {
                walk(&n.left, keys);
                keys.push(n.key);
                walk(&n.right, keys);
            }
        }
        let mut keys = Vec::new();
        walk(&self.root, &mut keys);
        keys
    }

    /// Recursive node count, independent of any cached bookkeeping.
    pub fn node_count(&self) -> usize {
        fn count(node: &Option<Box<Node>>) -> usize {
            node.as_ref()
                .map_or(0, |n| 1 + count(&n.left) + count(&n.right))
        }
        count(&self.root)
    }

    /// Cached height of the whole tree; 0 when empty.
    pub fn height(&self) -> i32 {
        Node::height_of(&self.root)
    }

    /// Recursively recomputed height, used to cross-check the cached
    /// `height` field. Must always agree with [`AvlTree::height`].
    pub fn real_height(&self) -> i32 {
        fn depth(node: &Option<Box<Node>>) -> i32 {
            node.as_ref()
                .map_or(0, |n| 1 + cmp::max(depth(&n.left), depth(&n.right)))
        }
        depth(&self.root)
    }

    /// Verifies the AVL balance invariant and cached-height exactness at
    /// every node. Diagnostic; the tree maintains these on its own.
    pub fn is_balanced(&self) -> bool {
        fn check(node: &Option<Box<Node>>) -> Option<i32> {
            let n = match node {
                None => return Some(0),
                Some(n) => n,
            };
            let left = check(&n.left)?;
            let right = check(&n.right)?;
            if (left - right).abs() > 1 || n.height != 1 + cmp::max(left, right) {
                return None;
            }
            Some(n.height)
        }
        check(&self.root).is_some()
    }

    /// Approximate heap footprint of the tree's nodes.
    pub fn approx_memory_bytes(&self) -> usize {
        self.node_count() * mem::size_of::<Node>()
    }

    /// Releases every node. The tree is observably identical to a fresh
    /// one afterwards.
    pub fn clear(&mut self) {
        self.root = None;
    }

    fn insert_node(node: Option<Box<Node>>, key: i64) -> Box<Node> {
        let mut node = match node {
            None => return Box::new(Node::new(key)),
            Some(mut node) => {
                match key.cmp(&node.key) {
                    Ordering::Less => {
                        node.left = Some(Self::insert_node(node.left.take(), key));
                    }
                    Ordering::Greater => {
                        node.right = Some(Self::insert_node(node.right.take(), key));
                    }
                    // Duplicates are not admitted; the subtree is untouched.
                    Ordering::Equal => return node,
                }
                node
            }
        };

        node.update_height();
        let balance = node.balance_factor();

        // Four classical cases, directed by where the key descended.
        // A balance factor outside [-1, 1] proves the heavy child exists.
        if balance > 1 && key < node.left.as_ref().unwrap().key {
            return Self::rotate_right(node);
        }
        if balance < -1 && key > node.right.as_ref().unwrap().key {
            return Self::rotate_left(node);
        }
        if balance > 1 && key > node.left.as_ref().unwrap().key {
            let left = node.left.take().unwrap();
            node.left = Some(Self::rotate_left(left));
            return Self::rotate_right(node);
        }
        if balance < -1 && key < node.right.as_ref().unwrap().key {
            let right = node.right.take().unwrap();
            node.right = Some(Self::rotate_right(right));
            return Self::rotate_left(node);
        }

        node
    }

    fn remove_node(node: Option<Box<Node>>, key: i64) -> (Option<Box<Node>>, bool) {
        let mut node = match node {
            None => return (None, false),
            Some(node) => node,
        };

        let removed;
        match key.cmp(&node.key) {
            Ordering::Less => {
                let (new_left, hit) = Self::remove_node(node.left.take(), key);
                node.left = new_left;
                removed = hit;
            }
            Ordering::Greater => {
                let (new_right, hit) = Self::remove_node(node.right.take(), key);
                node.right = new_right;
                removed = hit;
            }
            Ordering::Equal => {
                removed = true;
                match (node.left.take(), node.right.take()) {
                    (None, child) => return (child, true),
                    (child, None) => return (child, true),
                    (left, Some(right)) => {
                        // Two children: copy in the in-order successor's key,
                        // then delete the successor from the right subtree so
                        // rebalancing stays uniform.
                        let successor = Self::min_key(&right);
                        node.key = successor;
                        node.left = left;
                        let (new_right, _) = Self::remove_node(Some(right), successor);
                        node.right = new_right;
                    }
                }
            }
        }

        (Some(Self::rebalance_after_remove(node)), removed)
    }

    // Deletion chooses among the four cases by the heavy child's balance
    // factor; there is no descending key to compare against here.
    fn rebalance_after_remove(mut node: Box<Node>) -> Box<Node> {
        node.update_height();
        let balance = node.balance_factor();

        if balance > 1 {
            if Node::balance_of(&node.left) < 0 {
                let left = node.left.take().unwrap();
                node.left = Some(Self::rotate_left(left));
            }
            return Self::rotate_right(node);
        }
        if balance < -1 {
            if Node::balance_of(&node.right) > 0 {
                let right = node.right.take().unwrap();
                node.right = Some(Self::rotate_right(right));
            }
            return Self::rotate_left(node);
        }

        node
    }

    /// Promotes `y`'s left child to local root. `y` must be left-heavy
    /// enough that the child exists. Heights are recomputed child-first.
    fn rotate_right(mut y: Box<Node>) -> Box<Node> {
        let mut x = y.left.take().unwrap();
        y.left = x.right.take();
        y.update_height();
        x.right = Some(y);
        x.update_height();
        x
    }

    /// Mirror of [`AvlTree::rotate_right`]; requires a right child.
    fn rotate_left(mut x: Box<Node>) -> Box<Node> {
        let mut y = x.right.take().unwrap();
        x.right = y.left.take();
        x.update_height();
        y.left = Some(x);
        y.update_height();
        y
    }

    fn min_key(node: &Node) -> i64 {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current.key
    }
}

impl Default for AvlTree {
    fn default() -> Self {
        Self::new()
    }
}
