use std::cmp;

/// A single tree node: key, owned children, cached subtree height.
///
/// The cached `height` is always `1 + max(height(left), height(right))`,
/// with an absent child contributing 0.
pub(crate) struct Node {
    pub(crate) key: i64,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
    pub(crate) height: i32,
}

impl Node {
    pub(crate) fn new(key: i64) -> Self {
        Node {
            key,
            left: None,
            right: None,
            height: 1,
        }
    }

    /// Cached height of an optional node; 0 for an absent one.
    pub(crate) fn height_of(node: &Option<Box<Node>>) -> i32 {
        node.as_ref().map_or(0, |n| n.height)
    }

    /// Height of the left subtree minus height of the right subtree.
    pub(crate) fn balance_factor(&self) -> i32 {
        Self::height_of(&self.left) - Self::height_of(&self.right)
    }

    /// Balance factor of an optional node; 0 for an absent one.
    pub(crate) fn balance_of(node: &Option<Box<Node>>) -> i32 {
        node.as_ref().map_or(0, |n| n.balance_factor())
    }

    pub(crate) fn update_height(&mut self) {
        self.height = 1 + cmp::max(Self::height_of(&self.left), Self::height_of(&self.right));
    }
}
