//! A shared, lockable handle over one AVL tree.
//!
//! Every access goes through the tree's single mutex, so readers never race
//! a writer. Mutations across threads are totally ordered by lock
//! acquisition; that order, and therefore the final tree shape, is
//! unspecified.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::tree::AvlTree;

/// Cloneable handle to a mutex-guarded [`AvlTree`]. Clones share the same
/// underlying tree.
#[derive(Clone)]
pub struct SharedTree {
    inner: Arc<Mutex<AvlTree>>,
}

impl SharedTree {
    pub fn new() -> Self {
        SharedTree {
            inner: Arc::new(Mutex::new(AvlTree::new())),
        }
    }

    /// Checks membership and inserts if absent as one critical section.
    /// Returns whether this call created the node.
    ///
    /// Splitting the check and the insert across two lock acquisitions
    /// would let two workers claim the same key; duplicate suppression
    /// would mask the race but one worker's slot would be wasted.
    pub fn insert_if_absent(&self, key: i64) -> bool {
        let mut tree = self.inner.lock();
        if tree.contains(key) {
            false
        } else {
            tree.insert(key);
            true
        }
    }

    pub fn insert(&self, key: i64) {
        self.inner.lock().insert(key);
    }

    pub fn remove(&self, key: i64) -> bool {
        self.inner.lock().remove(key)
    }

    pub fn contains(&self, key: i64) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn depth_of(&self, key: i64) -> Option<u32> {
        self.inner.lock().depth_of(key)
    }

    pub fn in_order_keys(&self) -> Vec<i64> {
        self.inner.lock().in_order_keys()
    }

    pub fn node_count(&self) -> usize {
        self.inner.lock().node_count()
    }

    pub fn height(&self) -> i32 {
        self.inner.lock().height()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn is_balanced(&self) -> bool {
        self.inner.lock().is_balanced()
    }

    pub fn approx_memory_bytes(&self) -> usize {
        self.inner.lock().approx_memory_bytes()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Default for SharedTree {
    fn default() -> Self {
        Self::new()
    }
}
