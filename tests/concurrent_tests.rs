use concurrent_avl::concurrent::{bulk, SharedTree};
use concurrent_avl::error::TreeError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_insert_fills_exact_range() {
        // The range exactly fits the request, so every key in [1, 1000]
        // must end up in the tree exactly once.
        let tree = SharedTree::new();
        bulk::bulk_insert(&tree, 1000, 8, 1, 1000).unwrap();
        assert_eq!(tree.node_count(), 1000);
        assert_eq!(tree.in_order_keys(), (1..=1000).collect::<Vec<i64>>());
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_bulk_insert_sparse_range() {
        let tree = SharedTree::new();
        bulk::bulk_insert(&tree, 200, 4, 1, 100_000).unwrap();
        let keys = tree.in_order_keys();
        assert_eq!(keys.len(), 200);
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
        assert!(keys.iter().all(|&k| (1..=100_000).contains(&k)));
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_bulk_insert_range_too_small() {
        let tree = SharedTree::new();
        let err = bulk::bulk_insert(&tree, 10, 2, 1, 5).unwrap_err();
        assert!(matches!(
            err,
            TreeError::RangeTooSmall {
                total: 10,
                min: 1,
                max: 5
            }
        ));
        assert_eq!(tree.node_count(), 0);
    }

    #[test]
    fn test_bulk_insert_uneven_split() {
        // 103 keys over 8 workers: the remainder is spread over the first
        // few workers and the total still comes out exact.
        let tree = SharedTree::new();
        bulk::bulk_insert(&tree, 103, 8, 1, 500).unwrap();
        assert_eq!(tree.node_count(), 103);
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_bulk_insert_more_workers_than_keys() {
        let tree = SharedTree::new();
        bulk::bulk_insert(&tree, 3, 16, 1, 100).unwrap();
        assert_eq!(tree.node_count(), 3);
    }

    #[test]
    fn test_bulk_insert_skips_preexisting_keys() {
        // Workers only count keys they created, so a half-full tree still
        // gains exactly `total` new nodes even when the range barely fits.
        let tree = SharedTree::new();
        for key in 1..=500 {
            tree.insert(key);
        }
        bulk::bulk_insert(&tree, 500, 8, 1, 1000).unwrap();
        assert_eq!(tree.node_count(), 1000);
        assert_eq!(tree.in_order_keys(), (1..=1000).collect::<Vec<i64>>());
        assert!(tree.is_balanced());
    }

    #[test]
    fn test_bulk_insert_zero_total() {
        let tree = SharedTree::new();
        bulk::bulk_insert(&tree, 0, 4, 1, 10).unwrap();
        assert!(tree.is_empty());
    }

    #[test]
    fn test_insert_if_absent_reports_first_insert_only() {
        let tree = SharedTree::new();
        assert!(tree.insert_if_absent(7));
        assert!(!tree.insert_if_absent(7));
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn test_shared_handle_clones_see_one_tree() {
        let tree = SharedTree::new();
        let other = tree.clone();
        tree.insert(1);
        other.insert(2);
        assert_eq!(tree.in_order_keys(), vec![1, 2]);
        assert_eq!(other.node_count(), 2);
        other.clear();
        assert!(tree.is_empty());
    }
}
