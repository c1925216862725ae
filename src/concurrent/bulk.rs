//! Concurrent bulk population: N workers insert unique random keys into a
//! shared tree until each has contributed its quota.

use rand::Rng;
use threadpool::ThreadPool;
use tracing::{debug, info};

use crate::error::{TreeError, TreeResult};

use super::SharedTree;

/// Inserts `total` unique random keys from `[min, max]` into `tree`,
/// splitting the count as evenly as possible across `workers` threads and
/// blocking until all of them finish.
///
/// Fails with [`TreeError::RangeTooSmall`] when the range holds fewer than
/// `total` distinct values. Keys already present in the tree do not count
/// toward any worker's quota.
pub fn bulk_insert(
    tree: &SharedTree,
    total: usize,
    workers: usize,
    min: i64,
    max: i64,
) -> TreeResult<()> {
    let range_size = max as i128 - min as i128 + 1;
    if range_size < total as i128 {
        return Err(TreeError::RangeTooSmall { total, min, max });
    }
    if total == 0 {
        return Ok(());
    }

    let workers = workers.clamp(1, total);
    let per_worker = total / workers;
    let remainder = total % workers;

    info!(total, workers, min, max, "starting concurrent bulk insert");

    let pool = ThreadPool::new(workers);
    for i in 0..workers {
        // The first `remainder` workers take one extra key.
        let quota = per_worker + usize::from(i < remainder);
        let tree = tree.clone();
        pool.execute(move || {
            insert_worker(&tree, quota, min, max);
            debug!(worker = i, quota, "worker reached quota");
        });
    }
    pool.join();

    if pool.panic_count() > 0 {
        return Err(TreeError::WorkerPanic(pool.panic_count()));
    }

    info!(inserted = total, "bulk insert complete");
    Ok(())
}

/// One worker's loop: draw a candidate, then check-and-insert under a
/// single lock acquisition. Only keys this worker actually created count
/// toward its quota.
fn insert_worker(tree: &SharedTree, quota: usize, min: i64, max: i64) {
    let mut rng = rand::thread_rng();
    let mut inserted = 0;
    while inserted < quota {
        let candidate = rng.gen_range(min..=max);
        if tree.insert_if_absent(candidate) {
            inserted += 1;
        }
    }
}
