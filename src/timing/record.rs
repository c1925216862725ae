use std::time::{Duration, Instant};

/// Last-measured duration of each tree operation, overwritten by the
/// driver after every run. Not part of the tree's invariants.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimingRecord {
    pub insertion: Duration,
    pub traversal: Duration,
    pub search: Duration,
    pub deletion: Duration,
}

/// Runs `f` and returns its result together with the elapsed wall time.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
