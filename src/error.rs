// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    #[error("range [{min}, {max}] is too small to hold {total} unique keys")]
    RangeTooSmall { total: usize, min: i64, max: i64 },

    #[error("{0} worker(s) terminated abnormally during bulk insertion")]
    WorkerPanic(usize),
}

pub type TreeResult<T> = Result<T, TreeError>;
