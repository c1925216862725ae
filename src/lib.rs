//! # Concurrent AVL Tree
//!
//! A self-balancing binary search tree (AVL) supporting insertion, deletion,
//! exact-match and depth-aware search, plus a concurrent population path in
//! which multiple worker threads insert unique random keys into one shared
//! tree under a single coarse-grained lock.

pub mod concurrent;
pub mod config;
pub mod error;
pub mod timing;
pub mod tree;
