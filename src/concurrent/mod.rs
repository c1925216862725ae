// src/concurrent/mod.rs
pub mod bulk;
pub mod shared;

pub use shared::SharedTree;
