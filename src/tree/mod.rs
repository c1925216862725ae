// src/tree/mod.rs
pub mod avl;
pub mod node;

pub use avl::AvlTree;
