// src/timing/mod.rs
pub mod record;
pub mod report;

pub use record::{measure, TimingRecord};
