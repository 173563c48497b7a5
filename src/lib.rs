//! Move CSV files between a local filesystem and object-storage buckets,
//! and read or write them as in-memory tables.

pub mod cli;
pub mod config;
pub mod error;
pub mod storage;
