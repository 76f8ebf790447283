//! Micro-benchmark comparing Euclidean distance over contiguous `f64`
//! buffers against sequences of individually boxed values.
//!
//! The dataset is loaded once into a [`data::DatasetRegistry`]; each
//! [`bench::DistanceCase`] borrows the vectors of one length from it.

pub mod bench;
pub mod config;
pub mod data;
pub mod distance;
pub mod runner;
