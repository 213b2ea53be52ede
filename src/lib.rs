//! Core library functions for recursive min-cut graph decomposition

pub mod cluster;
pub mod config;
pub mod cut;
pub mod data;
pub mod error;
pub mod graph;
pub mod storage;

pub use anyhow::{anyhow, Result};
pub use error::ClusterError;
