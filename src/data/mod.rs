//! Input data handling module

pub mod edgelist;
